//! The sign-in record and the handle used to share it.
//!
//! `Session` keeps the profile as an `Option`, so "signed in" is derived from
//! it and the two can never disagree. `SharedSession` is created by the
//! application root and cloned into whatever needs to observe or mutate it;
//! independent handles give independent sessions.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::enums::AuthMode;
use crate::identity::Profile;

/// Current sign-in status and user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    profile: Option<Profile>,
    auth_mode: AuthMode,
}

impl Session {
    /// A signed-out session in the given mode.
    #[must_use]
    pub const fn new(auth_mode: AuthMode) -> Self {
        Self {
            profile: None,
            auth_mode,
        }
    }

    #[must_use]
    pub const fn signed_in(&self) -> bool {
        self.profile.is_some()
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub const fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Record a successful sign-in.
    pub fn sign_in(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    /// Drop the profile. Idempotent.
    pub fn sign_out(&mut self) {
        self.profile = None;
    }

    pub const fn set_auth_mode(&mut self, auth_mode: AuthMode) {
        self.auth_mode = auth_mode;
    }
}

/// Cloneable handle to one `Session`.
///
/// The lock is never held across an `.await`; every accessor copies what it
/// needs out before returning.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.lock().signed_in()
    }

    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.lock().profile().cloned()
    }

    #[must_use]
    pub fn auth_mode(&self) -> AuthMode {
        self.lock().auth_mode()
    }

    /// Apply a mutation under the lock and return its result.
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut guard = self.lock();
        let result = f(&mut guard);
        tracing::trace!(
            signed_in = guard.signed_in(),
            mode = %guard.auth_mode(),
            "session updated"
        );
        result
    }

    /// Whether two handles point at the same session.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // A panic while holding the lock cannot leave `Session` half-written:
        // every mutation is a single field assignment.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn teacher() -> Profile {
        Profile::new("Ada Lovelace", "ada@school.edu", "https://example.com/ada.png")
    }

    #[test]
    fn new_session_is_signed_out() {
        let session = Session::new(AuthMode::Demo);
        assert!(!session.signed_in());
        assert!(session.profile().is_none());
        assert_eq!(session.auth_mode(), AuthMode::Demo);
    }

    #[test]
    fn sign_in_then_out_keeps_profile_and_flag_in_step() {
        let mut session = Session::default();
        session.sign_in(teacher());
        assert!(session.signed_in());
        assert_eq!(session.profile(), Some(&teacher()));

        session.sign_out();
        assert!(!session.signed_in());
        assert!(session.profile().is_none());

        session.sign_out();
        assert!(!session.signed_in());
    }

    #[test]
    fn clones_of_a_handle_share_state() {
        let root = SharedSession::default();
        let injected = root.clone();
        injected.update(|s| s.sign_in(teacher()));

        assert!(root.is_signed_in());
        assert_eq!(root.profile(), Some(teacher()));
        assert!(root.same_as(&injected));
    }

    #[test]
    fn separate_handles_are_independent() {
        let first = SharedSession::default();
        let second = SharedSession::default();
        first.update(|s| s.sign_in(teacher()));

        assert!(first.is_signed_in());
        assert!(!second.is_signed_in());
        assert!(!first.same_as(&second));
    }

    #[test]
    fn snapshot_is_detached_copy() {
        let shared = SharedSession::new(Session::new(AuthMode::Live));
        let before = shared.snapshot();
        shared.update(|s| {
            s.sign_in(teacher());
            s.set_auth_mode(AuthMode::Demo);
        });

        assert!(!before.signed_in());
        assert_eq!(before.auth_mode(), AuthMode::Live);
        assert_eq!(shared.auth_mode(), AuthMode::Demo);
    }
}
