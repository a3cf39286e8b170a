//! Authentication mode and session gateway lifecycle.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `GatewayState` provides `allowed_next_states()` so the gateway can assert
//! every transition it performs.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AuthMode
// ---------------------------------------------------------------------------

/// How the gateway talks to the outside world.
///
/// `Live` forwards every call to Google. `Demo` is the fallback taken when the
/// auth provider could not be configured; authenticated operations are then
/// answered from local fixtures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Live,
    Demo,
}

impl AuthMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Demo => "demo",
        }
    }

    #[must_use]
    pub const fn is_demo(self) -> bool {
        matches!(self, Self::Demo)
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GatewayState
// ---------------------------------------------------------------------------

/// Lifecycle of the session gateway.
///
/// ```text
/// uninitialized → initializing → ready(live) → signed_in(live) ⇄ signed_out(live)
///                              → ready(demo) → signed_in(demo) ⇄ signed_out(demo)
///                              → uninitialized (demo fallback disabled)
/// ```
///
/// There is no terminal state: once ready, the gateway cycles between
/// `signed_in` and `signed_out` for the life of the process. The mode chosen
/// at initialization never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "mode", rename_all = "snake_case")]
pub enum GatewayState {
    Uninitialized,
    Initializing,
    Ready(AuthMode),
    SignedIn(AuthMode),
    SignedOut(AuthMode),
}

impl GatewayState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        use AuthMode::{Demo, Live};

        match self {
            Self::Uninitialized => &[Self::Initializing],
            Self::Initializing => &[Self::Ready(Live), Self::Ready(Demo), Self::Uninitialized],
            Self::Ready(Live) | Self::SignedOut(Live) => &[Self::SignedIn(Live)],
            Self::Ready(Demo) | Self::SignedOut(Demo) => &[Self::SignedIn(Demo)],
            Self::SignedIn(Live) => &[Self::SignedOut(Live)],
            Self::SignedIn(Demo) => &[Self::SignedOut(Demo)],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// The mode chosen at initialization, once there is one.
    #[must_use]
    pub const fn mode(self) -> Option<AuthMode> {
        match self {
            Self::Uninitialized | Self::Initializing => None,
            Self::Ready(mode) | Self::SignedIn(mode) | Self::SignedOut(mode) => Some(mode),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Ready(_) => "ready",
            Self::SignedIn(_) => "signed_in",
            Self::SignedOut(_) => "signed_out",
        }
    }
}

impl fmt::Display for GatewayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode() {
            Some(mode) => write!(f, "{}({mode})", self.as_str()),
            None => f.write_str(self.as_str()),
        }
    }
}
