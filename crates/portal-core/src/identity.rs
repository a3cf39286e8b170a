use serde::{Deserialize, Serialize};

/// Basic profile of the signed-in user.
///
/// Produced by `portal-auth` (from the OpenID userinfo endpoint) or by the
/// gateway's demo fallback, consumed by the session and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full display name (`name` claim).
    pub display_name: String,
    /// Primary email address (`email` claim).
    pub email: String,
    /// Avatar image URL (`picture` claim).
    pub avatar_url: String,
}

impl Profile {
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            avatar_url: avatar_url.into(),
        }
    }
}
