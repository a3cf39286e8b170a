use portal_auth::AuthError;
use portal_workspace::{MailError, Service, ServiceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("the session gateway has not been initialized")]
    NotReady,

    #[error("sign in first")]
    Unauthenticated,

    #[error("a sign-in is already in progress")]
    SignInInProgress,

    #[error("sign-in failed: {0}")]
    SignInFailure(#[source] AuthError),

    /// The session was cleared regardless.
    #[error("sign-out did not complete cleanly: {0}")]
    SignOutFailure(#[source] AuthError),

    /// Only surfaced when demo fallback is disabled.
    #[error("initialization failed: {0}")]
    Initialization(#[source] AuthError),

    #[error("could not obtain an access token: {0}")]
    Credential(#[source] AuthError),

    #[error("invalid message: {0}")]
    InvalidMail(#[from] MailError),

    #[error("{service} request failed: {source}")]
    RemoteService {
        service: Service,
        #[source]
        source: ServiceError,
    },
}

impl GatewayError {
    /// The remote service involved, for failures that reached one.
    #[must_use]
    pub const fn service(&self) -> Option<Service> {
        match self {
            Self::RemoteService { service, .. } => Some(*service),
            _ => None,
        }
    }
}
