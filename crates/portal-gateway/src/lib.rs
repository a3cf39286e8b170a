//! # portal-gateway
//!
//! The session gateway sits between the presentation layer and Google. It
//! initializes the [`AuthProvider`](portal_auth::AuthProvider), owns the
//! sign-in lifecycle of one injected [`SharedSession`](portal_core::SharedSession),
//! and forwards authenticated Drive, Classroom and Gmail calls through a
//! [`WorkspaceApi`](portal_workspace::WorkspaceApi).
//!
//! When the provider cannot be configured the gateway falls back to
//! [`AuthMode::Demo`](portal_core::AuthMode): sign-in yields a placeholder
//! profile and every call is answered from [`demo`] fixtures.

pub mod demo;
mod error;
mod gateway;

pub use error::GatewayError;
pub use gateway::SessionGateway;
