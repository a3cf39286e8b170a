//! # portal-core
//!
//! Core types shared across the STEM portal crates:
//! - `Profile` and `AuthMode` describing who is signed in and how
//! - `Session`, the per-application sign-in record, and `SharedSession`,
//!   the handle the application root injects into every component
//! - `GatewayState`, the session gateway lifecycle with its allowed transitions

pub mod enums;
pub mod identity;
pub mod session;

pub use enums::{AuthMode, GatewayState};
pub use identity::Profile;
pub use session::{Session, SharedSession};
