//! # portal-knowledge
//!
//! Hand-authored 4th-grade science knowledge for the STEM portal.
//!
//! Everything here is `'static` data compiled into the binary:
//! - vocabulary entries keyed by lowercase term (`"food chain"`, `"lever"`)
//! - topical fact groups per subject (animal adaptations, rock cycle, ...)
//! - guided-reasoning scenarios (problem, solution, real-world note)
//!
//! [`KnowledgeStore::builtin`] is the read-only view consumers query. There
//! are no mutation operations.

mod data;
mod store;
mod types;

pub use store::KnowledgeStore;
pub use types::{Fact, FactGroup, KnowledgeEntry, ScenarioEntry, Subject};
