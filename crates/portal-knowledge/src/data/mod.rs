//! Static knowledge content. Edit these tables to change what the portal knows.

mod scenarios;
mod topics;
mod vocabulary;

pub use scenarios::SCENARIOS;
pub use topics::TOPICS;
pub use vocabulary::VOCABULARY;
