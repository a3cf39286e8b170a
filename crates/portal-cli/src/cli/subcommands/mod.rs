pub mod auth;
pub mod classroom;
pub mod drive;
pub mod kb;
pub mod mail;

pub use auth::AuthCommands;
pub use classroom::ClassroomCommands;
pub use drive::DriveCommands;
pub use kb::KbCommands;
pub use mail::MailCommands;
