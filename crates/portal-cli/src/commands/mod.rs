pub mod auth;
pub mod classroom;
pub mod dispatch;
pub mod drive;
pub mod kb;
pub mod mail;
