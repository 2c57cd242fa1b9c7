pub mod auth;
pub mod channel;
pub mod user;
