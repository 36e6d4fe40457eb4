pub mod application;
pub mod role;
pub mod user;
