pub mod auth;
pub mod items;
pub mod system;
