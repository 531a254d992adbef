pub mod chat;
pub mod health;
pub mod recipe;
pub mod server;
