pub mod chat;
pub mod common;
pub mod generation;
pub mod health;
pub mod recipe;
