//! Data models for the lending server

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use user::{CreateUser, User};
