//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A lendable book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique book ID, assigned at creation
    pub id: u64,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Id of the borrowing user; `None` while the book is available
    pub borrowed_by: Option<u64>,
}

impl Book {
    /// Whether the book can currently be borrowed
    pub fn is_available(&self) -> bool {
        self.borrowed_by.is_none()
    }
}

/// Payload for creating a book
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title must not be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Author is required"),
        length(min = 1, message = "Author must not be empty")
    )]
    pub author: Option<String>,
}
