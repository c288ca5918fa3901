//! Book catalog service

use crate::{error::AppResult, models::Book, repository::Repository};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a new book to the catalog
    pub async fn create_book(&self, title: &str, author: &str) -> Book {
        let book = self.repository.books.create(title, author).await;
        tracing::info!(book_id = book.id, title = %book.title, "book created");
        book
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: u64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }
}
