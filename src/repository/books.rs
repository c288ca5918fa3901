//! Books repository for store operations

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::Store;

#[derive(Clone)]
pub struct BooksRepository {
    store: Store,
}

impl BooksRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Store a new book under the next unused id
    pub async fn create(&self, title: &str, author: &str) -> Book {
        let mut inner = self.store.write().await;
        let id = inner.next_book_id();
        let book = Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            borrowed_by: None,
        };
        inner.books.insert(id, book.clone());
        book
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: u64) -> AppResult<Book> {
        self.store
            .read()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or(AppError::BookNotFound(id))
    }
}
