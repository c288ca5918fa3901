//! Borrows repository for store operations

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::Store;

#[derive(Clone)]
pub struct BorrowsRepository {
    store: Store,
}

impl BorrowsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Mark a book as borrowed by the given user.
    ///
    /// The existence check and the state change happen under one write lock,
    /// so a book can never be handed out twice. Fails with `BookNotFound`
    /// for an unknown book and `Conflict` when the book is already out,
    /// leaving the store unchanged in both cases.
    pub async fn borrow(&self, book_id: u64, user_id: u64) -> AppResult<Book> {
        let mut inner = self.store.write().await;

        let book = inner
            .books
            .get_mut(&book_id)
            .ok_or(AppError::BookNotFound(book_id))?;

        if book.borrowed_by.is_some() {
            return Err(AppError::Conflict(format!(
                "Book with id {} is already borrowed",
                book_id
            )));
        }

        book.borrowed_by = Some(user_id);
        let borrowed = book.clone();
        inner.borrows.insert(book_id, user_id);

        Ok(borrowed)
    }

    /// All books currently borrowed by the user, in borrow order
    pub async fn list_for_user(&self, user_id: u64) -> Vec<Book> {
        let inner = self.store.read().await;
        inner
            .borrows
            .iter()
            .filter(|(_, borrower)| **borrower == user_id)
            .filter_map(|(book_id, _)| inner.books.get(book_id).cloned())
            .collect()
    }
}
