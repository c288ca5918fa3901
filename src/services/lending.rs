//! Lending service enforcing the single-borrower rule

use crate::{error::AppResult, models::Book, repository::Repository};

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a user.
    ///
    /// Fails with `UserNotFound` / `BookNotFound` for unknown ids and with
    /// `Conflict` when the book is already borrowed, whoever holds it.
    /// Re-borrowing by the current holder is a conflict too, not a no-op.
    pub async fn borrow(&self, user_id: u64, book_id: u64) -> AppResult<Book> {
        // Verify user exists
        self.repository.users.get_by_id(user_id).await?;

        let book = self.repository.borrows.borrow(book_id, user_id).await?;
        tracing::info!(user_id, book_id, "book borrowed");
        Ok(book)
    }

    /// All books currently borrowed by the user, in borrow order
    pub async fn list_borrowed(&self, user_id: u64) -> AppResult<Vec<Book>> {
        // Verify user exists
        self.repository.users.get_by_id(user_id).await?;
        Ok(self.repository.borrows.list_for_user(user_id).await)
    }
}
