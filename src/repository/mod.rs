//! Repository layer over the in-memory store

pub mod books;
pub mod borrows;
pub mod users;

use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::{Book, User};

/// Shared handle to the in-memory store.
///
/// A single lock guards the whole store: writers serialize, and the borrow
/// check-and-set runs inside one write-lock scope so concurrent borrow
/// attempts on the same book can never both succeed.
pub type Store = Arc<RwLock<StoreInner>>;

/// The store contents. Ids are allocated monotonically and never reused.
#[derive(Debug, Default)]
pub struct StoreInner {
    pub(crate) books: IndexMap<u64, Book>,
    pub(crate) users: IndexMap<u64, User>,
    /// Active borrows, book id -> borrower id, kept in borrow order.
    pub(crate) borrows: IndexMap<u64, u64>,
    next_book_id: u64,
    next_user_id: u64,
}

impl StoreInner {
    pub(crate) fn next_book_id(&mut self) -> u64 {
        self.next_book_id += 1;
        self.next_book_id
    }

    pub(crate) fn next_user_id(&mut self) -> u64 {
        self.next_user_id += 1;
        self.next_user_id
    }
}

/// Main repository struct holding the shared store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
    pub borrows: borrows::BorrowsRepository,
}

impl Repository {
    /// Create a repository backed by a fresh, empty store
    pub fn new() -> Self {
        let store: Store = Arc::new(RwLock::new(StoreInner::default()));
        Self {
            books: books::BooksRepository::new(store.clone()),
            users: users::UsersRepository::new(store.clone()),
            borrows: borrows::BorrowsRepository::new(store),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
