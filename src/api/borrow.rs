//! Lending endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppResult, models::Book};

/// Borrow request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    /// Id of the borrowing user
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<u64>,
    /// Id of the book to borrow
    #[validate(required(message = "bookId is required"))]
    pub book_id: Option<u64>,
}

/// Borrow confirmation
#[derive(Serialize, ToSchema)]
pub struct BorrowResponse {
    /// Status message
    pub message: String,
}

/// Borrow a book for a user
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "lending",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book borrowed", body = BorrowResponse),
        (status = 400, description = "Missing userId or bookId"),
        (status = 404, description = "User or book not found"),
        (status = 409, description = "Book already borrowed")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<BorrowRequest>,
) -> AppResult<Json<BorrowResponse>> {
    payload.validate()?;

    let user_id = payload.user_id.unwrap_or_default();
    let book_id = payload.book_id.unwrap_or_default();

    state.services.lending.borrow(user_id, book_id).await?;

    Ok(Json(BorrowResponse {
        message: "Book borrowed successfully".to_string(),
    }))
}

/// List books currently borrowed by a user
#[utoipa::path(
    get,
    path = "/users/{id}/borrowed",
    tag = "lending",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Books borrowed by the user", body = Vec<Book>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_borrowed_books(
    State(state): State<crate::AppState>,
    Path(user_id): Path<u64>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.lending.list_borrowed(user_id).await?;
    Ok(Json(books))
}
