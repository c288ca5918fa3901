//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrow, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Lending API",
        version = "0.1.0",
        description = "Minimal library lending REST API"
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::create_book,
        books::get_book,
        // Users
        users::create_user,
        users::get_user,
        // Lending
        borrow::borrow_book,
        borrow::list_borrowed_books,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            // Lending
            borrow::BorrowRequest,
            borrow::BorrowResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "users", description = "User management"),
        (name = "lending", description = "Borrowing operations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
