//! Book entity and its wire projections

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Persisted book record. The id is assigned by the store on insertion
/// and never rewritten afterwards. Only the repository touches this
/// shape; everything above it sees `BookInput` / `BookOut`.
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

/// Create/update payload. Carries no id; both fields are required,
/// non-empty and at most 191 characters.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(length(min = 1, max = 191, message = "Title must be 1-191 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 191, message = "Author must be 1-191 characters"))]
    pub author: String,
}

/// Externally visible read shape, decoupled from the persisted entity so
/// the storage schema can evolve independently of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookOut {
    pub id: i32,
    pub title: String,
    pub author: String,
}

impl From<Book> for BookOut {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }
}
