//! Repository layer for database operations

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{BookInput, BookOut},
};

pub use memory::InMemoryBookRepository;
pub use postgres::PgBookRepository;

/// Storage contract for books. Every backend must expose the same
/// observable behaviour:
///
/// - absence is a normal result (`None` / `false`), never an error;
/// - storage failures surface as errors and are never folded into a
///   negative business outcome;
/// - `create` is durable before it returns, so a follow-up `get_by_id`
///   on the same backend sees the new row.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Point lookup by primary key
    async fn get_by_id(&self, id: i32) -> AppResult<Option<BookOut>>;

    /// Insert a new book; the store assigns and returns the id
    async fn create(&self, book: &BookInput) -> AppResult<i32>;

    /// Full scan, materialized, ordered by id
    async fn list(&self) -> AppResult<Vec<BookOut>>;

    /// Conditional update of title/author. Returns false when no row
    /// with the given id exists; the id itself is never rewritten.
    async fn update(&self, id: i32, book: &BookInput) -> AppResult<bool>;

    /// Conditional delete. Returns false when no row with the given id
    /// exists.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}
