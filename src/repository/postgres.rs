//! Postgres-backed book repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookRepository;
use crate::{
    error::AppResult,
    models::book::{Book, BookInput, BookOut},
};

/// Production repository over a Postgres connection pool
#[derive(Clone)]
pub struct PgBookRepository {
    pool: Pool<Postgres>,
}

impl PgBookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn get_by_id(&self, id: i32) -> AppResult<Option<BookOut>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book.map(BookOut::from))
    }

    async fn create(&self, book: &BookInput) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO books (title, author) VALUES ($1, $2) RETURNING id",
        )
        .bind(&book.title)
        .bind(&book.author)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<BookOut>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(BookOut::from).collect())
    }

    async fn update(&self, id: i32, book: &BookInput) -> AppResult<bool> {
        // Existence probe and mutation run in one transaction; the row
        // lock keeps a concurrent update/delete of the same id from
        // interleaving between the two statements.
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id FROM books WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Ok(false);
        }

        sqlx::query("UPDATE books SET title = $1, author = $2 WHERE id = $3")
            .bind(&book.title)
            .bind(&book.author)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id FROM books WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
