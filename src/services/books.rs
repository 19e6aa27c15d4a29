//! Book use-cases
//!
//! The only place where a missing row becomes a named error. The
//! repository reports absence through `Option` / `bool`; this layer
//! translates those into [`AppError::NotFound`] and leaves storage
//! failures untouched.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookInput, BookOut},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Get a book by id
    pub async fn get(&self, id: i32) -> AppResult<BookOut> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book; the store assigns the id
    pub async fn create(&self, book: &BookInput) -> AppResult<i32> {
        self.repository.create(book).await
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<BookOut>> {
        self.repository.list().await
    }

    /// Update a book's title/author
    pub async fn update(&self, id: i32, book: &BookInput) -> AppResult<()> {
        if self.repository.update(id, book).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Book {} not found", id)))
        }
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Book {} not found", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryBookRepository;

    fn service() -> BookService {
        BookService::new(Arc::new(InMemoryBookRepository::new()))
    }

    fn input(title: &str, author: &str) -> BookInput {
        BookInput {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    fn assert_not_found(result: AppResult<impl std::fmt::Debug>, id: i32) {
        match result {
            Err(AppError::NotFound(msg)) => {
                assert!(msg.contains(&id.to_string()), "message should name the id: {msg}")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_missing_book_is_not_found() {
        let svc = service();
        assert_not_found(svc.get(42).await, 42);
    }

    #[tokio::test]
    async fn create_then_get_returns_the_book() {
        let svc = service();
        let id = svc
            .create(&input("Performance over Horizon", "John Doe"))
            .await
            .unwrap();
        assert_eq!(id, 1);

        let book = svc.get(id).await.unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Performance over Horizon");
        assert_eq!(book.author, "John Doe");
    }

    #[tokio::test]
    async fn created_books_get_distinct_incrementing_ids() {
        let svc = service();
        let first = svc.create(&input("First", "A")).await.unwrap();
        let second = svc.create(&input("Second", "B")).await.unwrap();
        assert!(second > first);

        let books = svc.list().await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, first);
        assert_eq!(books[1].id, second);
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty_not_an_error() {
        let svc = service();
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_rewrites_fields_but_not_the_id() {
        let svc = service();
        let id = svc.create(&input("Old Title", "Old Author")).await.unwrap();

        svc.update(id, &input("New Title", "New Author")).await.unwrap();

        let book = svc.get(id).await.unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.title, "New Title");
        assert_eq!(book.author, "New Author");
    }

    #[tokio::test]
    async fn update_missing_book_is_not_found_and_creates_nothing() {
        let svc = service();
        assert_not_found(svc.update(1, &input("X", "Y")).await, 1);
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_the_book() {
        let svc = service();
        let id = svc.create(&input("Doomed", "Nobody")).await.unwrap();

        svc.delete(id).await.unwrap();

        assert_not_found(svc.get(id).await, id);
        assert!(svc.list().await.unwrap().iter().all(|b| b.id != id));
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let svc = service();
        let id = svc.create(&input("Once", "Only")).await.unwrap();

        svc.delete(id).await.unwrap();
        assert_not_found(svc.delete(id).await, id);
    }

    #[tokio::test]
    async fn delete_missing_book_is_not_found() {
        let svc = service();
        assert_not_found(svc.delete(7).await, 7);
    }
}
