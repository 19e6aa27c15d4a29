//! In-memory book repository
//!
//! Backend used by tests and as a reference implementation of the
//! [`BookRepository`](super::BookRepository) contract. Behaviour must stay
//! observably identical to the Postgres backend; the shared contract suite
//! in `tests/repository_contract.rs` runs against both.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::BookRepository;
use crate::{
    error::AppResult,
    models::book::{Book, BookInput, BookOut},
};

#[derive(Default)]
struct Store {
    next_id: i32,
    rows: BTreeMap<i32, Book>,
}

/// Book repository holding its rows in process memory
#[derive(Default)]
pub struct InMemoryBookRepository {
    store: Mutex<Store>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn get_by_id(&self, id: i32) -> AppResult<Option<BookOut>> {
        let store = self.store.lock().await;
        Ok(store.rows.get(&id).cloned().map(BookOut::from))
    }

    async fn create(&self, book: &BookInput) -> AppResult<i32> {
        let mut store = self.store.lock().await;
        store.next_id += 1;
        let id = store.next_id;
        store.rows.insert(
            id,
            Book {
                id,
                title: book.title.clone(),
                author: book.author.clone(),
            },
        );
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<BookOut>> {
        let store = self.store.lock().await;
        Ok(store.rows.values().cloned().map(BookOut::from).collect())
    }

    async fn update(&self, id: i32, book: &BookInput) -> AppResult<bool> {
        let mut store = self.store.lock().await;
        match store.rows.get_mut(&id) {
            Some(row) => {
                row.title = book.title.clone();
                row.author = book.author.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut store = self.store.lock().await;
        Ok(store.rows.remove(&id).is_some())
    }
}
