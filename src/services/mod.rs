//! Business logic services

pub mod auth;
pub mod books;

use std::sync::Arc;

use crate::{config::AuthConfig, repository::BookRepository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
    pub auth: auth::AuthService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Arc<dyn BookRepository>, auth_config: AuthConfig) -> Self {
        Self {
            books: books::BookService::new(repository),
            auth: auth::AuthService::new(auth_config),
        }
    }
}
