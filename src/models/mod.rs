//! Domain models

pub mod auth;
pub mod book;
