//! Data models for the knowledge base documents.
//!
//! This module contains the data structures representing posts as returned by
//! the document store.

pub mod post;

pub use post::Post;
