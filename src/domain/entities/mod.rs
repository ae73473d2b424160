//! Core domain entities.
//!
//! Entities are plain data structures. Creation and partial updates use
//! separate types:
//! - [`NewBook`] - For creating new records (all fields required)
//! - [`BookPatch`] - For partial updates (every field optional)

pub mod book;

pub use book::{Book, BookPatch, NewBook};
