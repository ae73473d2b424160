//! Domain layer containing the book entity and its repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Lookup and not-found rules live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
