//! Core use-case services.
//!
//! # Responsibility
//! - Expose the person store as a small synchronous API.
//! - Keep presentation layers decoupled from storage details.

pub mod person_store;
