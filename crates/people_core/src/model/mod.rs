//! Domain model for the person record-keeper.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the required-field rules next to the record they guard.
//!
//! # Invariants
//! - Every stored person is identified by a store-assigned `PersonId`.
//! - Deletion is permanent; there is no tombstone state.

pub mod person;
