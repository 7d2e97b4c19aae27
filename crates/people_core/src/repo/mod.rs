//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the person data access contract.
//! - Isolate SQLite query details from the store facade.
//!
//! # Invariants
//! - Repositories do not validate fields; callers validate before writing.
//! - Not-found is a normal outcome (`None` / `false`), never an error.

pub mod person_repo;
