//! Core persistence and validation for the people record-keeper.
//! This crate is the single source of truth for person invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreConfig, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, flush_logs, init_logging, logging_status};
pub use model::person::{
    is_usps_state_code, validate, Person, PersonFields, PersonId, PersonSummary,
    PersonValidationError, ValidationOutcome, USPS_STATE_CODES,
};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use service::person_store::{PersonStore, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
