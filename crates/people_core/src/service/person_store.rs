//! Person store: the public CRUD + validation facade.
//!
//! # Responsibility
//! - Provide synchronous create/list/get/update/delete entry points.
//! - Own the storage location and run each call as one unit of work.
//!
//! # Invariants
//! - Every call opens its own connection, runs one statement and drops the
//!   connection; nothing spans two public calls.
//! - `create` and `update` trust the caller to have run `validate` first.
//!   The store never rejects blank required fields.
//! - Logged events carry ids and outcomes only, never field contents.

use crate::config::StoreConfig;
use crate::db::open_db;
use crate::model::person::{
    self, Person, PersonFields, PersonId, PersonSummary, ValidationOutcome,
};
use crate::repo::person_repo::{
    PersonRepository, RepoError, RepoResult, SqlitePersonRepository,
};
use log::{debug, error, info};
use std::time::Instant;

pub type StoreResult<T> = RepoResult<T>;

/// Durable CRUD over person records in a single local SQLite file.
#[derive(Debug, Clone)]
pub struct PersonStore {
    config: StoreConfig,
}

impl PersonStore {
    /// Creates a store bound to `config.db_path`. Does not touch the disk.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Ensures the database file and `people` table exist.
    ///
    /// Safe on every start: existing rows are never altered or truncated.
    pub fn initialize(&self) -> StoreResult<()> {
        self.with_repo("store_initialize", |_| Ok(()))?;
        info!(
            "event=store_initialize module=store status=ok db_path={}",
            self.config.db_path().display()
        );
        Ok(())
    }

    /// Inserts a new person and returns the assigned id.
    ///
    /// # Contract
    /// - No validation is performed; call [`PersonStore::validate`] first.
    pub fn create(&self, fields: &PersonFields) -> StoreResult<PersonId> {
        let id = self.with_repo("person_create", |repo| repo.create_person(fields))?;
        info!("event=person_create module=store status=ok person_id={id}");
        Ok(id)
    }

    /// Lists every person as `(id, first_name, last_name, email)`, sorted by
    /// last name then first name.
    pub fn list(&self) -> StoreResult<Vec<PersonSummary>> {
        let people = self.with_repo("person_list", |repo| repo.list_people())?;
        debug!(
            "event=person_list module=store status=ok count={}",
            people.len()
        );
        Ok(people)
    }

    /// Returns the full record, or `None` when `id` is unknown.
    pub fn get(&self, id: PersonId) -> StoreResult<Option<Person>> {
        let person = self.with_repo("person_get", |repo| repo.get_person(id))?;
        debug!(
            "event=person_get module=store status=ok person_id={id} found={}",
            person.is_some()
        );
        Ok(person)
    }

    /// Replaces every field of `id`. Returns `false` when `id` is unknown.
    ///
    /// # Contract
    /// - Full replacement: fields the caller did not mean to change are
    ///   overwritten too.
    /// - No validation is performed; call [`PersonStore::validate`] first.
    pub fn update(&self, id: PersonId, fields: &PersonFields) -> StoreResult<bool> {
        let updated = self.with_repo("person_update", |repo| repo.update_person(id, fields))?;
        info!("event=person_update module=store status=ok person_id={id} updated={updated}");
        Ok(updated)
    }

    /// Permanently removes `id`. Returns `false` when no row matched.
    ///
    /// Confirmation of the destructive action is the caller's job.
    pub fn delete(&self, id: PersonId) -> StoreResult<bool> {
        let deleted = self.with_repo("person_delete", |repo| repo.delete_person(id))?;
        info!("event=person_delete module=store status=ok person_id={id} deleted={deleted}");
        Ok(deleted)
    }

    /// Pure required-field check; see [`PersonFields::validate`].
    pub fn validate(&self, fields: &PersonFields) -> ValidationOutcome {
        person::validate(fields)
    }

    fn with_repo<T>(
        &self,
        event: &str,
        op: impl FnOnce(&SqlitePersonRepository<'_>) -> RepoResult<T>,
    ) -> StoreResult<T> {
        let started_at = Instant::now();
        let result = open_db(self.config.db_path())
            .map_err(RepoError::from)
            .and_then(|conn| {
                let repo = SqlitePersonRepository::try_new(&conn)?;
                op(&repo)
            });
        if let Err(err) = &result {
            error!(
                "event={event} module=store status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
        }
        result
    }
}
