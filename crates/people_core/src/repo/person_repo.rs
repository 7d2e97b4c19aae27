//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the canonical `people` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Writes store field values exactly as given; no validation happens here.
//! - `update_person` replaces every non-id column.
//! - Listing order is `last_name, first_name` (BINARY collation), then `id`.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::person::{Person, PersonFields, PersonId, PersonSummary};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PEOPLE_TABLE: &str = "people";

/// Canonical column order; also the shape a ready connection must carry.
const PEOPLE_COLUMNS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "email",
    "job_title",
    "street",
    "street2",
    "city",
    "state",
    "postal",
    "notes",
];

const PERSON_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    job_title,
    street,
    street2,
    city,
    state,
    postal,
    notes
FROM people";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection schema version is behind this binary.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is older than required {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    /// Inserts one row and returns its freshly assigned id.
    fn create_person(&self, fields: &PersonFields) -> RepoResult<PersonId>;
    /// Returns the list projection in listing order.
    fn list_people(&self) -> RepoResult<Vec<PersonSummary>>;
    /// Returns the full record, or `None` when no row has this id.
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    /// Replaces every field; `false` when no row has this id.
    fn update_person(&self, id: PersonId, fields: &PersonFields) -> RepoResult<bool>;
    /// Removes the row permanently; `false` when no row has this id.
    fn delete_person(&self, id: PersonId) -> RepoResult<bool>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a connection after checking its schema is ready.
    ///
    /// # Errors
    /// - `UninitializedConnection` when schema steps were not applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `people`
    ///   table is absent or lacks a canonical column (for example the 4-field
    ///   legacy shape).
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version < expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let columns = table_columns(conn, PEOPLE_TABLE)?;
        if columns.is_empty() {
            return Err(RepoError::MissingRequiredTable(PEOPLE_TABLE));
        }
        if let Some(&column) = PEOPLE_COLUMNS
            .iter()
            .find(|column| !columns.iter().any(|existing| existing.as_str() == **column))
        {
            return Err(RepoError::MissingRequiredColumn {
                table: PEOPLE_TABLE,
                column,
            });
        }

        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, fields: &PersonFields) -> RepoResult<PersonId> {
        self.conn.execute(
            "INSERT INTO people (
                first_name,
                last_name,
                email,
                job_title,
                street,
                street2,
                city,
                state,
                postal,
                notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                fields.first_name.as_str(),
                fields.last_name.as_str(),
                fields.email.as_deref(),
                fields.job_title.as_str(),
                fields.street.as_str(),
                fields.street2.as_deref(),
                fields.city.as_str(),
                fields.state.as_str(),
                fields.postal.as_str(),
                fields.notes.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_people(&self) -> RepoResult<Vec<PersonSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, email
             FROM people
             ORDER BY last_name, first_name, id;",
        )?;
        let people = stmt
            .query_map([], |row| {
                Ok(PersonSummary {
                    id: row.get("id")?,
                    first_name: row.get("first_name")?,
                    last_name: row.get("last_name")?,
                    email: row.get("email")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(people)
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let person = self
            .conn
            .query_row(
                &format!("{PERSON_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_person_row,
            )
            .optional()?;

        Ok(person)
    }

    fn update_person(&self, id: PersonId, fields: &PersonFields) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE people
             SET
                first_name = ?1,
                last_name = ?2,
                email = ?3,
                job_title = ?4,
                street = ?5,
                street2 = ?6,
                city = ?7,
                state = ?8,
                postal = ?9,
                notes = ?10
             WHERE id = ?11;",
            params![
                fields.first_name.as_str(),
                fields.last_name.as_str(),
                fields.email.as_deref(),
                fields.job_title.as_str(),
                fields.street.as_str(),
                fields.street2.as_deref(),
                fields.city.as_str(),
                fields.state.as_str(),
                fields.postal.as_str(),
                fields.notes.as_deref(),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM people WHERE id = ?1;", [id])?;

        Ok(changed > 0)
    }
}

fn parse_person_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get("id")?,
        fields: PersonFields {
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
            job_title: row.get("job_title")?,
            street: row.get("street")?,
            street2: row.get("street2")?,
            city: row.get("city")?,
            state: row.get("state")?,
            postal: row.get("postal")?,
            notes: row.get("notes")?,
        },
    })
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}
