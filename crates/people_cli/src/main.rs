//! Command-line front end for the people store.
//!
//! # Responsibility
//! - Collect field input, trimmed, and hand it to `people_core`.
//! - Validate before every mutation and re-list after every success.
//! - Ask for confirmation before deleting.

use clap::{Args, Parser, Subcommand};
use people_core::{
    default_log_level, init_logging, PersonFields, PersonId, PersonStore, StoreConfig,
    DEFAULT_DB_FILE_NAME,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// `Ok(false)` means the command ran but the user-visible outcome is a failure.
type CliResult = Result<bool, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "people")]
#[command(version)]
#[command(about = "Keep a local list of people: names, jobs, addresses and notes")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// SQLite database file
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database file and table if missing
    Init,
    /// List everyone, sorted by last name then first name
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one person's full record
    Show {
        id: PersonId,
        #[arg(long)]
        json: bool,
    },
    /// Add a new person
    Add(PersonArgs),
    /// Replace every field of an existing person
    Edit {
        id: PersonId,
        #[command(flatten)]
        person: PersonArgs,
    },
    /// Delete a person permanently
    Delete {
        id: PersonId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Check fields without saving
    Validate(PersonArgs),
}

#[derive(Debug, Clone, Args)]
struct PersonArgs {
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long, default_value = "")]
    job_title: String,
    #[arg(long, default_value = "")]
    street: String,
    /// Suite, apartment or unit
    #[arg(long)]
    street2: Option<String>,
    #[arg(long, default_value = "")]
    city: String,
    /// USPS abbreviation, e.g. NY
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long, default_value = "")]
    postal: String,
    #[arg(long)]
    notes: Option<String>,
}

/// Every field is trimmed before validation and storage; a blank
/// `street2` or `notes` becomes `None`.
impl From<PersonArgs> for PersonFields {
    fn from(args: PersonArgs) -> Self {
        Self {
            first_name: trimmed(args.first_name),
            last_name: trimmed(args.last_name),
            email: args.email.map(trimmed),
            job_title: trimmed(args.job_title),
            street: trimmed(args.street),
            street2: trimmed_optional(args.street2),
            city: trimmed(args.city),
            state: trimmed(args.state),
            postal: trimmed(args.postal),
            notes: trimmed_optional(args.notes),
        }
    }
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn trimmed_optional(value: Option<String>) -> Option<String> {
    value.map(trimmed).filter(|text| !text.is_empty())
}

impl Cli {
    /// Requested log level, falling back to the build-mode default.
    fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(cli.log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = PersonStore::new(StoreConfig::new(cli.db.clone()));
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(cli.command, &store, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err}");
            eprintln!("Operation failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    store: &PersonStore,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> CliResult {
    // Validation is pure; every other command needs the table.
    if !matches!(command, Command::Validate(_)) {
        store.initialize()?;
    }

    match command {
        Command::Init => {
            writeln!(out, "Database ready at {}", store.config().db_path().display())?;
            Ok(true)
        }
        Command::List { json } => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&store.list()?)?)?;
            } else {
                print_listing(store, out)?;
            }
            Ok(true)
        }
        Command::Show { id, json } => match store.get(id)? {
            Some(person) if json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&person)?)?;
                Ok(true)
            }
            Some(person) => {
                writeln!(out, "{}", person.detail_text())?;
                Ok(true)
            }
            None => not_found(out, id),
        },
        Command::Add(args) => {
            let fields = PersonFields::from(args);
            if !check(store, &fields, out)? {
                return Ok(false);
            }
            let id = store.create(&fields)?;
            writeln!(
                out,
                "{} {} added with ID {id}",
                fields.first_name, fields.last_name
            )?;
            print_listing(store, out)?;
            Ok(true)
        }
        Command::Edit { id, person } => {
            let fields = PersonFields::from(person);
            if !check(store, &fields, out)? {
                return Ok(false);
            }
            if !store.update(id, &fields)? {
                return not_found(out, id);
            }
            writeln!(out, "Person updated successfully!")?;
            print_listing(store, out)?;
            Ok(true)
        }
        Command::Delete { id, yes } => {
            let Some(person) = store.get(id)? else {
                return not_found(out, id);
            };
            if !yes && !confirm_delete(&person.summary().to_string(), input, out)? {
                writeln!(out, "Delete cancelled.")?;
                return Ok(true);
            }
            if !store.delete(id)? {
                return not_found(out, id);
            }
            writeln!(out, "Person deleted successfully!")?;
            print_listing(store, out)?;
            Ok(true)
        }
        Command::Validate(args) => {
            let fields = PersonFields::from(args);
            let valid = check(store, &fields, out)?;
            if valid {
                writeln!(out, "All fields are valid.")?;
            }
            Ok(valid)
        }
    }
}

fn check(store: &PersonStore, fields: &PersonFields, out: &mut impl Write) -> io::Result<bool> {
    let outcome = store.validate(fields);
    if !outcome.is_valid {
        writeln!(out, "Validation Error: {}", outcome.message)?;
    }
    Ok(outcome.is_valid)
}

fn print_listing(store: &PersonStore, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let people = store.list()?;
    if people.is_empty() {
        writeln!(out, "(no people yet)")?;
    }
    for person in people {
        writeln!(out, "{person}")?;
    }
    Ok(())
}

fn confirm_delete(label: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(
        out,
        "Are you sure you want to delete:\n\n{label}\n\nThis cannot be undone! [y/N] "
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn not_found(out: &mut impl Write, id: PersonId) -> CliResult {
    writeln!(out, "Person {id} not found in database!")?;
    Ok(false)
}
