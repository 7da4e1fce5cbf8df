//! Namebook CLI - store names in a local SQLite file and look up their ids

use clap::Parser;
use namebook::SqliteStore;
use namebook::config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "namebook")]
#[command(version = "0.1.0")]
#[command(about = "Name-to-id ledger backed by a local SQLite file")]
#[command(long_about = r#"
Namebook keeps one table of names. Storing a name prints the id the
database assigned; looking a name up prints every id stored for it.

Example usage:
  namebook set Alice     Inserted Alice as 1
  namebook Alice         User Alice is 1
"#)]
struct Cli {
    /// `<name>` to look up, or `set <name>` to store
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the database file (overrides namebook.toml)
    #[arg(short, long)]
    database: Option<PathBuf>,
}

/// What a single invocation will do, decided before any database access
#[derive(Debug, PartialEq)]
enum Action {
    Lookup(String),
    Store(String),
}

fn parse_action(args: &[String]) -> anyhow::Result<Action> {
    match args {
        // A lone `set` is a one-element list and therefore a lookup of the
        // literal name "set"; `set` only acts as a keyword in the two-element
        // shape.
        [name] => Ok(Action::Lookup(name.clone())),
        [cmd, name] if cmd.as_str() == "set" => Ok(Action::Store(name.clone())),
        _ => anyhow::bail!("unknown command"),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let action = parse_action(&cli.args)?;

    let loaded = config::load_config(None)?;
    let db_path = config::resolve_database_path(cli.database, loaded.as_ref());
    config::ensure_db_dir(&db_path)?;
    tracing::debug!("Using database {:?}", db_path);

    match action {
        Action::Lookup(name) => {
            tracing::debug!("Looking up '{}'", name);
            let store = SqliteStore::open(&db_path)?;
            for record in store.find_users_by_name(&name)? {
                println!("User {} is {}", record.name, record.id);
            }
        }
        Action::Store(name) => {
            tracing::debug!("Storing '{}'", name);
            let store = SqliteStore::open(&db_path)?;
            let record = store.insert_user(&name)?;
            println!("Inserted {} as {}", record.name, record.id);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match run(cli) {
        // Historically this binary exits 1 even when the invocation
        // succeeded, and callers are known to test for that status. Keep it
        // until a breaking release; errors use a distinct code.
        Ok(()) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_arg_is_lookup() {
        let action = parse_action(&args(&["Alice"])).unwrap();
        assert_eq!(action, Action::Lookup("Alice".to_string()));
    }

    #[test]
    fn test_set_pair_is_store() {
        let action = parse_action(&args(&["set", "Alice"])).unwrap();
        assert_eq!(action, Action::Store("Alice".to_string()));
    }

    #[test]
    fn test_lone_set_is_lookup_of_set() {
        let action = parse_action(&args(&["set"])).unwrap();
        assert_eq!(action, Action::Lookup("set".to_string()));
    }

    #[test]
    fn test_zero_args_rejected() {
        let err = parse_action(&[]).unwrap_err();
        assert_eq!(err.to_string(), "unknown command");
    }

    #[test]
    fn test_unrecognized_pair_rejected() {
        assert!(parse_action(&args(&["get", "Alice"])).is_err());
    }

    #[test]
    fn test_three_args_rejected() {
        assert!(parse_action(&args(&["set", "Alice", "extra"])).is_err());
    }
}
