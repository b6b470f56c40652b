//! fieldstore CLI
//!
//! Command-line interface for reading and writing a fieldstore file.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use fieldstore::{Config, DataStore, LineFileStore, SnapshotFileStore};
use tracing_subscriber::{fmt, EnvFilter};

/// fieldstore CLI
#[derive(Parser, Debug)]
#[command(name = "fieldstore-cli")]
#[command(about = "CLI for the fieldstore entry/field store")]
#[command(version)]
struct Args {
    /// Directory holding the store files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Storage backend
    #[arg(short, long, value_enum, default_value_t = Backend::Line)]
    backend: Backend,

    /// Store name (the file is `<name>.txt` or `<name>.snap`)
    name: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Backend {
    /// Line-encoded text file
    Line,

    /// Snapshot file
    Snapshot,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a field of an entry
    Get {
        /// The entry name
        entry: String,

        /// The field name
        field: String,
    },

    /// Set a field of an entry
    Set {
        /// The entry name
        entry: String,

        /// The field name
        field: String,

        /// The value to set
        value: String,
    },

    /// Print every entry of a line-encoded store
    Dump,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fieldstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::builder().data_dir(&args.data_dir).build();

    tracing::debug!("fieldstore CLI v{}", fieldstore::VERSION);

    let result = match args.backend {
        Backend::Line => {
            let store = LineFileStore::line_file(&args.name, &config);
            match &args.command {
                Commands::Dump => dump(&store),
                command => run(&store, command),
            }
        }
        Backend::Snapshot => match SnapshotFileStore::snapshot_file(&args.name, &config) {
            Ok(store) => run(&store, &args.command),
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute a get/set command against any store
fn run(store: &impl DataStore, command: &Commands) -> fieldstore::Result<()> {
    match command {
        Commands::Get { entry, field } => {
            println!("{}", store.get_data(entry, field)?);
        }
        Commands::Set {
            entry,
            field,
            value,
        } => {
            store.set_data(entry, field, value)?;
        }
        Commands::Dump => {
            return Err(fieldstore::StoreError::Config(
                "dump is only available for the line backend".to_string(),
            ));
        }
    }
    Ok(())
}

/// Print every entry of a line-encoded store
fn dump(store: &LineFileStore) -> fieldstore::Result<()> {
    for (entry, fields) in store.backend().entries()? {
        for (field, value) in fields {
            println!("{entry}\t{field}\t{value}");
        }
    }
    Ok(())
}
