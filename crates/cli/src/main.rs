mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsonstore_lib::sample::USERS;

use cmd::{cmd_delete, cmd_read, cmd_read_all, cmd_seed, cmd_write, open_store};
use output::{OutputFormat, print_error};

/// jstore - JSON document store on the local filesystem
#[derive(Parser)]
#[command(name = "jstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Store root directory (default: $JSONSTORE_ROOT, then the platform data directory)
  #[arg(short, long, global = true)]
  root: Option<PathBuf>,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Write a JSON value to a resource
  Write {
    collection: String,
    resource: String,

    /// JSON value to store (read from stdin if omitted)
    json: Option<String>,
  },

  /// Print a single resource
  Read {
    collection: String,
    resource: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Print every resource in a collection
  ReadAll {
    collection: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Delete a resource
  Delete { collection: String, resource: String },

  /// Populate a collection with sample users and exercise every operation
  Seed {
    /// Collection to seed
    #[arg(long, default_value = USERS)]
    collection: String,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<()> {
  let store = open_store(cli.root)?;

  match cli.command {
    Commands::Write {
      collection,
      resource,
      json,
    } => cmd_write(&store, &collection, &resource, json),
    Commands::Read {
      collection,
      resource,
      output,
    } => cmd_read(&store, &collection, &resource, output),
    Commands::ReadAll { collection, output } => cmd_read_all(&store, &collection, output),
    Commands::Delete { collection, resource } => cmd_delete(&store, &collection, &resource),
    Commands::Seed { collection } => cmd_seed(&store, &collection),
  }
}
