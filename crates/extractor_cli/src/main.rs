#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

mod cmd;
mod decode;
mod error;

#[derive(Parser)]
#[command(name = "extractor", about = "Typed, path-checked reads from JSON and YAML documents")]
struct Cli {
	/// Log navigation and extraction failures to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Extract one typed value.
	Get(cmd::get::Args),
	/// Iterate a collection, checking key and value types.
	Entries(cmd::entries::Args),
	/// Print the diagnostic description of a node.
	Describe(cmd::describe::Args),
}

impl Commands {
	fn json(&self) -> bool {
		match self {
			Commands::Get(args) => args.json,
			Commands::Entries(args) => args.json,
			Commands::Describe(_) => false,
		}
	}
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let json = cli.command.json();
	if let Err(err) = run(cli.command) {
		match err {
			CliError::Extraction(err) if json => cmd::util::emit_error_json(&err),
			other => eprintln!("error: {other}"),
		}
		std::process::exit(1);
	}
}

fn run(command: Commands) -> Result<()> {
	match command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Entries(args) => cmd::entries::run(args),
		Commands::Describe(args) => cmd::describe::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
