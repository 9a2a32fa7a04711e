use serde::Serialize;

use crate::cmd::util::{TypeArg, emit_json, extract, navigate, path_json};
use crate::decode::load_document;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: std::path::PathBuf,
	/// Dotted path to the collection, e.g. `users`.
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	/// Require every key to be of this kind.
	#[arg(long = "key-type", value_enum)]
	pub key_kind: Option<TypeArg>,
	/// Require every value to be of this kind.
	#[arg(long = "value-type", value_enum)]
	pub value_kind: Option<TypeArg>,
	/// Accept null values when `--value-type` is set.
	#[arg(long)]
	pub optional: bool,
	#[arg(long)]
	pub json: bool,
}

/// Iterate a collection and print one line per entry.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		path_expr,
		key_kind,
		value_kind,
		optional,
		json,
	} = args;

	let document = load_document(&file)?;
	let accessor = navigate(&document, path_expr.as_deref())?;

	let mut rows = Vec::new();
	for (key, value) in accessor.entries()? {
		if let Some(kind) = key_kind {
			extract(&key, kind, false)?;
		}
		if let Some(kind) = value_kind {
			extract(&value, kind, optional)?;
		}
		let segment = key.path().segments().last().map(ToString::to_string).unwrap_or_default();
		rows.push(EntryJson {
			key: segment,
			value: value.describe(),
		});
	}

	if json {
		return emit_json(&EntriesJson {
			path: path_json(accessor.path()),
			entries: rows,
		});
	}

	for row in &rows {
		println!("{}\t{}", row.key, row.value);
	}
	Ok(())
}

#[derive(Serialize)]
struct EntriesJson {
	path: Vec<serde_json::Value>,
	entries: Vec<EntryJson>,
}

#[derive(Serialize)]
struct EntryJson {
	key: String,
	value: String,
}
