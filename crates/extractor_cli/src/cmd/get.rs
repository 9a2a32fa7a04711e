use serde::Serialize;

use crate::cmd::util::{TypeArg, emit_json, extract, navigate, path_json, render_plain};
use crate::decode::load_document;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: std::path::PathBuf,
	/// Dotted path to the node, e.g. `items.0.name`.
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	#[arg(long = "type", value_enum)]
	pub kind: TypeArg,
	/// Accept null and absent values.
	#[arg(long)]
	pub optional: bool,
	#[arg(long)]
	pub json: bool,
}

/// Extract one typed value and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		path_expr,
		kind,
		optional,
		json,
	} = args;

	let document = load_document(&file)?;
	let accessor = navigate(&document, path_expr.as_deref())?;
	let value = extract(&accessor, kind, optional)?;

	if json {
		return emit_json(&GetJson {
			path: path_json(accessor.path()),
			value,
		});
	}

	println!("{}", render_plain(&value));
	Ok(())
}

#[derive(Serialize)]
struct GetJson {
	path: Vec<serde_json::Value>,
	value: serde_json::Value,
}
