use extractor::{Accessor, ExtractionError, Key, Number, Path, Value};
use serde::Serialize;
use serde_json::json;

use crate::error::{CliError, Result};

/// Kinds accepted by `--type`, `--key-type` and `--value-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeArg {
	/// Boolean.
	Bool,
	/// Integer.
	Int,
	/// Float; integers are rejected.
	Float,
	/// Integer or float.
	Number,
	/// String.
	String,
	/// Collection.
	Array,
}

/// Walk from the document root along an optional dotted path.
pub(crate) fn navigate<'a>(root: &'a Value, path_expr: Option<&str>) -> Result<Accessor<'a>> {
	let path = Path::parse(path_expr.unwrap_or_default())?;
	Ok(Accessor::root(root).walk(&path)?)
}

/// Run the typed reader selected by `kind` and render its result as JSON.
pub(crate) fn extract(accessor: &Accessor<'_>, kind: TypeArg, optional: bool) -> Result<serde_json::Value> {
	let value = match (kind, optional) {
		(TypeArg::Bool, false) => json!(accessor.bool()?),
		(TypeArg::Bool, true) => json!(accessor.bool_or_null()?),
		(TypeArg::Int, false) => json!(accessor.int()?),
		(TypeArg::Int, true) => json!(accessor.int_or_null()?),
		(TypeArg::Float, false) => json!(accessor.float()?),
		(TypeArg::Float, true) => json!(accessor.float_or_null()?),
		(TypeArg::Number, false) => number_json(accessor.number()?),
		(TypeArg::Number, true) => accessor.number_or_null()?.map_or(serde_json::Value::Null, number_json),
		(TypeArg::String, false) => json!(accessor.string()?),
		(TypeArg::String, true) => json!(accessor.string_or_null()?),
		(TypeArg::Array, false) => serde_json::Value::try_from(accessor.collection()?)?,
		(TypeArg::Array, true) => match accessor.collection_or_null()? {
			Some(items) => serde_json::Value::try_from(items)?,
			None => serde_json::Value::Null,
		},
	};
	Ok(value)
}

fn number_json(number: Number) -> serde_json::Value {
	match number {
		Number::Int(int) => json!(int),
		Number::Float(float) => json!(float),
	}
}

/// Render an extracted value for plain-text output; strings print unquoted.
pub(crate) fn render_plain(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// Path segments as JSON numbers and strings.
pub(crate) fn path_json(path: &Path) -> Vec<serde_json::Value> {
	path.segments()
		.iter()
		.map(|key| match key {
			Key::Index(index) => json!(index),
			Key::Name(name) => json!(name),
		})
		.collect()
}

/// Print a JSON payload on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload).map_err(CliError::Json)?);
	Ok(())
}

/// Print an extraction failure as a JSON error object on stdout.
pub(crate) fn emit_error_json(err: &ExtractionError) {
	let payload = ErrorJson {
		error: ErrorBodyJson {
			path: path_json(err.path()),
			raw_message: err.raw_message().to_owned(),
			message: err.message().to_owned(),
		},
	};
	if let Err(err) = emit_json(&payload) {
		eprintln!("error: {err}");
	}
}

#[derive(Serialize)]
struct ErrorJson {
	error: ErrorBodyJson,
}

#[derive(Serialize)]
struct ErrorBodyJson {
	path: Vec<serde_json::Value>,
	raw_message: String,
	message: String,
}
