use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use extractor::{Collection, Key, Value};

use crate::error::{CliError, Result};

/// Read and decode a `.json`, `.yaml` or `.yml` document.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
	let format = path.extension().and_then(OsStr::to_str).map(str::to_ascii_lowercase);
	let text = match format.as_deref() {
		Some("json" | "yaml" | "yml") => fs::read_to_string(path)?,
		_ => return Err(CliError::UnsupportedFormat { path: path.to_owned() }),
	};
	tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");

	match format.as_deref() {
		Some("json") => Ok(Value::from(serde_json::from_str::<serde_json::Value>(&text)?)),
		_ => from_yaml(serde_yaml::from_str(&text)?),
	}
}

fn from_yaml(value: serde_yaml::Value) -> Result<Value> {
	Ok(match value {
		serde_yaml::Value::Null => Value::Null,
		serde_yaml::Value::Bool(flag) => Value::Bool(flag),
		serde_yaml::Value::Number(number) => match number.as_i64() {
			Some(int) => Value::Int(int),
			None => number.as_f64().map_or(Value::Null, Value::Float),
		},
		serde_yaml::Value::String(text) => Value::String(text),
		serde_yaml::Value::Sequence(items) => Value::Collection(items.into_iter().map(from_yaml).collect::<Result<Collection>>()?),
		serde_yaml::Value::Mapping(fields) => {
			let mut out = Collection::new();
			for (key, item) in fields {
				out.insert(yaml_key(key)?, from_yaml(item)?);
			}
			Value::Collection(out)
		}
		serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
	})
}

fn yaml_key(key: serde_yaml::Value) -> Result<Key> {
	match key {
		serde_yaml::Value::String(name) => Ok(Key::Name(name)),
		serde_yaml::Value::Number(number) => number
			.as_u64()
			.and_then(|index| usize::try_from(index).ok())
			.map(Key::Index)
			.ok_or_else(|| CliError::UnsupportedKey { key: number.to_string() }),
		other => Err(CliError::UnsupportedKey { key: format!("{other:?}") }),
	}
}
