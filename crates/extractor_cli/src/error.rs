use std::path::PathBuf;

use extractor::{ExtractionError, InvalidPath, JsonKeyCollision};
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors produced while loading documents and running commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem read failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed JSON document.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Malformed YAML document.
	#[error("yaml: {0}")]
	Yaml(#[from] serde_yaml::Error),
	/// File extension does not name a supported format.
	#[error("unsupported document format: {path} (expected .json, .yaml or .yml)")]
	UnsupportedFormat {
		/// Offending file path.
		path: PathBuf,
	},
	/// YAML mapping key that is neither a string nor a non-negative integer.
	#[error("unsupported mapping key {key}")]
	UnsupportedKey {
		/// Debug rendering of the key.
		key: String,
	},
	/// `--path` argument could not be parsed.
	#[error(transparent)]
	InvalidPath(#[from] InvalidPath),
	/// Extracted collection cannot be rendered as JSON without losing entries.
	#[error(transparent)]
	JsonKeyCollision(#[from] JsonKeyCollision),
	/// Typed read failed.
	#[error(transparent)]
	Extraction(#[from] ExtractionError),
}
