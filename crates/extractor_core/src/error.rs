use std::fmt;

use thiserror::Error;

use crate::Path;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Whether a failed check was made against a collection key or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
	/// A value stored in the tree.
	Value,
	/// A key of a collection entry.
	Key,
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Role::Value => "Value",
			Role::Key => "Key",
		})
	}
}

/// Why an extraction failed, rendered without path context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Cause {
	/// A required value was null or absent.
	#[error("Value is required, but was null.")]
	MissingValue,
	/// A value or key was present but of another kind.
	#[error("{role} was expected to be of type {expected}, got {actual} instead.")]
	TypeMismatch {
		/// Whether the key or the value was checked.
		role: Role,
		/// Expected type label, e.g. `int or null`.
		expected: &'static str,
		/// Diagnostic description of the offending data.
		actual: String,
	},
}

/// One failed extraction: where it happened and why.
///
/// `Display` renders `Extraction failed: ...` at the root and
/// `Extraction failed at path "a.b.0": ...` everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractionError {
	path: Path,
	cause: Cause,
	raw_message: String,
	message: String,
}

impl ExtractionError {
	/// Required value at `path` was null.
	pub fn missing_value(path: Path) -> Self {
		Self::new(path, Cause::MissingValue)
	}

	/// Data at `path` did not match the `expected` type label.
	pub fn type_mismatch(path: Path, role: Role, expected: &'static str, actual: String) -> Self {
		Self::new(path, Cause::TypeMismatch { role, expected, actual })
	}

	fn new(path: Path, cause: Cause) -> Self {
		let raw_message = cause.to_string();
		let message = if path.is_empty() {
			format!("Extraction failed: {raw_message}")
		} else {
			format!("Extraction failed at path \"{path}\": {raw_message}")
		};
		tracing::debug!(path = %path, cause = %raw_message, "extraction failed");

		Self {
			path,
			cause,
			raw_message,
			message,
		}
	}

	/// Path at which the failure was detected, cut at the first null ancestor.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Structured failure cause.
	pub fn cause(&self) -> &Cause {
		&self.cause
	}

	/// Message without the path prefix.
	pub fn raw_message(&self) -> &str {
		&self.raw_message
	}

	/// Full single-line diagnostic.
	pub fn message(&self) -> &str {
		&self.message
	}
}
