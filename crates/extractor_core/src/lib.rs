//! Typed, path-tracking reads over decoded JSON/YAML-shaped value trees.
//!
//! Wrap a decoded [`Value`] in an [`Accessor`], navigate with [`Accessor::get`] or
//! [`Accessor::entries`], and extract with the typed readers. Every failed read is an
//! [`ExtractionError`] that names the offending path:
//!
//! ```
//! use extractor::{Accessor, Value};
//!
//! let value = Value::Bool(true);
//! let err = Accessor::root(&value).collection().unwrap_err();
//! assert_eq!(err.to_string(), "Extraction failed: Value was expected to be of type array, got bool(true) instead.");
//! ```

mod accessor;
mod describe;
mod error;
#[cfg(feature = "json")]
mod json;
mod path;
mod value;

/// Path-tracking accessor and its entry iterator.
pub use accessor::{Accessor, Entries};
/// Diagnostic value rendering.
pub use describe::{DescribeOptions, describe, describe_key, describe_with};
/// Error and result aliases.
pub use error::{Cause, ExtractionError, Result, Role};
/// Failure converting a collection into JSON.
#[cfg(feature = "json")]
pub use json::JsonKeyCollision;
/// Access paths and the dotted path parser.
pub use path::{InvalidPath, Path};
/// Value tree types.
pub use value::{Collection, Key, Kind, Number, Value};
