use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Key;

/// Ordered sequence of keys locating a node in a value tree; the root is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
	segments: Vec<Key>,
}

/// Dotted path expression could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path: {path:?}")]
pub struct InvalidPath {
	/// Original path expression.
	pub path: String,
}

impl Path {
	/// The root path.
	pub fn root() -> Self {
		Self::default()
	}

	/// Parse a dotted path such as `items.0.name`.
	///
	/// Empty input is the root. Segments made only of ASCII digits become [`Key::Index`].
	pub fn parse(input: &str) -> Result<Self, InvalidPath> {
		if input.is_empty() {
			return Ok(Self::root());
		}

		let invalid = || InvalidPath { path: input.to_owned() };
		let mut segments = Vec::new();
		for part in input.split('.') {
			if part.is_empty() {
				return Err(invalid());
			}
			if part.bytes().all(|byte| byte.is_ascii_digit()) {
				segments.push(Key::Index(part.parse::<usize>().map_err(|_| invalid())?));
			} else {
				segments.push(Key::Name(part.to_owned()));
			}
		}

		Ok(Self { segments })
	}

	/// Segments from the root outward.
	pub fn segments(&self) -> &[Key] {
		&self.segments
	}

	/// Number of segments.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Whether this is the root path.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// This path extended by `key`.
	pub fn child(&self, key: Key) -> Self {
		let mut segments = Vec::with_capacity(self.segments.len() + 1);
		segments.extend_from_slice(&self.segments);
		segments.push(key);
		Self { segments }
	}

	/// The first `len` segments (the whole path when `len` exceeds it).
	pub fn prefix(&self, len: usize) -> Self {
		Self {
			segments: self.segments[..len.min(self.segments.len())].to_vec(),
		}
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, segment) in self.segments.iter().enumerate() {
			if idx > 0 {
				f.write_str(".")?;
			}
			write!(f, "{segment}")?;
		}
		Ok(())
	}
}

impl FromStr for Path {
	type Err = InvalidPath;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl From<Vec<Key>> for Path {
	fn from(segments: Vec<Key>) -> Self {
		Self { segments }
	}
}

impl FromIterator<Key> for Path {
	fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
		Self {
			segments: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Key;
	type IntoIter = std::slice::Iter<'a, Key>;

	fn into_iter(self) -> Self::IntoIter {
		self.segments.iter()
	}
}
