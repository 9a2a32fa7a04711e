use std::fmt;

/// One node of a decoded data tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Absent or explicit null.
	#[default]
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integer scalar.
	Int(i64),
	/// Floating point scalar.
	Float(f64),
	/// String scalar.
	String(String),
	/// Ordered keyed collection (list, map, or a mix of both).
	Collection(Collection),
}

/// Coarse kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::Int`].
	Int,
	/// [`Value::Float`].
	Float,
	/// [`Value::String`].
	String,
	/// [`Value::Collection`].
	Collection,
}

impl Kind {
	/// Type label used in diagnostics.
	pub fn label(self) -> &'static str {
		match self {
			Kind::Null => "null",
			Kind::Bool => "bool",
			Kind::Int => "int",
			Kind::Float => "float",
			Kind::String => "string",
			Kind::Collection => "array",
		}
	}
}

impl Value {
	/// Kind of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Null => Kind::Null,
			Value::Bool(_) => Kind::Bool,
			Value::Int(_) => Kind::Int,
			Value::Float(_) => Kind::Float,
			Value::String(_) => Kind::String,
			Value::Collection(_) => Kind::Collection,
		}
	}

	/// Whether this value is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<Collection> for Value {
	fn from(value: Collection) -> Self {
		Value::Collection(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

/// Collection key: a non-negative integer index or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
	/// Integer index.
	Index(usize),
	/// String name.
	Name(String),
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Index(index) => write!(f, "{index}"),
			Key::Name(name) => f.write_str(name),
		}
	}
}

impl From<usize> for Key {
	fn from(value: usize) -> Self {
		Key::Index(value)
	}
}

impl From<&str> for Key {
	fn from(value: &str) -> Self {
		Key::Name(value.to_owned())
	}
}

impl From<String> for Key {
	fn from(value: String) -> Self {
		Key::Name(value)
	}
}

impl From<&Key> for Key {
	fn from(value: &Key) -> Self {
		value.clone()
	}
}

/// Insertion-ordered mapping from [`Key`] to [`Value`] with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
	entries: Vec<(Key, Value)>,
}

impl Collection {
	/// Empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the collection has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Look up the value stored under `key`.
	pub fn get(&self, key: &Key) -> Option<&Value> {
		self.entries.iter().find(|(candidate, _)| candidate == key).map(|(_, value)| value)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &Key) -> bool {
		self.get(key).is_some()
	}

	/// First entry in insertion order.
	pub fn first(&self) -> Option<(&Key, &Value)> {
		self.entries.first().map(|(key, value)| (key, value))
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, (Key, Value)> {
		self.entries.iter()
	}

	/// Store `value` under `key`.
	///
	/// An existing key keeps its position and the previous value is returned.
	pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
		let key = key.into();
		let value = value.into();
		if let Some((_, slot)) = self.entries.iter_mut().find(|(candidate, _)| *candidate == key) {
			return Some(std::mem::replace(slot, value));
		}
		self.entries.push((key, value));
		None
	}

	/// Append `value` under the next integer index, one past the largest integer key.
	///
	/// Returns `None` and leaves the collection untouched when that index would overflow.
	pub fn push(&mut self, value: impl Into<Value>) -> Option<usize> {
		let largest = self
			.entries
			.iter()
			.filter_map(|(key, _)| match key {
				Key::Index(index) => Some(*index),
				Key::Name(_) => None,
			})
			.max();
		let next = match largest {
			Some(index) => index.checked_add(1)?,
			None => 0,
		};
		self.entries.push((Key::Index(next), value.into()));
		Some(next)
	}
}

impl<'a> IntoIterator for &'a Collection {
	type Item = &'a (Key, Value);
	type IntoIter = std::slice::Iter<'a, (Key, Value)>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl FromIterator<(Key, Value)> for Collection {
	fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
		let mut out = Collection::new();
		for (key, value) in iter {
			out.insert(key, value);
		}
		out
	}
}

impl FromIterator<Value> for Collection {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().enumerate().map(|(index, value)| (Key::Index(index), value)).collect(),
		}
	}
}

/// Numeric value returned by the int-or-float extractors, never coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
}

impl Number {
	/// Widen to `f64`.
	pub fn as_f64(self) -> f64 {
		match self {
			Number::Int(value) => value as f64,
			Number::Float(value) => value,
		}
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Int(value) => write!(f, "{value}"),
			Number::Float(value) => write!(f, "{value}"),
		}
	}
}
