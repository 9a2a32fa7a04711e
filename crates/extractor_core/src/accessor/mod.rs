use crate::describe::{DescribeOptions, describe_key, describe_with};
use crate::{Collection, ExtractionError, Key, Number, Path, Result, Role, Value};

static NULL: Value = Value::Null;

/// Read-only, path-tracking handle on one node of a value tree.
///
/// Navigation returns new accessors and never changes the receiver. Every failed read
/// reports the path up to the first null ancestor, so lookups below a missing branch
/// are not blamed on data that was never there.
///
/// ```
/// use extractor::{Accessor, Collection, Value};
///
/// let mut deep = Collection::new();
/// deep.insert("path", "1234");
/// let mut some = Collection::new();
/// some.insert("deep", deep);
/// let mut root = Collection::new();
/// root.insert("some", some);
///
/// let tree = Value::from(root);
/// let value = Accessor::root(&tree).get("some")?.get("deep")?.get("path")?.string()?;
/// assert_eq!(value, "1234");
/// # Ok::<(), extractor::ExtractionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Accessor<'a> {
	node: Node<'a>,
	path: Path,
	reported_len: usize,
	role: Role,
}

/// Key accessors borrow the key from the collection entry instead of a tree value.
#[derive(Debug, Clone, Copy)]
enum Node<'a> {
	Value(&'a Value),
	Key(&'a Key),
}

impl<'a> Node<'a> {
	fn is_null(self) -> bool {
		matches!(self, Node::Value(Value::Null))
	}

	fn as_bool(self) -> Option<bool> {
		match self {
			Node::Value(Value::Bool(value)) => Some(*value),
			_ => None,
		}
	}

	fn as_int(self) -> Option<i64> {
		match self {
			Node::Value(Value::Int(value)) => Some(*value),
			Node::Key(Key::Index(index)) => i64::try_from(*index).ok(),
			_ => None,
		}
	}

	fn as_float(self) -> Option<f64> {
		match self {
			Node::Value(Value::Float(value)) => Some(*value),
			_ => None,
		}
	}

	fn as_number(self) -> Option<Number> {
		match self {
			Node::Value(Value::Float(value)) => Some(Number::Float(*value)),
			other => other.as_int().map(Number::Int),
		}
	}

	fn as_str(self) -> Option<&'a str> {
		match self {
			Node::Value(Value::String(value)) => Some(value),
			Node::Key(Key::Name(name)) => Some(name),
			_ => None,
		}
	}

	fn as_collection(self) -> Option<&'a Collection> {
		match self {
			Node::Value(Value::Collection(items)) => Some(items),
			_ => None,
		}
	}

	fn describe(self, options: DescribeOptions) -> String {
		match self {
			Node::Value(value) => describe_with(value, options),
			Node::Key(key) => describe_key(key, options),
		}
	}
}

impl<'a> Accessor<'a> {
	/// Accessor over the root of `value`.
	pub fn root(value: &'a Value) -> Self {
		Self {
			node: Node::Value(value),
			path: Path::root(),
			reported_len: 0,
			role: Role::Value,
		}
	}

	fn for_key(&self, key: &'a Key) -> Self {
		let path = self.path.child(key.clone());
		Self {
			node: Node::Key(key),
			reported_len: path.len(),
			path,
			role: Role::Key,
		}
	}

	fn for_entry(&self, key: Key, value: &'a Value) -> Self {
		let path = self.path.child(key);
		Self {
			node: Node::Value(value),
			reported_len: path.len(),
			path,
			role: Role::Value,
		}
	}

	/// Full access path from the root, including segments below a null ancestor.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Whether this node is null or was never present.
	pub fn is_null(&self) -> bool {
		self.node.is_null()
	}

	/// Diagnostic description of this node, as used in error messages.
	pub fn describe(&self) -> String {
		self.node.describe(DescribeOptions::default())
	}

	/// Diagnostic description of this node with explicit truncation limits.
	pub fn describe_with(&self, options: DescribeOptions) -> String {
		self.node.describe(options)
	}

	fn reported_path(&self) -> Path {
		self.path.prefix(self.reported_len)
	}

	fn mismatch(&self, expected: &'static str) -> ExtractionError {
		ExtractionError::type_mismatch(self.reported_path(), self.role, expected, self.describe())
	}

	fn required<T>(&self, expected: &'static str, pick: impl FnOnce(Node<'a>) -> Option<T>) -> Result<T> {
		if self.node.is_null() {
			return Err(ExtractionError::missing_value(self.reported_path()));
		}
		pick(self.node).ok_or_else(|| self.mismatch(expected))
	}

	fn optional<T>(&self, expected: &'static str, pick: impl FnOnce(Node<'a>) -> Option<T>) -> Result<Option<T>> {
		if self.node.is_null() {
			return Ok(None);
		}
		pick(self.node).map(Some).ok_or_else(|| self.mismatch(expected))
	}

	/// Required boolean.
	pub fn bool(&self) -> Result<bool> {
		self.required("bool", Node::as_bool)
	}

	/// Boolean or null.
	pub fn bool_or_null(&self) -> Result<Option<bool>> {
		self.optional("bool or null", Node::as_bool)
	}

	/// Required integer.
	pub fn int(&self) -> Result<i64> {
		self.required("int", Node::as_int)
	}

	/// Integer or null.
	pub fn int_or_null(&self) -> Result<Option<i64>> {
		self.optional("int or null", Node::as_int)
	}

	/// Required float. Integers are rejected.
	pub fn float(&self) -> Result<f64> {
		self.required("float", Node::as_float)
	}

	/// Float or null. Integers are rejected.
	pub fn float_or_null(&self) -> Result<Option<f64>> {
		self.optional("float or null", Node::as_float)
	}

	/// Required integer or float, returned as stored.
	pub fn number(&self) -> Result<Number> {
		self.required("int or float", Node::as_number)
	}

	/// Integer, float, or null, returned as stored.
	pub fn number_or_null(&self) -> Result<Option<Number>> {
		self.optional("int or float or null", Node::as_number)
	}

	/// Required string.
	pub fn string(&self) -> Result<&'a str> {
		self.required("string", Node::as_str)
	}

	/// String or null.
	pub fn string_or_null(&self) -> Result<Option<&'a str>> {
		self.optional("string or null", Node::as_str)
	}

	/// Required collection.
	pub fn collection(&self) -> Result<&'a Collection> {
		self.required("array", Node::as_collection)
	}

	/// Collection or null.
	pub fn collection_or_null(&self) -> Result<Option<&'a Collection>> {
		self.optional("array or null", Node::as_collection)
	}

	/// Navigate to `key`.
	///
	/// Below a null node this always succeeds with another null node whose reported
	/// path stays at that ancestor. An absent key yields a null node. Fails when the
	/// current node is neither null nor a collection.
	pub fn get(&self, key: impl Into<Key>) -> Result<Accessor<'a>> {
		let key = key.into();
		if self.node.is_null() {
			tracing::trace!(path = %self.path, key = %key, "navigating below null");
			return Ok(Self {
				node: Node::Value(&NULL),
				path: self.path.child(key),
				reported_len: self.reported_len,
				role: Role::Value,
			});
		}

		let items = self.collection()?;
		let value = items.get(&key).unwrap_or_else(|| {
			tracing::trace!(path = %self.path, key = %key, "key absent");
			&NULL
		});
		Ok(self.for_entry(key, value))
	}

	/// Navigate along every segment of `path`.
	pub fn walk(&self, path: &Path) -> Result<Accessor<'a>> {
		path.segments().iter().try_fold(self.clone(), |current, key| current.get(key))
	}

	/// Iterate `(key, value)` accessor pairs in insertion order.
	///
	/// A null node yields nothing. Fails when the node is neither null nor a collection.
	/// Each call starts a fresh iteration.
	pub fn entries(&self) -> Result<Entries<'a>> {
		let items: &'a [(Key, Value)] = if self.node.is_null() { &[] } else { self.collection()?.iter().as_slice() };
		Ok(Entries {
			parent: self.clone(),
			items: items.iter(),
		})
	}
}

/// Lazy iterator over the entries of a collection node.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
	parent: Accessor<'a>,
	items: std::slice::Iter<'a, (Key, Value)>,
}

impl<'a> Iterator for Entries<'a> {
	type Item = (Accessor<'a>, Accessor<'a>);

	fn next(&mut self) -> Option<Self::Item> {
		let (key, value) = self.items.next()?;
		Some((self.parent.for_key(key), self.parent.for_entry(key.clone(), value)))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.items.size_hint()
	}
}

impl ExactSizeIterator for Entries<'_> {}
