use crate::{Key, Value};

/// Truncation limits for diagnostic value descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeOptions {
	/// Maximum number of Unicode scalar values kept from strings and string keys.
	pub max_string_chars: usize,
}

impl Default for DescribeOptions {
	fn default() -> Self {
		Self { max_string_chars: 10 }
	}
}

/// Render `value` as a short diagnostic string using default options.
///
/// Collections only show their first entry and nested collections collapse to `[...]`:
///
/// ```
/// use extractor::{Collection, Value, describe};
///
/// let mut items = Collection::new();
/// items.insert("foo", 1234);
/// items.insert("bar", 5678);
/// assert_eq!(describe(&Value::from(items)), r#"array(["foo" => int(1234), ...], length=2)"#);
/// ```
pub fn describe(value: &Value) -> String {
	describe_with(value, DescribeOptions::default())
}

/// Render `value` as a short diagnostic string.
pub fn describe_with(value: &Value, options: DescribeOptions) -> String {
	match value {
		Value::Bool(true) => "bool(true)".to_owned(),
		Value::Bool(false) => "bool(false)".to_owned(),
		Value::Int(v) => format!("int({v})"),
		Value::Float(v) => format!("float({v})"),
		Value::String(v) => format!("string(\"{}\")", truncate(v, options.max_string_chars)),
		Value::Collection(items) => {
			let Some((key, first)) = items.first() else {
				return "array(length=0)".to_owned();
			};

			let item = match first {
				Value::Collection(_) => "[...]".to_owned(),
				other => describe_with(other, options),
			};
			let entry = match key {
				Key::Name(name) => format!("\"{}\" => {item}", truncate(name, options.max_string_chars)),
				Key::Index(_) => item,
			};

			if items.len() == 1 {
				format!("array([{entry}])")
			} else {
				format!("array([{entry}, ...], length={})", items.len())
			}
		}
		Value::Null => "unknown(???)".to_owned(),
	}
}

/// Render a collection key the way the same scalar value would be rendered.
pub fn describe_key(key: &Key, options: DescribeOptions) -> String {
	match key {
		Key::Index(index) => format!("int({index})"),
		Key::Name(name) => format!("string(\"{}\")", truncate(name, options.max_string_chars)),
	}
}

/// Keep the first `max_chars` Unicode scalars, marking any cut with `...`.
fn truncate(input: &str, max_chars: usize) -> String {
	match input.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}...", &input[..cut]),
		None => input.to_owned(),
	}
}

#[cfg(test)]
mod tests;
