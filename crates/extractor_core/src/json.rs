use serde_json::{Map, Number as JsonNumber};
use thiserror::Error;

use crate::{Collection, Key, Value};

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(flag) => Value::Bool(flag),
			serde_json::Value::Number(number) => match number.as_i64() {
				Some(int) => Value::Int(int),
				None => number.as_f64().map_or(Value::Null, Value::Float),
			},
			serde_json::Value::String(text) => Value::String(text),
			serde_json::Value::Array(items) => Value::Collection(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(fields) => Value::Collection(fields.into_iter().map(|(name, item)| (Key::Name(name), Value::from(item))).collect()),
		}
	}
}

/// Collection keys that stringify to the same JSON object key, e.g. `1` and `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert to JSON: integer and string keys both map to object key {key:?}")]
pub struct JsonKeyCollision {
	/// Shared object key.
	pub key: String,
}

impl TryFrom<&Value> for serde_json::Value {
	type Error = JsonKeyCollision;

	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		Ok(match value {
			Value::Null => serde_json::Value::Null,
			Value::Bool(flag) => serde_json::Value::Bool(*flag),
			Value::Int(int) => serde_json::Value::from(*int),
			Value::Float(float) => JsonNumber::from_f64(*float).map_or(serde_json::Value::Null, serde_json::Value::Number),
			Value::String(text) => serde_json::Value::String(text.clone()),
			Value::Collection(items) => serde_json::Value::try_from(items)?,
		})
	}
}

impl TryFrom<&Collection> for serde_json::Value {
	type Error = JsonKeyCollision;

	/// Collections keyed exactly `0..n` in order become arrays, anything else an object.
	fn try_from(items: &Collection) -> Result<Self, Self::Error> {
		let is_list = items.iter().enumerate().all(|(idx, (key, _))| *key == Key::Index(idx));
		if is_list {
			let values = items.iter().map(|(_, item)| serde_json::Value::try_from(item)).collect::<Result<Vec<_>, _>>()?;
			return Ok(serde_json::Value::Array(values));
		}

		let mut fields = Map::with_capacity(items.len());
		for (key, item) in items {
			let name = key.to_string();
			if fields.contains_key(&name) {
				return Err(JsonKeyCollision { key: name });
			}
			fields.insert(name, serde_json::Value::try_from(item)?);
		}
		Ok(serde_json::Value::Object(fields))
	}
}
