use crate::{Collection, DescribeOptions, Key, Value, describe, describe_key, describe_with};

fn map(entries: Vec<(&str, Value)>) -> Value {
	Value::Collection(entries.into_iter().map(|(key, value)| (Key::from(key), value)).collect())
}

fn list(items: Vec<Value>) -> Value {
	Value::Collection(items.into_iter().collect())
}

#[test]
fn describes_scalars() {
	assert_eq!(describe(&Value::Bool(true)), "bool(true)");
	assert_eq!(describe(&Value::Bool(false)), "bool(false)");
	assert_eq!(describe(&Value::Int(42)), "int(42)");
	assert_eq!(describe(&Value::Int(-7)), "int(-7)");
	assert_eq!(describe(&Value::Float(47.11)), "float(47.11)");
	assert_eq!(describe(&Value::Float(1.0)), "float(1)");
	assert_eq!(describe(&Value::Null), "unknown(???)");
}

#[test]
fn truncates_strings_after_ten_chars() {
	assert_eq!(describe(&Value::from("foo")), "string(\"foo\")");
	assert_eq!(describe(&Value::from("0123456789")), "string(\"0123456789\")");
	assert_eq!(describe(&Value::from("0123456789a")), "string(\"0123456789...\")");
	assert_eq!(describe(&Value::from("waytoolongstring")), "string(\"waytoolong...\")");
}

#[test]
fn truncation_counts_unicode_scalars() {
	assert_eq!(describe(&Value::from("ääääääääää")), "string(\"ääääääääää\")");
	assert_eq!(describe(&Value::from("日本語日本語日本語日本")), "string(\"日本語日本語日本語日...\")");
}

#[test]
fn describes_lists_by_first_item() {
	assert_eq!(describe(&list(vec![])), "array(length=0)");
	assert_eq!(describe(&list(vec![Value::Int(1)])), "array([int(1)])");
	assert_eq!(describe(&list(vec![Value::from("two")])), "array([string(\"two\")])");
	assert_eq!(
		describe(&list(vec![Value::Int(1), Value::from("two"), Value::Null, Value::Bool(true)])),
		"array([int(1), ...], length=4)"
	);
}

#[test]
fn describes_maps_by_first_entry() {
	assert_eq!(describe(&map(vec![("foo", Value::Int(1234))])), "array([\"foo\" => int(1234)])");
	assert_eq!(
		describe(&map(vec![("foo", Value::Int(1234)), ("bar", Value::Int(5678))])),
		"array([\"foo\" => int(1234), ...], length=2)"
	);
	assert_eq!(describe(&map(vec![("waytoolongkey", Value::Int(1234))])), "array([\"waytoolong...\" => int(1234)])");
}

#[test]
fn nested_collections_collapse() {
	let deep = map(vec![("deeply", map(vec![("nested", map(vec![("foo", Value::Int(1234))]))]))]);
	assert_eq!(describe(&deep), "array([\"deeply\" => [...]])");

	let inner = list(vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]);
	assert_eq!(describe(&list(vec![inner])), "array([[...]])");
	assert_eq!(describe(&list(vec![list(vec![])])), "array([[...]])");
}

#[test]
fn mixed_keys_follow_the_first_key() {
	let mut items = Collection::new();
	items.insert(3_usize, "x");
	items.insert("name", "y");
	assert_eq!(describe(&Value::from(items)), "array([string(\"x\"), ...], length=2)");
}

#[test]
fn describes_keys() {
	let options = DescribeOptions::default();
	assert_eq!(describe_key(&Key::Index(0), options), "int(0)");
	assert_eq!(describe_key(&Key::from("foo"), options), "string(\"foo\")");
	assert_eq!(describe_key(&Key::from("waytoolongkey"), options), "string(\"waytoolong...\")");
}

#[test]
fn honours_custom_string_limit() {
	let options = DescribeOptions { max_string_chars: 3 };
	assert_eq!(describe_with(&Value::from("abcdef"), options), "string(\"abc...\")");
	assert_eq!(describe_with(&map(vec![("abcdef", Value::from("ghijkl"))]), options), "array([\"abc...\" => string(\"ghi...\")])");
}

#[test]
fn truncation_limit_of_zero_keeps_only_the_marker() {
	let options = DescribeOptions { max_string_chars: 0 };
	assert_eq!(describe_with(&Value::from("a"), options), "string(\"...\")");
	assert_eq!(describe_with(&Value::from(""), options), "string(\"\")");
}
