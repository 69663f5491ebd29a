use serde_json::Value as JsonValue;

/// A property value as stored in the config document.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
	String(String),
	Integer(i64),
	Float(f64),
	Boolean(bool),
	List(Vec<String>),
}

impl TypedValue {
	/// Infer a typed value from a command-line literal.
	///
	/// Precedence is fixed: JSON array of strings, then `true`/`false`
	/// (any case), then integer, then float, and finally the literal itself
	/// as a string.
	pub fn coerce_from_literal(literal: &str) -> Self {
		if let Ok(items) = serde_json::from_str::<Vec<String>>(literal) {
			return TypedValue::List(items);
		}

		if literal.eq_ignore_ascii_case("true") {
			return TypedValue::Boolean(true);
		}
		if literal.eq_ignore_ascii_case("false") {
			return TypedValue::Boolean(false);
		}

		if let Some(value) = parse_integer(literal) {
			return TypedValue::Integer(value);
		}

		if let Some(value) = parse_float(literal) {
			return TypedValue::Float(value);
		}

		TypedValue::String(literal.to_string())
	}

	/// Short type name used in log events and error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			TypedValue::String(_) => "string",
			TypedValue::Integer(_) => "integer",
			TypedValue::Float(_) => "float",
			TypedValue::Boolean(_) => "boolean",
			TypedValue::List(_) => "list",
		}
	}

	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			TypedValue::List(items) => Some(items),
			_ => None,
		}
	}

	/// Render for the full `key=value` listing.
	///
	/// Booleans are `True`/`False` and lists use single-quoted elements, e.g.
	/// `['a', 'b']`. This form is not JSON.
	pub fn render_compact(&self) -> String {
		match self {
			TypedValue::String(s) => s.clone(),
			TypedValue::Integer(i) => i.to_string(),
			TypedValue::Float(f) => format!("{f:?}"),
			TypedValue::Boolean(true) => "True".to_string(),
			TypedValue::Boolean(false) => "False".to_string(),
			TypedValue::List(items) => {
				let quoted: Vec<String> = items.iter().map(|item| quote_single(item)).collect();
				format!("[{}]", quoted.join(", "))
			}
		}
	}

	/// Render a single resolved value as valid JSON.
	pub fn render_machine(&self) -> String {
		match self {
			TypedValue::String(s) => JsonValue::from(s.as_str()).to_string(),
			TypedValue::Integer(i) => i.to_string(),
			TypedValue::Float(f) => JsonValue::from(*f).to_string(),
			TypedValue::Boolean(b) => b.to_string(),
			TypedValue::List(items) => JsonValue::from(items.clone()).to_string(),
		}
	}
}

fn parse_integer(literal: &str) -> Option<i64> {
	let digits = literal.strip_prefix('-').unwrap_or(literal);
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	literal.parse().ok()
}

fn parse_float(literal: &str) -> Option<f64> {
	if literal.starts_with('+') || !literal.bytes().any(|b| b.is_ascii_digit()) {
		return None;
	}
	if !literal
		.bytes()
		.all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
	{
		return None;
	}
	literal.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn quote_single(item: &str) -> String {
	let escaped = item.replace('\\', "\\\\").replace('\'', "\\'");
	format!("'{escaped}'")
}
