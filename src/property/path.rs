use crate::error::{ConfigError, Result};
use std::fmt;

/// A dotted property name such as `marathon.host`, split into its segments.
///
/// Segments are never empty and compare case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
	segments: Vec<String>,
}

impl PropertyPath {
	/// Parse a dotted property name.
	pub fn parse(name: &str) -> Result<Self> {
		let segments: Vec<String> = name.split('.').map(str::to_string).collect();

		if segments.iter().any(String::is_empty) {
			return Err(ConfigError::InvalidPath {
				name: name.to_string(),
			});
		}

		Ok(PropertyPath { segments })
	}

	/// The namespace segment, e.g. `marathon` for `marathon.host`.
	pub fn first_segment(&self) -> &str {
		&self.segments[0]
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// The fully-qualified dotted key.
	pub fn key(&self) -> String {
		self.segments.join(".")
	}

	/// Join this path with a relative dotted name.
	pub fn child(&self, name: &str) -> Result<Self> {
		let rest = PropertyPath::parse(name)?;
		let mut segments = self.segments.clone();
		segments.extend(rest.segments);
		Ok(PropertyPath { segments })
	}
}

impl fmt::Display for PropertyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.segments.join("."))
	}
}
