//! Property operations for dcos-config.
//!
//! This module handles:
//! - Show, Set, Append, Prepend, Unset and Validate against a loaded document
//! - Namespace authorization for newly set properties
//!
//! Every operation either succeeds with the document ready to persist, or
//! fails without touching the document.

pub mod namespace;

pub use namespace::{CommandRegistry, NamespaceValidator};

use crate::error::{ConfigError, Result};
use crate::property::{ConfigDocument, PropertyPath, Resolution, TypedValue};
use crate::schema::SchemaValidator;

/// Which end of a list a new element goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListEnd {
	Head,
	Tail,
}

/// Runs property operations against a [`ConfigDocument`].
#[derive(Debug, Clone)]
pub struct PropertyEngine<N> {
	namespaces: N,
	schema: SchemaValidator,
}

impl<N: NamespaceValidator> PropertyEngine<N> {
	pub fn new(namespaces: N, schema: SchemaValidator) -> Self {
		PropertyEngine { namespaces, schema }
	}

	/// Render one property as JSON, or the whole document as `key=value` lines.
	pub fn show(&self, document: &ConfigDocument, path: Option<&PropertyPath>) -> Result<String> {
		let Some(path) = path else {
			let lines: Vec<String> = document
				.iter()
				.map(|(key, value)| format!("{}={}", key, value.render_compact()))
				.collect();
			return Ok(lines.join("\n"));
		};

		let value = resolve(document, path)?;
		Ok(value.render_machine())
	}

	/// Coerce `literal` and store it at `path`, replacing any previous value.
	pub fn set(
		&self,
		document: &mut ConfigDocument,
		path: &PropertyPath,
		literal: &str,
	) -> Result<()> {
		let segment = path.first_segment();
		if !self.namespaces.is_known_namespace(segment) {
			return Err(ConfigError::UnknownNamespace {
				segment: segment.to_string(),
			});
		}

		if let Resolution::Ambiguous(keys) = document.get(path) {
			return Err(ConfigError::AmbiguousProperty {
				path: path.key(),
				keys,
			});
		}

		if let Some(existing) = document.leaf_ancestor(path) {
			return Err(ConfigError::PropertyConflict {
				path: path.key(),
				existing,
			});
		}

		let value = TypedValue::coerce_from_literal(literal);
		tracing::debug!(property = %path, kind = value.kind(), "set property");
		document.set(path, value);
		Ok(())
	}

	/// Add `literal` to the end of the list at `path`.
	pub fn append(
		&self,
		document: &mut ConfigDocument,
		path: &PropertyPath,
		literal: &str,
	) -> Result<()> {
		self.insert_into_list(document, path, literal, ListEnd::Tail)
	}

	/// Add `literal` to the front of the list at `path`.
	pub fn prepend(
		&self,
		document: &mut ConfigDocument,
		path: &PropertyPath,
		literal: &str,
	) -> Result<()> {
		self.insert_into_list(document, path, literal, ListEnd::Head)
	}

	/// Remove the property at `path`, or a single list element when `index` is given.
	pub fn unset(
		&self,
		document: &mut ConfigDocument,
		path: &PropertyPath,
		index: Option<&str>,
	) -> Result<()> {
		let value = resolve(document, path)?;

		let Some(index) = index else {
			tracing::debug!(property = %path, "unset property");
			document.delete(path);
			return Ok(());
		};

		let index: usize = index.parse().map_err(|_| ConfigError::IndexParse {
			index: index.to_string(),
		})?;

		let Some(items) = value.as_list() else {
			return Err(ConfigError::UnsetIndexNotAList { path: path.key() });
		};

		if index >= items.len() {
			return Err(ConfigError::IndexOutOfBounds {
				index,
				min: 0,
				max: items.len() as i64 - 1,
			});
		}

		let mut items = items.to_vec();
		items.remove(index);
		tracing::debug!(property = %path, index, remaining = items.len(), "unset list element");
		document.set(path, TypedValue::List(items));
		Ok(())
	}

	/// Check the document against the configured schemas.
	pub fn validate(&self, document: &ConfigDocument) -> Result<()> {
		self.schema.validate(document)
	}

	fn insert_into_list(
		&self,
		document: &mut ConfigDocument,
		path: &PropertyPath,
		literal: &str,
		end: ListEnd,
	) -> Result<()> {
		let items = match document.get(path) {
			Resolution::Ambiguous(keys) => {
				return Err(ConfigError::AmbiguousProperty {
					path: path.key(),
					keys,
				});
			}
			Resolution::NotFound => {
				if let Some(existing) = document.leaf_ancestor(path) {
					return Err(ConfigError::PropertyConflict {
						path: path.key(),
						existing,
					});
				}
				Vec::new()
			}
			Resolution::Found(TypedValue::List(items)) => items.clone(),
			Resolution::Found(_) => {
				return Err(ConfigError::NotAList { path: path.key() });
			}
		};

		let mut items = items;
		match end {
			ListEnd::Head => items.insert(0, literal.to_string()),
			ListEnd::Tail => items.push(literal.to_string()),
		}
		tracing::debug!(property = %path, ?end, len = items.len(), "insert list element");
		document.set(path, TypedValue::List(items));
		Ok(())
	}
}

/// Resolve `path` to a leaf value, mapping the other outcomes to errors.
fn resolve<'a>(document: &'a ConfigDocument, path: &PropertyPath) -> Result<&'a TypedValue> {
	match document.get(path) {
		Resolution::Found(value) => {
			tracing::trace!(property = %path, kind = value.kind(), "resolved property");
			Ok(value)
		}
		Resolution::Ambiguous(keys) => Err(ConfigError::AmbiguousProperty {
			path: path.key(),
			keys,
		}),
		Resolution::NotFound => Err(ConfigError::MissingProperty { path: path.key() }),
	}
}
