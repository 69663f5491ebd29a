use crate::error::{ConfigError, Result};
use crate::property::{ConfigDocument, TypedValue};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use toml::{Table, Value};

/// Load a config document from the given path.
///
/// A missing file loads as an empty document.
pub fn load_document(path: &Path) -> Result<ConfigDocument> {
	let content = match std::fs::read_to_string(path) {
		Ok(content) => content,
		Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
			tracing::debug!(path = %path.display(), "config file not found, starting empty");
			return Ok(ConfigDocument::new());
		}
		Err(source) => {
			return Err(ConfigError::ConfigReadError {
				path: path.to_path_buf(),
				source,
			});
		}
	};

	let document = parse_document_str(&content, path)?;
	tracing::debug!(path = %path.display(), properties = document.len(), "loaded config");
	Ok(document)
}

/// Parse a config document from a TOML string (useful for testing).
///
/// Nested tables are flattened into dotted keys in document order.
pub fn parse_document_str(content: &str, path: &Path) -> Result<ConfigDocument> {
	let table: Table = toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})?;

	let mut entries = Vec::new();
	flatten_table(None, &table, &mut entries)?;
	Ok(entries.into_iter().collect())
}

fn flatten_table(
	prefix: Option<&str>,
	table: &Table,
	entries: &mut Vec<(String, TypedValue)>,
) -> Result<()> {
	for (name, value) in table {
		let key = match prefix {
			Some(prefix) => format!("{prefix}.{name}"),
			None => name.clone(),
		};

		if name.is_empty() || name.contains('.') {
			return Err(ConfigError::UnsupportedValue {
				key,
				kind: "key that is empty or contains '.'".to_string(),
			});
		}

		let typed = match value {
			Value::Table(nested) => {
				flatten_table(Some(key.as_str()), nested, entries)?;
				continue;
			}
			Value::String(s) => TypedValue::String(s.clone()),
			Value::Integer(i) => TypedValue::Integer(*i),
			Value::Float(f) if !f.is_finite() => {
				return Err(ConfigError::UnsupportedValue {
					key,
					kind: "non-finite float".to_string(),
				});
			}
			Value::Float(f) => TypedValue::Float(*f),
			Value::Boolean(b) => TypedValue::Boolean(*b),
			Value::Array(items) => TypedValue::List(string_items(&key, items)?),
			Value::Datetime(_) => {
				return Err(ConfigError::UnsupportedValue {
					key,
					kind: "datetime".to_string(),
				});
			}
		};
		entries.push((key, typed));
	}
	Ok(())
}

fn string_items(key: &str, items: &[Value]) -> Result<Vec<String>> {
	items
		.iter()
		.map(|item| match item {
			Value::String(s) => Ok(s.clone()),
			other => Err(ConfigError::UnsupportedValue {
				key: key.to_string(),
				kind: format!("array containing {}", other.type_str()),
			}),
		})
		.collect()
}

/// Render a document back to TOML, nesting dotted keys into tables.
pub fn render_document(document: &ConfigDocument) -> Result<String> {
	let mut root = Table::new();
	for (key, value) in document.iter() {
		let segments: Vec<&str> = key.split('.').collect();
		insert_nested(&mut root, key, &segments, to_toml(value))?;
	}

	toml::to_string(&root).map_err(|source| ConfigError::ConfigSerializeError { source })
}

fn insert_nested(root: &mut Table, key: &str, segments: &[&str], value: Value) -> Result<()> {
	let Some((last, parents)) = segments.split_last() else {
		return Ok(());
	};

	let mut table = root;
	for (depth, segment) in parents.iter().enumerate() {
		let entry = table
			.entry(segment.to_string())
			.or_insert(Value::Table(Table::new()));
		table = match entry {
			Value::Table(nested) => nested,
			_ => {
				return Err(ConfigError::PropertyConflict {
					path: key.to_string(),
					existing: segments[..=depth].join("."),
				});
			}
		};
	}

	if table.contains_key(*last) {
		return Err(ConfigError::PropertyConflict {
			path: key.to_string(),
			existing: key.to_string(),
		});
	}
	table.insert(last.to_string(), value);
	Ok(())
}

fn to_toml(value: &TypedValue) -> Value {
	match value {
		TypedValue::String(s) => Value::String(s.clone()),
		TypedValue::Integer(i) => Value::Integer(*i),
		TypedValue::Float(f) => Value::Float(*f),
		TypedValue::Boolean(b) => Value::Boolean(*b),
		TypedValue::List(items) => {
			Value::Array(items.iter().cloned().map(Value::String).collect())
		}
	}
}

/// Persist a document, atomically replacing the file at `path`.
///
/// The content is written to a temporary file in the same directory and
/// renamed over the target, so readers see either the old or the new file.
pub fn save_document(path: &Path, document: &ConfigDocument) -> Result<()> {
	let content = render_document(document)?;

	let dir = match path.parent() {
		Some(dir) if !dir.as_os_str().is_empty() => dir,
		_ => Path::new("."),
	};
	std::fs::create_dir_all(dir).map_err(|source| ConfigError::ConfigWriteError {
		path: dir.to_path_buf(),
		source,
	})?;

	let write_error = |source| ConfigError::ConfigWriteError {
		path: path.to_path_buf(),
		source,
	};

	let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
	// Temp files are created 0600; keep the mode of the file being replaced.
	if let Ok(metadata) = std::fs::metadata(path) {
		file.as_file()
			.set_permissions(metadata.permissions())
			.map_err(write_error)?;
	}
	file.write_all(content.as_bytes()).map_err(write_error)?;
	file.as_file().sync_all().map_err(write_error)?;
	file.persist(path).map_err(|e| write_error(e.error))?;

	tracing::debug!(path = %path.display(), properties = document.len(), "saved config");
	Ok(())
}
