use crate::property::path::PropertyPath;
use crate::property::value::TypedValue;
use indexmap::IndexMap;

/// Outcome of looking up a property path in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
	/// The path names a leaf property.
	Found(T),

	/// The path is a prefix of one or more properties, listed in sorted order.
	Ambiguous(Vec<String>),

	/// Nothing is stored at or below the path.
	NotFound,
}

/// Flat mapping from fully-qualified dotted keys to values.
///
/// Insertion order is kept so that a full listing is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
	entries: IndexMap<String, TypedValue>,
}

impl ConfigDocument {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Resolve a path to its value, or to the keys it is a prefix of.
	pub fn get(&self, path: &PropertyPath) -> Resolution<&TypedValue> {
		let key = path.key();
		if let Some(value) = self.entries.get(&key) {
			return Resolution::Found(value);
		}

		let keys = self.keys_with_prefix(path);
		if keys.is_empty() {
			Resolution::NotFound
		} else {
			Resolution::Ambiguous(keys)
		}
	}

	/// Insert or overwrite the value at the exact key, keeping its position.
	pub fn set(&mut self, path: &PropertyPath, value: TypedValue) {
		self.entries.insert(path.key(), value);
	}

	/// Remove the value at the exact key; resolves like [`ConfigDocument::get`].
	pub fn delete(&mut self, path: &PropertyPath) -> Resolution<TypedValue> {
		let key = path.key();
		if let Some(value) = self.entries.shift_remove(&key) {
			return Resolution::Found(value);
		}

		let keys = self.keys_with_prefix(path);
		if keys.is_empty() {
			Resolution::NotFound
		} else {
			Resolution::Ambiguous(keys)
		}
	}

	/// All keys strictly below `path`, sorted lexicographically.
	pub fn keys_with_prefix(&self, path: &PropertyPath) -> Vec<String> {
		let prefix = format!("{}.", path.key());
		let mut keys: Vec<String> = self
			.entries
			.keys()
			.filter(|key| key.starts_with(&prefix))
			.cloned()
			.collect();
		keys.sort();
		keys
	}

	/// The first existing key that is a strict ancestor of `path`, if any.
	pub fn leaf_ancestor(&self, path: &PropertyPath) -> Option<String> {
		let segments = path.segments();
		(1..segments.len())
			.map(|n| segments[..n].join("."))
			.find(|key| self.entries.contains_key(key))
	}
}

impl FromIterator<(String, TypedValue)> for ConfigDocument {
	fn from_iter<I: IntoIterator<Item = (String, TypedValue)>>(iter: I) -> Self {
		ConfigDocument {
			entries: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn path(name: &str) -> PropertyPath {
		PropertyPath::parse(name).unwrap()
	}

	fn sample() -> ConfigDocument {
		let mut doc = ConfigDocument::new();
		doc.set(&path("marathon.port"), TypedValue::Integer(8080));
		doc.set(
			&path("marathon.host"),
			TypedValue::String("localhost".to_string()),
		);
		doc.set(&path("marathonx.other"), TypedValue::Boolean(true));
		doc
	}

	#[test]
	fn test_get_exact_match() {
		let doc = sample();
		assert_eq!(
			doc.get(&path("marathon.port")),
			Resolution::Found(&TypedValue::Integer(8080))
		);
	}

	#[test]
	fn test_get_prefix_is_ambiguous_and_sorted() {
		let doc = sample();
		assert_eq!(
			doc.get(&path("marathon")),
			Resolution::Ambiguous(vec![
				"marathon.host".to_string(),
				"marathon.port".to_string()
			])
		);
	}

	#[test]
	fn test_get_respects_segment_boundaries() {
		let doc = sample();
		assert_eq!(doc.get(&path("marathon.ho")), Resolution::NotFound);
		assert_eq!(doc.get(&path("missing.property")), Resolution::NotFound);
	}

	#[test]
	fn test_set_overwrites_in_place() {
		let mut doc = sample();
		doc.set(&path("marathon.port"), TypedValue::Integer(8181));
		let keys: Vec<&str> = doc.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["marathon.port", "marathon.host", "marathonx.other"]);
		assert_eq!(
			doc.get(&path("marathon.port")),
			Resolution::Found(&TypedValue::Integer(8181))
		);
	}

	#[test]
	fn test_delete_keeps_remaining_order() {
		let mut doc = sample();
		assert_eq!(
			doc.delete(&path("marathon.port")),
			Resolution::Found(TypedValue::Integer(8080))
		);
		let keys: Vec<&str> = doc.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["marathon.host", "marathonx.other"]);
	}

	#[test]
	fn test_delete_ambiguous_does_not_mutate() {
		let mut doc = sample();
		let before = doc.clone();
		assert!(matches!(
			doc.delete(&path("marathon")),
			Resolution::Ambiguous(_)
		));
		assert_eq!(doc.delete(&path("nope")), Resolution::NotFound);
		assert_eq!(doc, before);
	}

	#[test]
	fn test_leaf_ancestor() {
		let doc = sample();
		assert_eq!(
			doc.leaf_ancestor(&path("marathon.host.name")),
			Some("marathon.host".to_string())
		);
		assert_eq!(doc.leaf_ancestor(&path("marathon.user")), None);
		assert_eq!(doc.leaf_ancestor(&path("marathon")), None);
	}
}
