//! Required-property schemas.
//!
//! Each namespace may declare the properties it cannot work without, using
//! the `required` list of a JSON schema document. Validation stops at the
//! first missing property.

use crate::error::{ConfigError, Result};
use crate::property::{ConfigDocument, PropertyPath, Resolution};
use serde::Deserialize;

/// Schema of the `marathon` namespace.
pub const MARATHON_SCHEMA: &str = r#"{
	"$schema": "http://json-schema.org/schema#",
	"type": "object",
	"properties": {
		"host": { "type": "string", "description": "Marathon host name" },
		"port": { "type": "integer", "description": "Marathon port" }
	},
	"required": ["host"]
}"#;

#[derive(Debug, Deserialize)]
struct SchemaDocument {
	#[serde(default)]
	required: Vec<String>,
}

/// The required properties of one namespace, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
	pub namespace: PropertyPath,
	pub required: Vec<PropertyPath>,
}

impl Schema {
	pub fn new<I, S>(namespace: &str, required: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let required = required
			.into_iter()
			.map(|name| PropertyPath::parse(name.as_ref()))
			.collect::<Result<Vec<_>>>()?;

		Ok(Schema {
			namespace: PropertyPath::parse(namespace)?,
			required,
		})
	}

	/// Build a schema from a JSON schema document; only `required` is used.
	pub fn from_json_str(namespace: &str, content: &str) -> Result<Self> {
		let document: SchemaDocument =
			serde_json::from_str(content).map_err(|source| ConfigError::SchemaParseError {
				namespace: namespace.to_string(),
				source,
			})?;

		Schema::new(namespace, &document.required)
	}
}

/// Checks a document against an ordered set of schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
	schemas: Vec<Schema>,
}

impl SchemaValidator {
	pub fn new(schemas: Vec<Schema>) -> Self {
		SchemaValidator { schemas }
	}

	/// The schemas shipped with the `dcos` CLI.
	pub fn builtin() -> Result<Self> {
		Ok(Self::new(vec![Schema::from_json_str(
			"marathon",
			MARATHON_SCHEMA,
		)?]))
	}

	pub fn schemas(&self) -> &[Schema] {
		&self.schemas
	}

	/// Report the first required property that does not resolve to a value.
	pub fn validate(&self, document: &ConfigDocument) -> Result<()> {
		for schema in &self.schemas {
			for required in &schema.required {
				let full = schema.namespace.child(&required.key())?;
				match document.get(&full) {
					Resolution::Found(_) => {}
					Resolution::Ambiguous(_) | Resolution::NotFound => {
						return Err(ConfigError::SchemaViolation {
							property: required.key(),
						});
					}
				}
			}
		}
		Ok(())
	}
}
