use std::path::PathBuf;

/// Library-level structured errors for dcos-config.
///
/// Property errors render the exact user-facing message on `Display`; the
/// binary prints them verbatim. The remaining variants come from the
/// persistence layer and are wrapped with `anyhow` context by the binary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Property '{name}' is not a valid property name")]
	InvalidPath { name: String },

	#[error("Property '{path}' doesn't exist")]
	MissingProperty { path: String },

	#[error(
		"Property '{path}' doesn't fully specify a value - possible properties are:\n{}",
		.keys.join("\n")
	)]
	AmbiguousProperty { path: String, keys: Vec<String> },

	#[error("Append/Prepend not supported on '{path}' properties - use 'dcos config set {path} new_uri'")]
	NotAList { path: String },

	#[error("Unsetting based on an index is only supported for lists")]
	UnsetIndexNotAList { path: String },

	#[error("Error parsing string as int")]
	IndexParse { index: String },

	#[error("Index ({index}) is out of bounds - possible values are between {min} and {max}")]
	IndexOutOfBounds { index: usize, min: usize, max: i64 },

	#[error("'{segment}' is not a dcos command.")]
	UnknownNamespace { segment: String },

	#[error(
		"Error: missing required property '{property}'. Add to JSON file and pass in /path/to/file with the --options argument."
	)]
	SchemaViolation { property: String },

	#[error("Property '{path}' conflicts with existing property '{existing}'")]
	PropertyConflict { path: String, existing: String },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to serialize config document")]
	ConfigSerializeError {
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to write config file: {path}")]
	ConfigWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Unsupported value for property '{key}': {kind}")]
	UnsupportedValue { key: String, kind: String },

	#[error("Invalid schema for namespace: {namespace}")]
	SchemaParseError {
		namespace: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

impl ConfigError {
	/// True for errors raised by property operations, whose message is the
	/// complete user-facing output.
	pub fn is_property_error(&self) -> bool {
		matches!(
			self,
			ConfigError::InvalidPath { .. }
				| ConfigError::MissingProperty { .. }
				| ConfigError::AmbiguousProperty { .. }
				| ConfigError::NotAList { .. }
				| ConfigError::UnsetIndexNotAList { .. }
				| ConfigError::IndexParse { .. }
				| ConfigError::IndexOutOfBounds { .. }
				| ConfigError::UnknownNamespace { .. }
				| ConfigError::SchemaViolation { .. }
				| ConfigError::PropertyConflict { .. }
		)
	}
}

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
