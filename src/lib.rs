//! dcos-config - get and set DCOS CLI configuration properties.
//!
//! This library provides the core functionality for `dcos config`, including:
//! - Dotted property paths, typed values and the flat property document
//! - Show/Set/Append/Prepend/Unset/Validate operations with exact error messages
//! - Required-property schemas per namespace
//! - TOML persistence with atomic rewrites
//!
//! # Example
//!
//! ```no_run
//! use dcos_config::config::{load_document, resolve_config_path, save_document};
//! use dcos_config::engine::{CommandRegistry, PropertyEngine};
//! use dcos_config::property::PropertyPath;
//! use dcos_config::schema::SchemaValidator;
//!
//! let path = resolve_config_path(None).unwrap();
//! let mut document = load_document(&path).unwrap();
//! let engine = PropertyEngine::new(CommandRegistry::dcos(), SchemaValidator::builtin().unwrap());
//!
//! let host = PropertyPath::parse("marathon.host").unwrap();
//! engine.set(&mut document, &host, "localhost").unwrap();
//! println!("{}", engine.show(&document, Some(&host)).unwrap());
//! save_document(&path, &document).unwrap();
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod property;
pub mod schema;

pub use error::{ConfigError, Result};
