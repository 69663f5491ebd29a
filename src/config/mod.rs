//! Config file persistence for dcos-config.
//!
//! This module handles:
//! - Config file path resolution
//! - TOML parsing and flattening into dotted keys
//! - Atomic rewrites of the config file

pub mod location;
pub mod store;

pub use location::{CONFIG_ENV, default_config_path, resolve_config_path};
pub use store::{load_document, parse_document_str, render_document, save_document};
