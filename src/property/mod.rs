//! Property model for dcos-config.
//!
//! This module handles:
//! - Dotted property name parsing
//! - Typed values with literal coercion and the two output renderers
//! - The flat, order-preserving property document with prefix-aware lookup

pub mod document;
pub mod path;
pub mod value;

pub use document::{ConfigDocument, Resolution};
pub use path::PropertyPath;
pub use value::TypedValue;
