use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file to operate on.
pub const CONFIG_ENV: &str = "DCOS_CONFIG";

/// Get the path to the user's default config file, `~/.dcos/dcos.toml`.
pub fn default_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".dcos").join("dcos.toml"))
}

/// Use the explicitly requested path if there is one, else the default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
	match explicit {
		Some(path) => Ok(path.to_path_buf()),
		None => default_config_path(),
	}
}
