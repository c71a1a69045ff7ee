use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Config;
use crate::{Error, Result};

/// Returns the config directory: `~/.config/curtain/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("curtain"))
}

/// Returns the config file path: `~/.config/curtain/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Picks an explicit path if given, otherwise the default location.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(config_path)
}

/// Loads the configuration, falling back to defaults.
///
/// A missing file (or no resolvable home directory) silently yields the
/// defaults. A file that exists but cannot be read or parsed is an
/// [`Error::Config`]. Values are not validated here; call
/// [`Config::validate`] afterwards.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = resolve_path(explicit) else {
        return Ok(Config::default());
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(Error::Config(format!("{}: {e}", path.display()))),
    };

    toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
}

/// Writes the commented default config to `path`, creating its directory.
///
/// Returns `Ok(false)` without touching the file when it already exists
/// and `force` is off.
pub fn write_template(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, super::template::generate_config())?;
    Ok(true)
}
