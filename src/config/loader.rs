// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{BoardFile, RawBoardFile};
use crate::config::script::ScriptFile;
use crate::errors::Result;

/// Load a board file from a given path and return the raw `RawBoardFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawBoardFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawBoardFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a board file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for duplicate ids and ordinals, tasks in unknown columns,
///   negative thresholds and conflicting key bindings.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<BoardFile> {
    let raw_config = load_from_path(&path)?;
    let config = BoardFile::try_from(raw_config)?;
    Ok(config)
}

/// Load a replay script (`[[event]]` entries).
pub fn load_script(path: impl AsRef<Path>) -> Result<ScriptFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let script: ScriptFile = toml::from_str(&contents)?;
    Ok(script)
}

/// `Taskboard.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Taskboard.toml")
}
