// src/config/mod.rs

//! Configuration loading and validation for taskboard.
//!
//! Responsibilities:
//! - Define the TOML-backed board model (`model.rs`).
//! - Define the replay script format (`script.rs`).
//! - Load files from disk (`loader.rs`).
//! - Validate board invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod script;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_script};
pub use model::{BoardFile, ColumnConfig, KeyboardSection, RawBoardFile, TaskConfig};
pub use script::{ScriptEvent, ScriptFile};
