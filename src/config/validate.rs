// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{BoardFile, KeyboardSection, RawBoardFile};
use crate::errors::{BoardError, Result};
use crate::sensor::{Key, KeyBindings};

impl TryFrom<RawBoardFile> for BoardFile {
    type Error = crate::errors::BoardError;

    fn try_from(raw: RawBoardFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let keys = parse_key_bindings(&raw.keyboard)?;
        Ok(BoardFile::new_unchecked(raw, keys))
    }
}

fn validate_raw_config(cfg: &RawBoardFile) -> Result<()> {
    ensure_has_columns(cfg)?;
    validate_sensor(cfg)?;
    validate_layout(cfg)?;
    validate_columns(cfg)?;
    validate_tasks(cfg)?;
    Ok(())
}

fn ensure_has_columns(cfg: &RawBoardFile) -> Result<()> {
    if cfg.column.is_empty() {
        return Err(BoardError::ConfigError(
            "config must contain at least one [[column]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_sensor(cfg: &RawBoardFile) -> Result<()> {
    let s = &cfg.sensor;
    let checks = [
        ("activation_distance", s.activation_distance),
        ("touch_tolerance", s.touch_tolerance),
        ("collision_padding", s.collision_padding),
    ];
    for (name, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(BoardError::ConfigError(format!(
                "[sensor].{name} must be a finite number >= 0 (got {value})"
            )));
        }
    }
    Ok(())
}

fn validate_layout(cfg: &RawBoardFile) -> Result<()> {
    let l = &cfg.layout;
    if l.column_width <= 0.0 || l.card_height <= 0.0 {
        return Err(BoardError::ConfigError(format!(
            "[layout] column_width and card_height must be > 0 (got {} and {})",
            l.column_width, l.card_height
        )));
    }
    Ok(())
}

fn validate_columns(cfg: &RawBoardFile) -> Result<()> {
    let mut ids = HashSet::new();
    let mut ordinals = HashSet::new();

    for column in &cfg.column {
        if column.id.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "column id must not be empty".to_string(),
            ));
        }
        if !ids.insert(column.id.as_str()) {
            return Err(BoardError::ConfigError(format!(
                "duplicate column id '{}'",
                column.id
            )));
        }
        if !ordinals.insert(column.ordinal) {
            return Err(BoardError::ConfigError(format!(
                "column '{}' reuses ordinal {}",
                column.id, column.ordinal
            )));
        }
    }
    Ok(())
}

fn validate_tasks(cfg: &RawBoardFile) -> Result<()> {
    let columns: HashSet<&str> = cfg.column.iter().map(|c| c.id.as_str()).collect();
    let mut ids = HashSet::new();

    for task in &cfg.task {
        if !columns.contains(task.column.as_str()) {
            return Err(BoardError::ConfigError(format!(
                "task '{}' is in unknown column '{}'",
                task.id, task.column
            )));
        }
        if !ids.insert(task.id.as_str()) {
            return Err(BoardError::ConfigError(format!(
                "duplicate task id '{}'",
                task.id
            )));
        }
    }
    Ok(())
}

fn parse_key_bindings(section: &KeyboardSection) -> Result<KeyBindings> {
    let keys = KeyBindings {
        pick_up: parse_keys("pick_up", &section.pick_up)?,
        drop: parse_keys("drop", &section.drop)?,
        cancel: parse_keys("cancel", &section.cancel)?,
    };
    validate_key_bindings(&keys)?;
    Ok(keys)
}

fn parse_keys(field: &str, names: &[String]) -> Result<Vec<Key>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Key>()
                .map_err(|e| BoardError::ConfigError(format!("[keyboard].{field}: {e}")))
        })
        .collect()
}

fn validate_key_bindings(keys: &KeyBindings) -> Result<()> {
    for (field, list) in [
        ("pick_up", &keys.pick_up),
        ("drop", &keys.drop),
        ("cancel", &keys.cancel),
    ] {
        if list.is_empty() {
            return Err(BoardError::ConfigError(format!(
                "[keyboard].{field} must bind at least one key"
            )));
        }
    }

    if let Some(key) = keys.drop.iter().find(|k| keys.cancel.contains(k)) {
        return Err(BoardError::ConfigError(format!(
            "key '{key}' is bound to both drop and cancel"
        )));
    }
    Ok(())
}
