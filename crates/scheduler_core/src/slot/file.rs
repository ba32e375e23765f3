//! JSON file slot.
//!
//! # Invariants
//! - One slot key maps to `<dir>/<key>.json`.
//! - Writes land in a sibling temp file which is then renamed over the
//!   target, so readers never observe a half-written list.

use super::{EventSlot, SlotError, SlotResult};
use crate::config::normalize_slot_key;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const SLOT_FILE_EXTENSION: &str = "json";
const TEMP_FILE_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    key: String,
    path: PathBuf,
}

impl JsonFileSlot {
    /// Creates a slot stored under `dir`.
    ///
    /// # Errors
    /// - `Malformed` when `key` is empty or contains path separators.
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> SlotResult<Self> {
        let key = validate_key(&key.into())?;
        let path = dir.as_ref().join(format!("{key}.{SLOT_FILE_EXTENSION}"));
        Ok(Self { key, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension(format!("{SLOT_FILE_EXTENSION}.{TEMP_FILE_SUFFIX}"))
    }
}

impl EventSlot for JsonFileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read_raw(&self) -> SlotResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                Err(SlotError::Malformed(format!("slot file is not UTF-8: {err}")))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write_raw(&self, value: &str) -> SlotResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.temp_path();
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// Returns the trimmed key, rejecting blank and path-like keys.
pub(crate) fn validate_key(key: &str) -> SlotResult<String> {
    normalize_slot_key(key).map_err(SlotError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::validate_key;

    #[test]
    fn validate_key_rejects_path_components() {
        assert_eq!(validate_key(" events ").unwrap(), "events");
        assert!(validate_key("").is_err());
        assert!(validate_key("../events").is_err());
        assert!(validate_key("a\\b").is_err());
        assert!(validate_key("..").is_err());
    }
}
