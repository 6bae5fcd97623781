//! JSON-file-backed gateway.
//!
//! Each slot maps to one `<slot>.json` file under the data directory, so a
//! repository's whole persisted state is two human-readable files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizrank_core::traits::StorageGateway;

/// A gateway storing each slot as a JSON file under a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl StorageGateway for JsonFileStore {
    fn load(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let payload = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read slot file: {}", path.display()))?;
        Ok(Some(payload))
    }

    fn save(&self, slot: &str, payload: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create data dir: {}", self.dir.display()))?;
        let path = self.slot_path(slot);
        std::fs::write(&path, payload)
            .with_context(|| format!("failed to write slot file: {}", path.display()))?;
        Ok(())
    }
}
