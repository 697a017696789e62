//! Per-user fitted-model file cache
//!
//! One JSON file per user under a cache directory. Purely a short-lived
//! cache: a model is reused whenever its file parses, never checked for
//! staleness against new records, and concurrent writers are
//! last-writer-wins. An unreadable or corrupt file is treated as a miss
//! and overwritten on the next retrain.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::regression::LinearModel;

pub struct ModelCache {
    dir: PathBuf,
}

impl ModelCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load a previously fitted model for this user, if one exists
    ///
    /// Any failure (missing file, bad JSON) is a cache miss.
    pub fn load(&self, user_id: &str) -> Option<LinearModel> {
        let path = self.path_for(user_id);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(_) => return None,
        };
        match serde_json::from_slice(&raw) {
            Ok(model) => {
                debug!(user_id, path = %path.display(), "loaded cached model");
                Some(model)
            }
            Err(e) => {
                debug!(user_id, error = %e, "cached model unreadable, treating as miss");
                None
            }
        }
    }

    /// Persist a fitted model for this user, overwriting any previous one
    pub fn store(&self, user_id: &str, model: &LinearModel) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(user_id);
        fs::write(&path, serde_json::to_vec(model)?)?;
        debug!(user_id, path = %path.display(), "stored fitted model");
        Ok(())
    }

    /// File path for a user's model, with the user id sanitized so it
    /// cannot escape the cache directory
    fn path_for(&self, user_id: &str) -> PathBuf {
        let safe: String = user_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("model_{}.json", safe))
    }
}
