//! Session-scoped memo for the loaded dataset.
//!
//! The cache is keyed by the data directory's canonical path and holds at
//! most one snapshot. It never re-reads files behind the caller's back;
//! `invalidate` is the only way to force a reload within a session.

use pulse_core::types::Dataset;
use pulse_core::PulseResult;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::loader;

#[derive(Default)]
pub struct DatasetCache {
    entry: Option<(PathBuf, Arc<Dataset>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `dir`, loading it on first access and on any
    /// change of directory, otherwise serving the memoized snapshot.
    pub fn load(&mut self, dir: &Path) -> PulseResult<Arc<Dataset>> {
        let key = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        if let Some((cached_key, dataset)) = &self.entry {
            if *cached_key == key {
                debug!(dir = %key.display(), "Dataset cache hit");
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(loader::load_dataset(dir)?);
        debug!(
            dir = %key.display(),
            facts = dataset.facts.len(),
            "Dataset loaded and cached"
        );
        self.entry = Some((key, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Drop the memoized snapshot; the next `load` re-reads from disk.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
