//! Replacement service
//!
//! Builds the effective mapping from flag pairs and an optional JSON mapping
//! file, then applies it to input text.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{ApplyOrder, Mapping};
use crate::infrastructure::traits::FileSystem;

/// Everything needed to build and apply one mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceRequest {
    /// Search strings from `--map`, in command line order
    pub mappings: Vec<String>,
    /// Replacement strings from `--to`, paired with `mappings` by position
    pub replacements: Vec<String>,
    /// JSON mapping file, merged over the flag pairs
    pub mapfile: Option<PathBuf>,
    /// Order in which pairs are applied
    pub order: ApplyOrder,
}

/// Service for building mappings and applying them to text.
pub struct ReplaceService {
    fs: Arc<dyn FileSystem>,
}

impl ReplaceService {
    /// Create a new replace service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load a mapping from a JSON file holding a flat object of strings.
    ///
    /// The file is read completely and released before decoding.
    #[instrument(level = "debug", skip(self))]
    pub fn load_mapfile(&self, path: &Path) -> ApplicationResult<Mapping> {
        let content = self.fs.read_to_string(path).with_path_context(path)?;
        let mapping: Mapping =
            serde_json::from_str(&content).map_err(|source| ApplicationError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("load_mapfile: {} pairs from {}", mapping.len(), path.display());
        Ok(mapping)
    }

    /// Build the effective mapping: flag pairs, overridden by the mapping file.
    pub fn build_mapping(&self, request: &ReplaceRequest) -> ApplicationResult<Mapping> {
        let mut mapping = Mapping::from_pairs(&request.mappings, &request.replacements)?;
        debug!("build_mapping: {} pairs from flags", mapping.len());

        if let Some(path) = &request.mapfile {
            let file_mapping = self.load_mapfile(path)?;
            mapping.merge(file_mapping);
        }

        debug!("build_mapping: {} pairs effective", mapping.len());
        Ok(mapping)
    }
}
