//! Persistence of harvest results
//!
//! URL lists are written as plain text, one URL per line; the crawl report
//! is written as pretty JSON. Parent directories are created on demand.

// Module declarations
mod json_saver;
mod list_saver;

use std::path::PathBuf;

// Re-export public API
pub use json_saver::save_json_data;
pub use list_saver::{read_url_list, save_url_list};

/// Failure to persist a result file. The only way a harvest run fails.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// Directory creation or file write failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data could not be serialized
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Create the parent directory of `path` if it has one.
pub(crate) async fn ensure_parent_dir(path: &std::path::Path) -> Result<(), SaveError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| SaveError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}
