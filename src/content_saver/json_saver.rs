use serde::Serialize;
use std::path::Path;

use super::{SaveError, ensure_parent_dir};

/// Save any serializable value as pretty-printed JSON
pub async fn save_json_data<T: Serialize>(data: &T, path: &Path) -> Result<(), SaveError> {
    let json_str = serde_json::to_string_pretty(data).map_err(|source| SaveError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    ensure_parent_dir(path).await?;

    tokio::fs::write(path, json_str)
        .await
        .map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(target: "dgca_harvest::save", "Saved JSON to {}", path.display());
    Ok(())
}
