use std::path::Path;

use log::info;

use super::{SaveError, ensure_parent_dir};

/// Write `urls` to `path`, one per line, each line newline-terminated.
///
/// An empty list produces an empty file.
pub async fn save_url_list<S: AsRef<str>>(urls: &[S], path: &Path) -> Result<(), SaveError> {
    ensure_parent_dir(path).await?;

    let mut contents = String::with_capacity(urls.iter().map(|u| u.as_ref().len() + 1).sum());
    for url in urls {
        contents.push_str(url.as_ref());
        contents.push('\n');
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    info!(target: "dgca_harvest::save", "Saved {} URLs to {}", urls.len(), path.display());
    Ok(())
}

/// Read a list written by [`save_url_list`], skipping blank lines.
pub async fn read_url_list(path: &Path) -> Result<Vec<String>, SaveError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
