use std::path::{Path, PathBuf};

use crate::error::CurationError;

/// File name a single downloaded image is saved under (1-based).
#[must_use]
pub fn single_image_file_name(index: usize) -> String {
    format!("image_{}.jpeg", index + 1)
}

/// Write downloaded bytes into `dir`, creating it if needed.
pub(crate) async fn write_into(
    dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, CurationError> {
    let path = dir.join(file_name);
    let write_err = |source| CurationError::Write {
        path: path.clone(),
        source,
    };
    tokio::fs::create_dir_all(dir).await.map_err(write_err)?;
    tokio::fs::write(&path, bytes).await.map_err(write_err)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "download written");
    Ok(path)
}
