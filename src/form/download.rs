use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use crate::core::{
    http::download_to_file,
    FormError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Local path or http(s) URL.
    pub asset: String,
    pub target: PathBuf,
}

impl DownloadRequest {
    fn is_remote(&self) -> bool {
        self.asset.starts_with("http://") || self.asset.starts_with("https://")
    }
}

/// Copies the asset to `target`, overwriting any previous copy.
pub fn deliver(request: &DownloadRequest) -> Result<PathBuf, FormError> {
    copy_asset(request).map_err(|e| match e {
        FormError::Download(_) => e,
        other => FormError::Download(other.to_string()),
    })
}

fn copy_asset(request: &DownloadRequest) -> Result<PathBuf, FormError> {
    if let Some(parent) = request.target.parent() {
        fs::create_dir_all(parent)?;
    }

    if request.is_remote() {
        download_to_file(&request.asset, &request.target)?;
    } else {
        let source = Path::new(&request.asset);
        if !source.is_file() {
            return Err(FormError::Download(format!("asset {} not found", source.display())));
        }
        fs::copy(source, &request.target)?;
    }

    tracing::info!("Syllabus saved to {}", request.target.display());
    Ok(request.target.clone())
}
