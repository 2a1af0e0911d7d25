//! Uploaded media storage.
//!
//! Stores raw upload bodies on the local filesystem under the configured media
//! directory. Serving is handled separately by the static file layer.

use rand::{distr::Alphanumeric, Rng};
use std::path::{Path, PathBuf};

use crate::server::error::AppError;

const UNIQUE_SUFFIX_LEN: usize = 8;

/// Service storing uploaded files under the media directory.
pub struct MediaService<'a> {
    media_dir: &'a Path,
}

impl<'a> MediaService<'a> {
    pub fn new(media_dir: &'a Path) -> Self {
        Self { media_dir }
    }

    /// Stores an upload and returns its public URL path.
    ///
    /// The file name is sanitized so it can never escape the media directory
    /// and uniquified with a random suffix so repeat uploads never collide.
    ///
    /// # Returns
    /// - `Ok(String)` - Name the file was stored under
    /// - `Err(AppError::BadRequest)` - Empty body
    /// - `Err(AppError::IoErr)` - Filesystem error while writing
    pub async fn store(&self, file_name: &str, body: &[u8]) -> Result<String, AppError> {
        if body.is_empty() {
            return Err(AppError::BadRequest(
                "Upload body must not be empty".to_string(),
            ));
        }

        let stored_name = unique_file_name(file_name);
        let path: PathBuf = self.media_dir.join(&stored_name);

        tokio::fs::create_dir_all(self.media_dir).await?;
        tokio::fs::write(&path, body).await?;

        tracing::info!("Stored media file {} ({} bytes)", stored_name, body.len());

        Ok(stored_name)
    }
}

/// Reduces an arbitrary client-supplied name to a safe stem and extension,
/// then appends a random suffix to the stem.
fn unique_file_name(file_name: &str) -> String {
    // Only the last path component counts; separators must not survive.
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let (stem, extension) = match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (base, None),
    };

    let stem = sanitize_component(stem, "file");

    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(UNIQUE_SUFFIX_LEN)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();

    match extension.map(|e| sanitize_component(e, "bin")) {
        Some(ext) => format!("{stem}-{suffix}.{ext}"),
        None => format!("{stem}-{suffix}"),
    }
}

fn sanitize_component(component: &str, fallback: &str) -> String {
    let cleaned: String = component
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}
