//! Cover image checks made before an upload is sent.
//!
//! The upload request itself belongs to the host; this module only decides
//! whether a candidate file may be sent and where the stored copy is served.

use std::path::Path;

use serde::Serialize;

/// MIME types the upload endpoint accepts.
pub const ACCEPTED_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Upload size limit used when none is configured.
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Why a candidate cannot be uploaded. Messages are shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select an image first.")]
    NoFile,
    #[error("Please select a valid image file (JPEG, PNG, GIF, WebP).")]
    UnsupportedType { mime_type: String },
    #[error("Image size must be less than {}MB.", .limit / BYTES_PER_MB)]
    TooLarge { size: u64, limit: u64 },
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl ImageCandidate {
    /// Describe a file on disk, guessing its MIME type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let size = std::fs::metadata(path)?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self {
            file_name,
            mime_type: mime_for_path(path).to_owned(),
            size,
        })
    }
}

/// Check a candidate against the accepted types and `max_bytes`.
pub fn validate(
    candidate: Option<&ImageCandidate>,
    max_bytes: u64,
) -> Result<&ImageCandidate, UploadError> {
    let candidate = candidate.ok_or(UploadError::NoFile)?;
    if !ACCEPTED_TYPES.contains(&candidate.mime_type.as_str()) {
        return Err(UploadError::UnsupportedType {
            mime_type: candidate.mime_type.clone(),
        });
    }
    if candidate.size > max_bytes {
        return Err(UploadError::TooLarge {
            size: candidate.size,
            limit: max_bytes,
        });
    }
    Ok(candidate)
}

/// Where an uploaded file is served from.
pub fn preview_url(filename: &str) -> String {
    format!("/static/uploads/{filename}")
}

fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
