//! Implements CapturePort by reading a photo from disk.
//!
//! Stands in for the camera: the file is opened, read, and released within
//! one call.

use crate::domain::{DomainError, ImagePayload};
use crate::ports::CapturePort;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Upper bound on accepted photo size.
pub const MAX_PHOTO_BYTES: u64 = 15 * 1024 * 1024;

pub struct FileCapture;

impl FileCapture {
    pub fn new() -> Self {
        Self
    }

    fn mime_for(path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "webp" => Some("image/webp"),
            _ => None,
        }
    }
}

impl Default for FileCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CapturePort for FileCapture {
    async fn capture(&self, source: &Path) -> Result<ImagePayload, DomainError> {
        let mime = Self::mime_for(source).ok_or_else(|| {
            DomainError::Capture(format!(
                "unsupported photo format: {} (use .jpg, .png or .webp)",
                source.display()
            ))
        })?;

        let meta = fs::metadata(source).await.map_err(|e| {
            DomainError::Capture(format!("cannot access {}: {}", source.display(), e))
        })?;
        if meta.len() > MAX_PHOTO_BYTES {
            return Err(DomainError::Capture(format!(
                "photo is too large ({} bytes)",
                meta.len()
            )));
        }

        let bytes = fs::read(source).await.map_err(|e| {
            DomainError::Capture(format!("cannot read {}: {}", source.display(), e))
        })?;
        if bytes.is_empty() {
            return Err(DomainError::Capture("photo file is empty".to_string()));
        }

        info!(path = %source.display(), bytes = bytes.len(), mime, "photo captured");
        Ok(ImagePayload::from_bytes(mime, &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ixora-capture-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_capture_reads_file() {
        let path = temp_path("face.PNG");
        fs::write(&path, [0x89, b'P', b'N', b'G']).await.unwrap();

        let payload = FileCapture::new().capture(&path).await.unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload, ImagePayload::from_bytes("image/png", b"\x89PNG"));

        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_capture_errors() {
        let capture = FileCapture::new();

        let missing = capture.capture(&temp_path("missing.jpg")).await;
        assert!(matches!(missing, Err(DomainError::Capture(_))));

        let unsupported = capture.capture(Path::new("notes.txt")).await;
        assert!(unsupported.unwrap_err().to_string().contains("unsupported"));

        let empty = temp_path("empty.jpg");
        fs::write(&empty, b"").await.unwrap();
        assert!(capture.capture(&empty).await.is_err());
        fs::remove_file(&empty).await.unwrap();
    }
}
