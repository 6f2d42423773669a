//! Logo loading for the centre of the bracket.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::Serialize;

use crate::error::{BracketError, Result};

/// An image read from disk, ready to embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub mime_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Logo {
    /// Blocking read of `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => BracketError::FileNotFound(path.to_path_buf()),
            _ => BracketError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let mime_type = sniff_mime(&bytes, path);
        log::debug!(
            "loaded logo {} ({} bytes, {mime_type})",
            path.display(),
            bytes.len()
        );
        Ok(Self { mime_type, bytes })
    }

    pub fn data_uri(&self) -> String {
        let encoded = BASE64_STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime_type, encoded)
    }
}

/// Guess an image MIME type from magic bytes, then the extension.
fn sniff_mime(bytes: &[u8], path: &Path) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        return "image/png";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return "image/gif";
    }
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return "image/webp";
    }
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bracket-drawer-logo-{}-{name}",
            std::process::id()
        ));
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_missing_file() {
        let err = Logo::load("/definitely/not/here/logo.png").unwrap_err();
        assert!(matches!(err, BracketError::FileNotFound(_)));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = std::env::temp_dir();
        let err = Logo::load(&dir).unwrap_err();
        match err {
            BracketError::Io { path, .. } => assert_eq!(path, dir),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_png_data_uri() {
        let path = temp_file("a.bin", b"\x89PNG\r\n\x1a\nrest");
        let logo = Logo::load(&path).unwrap();
        assert_eq!(logo.mime_type, "image/png");
        assert!(logo.data_uri().starts_with("data:image/png;base64,iVBORw0KGg"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(sniff_mime(b"<svg/>", Path::new("x.SVG")), "image/svg+xml");
        assert_eq!(sniff_mime(b"", Path::new("x")), "application/octet-stream");
    }
}
