//! Inline avatar payload helpers.
//!
//! The `avatar` column holds a `data:` URL so the presentation layer can
//! render it directly without a separate file store.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes raw image bytes as a base64 `data:` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Guesses an image MIME type from a file extension.
pub fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        _ => FALLBACK_MIME,
    }
}
