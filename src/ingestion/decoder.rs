use anyhow::{Context, Result};
use std::path::Path;

/// File extensions the loader will decode. Anything else is skipped.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md"];

/// Reads a file and decodes its bytes into text.
pub fn decode_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(decode_bytes(&bytes))
}

/// Decodes raw bytes as UTF-8, retrying as Latin-1 for legacy files.
/// Total: every byte sequence decodes to some text.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => encoding_rs::mem::decode_latin1(bytes).into_owned(),
    }
}

/// Whether the loader supports this path, judged by extension alone.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
