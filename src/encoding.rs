//! Seed word file loading
//!
//! Word files come from all sorts of places, so the encoding is detected
//! (BOM first, then `chardetng`) and the content transcoded to UTF-8.

use anyhow::Context;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::path::Path;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Whether the encoding came from a byte order mark
    pub from_bom: bool,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            from_bom: false,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of raw file content
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    if let Some((encoding, _)) = Encoding::for_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            from_bom: true,
            encoding,
        };
    }

    // Plain UTF-8 is by far the common case; only guess when it fails
    if std::str::from_utf8(content).is_ok() {
        return EncodingInfo::default();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(content, true);
    let encoding = detector.guess(None, true);

    EncodingInfo {
        name: encoding.name(),
        from_bom: false,
        encoding,
    }
}

/// Decode raw content into words, one per line, skipping empty lines
pub fn decode_words(content: &[u8]) -> Vec<String> {
    let info = detect_encoding(content);
    // `decode` strips a BOM matching the detected encoding
    let (text, _, had_errors) = info.encoding.decode(content);

    if had_errors {
        log::warn!("Invalid {} sequences in word file, using lossy conversion", info.name);
    }

    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read seed words from a file
pub fn read_words(path: &Path) -> anyhow::Result<Vec<String>> {
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read word file {:?}", path))?;

    let info = detect_encoding(&content);
    log::debug!("word file {:?} detected as {}", path, info.name);

    Ok(decode_words(&content))
}
