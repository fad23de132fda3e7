//! Base64-to-file decoding core for the rampdev CLI.
//!
//! A payload arrives as base64 text on an arbitrary reader (stdin in
//! practice), gets whitespace-stripped, decoded, validated as UTF-8 and written
//! byte-for-byte to a caller-supplied path. Newlines in the decoded text are
//! written as-is, so LF stays LF on every platform.

mod error;

pub use error::{CodecError, Result};

use base64::{Engine, engine::general_purpose};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Decodes a base64 payload into UTF-8 text.
///
/// All whitespace is stripped before decoding, so line-wrapped base64 (as
/// produced by the `base64` command) decodes the same as a single-line
/// payload.
pub fn decode_payload(input: &str) -> Result<String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = general_purpose::STANDARD.decode(&compact)?;
    debug!(
        encoded_len = compact.len(),
        decoded_len = bytes.len(),
        "decoded base64 payload"
    );
    Ok(String::from_utf8(bytes)?)
}

/// Create-or-truncate write of `text` to `path`.
///
/// No parent directories are created and no newline translation happens; the
/// string's bytes land on disk verbatim.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `reader` to end-of-stream, decodes the payload and writes it to
/// `path`. Returns the decoded text on success.
pub fn decode_to_file<R: Read>(mut reader: R, path: &Path) -> Result<String> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(CodecError::Read)?;
    let text = decode_payload(&raw)?;
    write_text(path, &text)?;
    Ok(text)
}
