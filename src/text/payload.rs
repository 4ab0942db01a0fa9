use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::error::{PagefixError, PagefixResult};

/// Strips BOM, CR and LF characters anywhere in the payload, then trims
/// surrounding whitespace.
pub fn clean_payload(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '\u{feff}' | '\r' | '\n'))
        .collect();

    stripped.trim().to_string()
}

/// Decodes a cleaned base64 payload into UTF-8 text.
///
/// Failures carry the cleaned payload's length and first 100 characters so
/// the decode command can report them.
pub fn decode_payload(cleaned: &str) -> PagefixResult<String> {
    debug!("Decoding base64 payload of {} bytes", cleaned.len());

    let bytes = STANDARD
        .decode(cleaned)
        .map_err(|e| PagefixError::payload_decode(e.to_string(), cleaned))?;

    String::from_utf8(bytes).map_err(|e| PagefixError::payload_decode(e.to_string(), cleaned))
}
