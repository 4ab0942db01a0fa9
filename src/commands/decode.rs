use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::error::PagefixError;
use crate::text::normalize::line_count;
use crate::text::payload::{clean_payload, decode_payload};
use crate::utils::fs as fs_utils;

/// Staged payload the decode command consumes.
pub const PAYLOAD_FILE: &str = "/tmp/base64_content.txt";

pub fn run(input: &Path, dest: &Path) -> Result<()> {
    if !fs_utils::file_exists(input) {
        println!("Error: {} not found", input.display());
        return Err(PagefixError::missing_input(input).into());
    }

    let raw = fs_utils::read_file_lossy(input)?;
    let cleaned = clean_payload(&raw);
    debug!("Cleaned payload: {} characters", cleaned.chars().count());

    let content = match decode_payload(&cleaned) {
        Ok(content) => content,
        Err(err) => {
            if let PagefixError::PayloadDecode {
                message,
                cleaned_len,
                prefix,
            } = &err
            {
                println!("Error decoding base64: {}", message);
                println!("Base64 length: {}", cleaned_len);
                println!("First 100 chars: {}", prefix);
            }
            return Err(err.into());
        }
    };

    fs_utils::write_file_sync(dest, &content)?;

    println!("SUCCESS: File written to {}", dest.display());
    println!("File size: {} bytes", content.len());
    println!("Lines: {}", line_count(&content));

    Ok(())
}
