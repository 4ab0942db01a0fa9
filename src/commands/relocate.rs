use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::text::normalize::{line_count, normalize_line_endings};
use crate::utils::fs as fs_utils;

/// Local copy of the client edit page.
pub const CLIENT_EDIT_PAGE: &str = "app/dashboard/clients/[id]/edit/page.tsx";

/// Where the page lives in the deploy tree.
pub const DEPLOYED_CLIENT_EDIT_PAGE: &str =
    "/root/apps/trimpro/app/dashboard/clients/[id]/edit/page.tsx";

pub fn run(source: &Path, dest: &Path) -> Result<()> {
    let content = fs_utils::read_file_to_string(source)?;

    let normalized = normalize_line_endings(&content);
    debug!(
        "Normalized {}: {} bytes in, {} bytes out",
        source.display(),
        content.len(),
        normalized.len()
    );

    fs_utils::write_file_sync(dest, &normalized)?;

    println!("File written to {}", dest.display());
    println!("File size: {} bytes", normalized.len());
    println!("Lines: {}", line_count(&normalized));

    Ok(())
}
