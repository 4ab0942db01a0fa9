use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::patch::{apply_splice, change_summary, SpliceBlock};
use crate::utils::fs as fs_utils;

/// Page patched in place by the splice command.
pub const BUNDLE_EDIT_PAGE: &str = "app/dashboard/items/bundles/[id]/edit/page.tsx";

/// Substring of the header link line where the splice starts.
const ANCHOR: &str = "<Link href={`/dashboard/items/${bundleId";

/// Substring of the last line in the replaced range.
const TERMINATOR: &str = "</Link>";

/// Back button markup spliced in over the link block.
const REPLACEMENT: [&str; 4] = [
    r#"        <Button variant="ghost" size="sm" onClick={() => router.back()}>"#,
    r#"          <ArrowLeft className="mr-2 h-4 w-4" />"#,
    "          Back",
    "        </Button>",
];

pub fn run(file: &Path) -> Result<()> {
    let content = fs_utils::read_file_to_string(file)?;

    let block = SpliceBlock {
        anchor: ANCHOR.to_string(),
        terminator: TERMINATOR.to_string(),
        replacement: REPLACEMENT.iter().map(ToString::to_string).collect(),
    };

    let outcome = apply_splice(&content, &block);

    for warning in &outcome.warnings {
        warn!("{}", warning);
    }

    if outcome.changes_made {
        let (added, removed) = change_summary(&content, &outcome.content);
        debug!("Spliced {}: +{} -{} lines", file.display(), added, removed);
        fs_utils::write_file_sync(file, &outcome.content)?;
    } else {
        info!(
            "Link block not found in {}; file left unchanged",
            file.display()
        );
    }

    println!("Fixed {}", file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PAGE: &str = concat!(
        "export default function EditBundlePage() {\n",
        "  return (\n",
        "        <Link href={`/dashboard/items/${bundleId}`}>\n",
        "          <Button variant=\"ghost\" size=\"sm\">\n",
        "            <ArrowLeft className=\"mr-2 h-4 w-4\" />\n",
        "            Back\n",
        "          </Button>\n",
        "        </Link>\n",
        "  );\n",
        "}\n",
    );

    #[test]
    fn test_run_splices_file_in_place() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("page.tsx");
        std::fs::write(&page, PAGE).unwrap();

        run(&page).unwrap();

        let patched = std::fs::read_to_string(&page).unwrap();
        assert!(patched.contains("onClick={() => router.back()}"));
        assert!(!patched.contains("<Link"));
        assert!(patched.starts_with("export default function EditBundlePage() {\n"));
        assert!(patched.ends_with("  );\n}\n"));
    }

    #[test]
    fn test_run_without_anchor_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("page.tsx");
        std::fs::write(&page, "const x = 1;\n").unwrap();

        run(&page).unwrap();

        assert_eq!(std::fs::read_to_string(&page).unwrap(), "const x = 1;\n");
    }

    #[test]
    fn test_run_is_a_noop_on_already_patched_file() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("page.tsx");
        std::fs::write(&page, PAGE).unwrap();

        run(&page).unwrap();
        let once = std::fs::read_to_string(&page).unwrap();

        run(&page).unwrap();
        let twice = std::fs::read_to_string(&page).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_run_fails_on_missing_file() {
        let dir = tempdir().unwrap();
        assert!(run(&dir.path().join("absent.tsx")).is_err());
    }
}
