use similar::{ChangeTag, TextDiff};

/// Counts (added, removed) lines between two versions of a file.
pub fn change_summary(old: &str, new: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(old, new);

    let mut added = 0;
    let mut removed = 0;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += 1,
            ChangeTag::Delete => removed += 1,
            ChangeTag::Equal => {}
        }
    }

    (added, removed)
}
