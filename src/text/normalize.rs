/// Converts every CRLF and every remaining lone CR to a single LF.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Number of newline-delimited segments. A trailing newline does not add an
/// empty segment, matching how the report lines count lines.
pub fn line_count(content: &str) -> usize {
    content.lines().count()
}
