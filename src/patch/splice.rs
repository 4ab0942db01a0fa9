use tracing::{debug, warn};

/// Describes one anchor-based splice: the line containing `anchor` and every
/// line up to and including the first later line containing `terminator` are
/// replaced with `replacement`.
#[derive(Debug, Clone)]
pub struct SpliceBlock {
    /// Literal substring marking the line where the splice starts
    pub anchor: String,
    /// Literal substring marking the last line of the replaced range
    pub terminator: String,
    /// Replacement lines, without trailing newlines
    pub replacement: Vec<String>,
}

/// Result of a splice operation
#[derive(Debug, Clone)]
pub struct SpliceOutcome {
    /// Resulting content
    pub content: String,
    /// Whether the splice was applied
    pub changes_made: bool,
    /// Warnings generated while splicing
    pub warnings: Vec<String>,
}

impl SpliceOutcome {
    fn unchanged(content: &str, warnings: Vec<String>) -> Self {
        Self {
            content: content.to_string(),
            changes_made: false,
            warnings,
        }
    }
}

/// Applies a splice block to content.
///
/// Lines are matched by substring, in order. Untouched lines are carried
/// through byte-identically: each keeps its own terminator, and a missing
/// final newline stays missing. If the anchor never occurs the content is
/// returned unchanged. If the terminator never occurs after the anchor the
/// splice is not applied and a warning is recorded.
pub fn apply_splice(content: &str, block: &SpliceBlock) -> SpliceOutcome {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let start = match lines.iter().position(|line| line.contains(&block.anchor)) {
        Some(idx) => idx,
        None => {
            debug!("Anchor not found; content unchanged");
            return SpliceOutcome::unchanged(content, Vec::new());
        }
    };

    let end = match lines[start + 1..]
        .iter()
        .position(|line| line.contains(&block.terminator))
    {
        Some(offset) => start + 1 + offset,
        None => {
            let warning = format!(
                "No line containing {:?} found after the anchor at line {}; content unchanged",
                block.terminator,
                start + 1
            );
            warn!("{}", warning);
            return SpliceOutcome::unchanged(content, vec![warning]);
        }
    };

    debug!(
        "Replacing lines {}-{} with {} replacement lines",
        start + 1,
        end + 1,
        block.replacement.len()
    );

    let mut result = String::with_capacity(content.len());
    for line in &lines[..start] {
        result.push_str(line);
    }
    for line in &block.replacement {
        result.push_str(line);
        result.push('\n');
    }
    for line in &lines[end + 1..] {
        result.push_str(line);
    }

    SpliceOutcome {
        content: result,
        changes_made: true,
        warnings: Vec::new(),
    }
}
