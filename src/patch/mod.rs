pub mod report;
pub mod splice;

pub use report::change_summary;
pub use splice::{apply_splice, SpliceBlock, SpliceOutcome};
