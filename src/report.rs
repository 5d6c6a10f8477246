use crate::constants::{
    BYTES_PER_KB, NEW_SIZE_PREFIX, ORIGINAL_SIZE_PREFIX, REDUCTION_PREFIX, SEPARATOR,
    SUCCESS_PREFIX, SUMMARY_BORDER,
};
use crate::driver::{FileOutcome, FileReport};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Aggregate counters for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Number of images found, i.e. the number that will be attempted.
    pub attempted: usize,
    pub processed: usize,
    pub total_original: u128,
    pub total_new: u128,
    pub failed: Vec<PathBuf>,
}

impl RunTally {
    pub fn new(attempted: usize) -> Self {
        Self {
            attempted,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Success(report) => {
                self.processed += 1;
                self.total_original += u128::from(report.original_size);
                self.total_new += u128::from(report.new_size);
            }
            FileOutcome::Failed { path, .. } => self.failed.push(path.clone()),
        }
    }

    /// Files that have reached a terminal state so far.
    pub fn completed(&self) -> usize {
        self.processed + self.failed.len()
    }

    pub fn total_reduction(&self) -> f64 {
        percentage_reduction(self.total_original, self.total_new)
    }
}

/// Percentage by which `new` is smaller than `original`.
///
/// Growth comes back negative. A zero `original` yields `0.0`.
pub fn percentage_reduction(original: u128, new: u128) -> f64 {
    if original == 0 {
        return 0.0;
    }

    let saved = original as f64 - new as f64;
    (saved / original as f64) * 100.0
}

/// Whole kilobytes, truncated.
pub fn kilobytes(bytes: u128) -> u128 {
    bytes / u128::from(BYTES_PER_KB)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_file_report(report: &FileReport, processed: usize, total: usize) -> String {
    let reduction = percentage_reduction(
        u128::from(report.original_size),
        u128::from(report.new_size),
    );

    format!(
        "- {} {}kb - {}\n- {} {}kb - {}\n- {} {:.2}% reduction\n\n{} Processed! ({} of {})\n\n{}",
        ORIGINAL_SIZE_PREFIX,
        kilobytes(u128::from(report.original_size)),
        file_name(&report.original_path),
        NEW_SIZE_PREFIX,
        kilobytes(u128::from(report.new_size)),
        file_name(&report.new_path),
        REDUCTION_PREFIX,
        reduction,
        SUCCESS_PREFIX,
        processed,
        total,
        SEPARATOR,
    )
}

pub fn format_summary(tally: &RunTally) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", SUMMARY_BORDER);
    let _ = writeln!(out, "* Total savings for {} images", tally.attempted);
    let _ = writeln!(out, "- {} {}kb", ORIGINAL_SIZE_PREFIX, kilobytes(tally.total_original));
    let _ = writeln!(out, "- {} {}kb", NEW_SIZE_PREFIX, kilobytes(tally.total_new));
    let _ = writeln!(out, "- {} {:.2}% reduction", REDUCTION_PREFIX, tally.total_reduction());
    let _ = write!(out, "{}", SUMMARY_BORDER);

    out
}

/// `None` when nothing failed.
pub fn format_failures(failed: &[PathBuf]) -> Option<String> {
    if failed.is_empty() {
        return None;
    }

    let mut out = format!("Failed to process {} file(s):", failed.len());
    for path in failed {
        let _ = write!(out, "\n  - {}", path.display());
    }
    Some(out)
}

pub fn print_file_report(report: &FileReport, processed: usize, total: usize) {
    crate::info!("{}", format_file_report(report, processed, total));
}

/// Prints the aggregate block, then the failed paths if there are any.
pub fn print_summary(tally: &RunTally, compression_count: Option<u64>) {
    crate::summary!("\n{}\n", format_summary(tally));

    if let Some(count) = compression_count {
        crate::verbose!("Compressions used this month: {}", count);
    }

    if let Some(failures) = format_failures(&tally.failed) {
        crate::summary!("{}", failures);
    }
}
