use std::path::PathBuf;
use thiserror::Error;

use crate::crawlers::fetcher::FetchError;

/// Failures a scan can run into.
///
/// Only [`ScanError::Config`] aborts a run; everything else is reported
/// through [`Diagnostics`] and the run carries on.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IOC file not found: {}", path.display())]
    IocFileMissing { path: PathBuf },

    #[error("error reading IOC file {}: {source}", path.display())]
    IocLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error fetching URL {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("error saving results to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScanError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScanError::Config(_))
    }
}

/// Diagnostic sink threaded through a scan.
///
/// Every reported failure is logged and kept, alongside page counters, so the
/// caller can inspect a finished run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    failures: Vec<ScanError>,
    targets_scanned: usize,
    pages_attempted: usize,
    pages_fetched: usize,
    records_written: Option<usize>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a recoverable failure and keep it for the summary
    pub fn report(&mut self, error: ScanError) {
        ::log::error!("{}", error);
        self.failures.push(error);
    }

    pub fn target_scanned(&mut self) {
        self.targets_scanned += 1;
    }

    pub fn page_attempted(&mut self) {
        self.pages_attempted += 1;
    }

    pub fn page_fetched(&mut self) {
        self.pages_fetched += 1;
    }

    pub fn records_written(&mut self, count: usize) {
        self.records_written = Some(count);
    }

    pub fn failures(&self) -> &[ScanError] {
        &self.failures
    }

    pub fn targets(&self) -> usize {
        self.targets_scanned
    }

    pub fn attempted(&self) -> usize {
        self.pages_attempted
    }

    pub fn fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Number of records persisted, or `None` if the output was not written
    pub fn written(&self) -> Option<usize> {
        self.records_written
    }

    pub fn log_summary(&self) {
        ::log::info!(
            "Scan complete - {} targets, {}/{} pages fetched, {} records written, {} failures",
            self.targets_scanned,
            self.pages_fetched,
            self.pages_attempted,
            self.records_written.unwrap_or(0),
            self.failures.len()
        );
    }
}
