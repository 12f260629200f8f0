// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod iocs;
pub mod matcher;
pub mod output;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::ScanConfig;
pub use crawlers::{FetchError, Fetcher, HttpFetcher};
pub use error::{Diagnostics, ScanError};
pub use results::{MatchRecord, ResultSet};

use crawlers::Paginator;

/// Scans target URLs for keywords and IOCs
pub struct Scanner<F> {
    fetcher: F,
    keywords: Vec<String>,
    max_pages: u32,
}

impl Scanner<HttpFetcher> {
    /// Create a scanner that fetches over HTTP with the configured timeout
    pub fn from_config(config: &ScanConfig) -> Result<Self, ScanError> {
        let fetcher = HttpFetcher::new(config.timeout())
            .map_err(|e| ScanError::Config(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self::new(fetcher)
            .with_keywords(config.keywords.clone())
            .with_max_pages(config.max_pages))
    }
}

impl<F: Fetcher> Scanner<F> {
    /// Create a scanner around any fetcher, with no keywords and one page per target
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            keywords: Vec::new(),
            max_pages: 1,
        }
    }

    /// Set the keywords to look for
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the number of pages attempted per target
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scan every target in order and collect all records.
    ///
    /// Targets are processed one after another; a failing target only loses
    /// its own pages.
    pub async fn scan(
        &self,
        targets: &[String],
        iocs: &[String],
        diag: &mut Diagnostics,
    ) -> ResultSet {
        let paginator = Paginator::new(&self.fetcher, self.max_pages);
        let mut results = ResultSet::new();

        for target in targets {
            let records = paginator.scan(target, &self.keywords, iocs, diag).await;
            ::log::debug!("{} records from {}", records.len(), target);
            results.extend(records);
            diag.target_scanned();
        }

        results
    }
}

/// Runs a whole scan over HTTP: load IOCs, scan targets, write the CSV.
///
/// Only configuration problems are returned as errors, and they are detected
/// before any request is made. Everything else ends up in the returned
/// [`Diagnostics`].
pub async fn run(config: &ScanConfig) -> Result<Diagnostics, ScanError> {
    config.validate()?;
    let scanner = Scanner::from_config(config)?;
    Ok(run_with(config, &scanner).await)
}

/// Runs a scan with an already built scanner
pub async fn run_with<F: Fetcher>(config: &ScanConfig, scanner: &Scanner<F>) -> Diagnostics {
    let mut diag = Diagnostics::new();

    let iocs = iocs::load_iocs(config.ioc_file.as_deref(), &mut diag);
    let results = scanner.scan(&config.urls, &iocs, &mut diag).await;

    match output::write_results(&results, &config.output) {
        Ok(()) => {
            ::log::info!("Results saved to: {}", config.output.display());
            diag.records_written(results.len());
        }
        Err(source) => diag.report(ScanError::Write {
            path: config.output.clone(),
            source,
        }),
    }

    diag.log_summary();
    diag
}
