use crate::crawlers::web::DEFAULT_TIMEOUT_SECS;
use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for one scan run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Target URLs, scanned in this order
    #[serde(default)]
    pub urls: Vec<String>,

    /// Keywords matched case-insensitively
    #[serde(default)]
    pub keywords: Vec<String>,

    /// File of IOCs, one per line
    #[serde(default)]
    pub ioc_file: Option<PathBuf>,

    /// Path of the CSV output
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Pages to attempt per target URL
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_output() -> PathBuf {
    PathBuf::from("output.csv")
}

fn default_max_pages() -> u32 {
    1
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            keywords: Vec::new(),
            ioc_file: None,
            output: default_output(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ScanConfig {
    /// Create a configuration with default values for the given targets
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|e| ScanError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        serde_json::from_str(json).map_err(|e| ScanError::Config(format!("bad config: {}", e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject configurations that cannot be run
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.urls.is_empty() {
            return Err(ScanError::Config("at least one URL is required".into()));
        }
        if self.max_pages == 0 {
            return Err(ScanError::Config("max_pages must be at least 1".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ScanError::Config("timeout_secs must be at least 1".into()));
        }
        Ok(())
    }
}
