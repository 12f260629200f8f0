use clap::Parser;
use ioc_scout::{ScanConfig, ScanError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ioc-scout")]
#[command(about = "Scrapes OSINT sources for mentions of keywords or IOCs")]
#[command(version)]
pub struct Args {
    /// Keywords to search for (case-insensitive)
    #[arg(short, long, num_args = 1..)]
    pub keywords: Vec<String>,

    /// File containing IOCs, one per line (case-sensitive)
    #[arg(short = 'i', long = "ioc_file")]
    pub ioc_file: Option<PathBuf>,

    /// URLs to scrape
    #[arg(short, long, num_args = 1.., required_unless_present = "config")]
    pub urls: Vec<String>,

    /// Output CSV file path [default: output.csv]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of pages to scrape per URL [default: 1]
    #[arg(long = "max_pages", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// JSON configuration file; command-line options take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Merge the arguments over the config file (if any) into a validated configuration
    pub fn into_config(self) -> Result<ScanConfig, ScanError> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::from_file(path)?,
            None => ScanConfig::default(),
        };

        if !self.urls.is_empty() {
            config.urls = self.urls;
        }
        if !self.keywords.is_empty() {
            config.keywords = self.keywords;
        }
        if let Some(ioc_file) = self.ioc_file {
            config.ioc_file = Some(ioc_file);
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }

        config.validate()?;
        Ok(config)
    }
}
