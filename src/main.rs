use clap::Parser;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging, INFO unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Scanning {} URLs for {} keywords, up to {} pages each",
        config.urls.len(),
        config.keywords.len(),
        config.max_pages
    );

    // Partial failures are in the diagnostics; only bad configuration fails the process
    match ioc_scout::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
