pub mod fetcher;
pub mod paginator;
pub mod web;

pub use fetcher::{FetchError, Fetcher};
pub use paginator::{Page, Paginator, page_url};
pub use web::HttpFetcher;
