use crate::crawlers::fetcher::Fetcher;
use crate::error::{Diagnostics, ScanError};
use crate::matcher::match_page;
use crate::parsers::extract_text;
use crate::results::MatchRecord;

/// One page of a target: the target URL, its 1-based page number and the
/// URL actually requested for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub target: String,
    pub number: u32,
    pub url: String,
}

impl Page {
    pub fn new(target: &str, number: u32) -> Self {
        Self {
            target: target.to_string(),
            number,
            url: page_url(target, number),
        }
    }
}

/// Derives the URL of page `number` from a base URL.
///
/// Page 1 is the base URL itself. Later pages get a `page=N` query parameter,
/// appended with `&` when the base already has a query string and `?`
/// otherwise. The base is never otherwise rewritten.
pub fn page_url(base: &str, number: u32) -> String {
    if number <= 1 {
        base.to_string()
    } else if base.contains('?') {
        format!("{base}&page={number}")
    } else {
        format!("{base}?page={number}")
    }
}

/// Drives fetch, extract and match over the pages of one target
pub struct Paginator<'a, F> {
    fetcher: &'a F,
    max_pages: u32,
}

impl<'a, F: Fetcher> Paginator<'a, F> {
    pub fn new(fetcher: &'a F, max_pages: u32) -> Self {
        Self { fetcher, max_pages }
    }

    /// Pages that will be requested for `target`, in order
    pub fn pages(&self, target: &str) -> Vec<Page> {
        (1..=self.max_pages.max(1))
            .map(|number| Page::new(target, number))
            .collect()
    }

    /// Scan every page of `target` and return its records in page order.
    ///
    /// A failed page is reported to `diag` and contributes nothing; the
    /// following pages are still attempted.
    pub async fn scan(
        &self,
        target: &str,
        keywords: &[String],
        iocs: &[String],
        diag: &mut Diagnostics,
    ) -> Vec<MatchRecord> {
        let mut records = Vec::new();

        for page in self.pages(target) {
            ::log::info!("Scraping URL: {}", page.url);
            diag.page_attempted();

            let body = match self.fetcher.fetch(&page.url).await {
                Ok(body) => body,
                Err(source) => {
                    diag.report(ScanError::Fetch {
                        url: page.url,
                        source,
                    });
                    continue;
                }
            };
            diag.page_fetched();

            let text = extract_text(&body);
            records.extend(match_page(&page.url, &text, keywords, iocs));
        }

        records
    }
}
