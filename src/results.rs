use serde::{Deserialize, Serialize};

/// Number of characters of page text captured as context for a match
pub const CONTEXT_CHARS: usize = 500;

/// One hit of a single keyword or IOC on a single fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// URL the page was fetched from
    pub url: String,

    /// Keyword that matched (lowercased), if this is a keyword hit
    pub keyword: Option<String>,

    /// IOC that matched, if this is an IOC hit
    pub ioc: Option<String>,

    /// Leading text of the page
    pub context: String,
}

impl MatchRecord {
    /// Create a record for a keyword hit
    pub fn keyword(url: &str, keyword: &str, text: &str) -> Self {
        Self {
            url: url.to_string(),
            keyword: Some(keyword.to_string()),
            ioc: None,
            context: context_of(text),
        }
    }

    /// Create a record for an IOC hit
    pub fn ioc(url: &str, ioc: &str, text: &str) -> Self {
        Self {
            url: url.to_string(),
            keyword: None,
            ioc: Some(ioc.to_string()),
            context: context_of(text),
        }
    }
}

/// First [`CONTEXT_CHARS`] characters of the page text.
pub fn context_of(text: &str) -> String {
    text.chars().take(CONTEXT_CHARS).collect()
}

/// Ordered, append-only collection of match records for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<MatchRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MatchRecord) {
        self.records.push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = MatchRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }
}

impl From<Vec<MatchRecord>> for ResultSet {
    fn from(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }
}

impl IntoIterator for ResultSet {
    type Item = MatchRecord;
    type IntoIter = std::vec::IntoIter<MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_populate_exactly_one_field() {
        let kw = MatchRecord::keyword("http://ex.test", "malware", "some text");
        assert_eq!(kw.keyword.as_deref(), Some("malware"));
        assert!(kw.ioc.is_none());

        let ioc = MatchRecord::ioc("http://ex.test", "ABC123", "some text");
        assert!(ioc.keyword.is_none());
        assert_eq!(ioc.ioc.as_deref(), Some("ABC123"));
    }

    #[test]
    fn test_context_is_truncated_by_characters() {
        let text = "é".repeat(CONTEXT_CHARS + 20);
        let record = MatchRecord::keyword("http://ex.test", "é", &text);
        assert_eq!(record.context.chars().count(), CONTEXT_CHARS);

        let short = context_of("short page");
        assert_eq!(short, "short page");
    }

    #[test]
    fn test_result_set_preserves_order() {
        let mut results = ResultSet::new();
        assert!(results.is_empty());

        results.push(MatchRecord::keyword("http://a.test", "one", "t"));
        results.extend(vec![
            MatchRecord::ioc("http://b.test", "two", "t"),
            MatchRecord::ioc("http://b.test", "two", "t"),
        ]);

        assert_eq!(results.len(), 3);
        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["http://a.test", "http://b.test", "http://b.test"]);
    }
}
