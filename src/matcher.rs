use crate::results::MatchRecord;

/// Scans extracted page text for keywords and IOCs.
///
/// Keywords are matched case-insensitively and reported lowercased; IOCs are
/// matched verbatim. Each keyword or IOC yields at most one record per page,
/// and all keyword records come before the IOC records.
pub fn match_page(
    url: &str,
    text: &str,
    keywords: &[String],
    iocs: &[String],
) -> Vec<MatchRecord> {
    let mut records = Vec::new();

    if !keywords.is_empty() {
        let lowered = text.to_lowercase();
        for keyword in keywords {
            let keyword = keyword.to_lowercase();
            if lowered.contains(&keyword) {
                records.push(MatchRecord::keyword(url, &keyword, text));
            }
        }
    }

    for ioc in iocs {
        if text.contains(ioc.as_str()) {
            records.push(MatchRecord::ioc(url, ioc, text));
        }
    }

    ::log::debug!("{} matches on {}", records.len(), url);
    records
}
