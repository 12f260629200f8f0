use scraper::Html;

/// Extracts the text of an HTML document with all markup removed.
///
/// The bytes are decoded lossily and parsed leniently, so malformed or
/// non-HTML input still produces (possibly empty) text. Every text node is
/// kept verbatim and joined in document order without separators, script and
/// style bodies included; comments and the doctype are dropped.
pub fn extract_text(bytes: &[u8]) -> String {
    let html = String::from_utf8_lossy(bytes);
    let doc = Html::parse_document(&html);

    let mut text = String::new();
    for node in doc.root_element().descendants() {
        if let Some(chunk) = node.value().as_text() {
            text.push_str(chunk);
        }
    }

    ::log::debug!("HTML extractor produced {} characters", text.len());
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_body_text() {
        let html = b"<html><body><p>This site discusses Malware campaigns.</p></body></html>";
        assert_eq!(extract_text(html), "This site discusses Malware campaigns.");
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let html = b"<p>Mal<b>ware</b> seen at <a href=\"/x\">evil.example</a></p>";
        assert_eq!(extract_text(html), "Malware seen at evil.example");
    }

    #[test]
    fn test_keeps_script_and_style_text() {
        let html = b"<html><head><title>Feed</title><style>p{color:red}</style>\
            <script>fetch('http://evil.example')</script></head>\
            <body><p>visible</p><!-- hidden note --></body></html>";
        assert_eq!(extract_text(html), "Feedp{color:red}fetch('http://evil.example')visible");
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let html = b"<div>Cobalt  Strike\n<span>beacon</span>\tloader</div>";
        assert_eq!(extract_text(html), "Cobalt  Strike\nbeacon\tloader");
    }

    #[test]
    fn test_tolerates_malformed_input() {
        let html = b"<html><body><div><p>unclosed <b>tags <i>everywhere</div></table>";
        assert_eq!(extract_text(html), "unclosed tags everywhere");

        assert_eq!(extract_text(b""), "");
        assert_eq!(extract_text(b"plain text, no markup"), "plain text, no markup");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes = [b'o', b'k', 0xff, 0xfe, b'!'];
        let text = extract_text(&bytes);
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }
}
