use crate::error::{Diagnostics, ScanError};
use std::fs;
use std::path::Path;

/// Reads indicators from a file, one per line.
///
/// Lines are trimmed and blank lines dropped; order and duplicates are kept.
pub fn read_iocs(path: &Path) -> Result<Vec<String>, ScanError> {
    if !path.is_file() {
        return Err(ScanError::IocFileMissing {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| ScanError::IocLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_iocs(&contents))
}

/// Splits IOC file contents into trimmed, non-empty lines
pub fn parse_iocs(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Best-effort IOC loading: no path means no IOCs, and any failure is
/// reported to `diag` and degrades to an empty list.
pub fn load_iocs(path: Option<&Path>, diag: &mut Diagnostics) -> Vec<String> {
    let Some(path) = path else {
        return Vec::new();
    };

    match read_iocs(path) {
        Ok(iocs) => {
            ::log::info!("Loaded {} IOCs from {}", iocs.len(), path.display());
            iocs
        }
        Err(e) => {
            diag.report(e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let contents = "  evil.example \n\n10.0.0.1\r\n   \nABC123\nevil.example\n";
        assert_eq!(
            parse_iocs(contents),
            vec!["evil.example", "10.0.0.1", "ABC123", "evil.example"]
        );
    }

    #[test]
    fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "d41d8cd98f00b204e9800998ecf8427e").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "bad.example").unwrap();

        let iocs = read_iocs(file.path()).unwrap();
        assert_eq!(iocs, vec!["d41d8cd98f00b204e9800998ecf8427e", "bad.example"]);
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let mut diag = Diagnostics::new();

        let iocs = load_iocs(Some(&path), &mut diag);
        assert!(iocs.is_empty());
        assert_eq!(diag.failures().len(), 1);
        assert!(matches!(diag.failures()[0], ScanError::IocFileMissing { .. }));
    }

    #[test]
    fn test_directory_is_not_an_ioc_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut diag = Diagnostics::new();

        assert!(load_iocs(Some(dir.path()), &mut diag).is_empty());
        assert_eq!(diag.failures().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();
        let mut diag = Diagnostics::new();

        assert!(load_iocs(Some(file.path()), &mut diag).is_empty());
        assert!(matches!(diag.failures()[0], ScanError::IocLoad { .. }));
    }

    #[test]
    fn test_no_path_means_no_iocs() {
        let mut diag = Diagnostics::new();
        assert!(load_iocs(None, &mut diag).is_empty());
        assert!(diag.failures().is_empty());
    }
}
