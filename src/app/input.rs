//! Lookup input file reading.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error_handling::RunError;

/// Reads the URLs to look up from the first column of a CSV file.
///
/// There is no header row. Values are trimmed and blank rows skipped; any
/// further columns are ignored.
pub fn read_url_list(path: &Path) -> Result<Vec<String>, RunError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(0).map(str::trim).filter(|url| !url.is_empty()) {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write input");
        file
    }

    #[test]
    fn test_read_url_list() {
        let file = input_file("google.com\n  bbc.co.uk  ,news\n\nexample.org\n");
        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls, vec!["google.com", "bbc.co.uk", "example.org"]);
    }

    #[test]
    fn test_read_url_list_empty_file() {
        let file = input_file("");
        assert!(read_url_list(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_url_list_missing_file() {
        let result = read_url_list(Path::new("/nonexistent/awis-input.csv"));
        assert!(matches!(result, Err(RunError::Csv(_))));
    }
}
