//! Address list loading

use crate::error::{AppError, Result};
use std::fs;
use std::path::Path;

/// Read the newline-delimited address list at `path`.
///
/// Lines are whitespace-trimmed and blank lines are skipped; file order is
/// preserved. Addresses are opaque tokens, no validation is performed.
/// An unreadable file is fatal to the run.
pub fn load_addresses(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read address list {}: {}", path.display(), e)))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_list(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_lines_in_file_order() {
        let file = write_list("8.8.8.8\n1.1.1.1\nexample.com\n");
        let addresses = load_addresses(file.path()).unwrap();
        assert_eq!(addresses, vec!["8.8.8.8", "1.1.1.1", "example.com"]);
    }

    #[test]
    fn test_skips_blank_lines_and_trims_whitespace() {
        let file = write_list("  8.8.8.8  \n\n\t\n 1.1.1.1\n   \n");
        let addresses = load_addresses(file.path()).unwrap();
        assert_eq!(addresses, vec!["8.8.8.8", "1.1.1.1"]);
    }

    #[test]
    fn test_empty_file_yields_empty_list() {
        let file = write_list("");
        let addresses = load_addresses(file.path()).unwrap();
        assert!(addresses.is_empty());
    }

    #[test]
    fn test_duplicate_lines_are_kept() {
        let file = write_list("10.0.0.1\n10.0.0.1\n");
        let addresses = load_addresses(file.path()).unwrap();
        assert_eq!(addresses.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let error = load_addresses(Path::new("definitely/not/here.txt")).unwrap_err();
        assert_eq!(error.category(), "IO");
    }
}
