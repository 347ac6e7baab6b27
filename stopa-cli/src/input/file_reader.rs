//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Write text to a file, refusing to replace an existing one unless `force`
    pub fn write_text(path: &Path, content: &str, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(crate::error::CliError::OutputExists(path.to_path_buf()).into());
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("вірш.txt");

        let content = "Реве́ та сто́гне Дні́пр широ́кий,\nСерди́тий ві́тер завива́";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("cp1251.txt");
        fs::write(&file_path, [0xcc, 0xe0, 0xec, 0xe0]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_write_text_respects_force() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.toml");

        FileReader::write_text(&file_path, "first", false).unwrap();
        assert!(FileReader::write_text(&file_path, "second", false).is_err());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "first");

        FileReader::write_text(&file_path, "second", true).unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "second");
    }
}
