use crate::error::{GazetteerError, Result};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// One file pulled out of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// In-memory ZIP access (GeoNames dumps, KMZ files).
pub struct ArchiveExtractor;

impl ArchiveExtractor {
    /// First file entry whose name ends with `suffix` (ASCII case-insensitive).
    pub fn extract_first_with_suffix(data: &[u8], suffix: &str) -> Result<ExtractedEntry> {
        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let suffix_lower = suffix.to_ascii_lowercase();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() || !file.name().to_ascii_lowercase().ends_with(&suffix_lower) {
                continue;
            }

            let name = file.name().to_string();
            let mut bytes = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut bytes)?;

            tracing::debug!(entry = %name, bytes = bytes.len(), "archive entry extracted");
            return Ok(ExtractedEntry { name, bytes });
        }

        Err(GazetteerError::EntryNotFound {
            suffix: suffix.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::{write::FileOptions, CompressionMethod, ZipWriter};

    fn create_test_zip(entries: &[(&str, &[u8])]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, contents) in entries {
            if name.ends_with('/') {
                zip.add_directory(*name, FileOptions::default())?;
                continue;
            }
            zip.start_file(
                *name,
                FileOptions::default().compression_method(CompressionMethod::Deflated),
            )?;
            zip.write_all(contents)?;
        }
        Ok(zip.finish()?.into_inner())
    }

    #[test]
    fn test_extract_first_matching_entry() -> Result<()> {
        let data = create_test_zip(&[
            ("readme.md", b"notes"),
            ("cities500.txt", b"first"),
            ("extra.txt", b"second"),
        ])?;

        let entry = ArchiveExtractor::extract_first_with_suffix(&data, ".txt")?;
        assert_eq!(entry.name, "cities500.txt");
        assert_eq!(entry.bytes, b"first".to_vec());
        Ok(())
    }

    #[test]
    fn test_suffix_match_ignores_case_and_directories() -> Result<()> {
        let data = create_test_zip(&[("files.kml/", b""), ("files/DOC.KML", b"<kml/>")])?;

        let entry = ArchiveExtractor::extract_first_with_suffix(&data, ".kml")?;
        assert_eq!(entry.name, "files/DOC.KML");
        Ok(())
    }

    #[test]
    fn test_missing_entry_is_fatal() -> Result<()> {
        let data = create_test_zip(&[("doc.txt", b"x")])?;

        let err = ArchiveExtractor::extract_first_with_suffix(&data, ".kml").unwrap_err();
        assert!(matches!(err, GazetteerError::EntryNotFound { ref suffix } if suffix == ".kml"));
        Ok(())
    }

    #[test]
    fn test_not_a_zip() {
        let result = ArchiveExtractor::extract_first_with_suffix(b"not a zip", ".txt");
        assert!(matches!(result, Err(GazetteerError::Zip(_))));
    }
}
