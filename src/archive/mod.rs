pub mod extractor;
pub mod fetcher;

pub use extractor::{ArchiveExtractor, ExtractedEntry};
pub use fetcher::{get_with_tls_fallback, HttpClient, ReqwestClient, TlsMode};

use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// Where a pipeline gets its archive from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveSource {
    Remote(String),
    /// Previously downloaded archive on disk.
    Local(PathBuf),
}

impl ArchiveSource {
    pub fn load<C: HttpClient + ?Sized>(&self, client: &C) -> Result<Vec<u8>> {
        match self {
            ArchiveSource::Remote(url) => client.get(url),
            ArchiveSource::Local(path) => Ok(std::fs::read(path)?),
        }
    }
}

impl fmt::Display for ArchiveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveSource::Remote(url) => write!(f, "{}", url),
            ArchiveSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GazetteerError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct NoNetwork;

    impl HttpClient for NoNetwork {
        fn get(&self, url: &str) -> Result<Vec<u8>> {
            Err(GazetteerError::Fetch {
                url: url.to_string(),
                message: "offline".to_string(),
            })
        }
    }

    #[test]
    fn test_local_source_reads_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"archive bytes")?;

        let source = ArchiveSource::Local(file.path().to_path_buf());
        assert_eq!(source.load(&NoNetwork)?, b"archive bytes".to_vec());
        Ok(())
    }

    #[test]
    fn test_remote_source_uses_client() {
        let source = ArchiveSource::Remote("https://example.test/x.kmz".to_string());
        assert!(matches!(
            source.load(&NoNetwork),
            Err(GazetteerError::Fetch { .. })
        ));
        assert_eq!(source.to_string(), "https://example.test/x.kmz");
    }
}
