pub mod earth;
pub mod planetary;

pub use earth::EarthPipeline;
pub use planetary::PlanetaryPipeline;

use crate::archive::{ArchiveExtractor, ArchiveSource, ExtractedEntry, HttpClient};
use crate::error::Result;
use crate::processors::SkipReport;
use crate::utils::filename::OutputPaths;
use crate::utils::progress::ProgressReporter;
use crate::writers::WrittenFiles;

/// Load an archive and pull out its first entry ending in `suffix`.
///
/// The archive buffer is dropped before returning; only the entry stays alive.
pub(crate) fn fetch_entry<C: HttpClient + ?Sized>(
    client: &C,
    source: &ArchiveSource,
    suffix: &str,
    progress: &mut ProgressReporter,
) -> Result<ExtractedEntry> {
    progress.println(&format!("Downloading {}...", source));
    let data = source.load(client)?;
    progress.println(&format!(
        "Fetched {:.2} MB, extracting '*{}'...",
        data.len() as f64 / 1_048_576.0,
        suffix
    ));

    let entry = ArchiveExtractor::extract_first_with_suffix(&data, suffix)?;
    tracing::info!(source = %source, entry = %entry.name, "archive entry ready");
    Ok(entry)
}

/// What one source run produced.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// "Earth", "Moon" or "Mars"
    pub source: String,
    pub location: String,
    pub archive_entry: String,
    pub feature_count: usize,
    pub index_count: usize,
    pub collisions: usize,
    pub skips: SkipReport,
    pub output: OutputPaths,
    pub written: WrittenFiles,
}

impl PipelineSummary {
    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "{} Gazetteer Summary:\n\
            - Source: {}\n\
            - Archive entry: {}\n\
            - Features: {}\n\
            - Index entries: {} ({} name collisions)\n\
            - Index file: {} ({:.2} MB)\n\
            - GeoJSON file: {} ({:.2} MB)\n",
            self.source,
            self.location,
            self.archive_entry,
            self.feature_count,
            self.index_count,
            self.collisions,
            self.output.index.display(),
            self.written.index_bytes as f64 / 1_048_576.0,
            self.output.geojson.display(),
            self.written.geojson_bytes as f64 / 1_048_576.0,
        );

        summary.push_str(&self.skips.generate_summary(&self.source));
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::SkipReason;

    #[test]
    fn test_display_summary() {
        let mut skips = SkipReport::new();
        skips.record_accepted();
        skips.record_accepted();
        skips.record_skip(&SkipReason::EmptyName);

        let summary = PipelineSummary {
            source: "Moon".to_string(),
            location: "moon.kmz".to_string(),
            archive_entry: "doc.kml".to_string(),
            feature_count: 2,
            index_count: 1,
            collisions: 1,
            skips,
            output: OutputPaths::new("out/moon.json", "out/moon.geojson"),
            written: WrittenFiles {
                index_bytes: 1_048_576,
                geojson_bytes: 0,
            },
        };

        let text = summary.display_summary();
        assert!(text.starts_with("Moon Gazetteer Summary:"));
        assert!(text.contains("- Index entries: 1 (1 name collisions)"));
        assert!(text.contains("out/moon.json (1.00 MB)"));
        assert!(text.contains("Moon Parse Report"));
        assert!(text.contains("empty name: 1"));
    }
}
