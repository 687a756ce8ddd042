use crate::archive::{ArchiveSource, HttpClient};
use crate::config::GazetteerConfig;
use crate::error::Result;
use crate::pipeline::{fetch_entry, PipelineSummary};
use crate::processors::{Gazetteer, KeepMostPopulous};
use crate::readers::GeoNamesReader;
use crate::utils::constants::GEONAMES_ENTRY_SUFFIX;
use crate::utils::filename::OutputPaths;
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// GeoNames dump → Earth index + GeoJSON.
pub struct EarthPipeline<'a, C: HttpClient + ?Sized> {
    client: &'a C,
    source: ArchiveSource,
    reader: GeoNamesReader,
    output: OutputPaths,
    writer: JsonWriter,
}

impl<'a, C: HttpClient + ?Sized> EarthPipeline<'a, C> {
    pub fn new(client: &'a C, source: ArchiveSource, output: OutputPaths) -> Self {
        Self {
            client,
            source,
            reader: GeoNamesReader::new(),
            output,
            writer: JsonWriter::new(),
        }
    }

    /// Build from the merged configuration; `input` replaces the download with a local archive.
    pub fn from_config(client: &'a C, config: &GazetteerConfig, input: Option<PathBuf>) -> Self {
        let source = match input {
            Some(path) => ArchiveSource::Local(path),
            None => ArchiveSource::Remote(config.earth.source.url().to_string()),
        };

        Self::new(client, source, config.earth_output_paths())
            .with_feature_classes(config.earth.feature_class_filter.clone())
    }

    pub fn with_feature_classes(mut self, feature_classes: Option<BTreeSet<String>>) -> Self {
        self.reader = GeoNamesReader::with_feature_classes(feature_classes);
        self
    }

    pub fn run(&self, progress: &mut ProgressReporter) -> Result<PipelineSummary> {
        let entry = fetch_entry(self.client, &self.source, GEONAMES_ENTRY_SUFFIX, progress)?;

        progress.start_spinner(&format!("Parsing {}...", entry.name));
        let outcome = self.reader.read_records(&entry.bytes)?;

        let mut gazetteer = Gazetteer::new(KeepMostPopulous);
        gazetteer.extend(outcome.records);
        progress.finish_with_message(&format!(
            "Parsed {} places ({} unique names)",
            gazetteer.features().len(),
            gazetteer.index().len()
        ));

        progress.println(&format!(
            "Writing {} and {}...",
            self.output.index.display(),
            self.output.geojson.display()
        ));
        let written =
            self.writer
                .write_outputs(gazetteer.index(), gazetteer.features(), &self.output)?;

        tracing::info!(
            features = gazetteer.features().len(),
            index = gazetteer.index().len(),
            "Earth gazetteer written"
        );

        Ok(PipelineSummary {
            source: "Earth".to_string(),
            location: self.source.to_string(),
            archive_entry: entry.name,
            feature_count: gazetteer.features().len(),
            index_count: gazetteer.index().len(),
            collisions: gazetteer.index().collisions(),
            skips: outcome.report,
            output: self.output.clone(),
            written,
        })
    }
}
