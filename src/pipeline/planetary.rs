use crate::archive::{ArchiveSource, HttpClient};
use crate::config::GazetteerConfig;
use crate::error::{GazetteerError, Result};
use crate::models::Body;
use crate::pipeline::{fetch_entry, PipelineSummary};
use crate::processors::{Gazetteer, PlacemarkResolver, PlanetaryDedup};
use crate::readers::KmlReader;
use crate::utils::constants::KML_ENTRY_SUFFIX;
use crate::utils::filename::default_planetary_output_paths;
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;
use std::path::PathBuf;

/// USGS nomenclature KMZ → per-body index + GeoJSON.
///
/// Bodies run one after another; each keeps its own index, so a name present
/// on both the Moon and Mars is never a collision.
pub struct PlanetaryPipeline<'a, C: HttpClient + ?Sized> {
    client: &'a C,
    bodies: Vec<Body>,
    dedup: PlanetaryDedup,
    output_dir: PathBuf,
    input: Option<PathBuf>,
    reader: KmlReader,
    writer: JsonWriter,
}

impl<'a, C: HttpClient + ?Sized> PlanetaryPipeline<'a, C> {
    pub fn new(client: &'a C, bodies: Vec<Body>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            bodies,
            dedup: PlanetaryDedup::default(),
            output_dir: output_dir.into(),
            input: None,
            reader: KmlReader::new(),
            writer: JsonWriter::new(),
        }
    }

    pub fn from_config(
        client: &'a C,
        config: &GazetteerConfig,
        input: Option<PathBuf>,
    ) -> Result<Self> {
        Self::new(client, config.planetary.bodies.clone(), &config.output_dir)
            .with_dedup(config.planetary.dedup)
            .with_input(input)
    }

    pub fn with_dedup(mut self, dedup: PlanetaryDedup) -> Self {
        self.dedup = dedup;
        self
    }

    /// Read the KMZ from disk instead of downloading it. Only valid for a single body.
    pub fn with_input(mut self, input: Option<PathBuf>) -> Result<Self> {
        if input.is_some() && self.bodies.len() != 1 {
            return Err(GazetteerError::Config(format!(
                "a local input archive needs exactly one body, got {}",
                self.bodies.len()
            )));
        }
        self.input = input;
        Ok(self)
    }

    pub fn run(&self, progress: &mut ProgressReporter) -> Result<Vec<PipelineSummary>> {
        let mut summaries = Vec::with_capacity(self.bodies.len());
        for &body in &self.bodies {
            summaries.push(self.run_body(body, progress)?);
        }
        Ok(summaries)
    }

    pub fn run_body(&self, body: Body, progress: &mut ProgressReporter) -> Result<PipelineSummary> {
        let source = self.source_for(body);
        let output = default_planetary_output_paths(&self.output_dir, body);

        progress.println(&format!("{} nomenclature", body.display_name()));
        let entry = fetch_entry(self.client, &source, KML_ENTRY_SUFFIX, progress)?;

        progress.start_spinner(&format!("Parsing {}...", entry.name));
        let placemarks = self.reader.read_placemarks(&entry.bytes)?;
        let outcome = PlacemarkResolver::new(body).resolve_all(&placemarks);

        let mut gazetteer = Gazetteer::new(self.dedup);
        gazetteer.extend(outcome.records);
        progress.finish_with_message(&format!(
            "Parsed {} {} features ({} unique names)",
            gazetteer.features().len(),
            body.display_name(),
            gazetteer.index().len()
        ));

        progress.println(&format!(
            "Writing {} and {}...",
            output.index.display(),
            output.geojson.display()
        ));
        let written = self
            .writer
            .write_outputs(gazetteer.index(), gazetteer.features(), &output)?;

        tracing::info!(
            body = %body,
            features = gazetteer.features().len(),
            index = gazetteer.index().len(),
            "planetary gazetteer written"
        );

        Ok(PipelineSummary {
            source: body.display_name().to_string(),
            location: source.to_string(),
            archive_entry: entry.name,
            feature_count: gazetteer.features().len(),
            index_count: gazetteer.index().len(),
            collisions: gazetteer.index().collisions(),
            skips: outcome.report,
            output,
            written,
        })
    }

    fn source_for(&self, body: Body) -> ArchiveSource {
        match &self.input {
            Some(path) => ArchiveSource::Local(path.clone()),
            None => ArchiveSource::Remote(body.source_url().to_string()),
        }
    }
}
