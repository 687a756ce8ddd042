use crate::error::Result;
use crate::models::{FeatureCollection, GazetteerRecord, IntoFeature};
use crate::processors::GazetteerIndex;
use crate::utils::filename::OutputPaths;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Index files are pretty-printed, GeoJSON is compact. Parent directories are created.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

/// Sizes of the files written for one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenFiles {
    pub index_bytes: u64,
    pub geojson_bytes: u64,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the name index as a JSON object keyed by normalized name.
    pub fn write_index<R>(&self, index: &GazetteerIndex<R>, path: &Path) -> Result<u64>
    where
        R: GazetteerRecord + Serialize,
    {
        self.write_json(index, path, true)
    }

    /// Write every record, in order, as a compact GeoJSON FeatureCollection.
    pub fn write_feature_collection<R: IntoFeature>(&self, records: &[R], path: &Path) -> Result<u64> {
        let collection: FeatureCollection<R::Properties> =
            records.iter().map(IntoFeature::to_feature).collect();
        self.write_json(&collection, path, false)
    }

    pub fn write_outputs<R>(
        &self,
        index: &GazetteerIndex<R>,
        features: &[R],
        paths: &OutputPaths,
    ) -> Result<WrittenFiles>
    where
        R: GazetteerRecord + Serialize + IntoFeature,
    {
        let index_bytes = self.write_index(index, &paths.index)?;
        let geojson_bytes = self.write_feature_collection(features, &paths.geojson)?;
        Ok(WrittenFiles {
            index_bytes,
            geojson_bytes,
        })
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T, path: &Path, pretty: bool) -> Result<u64> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writer.flush()?;

        Ok(fs::metadata(path)?.len())
    }
}
