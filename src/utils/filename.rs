use crate::models::Body;
use crate::utils::constants::{
    EARTH_OUTPUT_DIR, GEOJSON_EXTENSION, INDEX_EXTENSION, OUTPUT_PREFIX, PLANETARY_OUTPUT_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Destination files for one gazetteer source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub index: PathBuf,
    pub geojson: PathBuf,
}

impl OutputPaths {
    pub fn new(index: impl Into<PathBuf>, geojson: impl Into<PathBuf>) -> Self {
        Self {
            index: index.into(),
            geojson: geojson.into(),
        }
    }

    fn for_stem(dir: PathBuf, stem: &str) -> Self {
        let base = format!("{}_{}", OUTPUT_PREFIX, stem);
        Self {
            index: dir.join(format!("{}.{}", base, INDEX_EXTENSION)),
            geojson: dir.join(format!("{}.{}", base, GEOJSON_EXTENSION)),
        }
    }
}

/// Default Earth outputs: {output_dir}/earth/gazetteer_earth.{json,geojson}
pub fn default_earth_output_paths(output_dir: &Path) -> OutputPaths {
    OutputPaths::for_stem(output_dir.join(EARTH_OUTPUT_DIR), "earth")
}

/// Default planetary outputs: {output_dir}/marsandmoon/gazetteer_{body}.{json,geojson}
pub fn default_planetary_output_paths(output_dir: &Path, body: Body) -> OutputPaths {
    OutputPaths::for_stem(output_dir.join(PLANETARY_OUTPUT_DIR), body.file_stem())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_earth_output_paths() {
        let paths = default_earth_output_paths(Path::new("output"));

        assert_eq!(paths.index, PathBuf::from("output/earth/gazetteer_earth.json"));
        assert_eq!(
            paths.geojson,
            PathBuf::from("output/earth/gazetteer_earth.geojson")
        );
    }

    #[test]
    fn test_default_planetary_output_paths() {
        let moon = default_planetary_output_paths(Path::new("data"), Body::Moon);
        let mars = default_planetary_output_paths(Path::new("data"), Body::Mars);

        assert_eq!(moon.index, PathBuf::from("data/marsandmoon/gazetteer_moon.json"));
        assert_eq!(
            mars.geojson,
            PathBuf::from("data/marsandmoon/gazetteer_mars.geojson")
        );
    }
}
