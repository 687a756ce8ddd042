//! Run configuration.
//!
//! Layers, later wins: built-in defaults, an optional TOML/JSON/YAML file,
//! `GAZETTEER_*` environment variables (`__` separates nested keys, e.g.
//! `GAZETTEER_EARTH__SOURCE=full`), then whatever the CLI overrides.

use crate::error::{GazetteerError, Result};
use crate::models::Body;
use crate::processors::PlanetaryDedup;
use crate::utils::constants::{
    DEFAULT_OUTPUT_DIR, ENV_PREFIX, GEONAMES_FULL_URL, GEONAMES_SMALL_URL,
};
use crate::utils::filename::{default_earth_output_paths, OutputPaths};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Which GeoNames dump to build the Earth gazetteer from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarthSource {
    /// cities500.zip, populated places above 500 inhabitants
    #[default]
    Small,
    /// allCountries.zip, every GeoNames feature (very large)
    Full,
}

impl EarthSource {
    pub fn url(&self) -> &'static str {
        match self {
            EarthSource::Small => GEONAMES_SMALL_URL,
            EarthSource::Full => GEONAMES_FULL_URL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarthConfig {
    pub source: EarthSource,
    /// GeoNames feature classes to keep (e.g. `P`, `A`); `None` keeps all.
    pub feature_class_filter: Option<BTreeSet<String>>,
    pub output: Option<OutputPaths>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlanetaryConfig {
    #[validate(length(min = 1, message = "at least one planetary body is required"))]
    pub bodies: Vec<Body>,
    pub dedup: PlanetaryDedup,
}

impl Default for PlanetaryConfig {
    fn default() -> Self {
        Self {
            bodies: Body::ALL.to_vec(),
            dedup: PlanetaryDedup::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GazetteerConfig {
    pub output_dir: PathBuf,
    pub earth: EarthConfig,
    #[validate(nested)]
    pub planetary: PlanetaryConfig,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            earth: EarthConfig::default(),
            planetary: PlanetaryConfig::default(),
        }
    }
}

impl GazetteerConfig {
    /// Merge defaults, the optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: GazetteerConfig = builder.build()?.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if self.output_dir.as_os_str().is_empty() {
            return Err(GazetteerError::Config(
                "output_dir must not be empty".to_string(),
            ));
        }

        if let Some(filter) = &self.earth.feature_class_filter {
            if filter.is_empty() || filter.iter().any(|class| class.trim().is_empty()) {
                return Err(GazetteerError::Config(
                    "feature_class_filter must list at least one non-empty class".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn earth_output_paths(&self) -> OutputPaths {
        self.earth
            .output
            .clone()
            .unwrap_or_else(|| default_earth_output_paths(&self.output_dir))
    }
}

/// Parse a comma-separated list of feature classes (`"P, A"` → `{"A", "P"}`).
pub fn parse_feature_classes(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(|class| class.trim())
        .filter(|class| !class.is_empty())
        .map(|class| class.to_uppercase())
        .collect()
}
