use crate::models::geojson::IntoFeature;
use crate::models::GazetteerRecord;
use crate::processors::normalizer::normalize_name;
use crate::utils::constants::{MARS_NOMENCLATURE_URL, MOON_NOMENCLATURE_URL};
use crate::utils::coordinates::lon_360_to_180;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Body {
    #[serde(alias = "moon")]
    Moon,
    #[serde(alias = "mars")]
    Mars,
}

impl Body {
    pub const ALL: [Body; 2] = [Body::Moon, Body::Mars];

    pub fn display_name(&self) -> &'static str {
        match self {
            Body::Moon => "Moon",
            Body::Mars => "Mars",
        }
    }

    /// Lowercase stem used in output filenames.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Body::Moon => "moon",
            Body::Mars => "mars",
        }
    }

    /// KMZ of nomenclature center points
    pub fn source_url(&self) -> &'static str {
        match self {
            Body::Moon => MOON_NOMENCLATURE_URL,
            Body::Mars => MARS_NOMENCLATURE_URL,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One named planetary feature with its representative point.
///
/// Serializes as the index entry:
/// `{body, lat, lon, lon_180, feature_type, raw_name}` where `lon` is the native
/// east-positive 0–360 longitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetaryRecord {
    #[serde(skip)]
    pub key: String,

    pub body: Body,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lon")]
    pub longitude_east: f64,

    #[serde(rename = "lon_180")]
    pub longitude_180: f64,

    pub feature_type: Option<String>,

    #[serde(rename = "raw_name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryProperties {
    pub body: Body,
    pub name: String,
    pub feature_type: Option<String>,
    pub lat: f64,
    pub lon_east_0_360: f64,
    pub lon_westneg_180: f64,
}

impl PlanetaryRecord {
    pub fn new(body: Body, name: impl Into<String>, longitude_east: f64, latitude: f64) -> Self {
        let name = name.into();
        Self {
            key: normalize_name(&name),
            body,
            latitude,
            longitude_east,
            longitude_180: lon_360_to_180(longitude_east),
            feature_type: None,
            name,
        }
    }

    pub fn with_feature_type(mut self, feature_type: Option<String>) -> Self {
        self.feature_type = feature_type;
        self
    }

    pub fn has_feature_type(&self) -> bool {
        self.feature_type.is_some()
    }
}

impl GazetteerRecord for PlanetaryRecord {
    fn key(&self) -> &str {
        &self.key
    }
}

impl IntoFeature for PlanetaryRecord {
    type Properties = PlanetaryProperties;

    fn point(&self) -> (f64, f64) {
        (self.longitude_180, self.latitude)
    }

    fn properties(&self) -> PlanetaryProperties {
        PlanetaryProperties {
            body: self.body,
            name: self.name.clone(),
            feature_type: self.feature_type.clone(),
            lat: self.latitude,
            lon_east_0_360: self.longitude_east,
            lon_westneg_180: self.longitude_180,
        }
    }
}
