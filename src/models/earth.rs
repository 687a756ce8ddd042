use crate::models::geojson::IntoFeature;
use crate::models::GazetteerRecord;
use crate::processors::normalizer::normalize_name;
use serde::{Deserialize, Serialize};

/// One GeoNames row that survived parsing.
///
/// Serializes as the index entry: `{name, lat, lon, country, fclass, fcode, population}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthRecord {
    #[serde(skip)]
    pub key: String,

    pub name: String,

    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lon")]
    pub longitude: f64,

    #[serde(rename = "country")]
    pub country_code: String,

    #[serde(rename = "fclass")]
    pub feature_class: String,

    #[serde(rename = "fcode")]
    pub feature_code: String,

    pub population: u64,
}

/// GeoJSON properties of an Earth feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthProperties {
    pub name: String,
    pub country: String,
    pub fclass: String,
    pub fcode: String,
    pub population: u64,
}

impl EarthRecord {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        let name = name.into();
        Self {
            key: normalize_name(&name),
            name,
            latitude,
            longitude,
            country_code: String::new(),
            feature_class: String::new(),
            feature_code: String::new(),
            population: 0,
        }
    }

    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    pub fn with_feature(
        mut self,
        feature_class: impl Into<String>,
        feature_code: impl Into<String>,
    ) -> Self {
        self.feature_class = feature_class.into();
        self.feature_code = feature_code.into();
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }
}

impl GazetteerRecord for EarthRecord {
    fn key(&self) -> &str {
        &self.key
    }
}

impl IntoFeature for EarthRecord {
    type Properties = EarthProperties;

    fn point(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    fn properties(&self) -> EarthProperties {
        EarthProperties {
            name: self.name.clone(),
            country: self.country_code.clone(),
            fclass: self.feature_class.clone(),
            fcode: self.feature_code.clone(),
            population: self.population,
        }
    }
}
