//! GeoJSON shapes for the emitted point collections.
//!
//! Only what the gazetteer writes is modelled: a `FeatureCollection` of
//! `Feature`s whose geometry is always a `Point` in `[longitude, latitude]`
//! order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature<P> {
    pub geometry: PointGeometry,
    pub properties: P,
}

impl<P> Feature<P> {
    pub fn point(longitude: f64, latitude: f64, properties: P) -> Self {
        Self {
            geometry: PointGeometry {
                coordinates: [longitude, latitude],
            },
            properties,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.coordinates[1]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<P> FromIterator<Feature<P>> for FeatureCollection<P> {
    fn from_iter<I: IntoIterator<Item = Feature<P>>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

/// A record that can be rendered as a GeoJSON point feature.
pub trait IntoFeature {
    type Properties: Serialize;

    /// `(longitude, latitude)` of the emitted point.
    fn point(&self) -> (f64, f64);

    fn properties(&self) -> Self::Properties;

    fn to_feature(&self) -> Feature<Self::Properties> {
        let (longitude, latitude) = self.point();
        Feature::point(longitude, latitude, self.properties())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_collection_shape() {
        let collection: FeatureCollection<serde_json::Value> =
            vec![Feature::point(13.4, 52.5, json!({ "name": "Berlin" }))]
                .into_iter()
                .collect();

        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [13.4, 52.5] },
                    "properties": { "name": "Berlin" }
                }]
            })
        );
    }

    #[test]
    fn test_feature_accessors() {
        let feature = Feature::point(-70.5, 10.0, ());
        assert_eq!(feature.longitude(), -70.5);
        assert_eq!(feature.latitude(), 10.0);
    }
}
