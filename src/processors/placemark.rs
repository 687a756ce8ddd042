use crate::models::{Body, GazetteerRecord, PlanetaryRecord};
use crate::processors::feature_type::extract_feature_type;
use crate::processors::geometry::resolve_point;
use crate::processors::skip_report::{ParseOutcome, SkipReason};
use crate::readers::kml_reader::RawPlacemark;

/// Turns raw KML placemarks of one body into planetary records.
pub struct PlacemarkResolver {
    body: Body,
}

impl PlacemarkResolver {
    pub fn new(body: Body) -> Self {
        Self { body }
    }

    pub fn resolve(&self, placemark: &RawPlacemark) -> Result<PlanetaryRecord, SkipReason> {
        let name = placemark.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(SkipReason::EmptyName);
        }

        let point = resolve_point(&placemark.geometry).ok_or(SkipReason::MissingGeometry)?;

        let record = PlanetaryRecord::new(self.body, name, point.longitude, point.latitude)
            .with_feature_type(extract_feature_type(placemark));

        if record.key().is_empty() {
            return Err(SkipReason::EmptyKey);
        }

        Ok(record)
    }

    pub fn resolve_all(&self, placemarks: &[RawPlacemark]) -> ParseOutcome<PlanetaryRecord> {
        placemarks.iter().map(|pm| self.resolve(pm)).collect()
    }
}
