pub mod earth;
pub mod geojson;
pub mod planetary;

pub use earth::{EarthProperties, EarthRecord};
pub use geojson::{Feature, FeatureCollection, IntoFeature, PointGeometry};
pub use planetary::{Body, PlanetaryProperties, PlanetaryRecord};

/// Common view over per-source records for indexing.
pub trait GazetteerRecord: Clone {
    /// Normalized lookup key; empty means the record is unusable.
    fn key(&self) -> &str;
}
