pub mod geonames_reader;
pub mod kml_reader;

pub use geonames_reader::GeoNamesReader;
pub use kml_reader::{KmlReader, PlacemarkGeometry, RawPlacemark};
