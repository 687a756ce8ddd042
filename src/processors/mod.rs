pub mod deduplicator;
pub mod feature_type;
pub mod geometry;
pub mod normalizer;
pub mod placemark;
pub mod skip_report;

pub use deduplicator::{
    DedupPolicy, Gazetteer, GazetteerIndex, KeepMostPopulous, OfferOutcome, PlanetaryDedup,
};
pub use feature_type::extract_feature_type;
pub use geometry::{resolve_point, GeometrySource, ResolvedPoint};
pub use normalizer::normalize_name;
pub use placemark::PlacemarkResolver;
pub use skip_report::{ParseOutcome, SkipReason, SkipReport};
