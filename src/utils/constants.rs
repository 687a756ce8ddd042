/// GeoNames dump URLs
pub const GEONAMES_SMALL_URL: &str = "https://download.geonames.org/export/dump/cities500.zip";
pub const GEONAMES_FULL_URL: &str = "https://download.geonames.org/export/dump/allCountries.zip";

/// USGS planetary nomenclature center points (planetocentric, east-positive)
pub const MOON_NOMENCLATURE_URL: &str =
    "https://asc-planetarynames-data.s3.us-west-2.amazonaws.com/MOON_nomenclature_center_pts.kmz";
pub const MARS_NOMENCLATURE_URL: &str =
    "https://asc-planetarynames-data.s3.us-west-2.amazonaws.com/MARS_nomenclature_center_pts.kmz";

/// Archive entry suffixes
pub const GEONAMES_ENTRY_SUFFIX: &str = ".txt";
pub const KML_ENTRY_SUFFIX: &str = ".kml";

/// GeoNames TSV layout (no header row)
pub const GEONAMES_FIELD_COUNT: usize = 19;
pub const COL_NAME: usize = 1;
pub const COL_ASCII_NAME: usize = 2;
pub const COL_LATITUDE: usize = 4;
pub const COL_LONGITUDE: usize = 5;
pub const COL_FEATURE_CLASS: usize = 6;
pub const COL_FEATURE_CODE: usize = 7;
pub const COL_COUNTRY_CODE: usize = 8;
pub const COL_POPULATION: usize = 14;

/// ExtendedData field names that may carry a planetary feature type, in priority order
pub const FEATURE_TYPE_FIELDS: [&str; 4] = ["feature_type", "descriptor", "descriptor_term", "type"];

/// Output layout, matching the directories the web viewer loads from
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const EARTH_OUTPUT_DIR: &str = "earth";
pub const PLANETARY_OUTPUT_DIR: &str = "marsandmoon";
pub const OUTPUT_PREFIX: &str = "gazetteer";
pub const INDEX_EXTENSION: &str = "json";
pub const GEOJSON_EXTENSION: &str = "geojson";

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "GAZETTEER";

pub const GEONAMES_ATTRIBUTION: &str =
    "GeoNames data is licensed CC BY 4.0; attribute it to https://www.geonames.org/";

pub const USER_AGENT: &str = concat!("gazetteer-builder/", env!("CARGO_PKG_VERSION"));
