pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{lon_360_to_180, parse_decimal_degrees, parse_kml_coordinates};
pub use filename::{default_earth_output_paths, default_planetary_output_paths, OutputPaths};
pub use progress::ProgressReporter;
