/// Parse a decimal-degree coordinate field.
///
/// Surrounding whitespace is ignored. Non-finite values (`NaN`, `inf`) are
/// rejected since they cannot be represented in the JSON outputs.
///
/// # Examples
/// ```
/// use gazetteer_builder::utils::parse_decimal_degrees;
///
/// assert_eq!(parse_decimal_degrees(" 51.5074 "), Some(51.5074));
/// assert_eq!(parse_decimal_degrees("north"), None);
/// ```
pub fn parse_decimal_degrees(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Convert an east-positive longitude in [0, 360) to the [-180, 180] convention.
///
/// Computes `((lon + 180) mod 360) - 180`; a result of exactly -180 is reported
/// as +180.
pub fn lon_360_to_180(lon_east: f64) -> f64 {
    let converted = (lon_east + 180.0).rem_euclid(360.0) - 180.0;
    if converted == -180.0 {
        180.0
    } else {
        converted
    }
}

/// Parse a KML `<coordinates>` payload into `(lon, lat)` pairs.
///
/// Tuples are whitespace separated, each `lon,lat[,alt]`. Altitude is ignored and
/// tuples that do not start with two finite floats are dropped.
pub fn parse_kml_coordinates(text: &str) -> Vec<(f64, f64)> {
    text.split_whitespace()
        .filter_map(|tuple| {
            let mut parts = tuple.split(',');
            let lon = parse_decimal_degrees(parts.next()?)?;
            let lat = parse_decimal_degrees(parts.next()?)?;
            Some((lon, lat))
        })
        .collect()
}

/// Arithmetic mean of the vertices. A closed ring's repeated first vertex is
/// counted twice, like any other vertex.
pub fn vertex_centroid(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let (sum_lon, sum_lat) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), (lon, lat)| (x + lon, y + lat));

    let (lon, lat) = (sum_lon / count, sum_lat / count);
    // Sums of huge vertices can overflow
    (lon.is_finite() && lat.is_finite()).then_some((lon, lat))
}

/// Middle vertex by count (`points[len / 2]`), not by path length.
pub fn index_midpoint(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    points.get(points.len() / 2).copied()
}
