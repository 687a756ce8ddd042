use crate::readers::kml_reader::PlacemarkGeometry;
use crate::utils::coordinates::{index_midpoint, parse_kml_coordinates, vertex_centroid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometrySource {
    Point,
    PolygonCentroid,
    LineMidpoint,
}

/// Representative point of a placemark, in the source longitude convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub source: GeometrySource,
}

impl ResolvedPoint {
    fn from_pair((longitude, latitude): (f64, f64), source: GeometrySource) -> Self {
        Self {
            longitude,
            latitude,
            source,
        }
    }
}

/// Pick one point for a placemark.
///
/// Tried in order, first success wins: the Point's first coordinate, the mean
/// of the Polygon's outer ring vertices, the middle vertex of the LineString.
/// A geometry whose coordinate text yields no valid tuple falls through to the
/// next one.
pub fn resolve_point(geometry: &PlacemarkGeometry) -> Option<ResolvedPoint> {
    let point = geometry
        .point
        .as_deref()
        .and_then(|text| parse_kml_coordinates(text).first().copied())
        .map(|pair| ResolvedPoint::from_pair(pair, GeometrySource::Point));

    point
        .or_else(|| {
            geometry
                .polygon_outer
                .as_deref()
                .and_then(|text| vertex_centroid(&parse_kml_coordinates(text)))
                .map(|pair| ResolvedPoint::from_pair(pair, GeometrySource::PolygonCentroid))
        })
        .or_else(|| {
            geometry
                .line
                .as_deref()
                .and_then(|text| index_midpoint(&parse_kml_coordinates(text)))
                .map(|pair| ResolvedPoint::from_pair(pair, GeometrySource::LineMidpoint))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(point: Option<&str>, polygon: Option<&str>, line: Option<&str>) -> PlacemarkGeometry {
        PlacemarkGeometry {
            point: point.map(str::to_string),
            polygon_outer: polygon.map(str::to_string),
            line: line.map(str::to_string),
        }
    }

    #[test]
    fn test_point_takes_priority() {
        let resolved = resolve_point(&geometry(
            Some("10,20,0 30,40"),
            Some("0,0 0,2 2,2 2,0"),
            None,
        ))
        .unwrap();

        assert_eq!((resolved.longitude, resolved.latitude), (10.0, 20.0));
        assert_eq!(resolved.source, GeometrySource::Point);
    }

    #[test]
    fn test_polygon_only_yields_centroid() {
        let resolved = resolve_point(&geometry(None, Some("0,0 0,2 2,2 2,0"), None)).unwrap();

        assert_eq!((resolved.longitude, resolved.latitude), (1.0, 1.0));
        assert_eq!(resolved.source, GeometrySource::PolygonCentroid);
    }

    #[test]
    fn test_line_midpoint_by_index() {
        let resolved =
            resolve_point(&geometry(None, None, Some("280,-10 290,-12 300,-14"))).unwrap();

        assert_eq!((resolved.longitude, resolved.latitude), (290.0, -12.0));
        assert_eq!(resolved.source, GeometrySource::LineMidpoint);
    }

    #[test]
    fn test_unparsable_point_falls_through() {
        let resolved =
            resolve_point(&geometry(Some("garbage"), None, Some("1,1 3,3"))).unwrap();

        assert_eq!(resolved.source, GeometrySource::LineMidpoint);
        assert_eq!((resolved.longitude, resolved.latitude), (3.0, 3.0));
    }

    #[test]
    fn test_no_usable_geometry() {
        assert_eq!(resolve_point(&PlacemarkGeometry::default()), None);
        assert_eq!(resolve_point(&geometry(Some("x,y"), Some(""), Some(" "))), None);
    }
}
