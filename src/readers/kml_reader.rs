use crate::error::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Coordinate payloads found under a placemark, first occurrence of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacemarkGeometry {
    pub point: Option<String>,
    pub polygon_outer: Option<String>,
    pub line: Option<String>,
}

impl PlacemarkGeometry {
    pub fn is_empty(&self) -> bool {
        self.point.is_none() && self.polygon_outer.is_none() && self.line.is_none()
    }
}

/// A `<Placemark>` as it appears in the document, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlacemark {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `(name, value)` pairs from `ExtendedData`, in document order.
    pub extended_data: Vec<(String, String)>,
    pub geometry: PlacemarkGeometry,
}

impl RawPlacemark {
    /// First non-empty extended value whose field name is in `fields`.
    pub fn extended_value(&self, fields: &[&str]) -> Option<&str> {
        self.extended_data
            .iter()
            .find(|(name, value)| fields.contains(&name.as_str()) && !value.trim().is_empty())
            .map(|(_, value)| value.as_str())
    }
}

/// Streaming reader for KML placemarks.
///
/// Elements are matched by local name, so documents with or without the KML
/// namespace prefix are accepted. Placemarks may sit at any depth (inside
/// `Document` and nested `Folder`s).
pub struct KmlReader {
    trim_text: bool,
}

impl KmlReader {
    pub fn new() -> Self {
        Self { trim_text: true }
    }

    pub fn read_placemarks(&self, kml: &[u8]) -> Result<Vec<RawPlacemark>> {
        let mut reader = Reader::from_reader(kml);
        reader.trim_text(self.trim_text);

        let mut placemarks = Vec::new();
        let mut current: Option<RawPlacemark> = None;
        let mut path: Vec<Vec<u8>> = Vec::new();
        let mut text = String::new();
        let mut data_name: Option<String> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Eof => break,
                Event::Start(e) => {
                    let name = e.local_name().as_ref().to_vec();
                    match name.as_slice() {
                        b"Placemark" => current = Some(RawPlacemark::default()),
                        b"Data" | b"SimpleData" => data_name = attribute_value(&e, b"name"),
                        _ => {}
                    }
                    path.push(name);
                    text.clear();
                }
                Event::Text(e) => text.push_str(&e.unescape()?),
                Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e.into_inner())),
                Event::End(_) => {
                    if let Some(name) = path.pop() {
                        if let Some(placemark) = current.as_mut() {
                            Self::close_element(placemark, &name, &path, &text, &mut data_name);
                        }
                        if name == b"Placemark" {
                            if let Some(placemark) = current.take() {
                                placemarks.push(placemark);
                            }
                        }
                    }
                    text.clear();
                }
                _ => {}
            }
            buf.clear();
        }

        tracing::debug!(count = placemarks.len(), "KML placemarks read");
        Ok(placemarks)
    }

    fn close_element(
        placemark: &mut RawPlacemark,
        name: &[u8],
        parents: &[Vec<u8>],
        text: &str,
        data_name: &mut Option<String>,
    ) {
        let parent = parents.last().map(Vec::as_slice);
        let within = |tag: &[u8]| parents.iter().any(|p| p.as_slice() == tag);

        match name {
            b"name" if parent == Some(b"Placemark".as_slice()) => {
                placemark.name.get_or_insert_with(|| text.to_string());
            }
            b"description" if parent == Some(b"Placemark".as_slice()) => {
                placemark.description.get_or_insert_with(|| text.to_string());
            }
            b"value" if parent == Some(b"Data".as_slice()) => {
                if let Some(field) = data_name.take() {
                    placemark.extended_data.push((field, text.to_string()));
                }
            }
            b"SimpleData" => {
                if let Some(field) = data_name.take() {
                    placemark.extended_data.push((field, text.to_string()));
                }
            }
            b"coordinates" => {
                let geometry = &mut placemark.geometry;
                let slot = if within(b"Point") {
                    &mut geometry.point
                } else if within(b"Polygon") && within(b"outerBoundaryIs") {
                    &mut geometry.polygon_outer
                } else if within(b"LineString") {
                    &mut geometry.line
                } else {
                    return;
                };
                slot.get_or_insert_with(|| text.to_string());
            }
            _ => {}
        }
    }
}

impl Default for KmlReader {
    fn default() -> Self {
        Self::new()
    }
}

fn attribute_value(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .with_checks(false)
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>MOON nomenclature</name>
    <Folder>
      <name>Craters</name>
      <Placemark>
        <name>Tycho</name>
        <description><![CDATA[<b>Feature Type:</b> Crater]]></description>
        <ExtendedData>
          <Data name="diameter"><value>85.29</value></Data>
          <Data name="type"><value>Crater, craters</value></Data>
        </ExtendedData>
        <Point><coordinates>348.79,-43.3,0</coordinates></Point>
      </Placemark>
      <Folder>
        <Placemark>
          <name>Mare Nubium</name>
          <Polygon>
            <outerBoundaryIs><LinearRing><coordinates>0,0 0,2 2,2 2,0</coordinates></LinearRing></outerBoundaryIs>
            <innerBoundaryIs><LinearRing><coordinates>9,9 9,9</coordinates></LinearRing></innerBoundaryIs>
          </Polygon>
        </Placemark>
      </Folder>
    </Folder>
  </Document>
</kml>"#;

    #[test]
    fn test_reads_nested_placemarks() -> Result<()> {
        let placemarks = KmlReader::new().read_placemarks(SAMPLE.as_bytes())?;

        assert_eq!(placemarks.len(), 2);
        assert_eq!(placemarks[0].name.as_deref(), Some("Tycho"));
        assert_eq!(
            placemarks[0].description.as_deref(),
            Some("<b>Feature Type:</b> Crater")
        );
        assert_eq!(
            placemarks[0].geometry.point.as_deref(),
            Some("348.79,-43.3,0")
        );
        assert_eq!(
            placemarks[0].extended_value(&["type"]),
            Some("Crater, craters")
        );

        assert_eq!(placemarks[1].name.as_deref(), Some("Mare Nubium"));
        assert_eq!(
            placemarks[1].geometry,
            PlacemarkGeometry {
                point: None,
                polygon_outer: Some("0,0 0,2 2,2 2,0".to_string()),
                line: None,
            }
        );
        Ok(())
    }

    #[test]
    fn test_folder_names_are_not_placemark_names() -> Result<()> {
        let placemarks = KmlReader::new().read_placemarks(SAMPLE.as_bytes())?;
        assert!(placemarks
            .iter()
            .all(|p| p.name.as_deref() != Some("Craters")));
        Ok(())
    }

    #[test]
    fn test_prefixed_namespace_and_simple_data() -> Result<()> {
        let kml = r#"<kml:kml xmlns:kml="http://www.opengis.net/kml/2.2">
  <kml:Placemark>
    <kml:name>Valles Marineris</kml:name>
    <kml:ExtendedData><kml:SchemaData>
      <kml:SimpleData name="descriptor_term">Chasma</kml:SimpleData>
    </kml:SchemaData></kml:ExtendedData>
    <kml:LineString><kml:coordinates>280,-10 290,-12 300,-14</kml:coordinates></kml:LineString>
  </kml:Placemark>
</kml:kml>"#;

        let placemarks = KmlReader::new().read_placemarks(kml.as_bytes())?;
        assert_eq!(placemarks.len(), 1);
        assert_eq!(placemarks[0].name.as_deref(), Some("Valles Marineris"));
        assert_eq!(
            placemarks[0].extended_value(&["descriptor_term"]),
            Some("Chasma")
        );
        assert_eq!(
            placemarks[0].geometry.line.as_deref(),
            Some("280,-10 290,-12 300,-14")
        );
        Ok(())
    }

    #[test]
    fn test_empty_value_is_ignored_for_lookup() {
        let placemark = RawPlacemark {
            extended_data: vec![
                ("feature_type".to_string(), "  ".to_string()),
                ("descriptor".to_string(), "Mons".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(
            placemark.extended_value(&["feature_type", "descriptor"]),
            Some("Mons")
        );
        assert!(placemark.geometry.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = KmlReader::new().read_placemarks(b"<kml><Placemark><name>x</Placemark>");
        assert!(result.is_err());
    }
}
