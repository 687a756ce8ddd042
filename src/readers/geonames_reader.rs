use crate::error::Result;
use crate::models::{EarthRecord, GazetteerRecord};
use crate::processors::skip_report::{ParseOutcome, SkipReason};
use crate::utils::constants::{
    COL_ASCII_NAME, COL_COUNTRY_CODE, COL_FEATURE_CLASS, COL_FEATURE_CODE, COL_LATITUDE,
    COL_LONGITUDE, COL_NAME, COL_POPULATION, GEONAMES_FIELD_COUNT,
};
use crate::utils::coordinates::parse_decimal_degrees;
use csv::{ErrorKind, ReaderBuilder, StringRecord};
use std::collections::BTreeSet;

/// Reader for GeoNames `geoname` dump rows (tab separated, 19 columns, no header).
pub struct GeoNamesReader {
    feature_classes: Option<BTreeSet<String>>,
}

impl GeoNamesReader {
    pub fn new() -> Self {
        Self {
            feature_classes: None,
        }
    }

    /// Only keep rows whose feature class is in the set; `None` keeps everything.
    pub fn with_feature_classes(feature_classes: Option<BTreeSet<String>>) -> Self {
        Self { feature_classes }
    }

    /// Parse a whole dump.
    ///
    /// Malformed rows are counted and dropped; only I/O-level CSV failures abort.
    pub fn read_records(&self, data: &[u8]) -> Result<ParseOutcome<EarthRecord>> {
        // GeoNames never quotes fields but alternate names may contain literal quotes
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(data);

        let mut outcome = ParseOutcome::new();
        for result in reader.records() {
            match result {
                Ok(row) => outcome.push(self.parse_row(&row)),
                Err(err) if matches!(err.kind(), ErrorKind::Utf8 { .. }) => {
                    outcome.push(Err(SkipReason::InvalidEncoding))
                }
                Err(err) => return Err(err.into()),
            }
        }

        tracing::debug!(
            accepted = outcome.report.accepted,
            dropped = outcome.report.dropped_total(),
            "GeoNames rows parsed"
        );
        Ok(outcome)
    }

    /// Parse one row into a record, or say why it is skipped.
    pub fn parse_row(&self, row: &StringRecord) -> std::result::Result<EarthRecord, SkipReason> {
        if row.len() < GEONAMES_FIELD_COUNT {
            return Err(SkipReason::TooFewFields { found: row.len() });
        }
        let field = move |index: usize| row.get(index).unwrap_or_default();

        let feature_class = field(COL_FEATURE_CLASS);
        if let Some(keep) = &self.feature_classes {
            if !keep.contains(feature_class) {
                return Err(SkipReason::FilteredFeatureClass);
            }
        }

        let name = match field(COL_NAME) {
            "" => field(COL_ASCII_NAME),
            name => name,
        };
        if name.is_empty() {
            return Err(SkipReason::EmptyName);
        }

        let latitude = parse_decimal_degrees(field(COL_LATITUDE));
        let longitude = parse_decimal_degrees(field(COL_LONGITUDE));
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(SkipReason::InvalidCoordinate);
        };

        let population = field(COL_POPULATION).trim().parse::<u64>().unwrap_or(0);

        let record = EarthRecord::new(name, latitude, longitude)
            .with_country(field(COL_COUNTRY_CODE))
            .with_feature(feature_class, field(COL_FEATURE_CODE))
            .with_population(population);

        if record.key().is_empty() {
            return Err(SkipReason::EmptyKey);
        }

        Ok(record)
    }
}

impl Default for GeoNamesReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(name: &str, ascii: &str, lat: &str, lon: &str, class: &str, pop: &str) -> String {
        [
            "1", name, ascii, "", lat, lon, class, "PPL", "US", "", "", "", "", "", pop, "", "100",
            "America/Chicago", "2024-01-01",
        ]
        .join("\t")
    }

    #[test]
    fn test_parse_full_row() -> Result<()> {
        let data = "2950159\tBerlin\tBerlin\tBerlín,Berlino\t52.52437\t13.41053\tP\tPPLC\tDE\t\t16\t00\t11000\t11000000\t3426354\t\t74\tEurope/Berlin\t2022-09-30\n";
        let outcome = GeoNamesReader::new().read_records(data.as_bytes())?;

        assert_eq!(outcome.records.len(), 1);
        let berlin = &outcome.records[0];
        assert_eq!(berlin.name, "Berlin");
        assert_eq!(berlin.key, "berlin");
        assert_eq!(berlin.country_code, "DE");
        assert_eq!(berlin.feature_class, "P");
        assert_eq!(berlin.feature_code, "PPLC");
        assert_eq!(berlin.population, 3426354);
        assert!((berlin.latitude - 52.52437).abs() < 1e-9);
        assert!((berlin.longitude - 13.41053).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_short_row_is_dropped_and_parsing_continues() -> Result<()> {
        let data = format!(
            "1\tShort\t52.0\t13.0\tP\n{}\n",
            row("Springfield", "Springfield", "39.8", "-89.6", "P", "116250")
        );
        let outcome = GeoNamesReader::new().read_records(data.as_bytes())?;

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "Springfield");
        assert_eq!(
            outcome
                .report
                .dropped_for(&SkipReason::TooFewFields { found: 5 }),
            1
        );
        Ok(())
    }

    #[test]
    fn test_ascii_name_fallback_and_empty_names() {
        let reader = GeoNamesReader::new();
        let fallback = StringRecord::from(
            row("", "Ascii Town", "1", "2", "P", "").split('\t').collect::<Vec<_>>(),
        );
        let nameless =
            StringRecord::from(row("", "", "1", "2", "P", "").split('\t').collect::<Vec<_>>());

        assert_eq!(reader.parse_row(&fallback).unwrap().name, "Ascii Town");
        assert_eq!(reader.parse_row(&nameless), Err(SkipReason::EmptyName));
    }

    #[test]
    fn test_invalid_coordinates_are_dropped() -> Result<()> {
        let data = format!(
            "{}\n{}\n",
            row("Nowhere", "", "north", "13.0", "P", "1"),
            row("Elsewhere", "", "10.0", "", "P", "1")
        );
        let outcome = GeoNamesReader::new().read_records(data.as_bytes())?;

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.report.dropped_for(&SkipReason::InvalidCoordinate), 2);
        Ok(())
    }

    #[test]
    fn test_bad_population_defaults_to_zero() -> Result<()> {
        let data = format!(
            "{}\n{}\n",
            row("A", "", "1", "1", "P", "lots"),
            row("B", "", "1", "1", "P", "")
        );
        let outcome = GeoNamesReader::new().read_records(data.as_bytes())?;

        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.records.iter().all(|r| r.population == 0));
        Ok(())
    }

    #[test]
    fn test_feature_class_filter() -> Result<()> {
        let data = format!(
            "{}\n{}\n",
            row("Town", "", "1", "1", "P", "10"),
            row("Lake", "", "1", "1", "H", "0")
        );
        let keep: BTreeSet<String> = ["P".to_string()].into_iter().collect();
        let outcome = GeoNamesReader::with_feature_classes(Some(keep)).read_records(data.as_bytes())?;

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "Town");
        assert_eq!(
            outcome.report.dropped_for(&SkipReason::FilteredFeatureClass),
            1
        );
        Ok(())
    }

    #[test]
    fn test_literal_quotes_are_not_csv_quoting() -> Result<()> {
        let data = row("\"Little\" Rock", "", "34.7", "-92.3", "P", "202591");
        let outcome = GeoNamesReader::new().read_records(data.as_bytes())?;

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "\"Little\" Rock");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_row_is_dropped() -> Result<()> {
        let mut data = row("Bad\u{FFFD}", "", "1", "1", "P", "0").into_bytes();
        let pos = data.iter().position(|b| *b == 0xEF).unwrap();
        data[pos] = 0xFF;
        data.push(b'\n');
        data.extend_from_slice(row("Good", "", "1", "1", "P", "0").as_bytes());

        let outcome = GeoNamesReader::new().read_records(&data)?;
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.report.dropped_for(&SkipReason::InvalidEncoding), 1);
        Ok(())
    }
}
