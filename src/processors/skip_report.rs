use std::collections::BTreeMap;
use std::fmt;

/// Why a single source record was left out of the gazetteer.
///
/// Skips never abort a run; they are counted in a [`SkipReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields { found: usize },
    InvalidEncoding,
    EmptyName,
    InvalidCoordinate,
    FilteredFeatureClass,
    MissingGeometry,
    EmptyKey,
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::TooFewFields { .. } => "too few fields",
            SkipReason::InvalidEncoding => "invalid UTF-8",
            SkipReason::EmptyName => "empty name",
            SkipReason::InvalidCoordinate => "invalid coordinate",
            SkipReason::FilteredFeatureClass => "feature class filtered",
            SkipReason::MissingGeometry => "no usable geometry",
            SkipReason::EmptyKey => "name normalizes to empty key",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found } => write!(f, "{} ({})", self.label(), found),
            _ => write!(f, "{}", self.label()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipReport {
    pub total_seen: usize,
    pub accepted: usize,
    pub dropped: BTreeMap<&'static str, usize>,
}

impl SkipReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&mut self) {
        self.total_seen += 1;
        self.accepted += 1;
    }

    pub fn record_skip(&mut self, reason: &SkipReason) {
        self.total_seen += 1;
        *self.dropped.entry(reason.label()).or_insert(0) += 1;
    }

    pub fn dropped_total(&self) -> usize {
        self.dropped.values().sum()
    }

    pub fn dropped_for(&self, reason: &SkipReason) -> usize {
        self.dropped.get(reason.label()).copied().unwrap_or(0)
    }

    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    pub fn generate_summary(&self, source: &str) -> String {
        let mut summary = format!(
            "{} Parse Report:\n  Records seen: {}\n  Accepted: {}\n  Dropped: {}\n",
            source,
            self.total_seen,
            self.accepted,
            self.dropped_total()
        );

        for (label, count) in &self.dropped {
            summary.push_str(&format!("    {}: {}\n", label, count));
        }

        summary
    }
}

/// Records accepted by a reader plus the tally of those it dropped.
#[derive(Debug, Clone)]
pub struct ParseOutcome<R> {
    pub records: Vec<R>,
    pub report: SkipReport,
}

impl<R> ParseOutcome<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            report: SkipReport::new(),
        }
    }

    pub fn push(&mut self, result: Result<R, SkipReason>) {
        match result {
            Ok(record) => {
                self.report.record_accepted();
                self.records.push(record);
            }
            Err(reason) => {
                tracing::trace!(%reason, "record skipped");
                self.report.record_skip(&reason);
            }
        }
    }
}

impl<R> Default for ParseOutcome<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FromIterator<Result<R, SkipReason>> for ParseOutcome<R> {
    fn from_iter<I: IntoIterator<Item = Result<R, SkipReason>>>(iter: I) -> Self {
        let mut outcome = Self::new();
        for result in iter {
            outcome.push(result);
        }
        outcome
    }
}
