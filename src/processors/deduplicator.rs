use crate::models::{EarthRecord, GazetteerRecord, PlanetaryRecord};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Collision rule for records sharing a normalized key.
pub trait DedupPolicy<R> {
    /// Whether `candidate` should displace the record already stored under the key.
    fn should_replace(&self, existing: &R, candidate: &R) -> bool;
}

/// Earth rule: the more populous place wins, ties keep the first seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepMostPopulous;

impl DedupPolicy<EarthRecord> for KeepMostPopulous {
    fn should_replace(&self, existing: &EarthRecord, candidate: &EarthRecord) -> bool {
        candidate.population > existing.population
    }
}

/// Planetary rule. There is no population-like signal for planetary features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetaryDedup {
    /// Later placemark always overwrites.
    #[default]
    LastWriteWins,
    /// Later placemark overwrites unless it would replace a typed record with an untyped one.
    PreferTyped,
}

impl DedupPolicy<PlanetaryRecord> for PlanetaryDedup {
    fn should_replace(&self, existing: &PlanetaryRecord, candidate: &PlanetaryRecord) -> bool {
        match self {
            PlanetaryDedup::LastWriteWins => true,
            PlanetaryDedup::PreferTyped => {
                candidate.has_feature_type() || !existing.has_feature_type()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    Inserted,
    Replaced,
    Kept,
}

/// Normalized key to the single winning record.
///
/// Keys iterate (and serialize) in sorted order.
#[derive(Debug, Clone)]
pub struct GazetteerIndex<R> {
    entries: BTreeMap<String, R>,
    collisions: usize,
}

impl<R: GazetteerRecord> GazetteerIndex<R> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            collisions: 0,
        }
    }

    pub fn offer<P: DedupPolicy<R>>(&mut self, record: R, policy: &P) -> OfferOutcome {
        match self.entries.get_mut(record.key()) {
            Some(existing) => {
                self.collisions += 1;
                if policy.should_replace(existing, &record) {
                    *existing = record;
                    OfferOutcome::Replaced
                } else {
                    OfferOutcome::Kept
                }
            }
            None => {
                self.entries.insert(record.key().to_string(), record);
                OfferOutcome::Inserted
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of offers that hit an existing key.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &R)> {
        self.entries.iter()
    }
}

impl<R: GazetteerRecord> Default for GazetteerIndex<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Serialize> Serialize for GazetteerIndex<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Append-only feature list plus the deduplicated index built alongside it.
///
/// Every pushed record lands in `features` in arrival order; the index only
/// keeps the policy winner per key, so `features.len() >= index.len()` always.
#[derive(Debug, Clone)]
pub struct Gazetteer<R, P> {
    features: Vec<R>,
    index: GazetteerIndex<R>,
    policy: P,
}

impl<R: GazetteerRecord, P: DedupPolicy<R>> Gazetteer<R, P> {
    pub fn new(policy: P) -> Self {
        Self {
            features: Vec::new(),
            index: GazetteerIndex::new(),
            policy,
        }
    }

    pub fn push(&mut self, record: R) -> OfferOutcome {
        let outcome = self.index.offer(record.clone(), &self.policy);
        self.features.push(record);
        outcome
    }

    pub fn features(&self) -> &[R] {
        &self.features
    }

    pub fn index(&self) -> &GazetteerIndex<R> {
        &self.index
    }
}

impl<R: GazetteerRecord, P: DedupPolicy<R>> Extend<R> for Gazetteer<R, P> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}
