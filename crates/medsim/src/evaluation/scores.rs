use super::domain::Domain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse earned scores keyed by domain wire key, then metric id.
///
/// Values are taken as supplied: nothing here clamps to the metric maximum or
/// rejects negatives. A metric with no entry reads as zero, so "not attempted"
/// and "scored zero" are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricScores {
    domains: BTreeMap<String, BTreeMap<String, i64>>,
}

impl MetricScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: Domain, metric_id: &str, earned: i64) -> Self {
        self.record(domain, metric_id, earned);
        self
    }

    pub fn record(&mut self, domain: Domain, metric_id: &str, earned: i64) {
        self.domains
            .entry(domain.key().to_string())
            .or_default()
            .insert(metric_id.to_string(), earned);
    }

    pub fn earned(&self, domain: Domain, metric_id: &str) -> i64 {
        self.domains
            .get(domain.key())
            .and_then(|metrics| metrics.get(metric_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.values().all(BTreeMap::is_empty)
    }

    /// Domain keys present in the sheet that no [`Domain`] answers to.
    pub fn unrecognized_domains(&self) -> Vec<&str> {
        self.domains
            .keys()
            .filter(|key| Domain::from_key(key).is_none())
            .map(String::as_str)
            .collect()
    }
}
