//! Advancement progress records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Progress towards a single advancement.
///
/// Snapshots carry these as an ordered list; the order in which the platform
/// reports them is preserved through encode/decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvancementData {
    /// Namespaced advancement key, e.g. `minecraft:story/mine_stone`.
    pub key: String,
    /// Completion timestamp per awarded criterion.
    pub completed_criteria: BTreeMap<String, DateTime<Utc>>,
}

impl AdvancementData {
    /// Creates an advancement record.
    pub fn new(
        key: impl Into<String>,
        completed_criteria: BTreeMap<String, DateTime<Utc>>,
    ) -> Self {
        Self {
            key: key.into(),
            completed_criteria,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_keys_serialize_sorted() {
        let mut criteria = BTreeMap::new();
        let when = DateTime::from_timestamp(1_660_000_000, 0).unwrap();
        criteria.insert("zeta".to_string(), when);
        criteria.insert("alpha".to_string(), when);

        let record = AdvancementData::new("minecraft:story/root", criteria);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.find("alpha").unwrap() < json.find("zeta").unwrap());
    }
}
