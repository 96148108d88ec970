//! Player statistics counters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistic counters, split by the key type they are recorded against.
///
/// Untyped statistics map a statistic key directly to a count. The typed
/// variants nest one level: statistic key, then the block/item/entity key it
/// was recorded for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatisticsData {
    /// Counters keyed by statistic alone, e.g. `JUMP`.
    pub untyped_statistics: BTreeMap<String, i32>,
    /// Counters keyed by statistic, then block type, e.g. `MINE_BLOCK` → `STONE`.
    pub block_statistics: BTreeMap<String, BTreeMap<String, i32>>,
    /// Counters keyed by statistic, then item type, e.g. `USE_ITEM` → `BREAD`.
    pub item_statistics: BTreeMap<String, BTreeMap<String, i32>>,
    /// Counters keyed by statistic, then entity type, e.g. `KILL_ENTITY` → `ZOMBIE`.
    pub entity_statistics: BTreeMap<String, BTreeMap<String, i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_maps_encode_as_empty_objects() {
        let json = serde_json::to_string(&StatisticsData::default()).unwrap();
        assert_eq!(
            json,
            r#"{"untyped_statistics":{},"block_statistics":{},"item_statistics":{},"entity_statistics":{}}"#
        );
    }

    #[test]
    fn nested_counters_roundtrip() {
        let mut stats = StatisticsData::default();
        stats.untyped_statistics.insert("JUMP".into(), 42);
        stats
            .block_statistics
            .entry("MINE_BLOCK".into())
            .or_default()
            .insert("STONE".into(), 7);

        let json = serde_json::to_string(&stats).unwrap();
        let decoded: StatisticsData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, stats);
    }
}
