//! Plain canonical JSON adapter.

use crate::error::{AdapterError, AdapterResult};
use crate::SnapshotAdapter;
use playersync_data::PlayerSnapshot;

/// Encodes snapshots as canonical, deterministic JSON.
///
/// The encoding is byte-stable: the same logical snapshot always produces
/// identical bytes, so stored snapshots can be compared and deduplicated by
/// their raw content.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdapter;

impl JsonAdapter {
    /// Creates a new JSON adapter.
    pub fn new() -> Self {
        Self
    }

    /// Encodes a snapshot to a JSON string.
    pub fn to_json(&self, snapshot: &PlayerSnapshot) -> AdapterResult<String> {
        serde_json::to_string(snapshot).map_err(AdapterError::Json)
    }
}

impl SnapshotAdapter for JsonAdapter {
    fn to_bytes(&self, snapshot: &PlayerSnapshot) -> AdapterResult<Vec<u8>> {
        Ok(self.to_json(snapshot)?.into_bytes())
    }

    fn from_bytes(&self, bytes: &[u8]) -> AdapterResult<PlayerSnapshot> {
        serde_json::from_slice(bytes).map_err(AdapterError::Json)
    }
}
