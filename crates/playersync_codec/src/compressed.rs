//! Gzip-compressed adapter.

use crate::error::{AdapterError, AdapterResult};
use crate::json::JsonAdapter;
use crate::SnapshotAdapter;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use playersync_data::PlayerSnapshot;
use std::io::{Read, Write};

/// Gzip compression layered over the canonical JSON encoding.
///
/// Decodes to the same snapshot as [`JsonAdapter`] for the same logical
/// content; only the wire bytes differ. Inventories full of deeply nested
/// item blobs compress well, so this is the adapter deployments typically
/// store.
#[derive(Debug, Clone)]
pub struct CompressedAdapter {
    json: JsonAdapter,
    level: Compression,
}

impl CompressedAdapter {
    /// Creates a compressed adapter with the default compression level.
    pub fn new() -> Self {
        Self {
            json: JsonAdapter::new(),
            level: Compression::default(),
        }
    }

    /// Sets the gzip compression level (0-9).
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Compression::new(level);
        self
    }
}

impl Default for CompressedAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotAdapter for CompressedAdapter {
    fn to_bytes(&self, snapshot: &PlayerSnapshot) -> AdapterResult<Vec<u8>> {
        let plain = self.json.to_bytes(snapshot)?;
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        encoder
            .write_all(&plain)
            .map_err(AdapterError::Compression)?;
        encoder.finish().map_err(AdapterError::Compression)
    }

    fn from_bytes(&self, bytes: &[u8]) -> AdapterResult<PlayerSnapshot> {
        let mut decoder = GzDecoder::new(bytes);
        let mut plain = Vec::new();
        decoder
            .read_to_end(&mut plain)
            .map_err(AdapterError::Decompression)?;
        self.json.from_bytes(&plain)
    }
}
