//! # PlayerSync Codec
//!
//! Canonical snapshot encoding for storage and transport.
//!
//! This crate provides:
//! - [`SnapshotAdapter`], the byte-level contract shared by all encodings
//! - [`JsonAdapter`], the plain canonical JSON encoding
//! - [`CompressedAdapter`], gzip layered transparently over the JSON bytes
//!
//! ## Canonical Encoding Rules
//!
//! - Struct fields serialize in their declared order
//! - Maps are ordered by key
//! - Enums encode as their symbolic name, never ordinals
//! - Absent facets encode as their natural empty representation (empty
//!   string, list or map) with no special-casing at the call site
//!
//! Both adapters decode to bit-identical snapshots for the same logical
//! content, even though their wire bytes differ.
//!
//! ## Usage
//!
//! ```no_run
//! use playersync_codec::{JsonAdapter, SnapshotAdapter};
//! # fn snapshot() -> playersync_data::PlayerSnapshot { unimplemented!() }
//!
//! let adapter = JsonAdapter::new();
//! let bytes = adapter.to_bytes(&snapshot()).unwrap();
//! let decoded = adapter.from_bytes(&bytes).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod compressed;
mod error;
mod json;

pub use compressed::CompressedAdapter;
pub use error::{AdapterError, AdapterResult};
pub use json::JsonAdapter;

use playersync_data::PlayerSnapshot;

/// Converts snapshots to and from a byte encoding.
///
/// Implementations must be canonical: encoding the same logical snapshot
/// twice yields identical bytes, and every decoded snapshot re-encodes to
/// the bytes it was decoded from.
pub trait SnapshotAdapter: Send + Sync {
    /// Encodes a snapshot to its wire bytes.
    fn to_bytes(&self, snapshot: &PlayerSnapshot) -> AdapterResult<Vec<u8>>;

    /// Decodes a snapshot from wire bytes.
    ///
    /// Fails on malformed, truncated or corrupt input; never returns a
    /// partially populated snapshot.
    fn from_bytes(&self, bytes: &[u8]) -> AdapterResult<PlayerSnapshot>;
}
