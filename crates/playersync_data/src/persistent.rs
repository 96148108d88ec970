//! Persistent data container tags.
//!
//! Plugins attach namespaced, typed tags to players; those survive a sync
//! round-trip with their exact tag kind. A `BYTE` written on one server must
//! come back as a `BYTE` on another, never silently widened.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single typed tag value.
///
/// Encodes as `{"type":"<KIND>","value":<v>}` on the wire, keeping the kind
/// explicit so decoding restores the original numeric width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PersistentDataTag {
    /// Single signed byte.
    #[serde(rename = "BYTE")]
    Byte(i8),
    /// 16-bit signed integer.
    #[serde(rename = "SHORT")]
    Short(i16),
    /// 32-bit signed integer.
    #[serde(rename = "INTEGER")]
    Integer(i32),
    /// 64-bit signed integer.
    #[serde(rename = "LONG")]
    Long(i64),
    /// 32-bit float.
    #[serde(rename = "FLOAT")]
    Float(f32),
    /// 64-bit float.
    #[serde(rename = "DOUBLE")]
    Double(f64),
    /// UTF-8 string.
    #[serde(rename = "STRING")]
    String(String),
}

impl PersistentDataTag {
    /// Returns the symbolic kind name used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            PersistentDataTag::Byte(_) => "BYTE",
            PersistentDataTag::Short(_) => "SHORT",
            PersistentDataTag::Integer(_) => "INTEGER",
            PersistentDataTag::Long(_) => "LONG",
            PersistentDataTag::Float(_) => "FLOAT",
            PersistentDataTag::Double(_) => "DOUBLE",
            PersistentDataTag::String(_) => "STRING",
        }
    }
}

/// All persistent data tags attached to a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistentDataContainerData {
    /// Tags keyed by namespaced key, e.g. `someplugin:coins`.
    pub persistent_data_map: BTreeMap<String, PersistentDataTag>,
}

impl PersistentDataContainerData {
    /// Creates a container from a tag map.
    pub fn new(persistent_data_map: BTreeMap<String, PersistentDataTag>) -> Self {
        Self {
            persistent_data_map,
        }
    }
}
