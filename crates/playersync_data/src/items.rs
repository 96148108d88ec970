//! Opaque platform-serialized item and effect blobs.
//!
//! Item stacks and potion effects are encoded by the game-engine side of the
//! capability interface; the sync core carries them as opaque strings and
//! never inspects their contents.

use serde::{Deserialize, Serialize};

/// A serialized collection of item stacks (inventory or ender chest).
///
/// The empty string is the canonical representation of "no items".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemData {
    /// Platform-encoded item stack blob.
    pub serialized_items: String,
}

impl ItemData {
    /// Creates item data from a platform-encoded blob.
    pub fn new(serialized_items: impl Into<String>) -> Self {
        Self {
            serialized_items: serialized_items.into(),
        }
    }

    /// Returns true if this blob holds no items.
    pub fn is_empty(&self) -> bool {
        self.serialized_items.is_empty()
    }
}

/// A serialized collection of active potion effects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PotionEffectData {
    /// Platform-encoded potion effect blob.
    pub serialized_potion_effects: String,
}

impl PotionEffectData {
    /// Creates potion effect data from a platform-encoded blob.
    pub fn new(serialized_potion_effects: impl Into<String>) -> Self {
        Self {
            serialized_potion_effects: serialized_potion_effects.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(ItemData::default().is_empty());
        assert!(!ItemData::new("b64:AAAA").is_empty());
    }

    #[test]
    fn empty_blob_encodes_as_empty_string() {
        let json = serde_json::to_string(&ItemData::default()).unwrap();
        assert_eq!(json, r#"{"serialized_items":""}"#);
    }
}
