//! Comparable game versions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an empty version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("version string is empty")]
pub struct VersionParseError;

/// A comparable Minecraft version, e.g. `1.19.2` or `1.19-pre1`.
///
/// Parsing is lenient, matching what game servers actually report:
/// an optional `-<meta>` suffix is split off, and any non-numeric segment
/// counts as zero. Ordering compares numeric segments piecewise with missing
/// segments as zero; the metadata suffix participates only as a final
/// lexical tiebreaker between otherwise identical versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinecraftVersion {
    segments: Vec<u32>,
    meta: String,
}

impl MinecraftVersion {
    /// Creates a version from numeric segments.
    ///
    /// Trailing zero segments are stripped so `1.19.0` equals `1.19`.
    pub fn new(segments: impl Into<Vec<u32>>) -> Self {
        Self::with_meta(segments, "")
    }

    /// Creates a version from numeric segments and a metadata suffix.
    pub fn with_meta(segments: impl Into<Vec<u32>>, meta: impl Into<String>) -> Self {
        let mut segments = segments.into();
        while segments.last() == Some(&0) {
            segments.pop();
        }
        Self {
            segments,
            meta: meta.into(),
        }
    }
}

impl FromStr for MinecraftVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError);
        }
        let (digits, meta) = match trimmed.split_once('-') {
            Some((digits, meta)) => (digits, meta),
            None => (trimmed, ""),
        };
        let segments: Vec<u32> = digits
            .split('.')
            .map(|segment| segment.parse().unwrap_or(0))
            .collect();
        Ok(Self::with_meta(segments, meta))
    }
}

impl Ord for MinecraftVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let left = self.segments.get(i).copied().unwrap_or(0);
            let right = other.segments.get(i).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.meta.cmp(&other.meta)
    }
}

impl PartialOrd for MinecraftVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MinecraftVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "0")?;
        } else {
            for (i, segment) in self.segments.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{segment}")?;
            }
        }
        if !self.meta.is_empty() {
            write!(f, "-{}", self.meta)?;
        }
        Ok(())
    }
}
