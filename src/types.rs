use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::QueryError;

// ---------------------------------------------------------------------------
// Code points
// ---------------------------------------------------------------------------

/// Largest code point in the Unicode code space.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// One position in the Unicode code space, `0..=0x10FFFF`.
///
/// Unlike `char` this admits surrogates, which have labels but can never
/// appear in a Rust string.
///
/// `Display` renders the usual 4- to 6-digit uppercase hexadecimal form
/// (`00C9`, `1F9CB`, `10FFFF`), which is also the serialized form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// Returns `None` above `0x10FFFF`.
    pub const fn new(value: u32) -> Option<Self> {
        if value <= MAX_CODE_POINT {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Every code point from `self` through `end`, inclusive.
    pub fn through(self, end: CodePoint) -> impl Iterator<Item = CodePoint> {
        (self.0..=end.0).map(CodePoint)
    }

    /// The scalar value, or `None` for surrogates.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<CodePoint> for u32 {
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl fmt::UpperHex for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Parses `00C9`, `c9`, `U+00C9` or `u+00c9`.
impl FromStr for CodePoint {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("U+")
            .or_else(|| s.strip_prefix("u+"))
            .unwrap_or(s);
        if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(QueryError::invalid(
                "a 1- to 6-digit hex code point",
                format!("'{s}'"),
            ));
        }
        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(CodePoint::new)
            .ok_or_else(|| {
                QueryError::invalid("a hex code point in 0..=10FFFF", format!("'{s}'"))
            })
    }
}

impl Serialize for CodePoint {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CodePoint {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let text = String::deserialize(d)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Source fingerprint
// ---------------------------------------------------------------------------

/// SHA-256 digest of the raw name source, rendered as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SourceFingerprint(pub [u8; 32]);

impl fmt::Debug for SourceFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceFingerprint({})", hex::encode(self.0))
    }
}

impl fmt::Display for SourceFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl AsRef<[u8]> for SourceFingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for SourceFingerprint {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for SourceFingerprint {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 32 bytes"))?;
        Ok(Self(arr))
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One code point paired with its normative name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub code_point: CodePoint,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Build and summary reports
// ---------------------------------------------------------------------------

/// Counts gathered while building a forward table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Data lines naming one code point.
    pub single_entries: usize,
    /// Data lines naming an inclusive `START..END` range.
    pub range_entries: usize,
    /// Records produced by range expansion.
    pub expanded_records: usize,
    /// Blank and comment lines skipped.
    pub skipped_lines: usize,
}

/// A point-in-time description of a loaded engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub ucd_version: String,
    pub origin: String,
    pub fingerprint: SourceFingerprint,
    /// Names taken from the source; equal to the inverse table size.
    pub named_code_points: usize,
    /// Labels memoized by `charname` since the engine was built.
    pub synthesized_labels: usize,
    pub stats: BuildStats,
}

impl TableSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
