//! Code point labels for code points without a normative name.
//!
//! Four fixed sets of code points carry a normative function but no name:
//! control, private-use, surrogate and noncharacter. Anything else without
//! a name is reserved. Classification tests the sets in that order, which
//! is the order of [`PARTITION`].

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::types::CodePoint;

/// The category a label is synthesized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Control,
    PrivateUse,
    Surrogate,
    Noncharacter,
    /// Default for unnamed code points outside the four fixed sets.
    Reserved,
}

const CONTROL: &[RangeInclusive<u32>] = &[0x0000..=0x001F, 0x007F..=0x009F];

const PRIVATE_USE: &[RangeInclusive<u32>] = &[
    0x00E000..=0x00F8FF,
    0x0F0000..=0x0FFFFD,
    0x100000..=0x10FFFD,
];

const SURROGATE: &[RangeInclusive<u32>] = &[0xD800..=0xDFFF];

const NONCHARACTER: &[RangeInclusive<u32>] = &[
    0x00FDD0..=0x00FDEF,
    0x00FFFE..=0x00FFFF,
    0x01FFFE..=0x01FFFF,
    0x02FFFE..=0x02FFFF,
    0x03FFFE..=0x03FFFF,
    0x04FFFE..=0x04FFFF,
    0x05FFFE..=0x05FFFF,
    0x06FFFE..=0x06FFFF,
    0x07FFFE..=0x07FFFF,
    0x08FFFE..=0x08FFFF,
    0x09FFFE..=0x09FFFF,
    0x0AFFFE..=0x0AFFFF,
    0x0BFFFE..=0x0BFFFF,
    0x0CFFFE..=0x0CFFFF,
    0x0DFFFE..=0x0DFFFF,
    0x0EFFFE..=0x0EFFFF,
    0x0FFFFE..=0x0FFFFF,
    0x10FFFE..=0x10FFFF,
];

/// The fixed sets in priority order.
pub const PARTITION: [(Category, &[RangeInclusive<u32>]); 4] = [
    (Category::Control, CONTROL),
    (Category::PrivateUse, PRIVATE_USE),
    (Category::Surrogate, SURROGATE),
    (Category::Noncharacter, NONCHARACTER),
];

impl Category {
    /// Classify an unnamed code point.
    pub fn of(cp: CodePoint) -> Category {
        let value = cp.value();
        PARTITION
            .iter()
            .find(|(_, ranges)| ranges.iter().any(|r| r.contains(&value)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Reserved)
    }

    /// Classify a code point only if it falls in one of the fixed sets.
    pub fn fixed(cp: CodePoint) -> Option<Category> {
        match Category::of(cp) {
            Category::Reserved => None,
            category => Some(category),
        }
    }

    /// The word used inside synthesized labels.
    pub fn label(self) -> &'static str {
        match self {
            Category::Control => "control",
            Category::PrivateUse => "private-use",
            Category::Surrogate => "surrogate",
            Category::Noncharacter => "noncharacter",
            Category::Reserved => "reserved",
        }
    }

    /// The inclusive ranges making up a fixed set; empty for `Reserved`,
    /// which is defined by exclusion.
    pub fn ranges(self) -> &'static [RangeInclusive<u32>] {
        PARTITION
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, ranges)| *ranges)
            .unwrap_or(&[])
    }

    /// Number of code points in a fixed set.
    pub fn size(self) -> usize {
        self.ranges()
            .iter()
            .map(|r| (r.end() - r.start() + 1) as usize)
            .sum()
    }

    /// `<label-XXXX>` for `cp`.
    pub fn synthesize(self, cp: CodePoint) -> String {
        format!("<{}-{}>", self.label(), cp)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
