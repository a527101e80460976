use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{StarbrightError, StarbrightResult};

/// Named brand colours. Every token maps to exactly one fixed hex value.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Cream,
    Aqua,
    Orange,
    Mustard,
    Teal,
    Coral,
    Charcoal,
    Gold,
}

impl ColorToken {
    pub const ALL: [ColorToken; 8] = [
        Self::Cream,
        Self::Aqua,
        Self::Orange,
        Self::Mustard,
        Self::Teal,
        Self::Coral,
        Self::Charcoal,
        Self::Gold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cream => "cream",
            Self::Aqua => "aqua",
            Self::Orange => "orange",
            Self::Mustard => "mustard",
            Self::Teal => "teal",
            Self::Coral => "coral",
            Self::Charcoal => "charcoal",
            Self::Gold => "gold",
        }
    }

    pub fn rgba(self) -> Rgba8 {
        match self {
            Self::Cream => Rgba8::opaque(0xFF, 0xF7, 0xE6),
            Self::Aqua => Rgba8::opaque(0xAE, 0xE8, 0xE2),
            Self::Orange => Rgba8::opaque(0xF2, 0x8C, 0x38),
            Self::Mustard => Rgba8::opaque(0xF2, 0xC8, 0x49),
            Self::Teal => Rgba8::opaque(0x00, 0x7C, 0x88),
            Self::Coral => Rgba8::opaque(0xF2, 0x5D, 0x50),
            Self::Charcoal => Rgba8::opaque(0x2F, 0x2F, 0x2F),
            Self::Gold => Rgba8::opaque(0xD4, 0xA2, 0x4C),
        }
    }

    pub fn hex(self) -> String {
        self.rgba().to_hex()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = StarbrightError;

    fn from_str(s: &str) -> StarbrightResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| StarbrightError::validation(format!("unknown color token '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/palette.rs"]
mod tests;
