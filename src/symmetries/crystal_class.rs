use std::fmt;
use std::str::FromStr;

use anyhow::Error;
use serde::{Deserialize, Serialize};

/// The eleven Laue classes an EBSD phase can belong to.
///
/// The discriminants are the numeric crystal-structure ids found in per-ensemble
/// buffers and must not be renumbered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CrystalClass {
    HexagonalHigh = 0,
    CubicHigh = 1,
    HexagonalLow = 2,
    CubicLow = 3,
    Triclinic = 4,
    Monoclinic = 5,
    OrthoRhombic = 6,
    TetragonalLow = 7,
    TetragonalHigh = 8,
    TrigonalLow = 9,
    TrigonalHigh = 10,
}

impl CrystalClass {
    /// Every class, in id order.
    pub const ALL: [CrystalClass; 11] = [
        CrystalClass::HexagonalHigh,
        CrystalClass::CubicHigh,
        CrystalClass::HexagonalLow,
        CrystalClass::CubicLow,
        CrystalClass::Triclinic,
        CrystalClass::Monoclinic,
        CrystalClass::OrthoRhombic,
        CrystalClass::TetragonalLow,
        CrystalClass::TetragonalHigh,
        CrystalClass::TrigonalLow,
        CrystalClass::TrigonalHigh,
    ];

    /// Resolve a crystal-structure id. Ids outside 0..=10 (the legacy axis-orthorhombic
    /// id 11 and the "unknown" id 999 included) are rejected.
    pub fn from_id(id: u32) -> Result<Self, Error> {
        CrystalClass::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| Error::msg(format!("Unknown crystal structure id {}", id)))
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Kebab-case identifier used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            CrystalClass::HexagonalHigh => "hexagonal-high",
            CrystalClass::CubicHigh => "cubic-high",
            CrystalClass::HexagonalLow => "hexagonal-low",
            CrystalClass::CubicLow => "cubic-low",
            CrystalClass::Triclinic => "triclinic",
            CrystalClass::Monoclinic => "monoclinic",
            CrystalClass::OrthoRhombic => "orthorhombic",
            CrystalClass::TetragonalLow => "tetragonal-low",
            CrystalClass::TetragonalHigh => "tetragonal-high",
            CrystalClass::TrigonalLow => "trigonal-low",
            CrystalClass::TrigonalHigh => "trigonal-high",
        }
    }
}

impl fmt::Display for CrystalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CrystalClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(id) = wanted.parse::<u32>() {
            return CrystalClass::from_id(id);
        }
        CrystalClass::ALL
            .iter()
            .copied()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| Error::msg(format!("Unknown crystal class '{}'", s)))
    }
}
