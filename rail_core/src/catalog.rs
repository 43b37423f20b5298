//! Rail Segment Catalog
//!
//! The fixed set of rail segments a row can be assembled from. Segments are
//! joined end to end with rail extension kits, so any multiset of catalog
//! lengths is a buildable rail.
//!
//! | Code       | Length  |
//! |------------|---------|
//! | `ADB-R175` | 1750 mm |
//! | `ADB-R125` | 1250 mm |
//! | `ADB-R68`  | 680 mm  |
//! | `ADB-R48`  | 480 mm  |
//!
//! ## Example
//!
//! ```rust
//! use rail_core::catalog::{RailSegment, RAIL_CATALOG};
//!
//! assert_eq!(RAIL_CATALOG[0], RailSegment::R175);
//! assert_eq!(RailSegment::R68.length_mm(), 680);
//! assert_eq!(RailSegment::from_length_mm(480), Some(RailSegment::R48));
//! ```

use serde::{Deserialize, Serialize};

/// A fixed-length rail segment from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RailSegment {
    /// ADB-R175, 1750 mm
    #[serde(rename = "ADB-R175")]
    R175,
    /// ADB-R125, 1250 mm
    #[serde(rename = "ADB-R125")]
    R125,
    /// ADB-R68, 680 mm
    #[serde(rename = "ADB-R68")]
    R68,
    /// ADB-R48, 480 mm
    #[serde(rename = "ADB-R48")]
    R48,
}

/// The segment catalog in search order (longest first).
pub const RAIL_CATALOG: [RailSegment; 4] = [
    RailSegment::R175,
    RailSegment::R125,
    RailSegment::R68,
    RailSegment::R48,
];

impl RailSegment {
    /// Segment length in millimetres
    pub const fn length_mm(&self) -> u32 {
        match self {
            RailSegment::R175 => 1750,
            RailSegment::R125 => 1250,
            RailSegment::R68 => 680,
            RailSegment::R48 => 480,
        }
    }

    /// Catalog product code (e.g., "ADB-R175")
    pub const fn sku(&self) -> &'static str {
        match self {
            RailSegment::R175 => "ADB-R175",
            RailSegment::R125 => "ADB-R125",
            RailSegment::R68 => "ADB-R68",
            RailSegment::R48 => "ADB-R48",
        }
    }

    /// Product description as listed in the product master
    pub const fn description(&self) -> &'static str {
        match self {
            RailSegment::R175 => "ADB 1750mm Rail",
            RailSegment::R125 => "ADB 1250mm Rail",
            RailSegment::R68 => "ADB 680mm Rail",
            RailSegment::R48 => "ADB 480mm Rail",
        }
    }

    /// Legend colour used when drawing this segment (CSS hex)
    pub const fn legend_color(&self) -> &'static str {
        match self {
            RailSegment::R175 => "#457b9d",
            RailSegment::R125 => "#e76f51",
            RailSegment::R68 => "#f4a261",
            RailSegment::R48 => "#2a9d8f",
        }
    }

    /// Look up the catalog segment with an exact length
    pub fn from_length_mm(length_mm: u32) -> Option<Self> {
        RAIL_CATALOG
            .iter()
            .copied()
            .find(|segment| segment.length_mm() == length_mm)
    }
}

impl std::fmt::Display for RailSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sku())
    }
}
