//! # Geometry Resolver
//!
//! Validates configuration inputs and converts them into the rail-length range
//! one row needs.
//!
//! ## Rail Range
//!
//! For `n` columns of displays with effective width `w`:
//!
//! ```text
//! min_rail = w × (n − 1) + vesa_width + 80
//! max_rail = w × n
//! ```
//!
//! The minimum spans the outermost VESA mounting points plus an 80 mm
//! installation margin; the maximum keeps the rail inside the row.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::calculations::geometry::resolve;
//! use rail_core::inputs::ConfigInputs;
//!
//! let geometry = resolve(&ConfigInputs::default()).unwrap();
//! assert_eq!(geometry.range.min_rail_mm, 3360);
//! assert_eq!(geometry.range.max_rail_mm, 4320);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{ConfigInputs, Orientation};

/// Heaviest display the ADB-B400 bracket class supports (kg)
pub const MAX_DISPLAY_WEIGHT_KG: f64 = 50.0;

/// Tallest VESA pattern the ADB-B400 bracket class supports (mm)
pub const MAX_VESA_HEIGHT_MM: i64 = 400;

/// Installation margin added beyond the outermost VESA points (mm)
pub const INSTALLATION_MARGIN_MM: i64 = 80;

/// Longest rail the optimizer will search for (mm)
pub const MAX_RAIL_LENGTH_MM: u32 = 100_000;

/// Inclusive rail-length range for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailRange {
    pub min_rail_mm: u32,
    pub max_rail_mm: u32,
}

impl RailRange {
    /// Check if a length lies inside the range
    pub fn contains(&self, length_mm: u32) -> bool {
        (self.min_rail_mm..=self.max_rail_mm).contains(&length_mm)
    }
}

/// Validated geometry for one configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGeometry {
    /// Display width after applying orientation (mm)
    pub effective_display_width_mm: u32,
    /// Display height after applying orientation (mm)
    pub effective_display_height_mm: u32,
    /// Rail range for one row
    pub range: RailRange,
}

/// Validate inputs and derive the per-row rail range.
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. rows/columns >= 1
/// 2. display and VESA dimensions >= 1
/// 3. weight finite and >= 0
/// 4. weight <= 50 kg
/// 5. VESA height <= 400 mm
/// 6. min rail <= max rail
pub fn resolve(inputs: &ConfigInputs) -> CalcResult<ResolvedGeometry> {
    validate(inputs)?;

    let (effective_width, effective_height) = match inputs.orientation {
        Orientation::Landscape => (inputs.display_width_mm, inputs.display_height_mm),
        Orientation::Portrait => (inputs.display_height_mm, inputs.display_width_mm),
    };

    let too_long = |max_rail_mm: i64| CalcError::RailRangeTooLong {
        max_rail_mm,
        limit_mm: MAX_RAIL_LENGTH_MM,
    };

    let min_rail = effective_width
        .checked_mul(inputs.columns - 1)
        .and_then(|span| span.checked_add(inputs.vesa_width_mm))
        .and_then(|span| span.checked_add(INSTALLATION_MARGIN_MM))
        .ok_or_else(|| too_long(i64::MAX))?;
    let max_rail = effective_width
        .checked_mul(inputs.columns)
        .ok_or_else(|| too_long(i64::MAX))?;

    debug!(min_rail, max_rail, orientation = ?inputs.orientation, "resolved rail range");

    if min_rail > max_rail {
        return Err(CalcError::InfeasibleRange {
            min_rail_mm: min_rail,
            max_rail_mm: max_rail,
        });
    }
    if max_rail > i64::from(MAX_RAIL_LENGTH_MM) {
        return Err(too_long(max_rail));
    }

    Ok(ResolvedGeometry {
        effective_display_width_mm: to_mm(effective_width, max_rail)?,
        effective_display_height_mm: to_mm(effective_height, max_rail)?,
        range: RailRange {
            min_rail_mm: to_mm(min_rail, max_rail)?,
            max_rail_mm: to_mm(max_rail, max_rail)?,
        },
    })
}

fn validate(inputs: &ConfigInputs) -> CalcResult<()> {
    if inputs.rows < 1 || inputs.columns < 1 {
        return Err(CalcError::InvalidArrayDimensions {
            rows: inputs.rows,
            columns: inputs.columns,
        });
    }

    let dimensions = [
        ("display_width_mm", inputs.display_width_mm),
        ("display_height_mm", inputs.display_height_mm),
        ("vesa_width_mm", inputs.vesa_width_mm),
        ("vesa_height_mm", inputs.vesa_height_mm),
    ];
    if let Some((field, value)) = dimensions.iter().find(|(_, value)| *value < 1) {
        return Err(CalcError::invalid_display_dimension(*field, *value));
    }

    let weight_kg = inputs.display_weight_kg;
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(CalcError::InvalidWeight { weight_kg });
    }
    if weight_kg > MAX_DISPLAY_WEIGHT_KG {
        return Err(CalcError::UnsupportedWeightClass { weight_kg });
    }

    if inputs.vesa_height_mm > MAX_VESA_HEIGHT_MM {
        return Err(CalcError::UnsupportedBracketClass {
            vesa_height_mm: inputs.vesa_height_mm,
        });
    }

    Ok(())
}

// Display dimensions are not capped by validation, so a single huge
// display can still overflow u32 even when the rail range fits.
fn to_mm(value: i64, max_rail_mm: i64) -> CalcResult<u32> {
    u32::try_from(value).map_err(|_| CalcError::RailRangeTooLong {
        max_rail_mm,
        limit_mm: MAX_RAIL_LENGTH_MM,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> ConfigInputs {
        ConfigInputs {
            rows: 3,
            columns: 3,
            display_width_mm: 1440,
            display_height_mm: 810,
            vesa_width_mm: 400,
            vesa_height_mm: 400,
            display_weight_kg: 25.0,
            orientation: Orientation::Landscape,
        }
    }

    #[test]
    fn test_landscape_range() {
        let geometry = resolve(&scenario_a()).unwrap();
        assert_eq!(geometry.effective_display_width_mm, 1440);
        assert_eq!(geometry.effective_display_height_mm, 810);
        // 1440 * 2 + 400 + 80 = 3360, 1440 * 3 = 4320
        assert_eq!(geometry.range, RailRange { min_rail_mm: 3360, max_rail_mm: 4320 });
    }

    #[test]
    fn test_portrait_swaps_dimensions() {
        let mut inputs = scenario_a();
        inputs.orientation = Orientation::Portrait;
        let geometry = resolve(&inputs).unwrap();
        assert_eq!(geometry.effective_display_width_mm, 810);
        assert_eq!(geometry.effective_display_height_mm, 1440);
        // 810 * 2 + 400 + 80 = 2100, 810 * 3 = 2430
        assert_eq!(geometry.range, RailRange { min_rail_mm: 2100, max_rail_mm: 2430 });
    }

    #[test]
    fn test_single_column_min_is_vesa_plus_margin() {
        let mut inputs = scenario_a();
        inputs.columns = 1;
        for width in [600, 1440, 2169] {
            inputs.display_width_mm = width;
            let geometry = resolve(&inputs).unwrap();
            assert_eq!(geometry.range.min_rail_mm, 480);
            assert_eq!(geometry.range.max_rail_mm, width as u32);
        }
    }

    #[test]
    fn test_range_independent_of_rows() {
        let mut inputs = scenario_a();
        let one = resolve(&inputs).unwrap();
        inputs.rows = 12;
        assert_eq!(resolve(&inputs).unwrap(), one);
    }

    #[test]
    fn test_invalid_array_dimensions() {
        let mut inputs = scenario_a();
        inputs.columns = 0;
        assert!(matches!(
            resolve(&inputs),
            Err(CalcError::InvalidArrayDimensions { rows: 3, columns: 0 })
        ));
        inputs.columns = 3;
        inputs.rows = -1;
        assert!(matches!(resolve(&inputs), Err(CalcError::InvalidArrayDimensions { .. })));
    }

    #[test]
    fn test_invalid_display_dimensions_names_field() {
        let mut inputs = scenario_a();
        inputs.vesa_width_mm = 0;
        match resolve(&inputs) {
            Err(CalcError::InvalidDisplayDimensions { field, value }) => {
                assert_eq!(field, "vesa_width_mm");
                assert_eq!(value, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_weight() {
        let mut inputs = scenario_a();
        for weight in [f64::NAN, f64::INFINITY, -0.5] {
            inputs.display_weight_kg = weight;
            assert_eq!(resolve(&inputs).unwrap_err().error_code(), "INVALID_WEIGHT");
        }
        inputs.display_weight_kg = 0.0;
        assert!(resolve(&inputs).is_ok());
    }

    #[test]
    fn test_weight_limit() {
        let mut inputs = scenario_a();
        inputs.display_weight_kg = 50.0;
        assert!(resolve(&inputs).is_ok());
        inputs.display_weight_kg = 51.0;
        assert!(matches!(resolve(&inputs), Err(CalcError::UnsupportedWeightClass { .. })));
    }

    #[test]
    fn test_vesa_height_limit() {
        let mut inputs = scenario_a();
        inputs.vesa_height_mm = 401;
        assert!(matches!(
            resolve(&inputs),
            Err(CalcError::UnsupportedBracketClass { vesa_height_mm: 401 })
        ));
    }

    #[test]
    fn test_first_failure_wins() {
        // Every rule broken at once: the array rule is checked first
        let inputs = ConfigInputs {
            rows: 0,
            columns: 0,
            display_width_mm: 0,
            display_height_mm: 0,
            vesa_width_mm: 0,
            vesa_height_mm: 900,
            display_weight_kg: 80.0,
            orientation: Orientation::Landscape,
        };
        assert_eq!(resolve(&inputs).unwrap_err().error_code(), "INVALID_ARRAY_DIMENSIONS");

        // Weight class is checked before bracket class
        let mut inputs = scenario_a();
        inputs.display_weight_kg = 51.0;
        inputs.vesa_height_mm = 401;
        assert_eq!(resolve(&inputs).unwrap_err().error_code(), "UNSUPPORTED_WEIGHT_CLASS");
    }

    #[test]
    fn test_infeasible_range() {
        let mut inputs = scenario_a();
        inputs.columns = 1;
        inputs.display_width_mm = 400;
        assert_eq!(
            resolve(&inputs).unwrap_err(),
            CalcError::InfeasibleRange { min_rail_mm: 480, max_rail_mm: 400 }
        );
    }

    #[test]
    fn test_rail_too_long() {
        let mut inputs = scenario_a();
        inputs.columns = 100;
        assert!(matches!(
            resolve(&inputs),
            Err(CalcError::RailRangeTooLong { max_rail_mm: 144_000, .. })
        ));

        inputs.display_width_mm = i64::MAX / 2;
        assert!(matches!(resolve(&inputs), Err(CalcError::RailRangeTooLong { .. })));
    }

    #[test]
    fn test_range_contains() {
        let range = RailRange { min_rail_mm: 100, max_rail_mm: 200 };
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }
}
