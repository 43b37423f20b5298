//! # Array Configuration
//!
//! Runs a full configuration calculation: resolve geometry, optimize one
//! row's rail, then derive part quantities for the whole array.
//!
//! ## Quantities
//!
//! - rails: per-row counts × rows
//! - joiners (rail extension kits): `(segments − 1) × rows`
//! - bracket pairs: `rows × columns`, one pair per display
//!
//! Quantities are `u32`; a total that would overflow is `ArrayTooLarge`.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::calculations::configuration::calculate;
//! use rail_core::inputs::ConfigInputs;
//!
//! let result = calculate(&ConfigInputs::default()).unwrap();
//! assert_eq!(result.selected_rail_segments, vec![1750, 1750]);
//! assert_eq!(result.total_bracket_pairs, 9);
//! assert_eq!(result.total_joiners, 3);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculations::geometry::{self, ResolvedGeometry};
use crate::calculations::rail_optimizer::{self, RailCombination};
use crate::catalog::{RailSegment, RAIL_CATALOG};
use crate::errors::{CalcError, CalcResult};
use crate::inputs::ConfigInputs;

/// A quantity of one rail segment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailPart {
    /// Catalog segment (serializes as its product code)
    pub segment: RailSegment,
    /// Segment length in mm
    pub length_mm: u32,
    /// Quantity
    pub qty: u32,
}

/// Results from a configuration calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "rows": 3,
///   "columns": 3,
///   "effective_display_width_mm": 1440,
///   "effective_display_height_mm": 810,
///   "min_rail_mm": 3360,
///   "max_rail_mm": 4320,
///   "selected_rail_length_mm": 3500,
///   "selected_rail_segments": [1750, 1750],
///   "rail_parts_per_row": [{ "segment": "ADB-R175", "length_mm": 1750, "qty": 2 }],
///   "rail_segments_per_row": 2,
///   "total_bracket_pairs": 9,
///   "total_rails": [{ "segment": "ADB-R175", "length_mm": 1750, "qty": 6 }],
///   "total_joiners": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Number of display rows
    pub rows: u32,

    /// Number of displays per row
    pub columns: u32,

    /// Display width after orientation (mm)
    pub effective_display_width_mm: u32,

    /// Display height after orientation (mm)
    pub effective_display_height_mm: u32,

    /// Shortest acceptable rail for one row (mm)
    pub min_rail_mm: u32,

    /// Longest acceptable rail for one row (mm)
    pub max_rail_mm: u32,

    /// Total length of the selected segments for one row (mm)
    pub selected_rail_length_mm: u32,

    /// Selected segment lengths for one row, longest first
    pub selected_rail_segments: Vec<u32>,

    /// Rail parts used in one row (catalog order, non-zero only)
    pub rail_parts_per_row: Vec<RailPart>,

    /// Number of segments in one row
    pub rail_segments_per_row: u32,

    /// Bracket pairs for the whole array
    pub total_bracket_pairs: u32,

    /// Rail parts for the whole array
    pub total_rails: Vec<RailPart>,

    /// Rail joiners for the whole array
    pub total_joiners: u32,
}

impl CalculationResult {
    /// Check that a row needs joining hardware
    pub fn needs_joiners(&self) -> bool {
        self.rail_segments_per_row > 1
    }

    /// Total rail length installed across all rows (mm)
    pub fn total_rail_length_mm(&self) -> u64 {
        self.total_rails
            .iter()
            .map(|p| u64::from(p.length_mm) * u64::from(p.qty))
            .sum()
    }
}

/// Calculate a full array configuration.
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Parts and rail selection
/// * `Err(CalcError)` - The first validation failure, an infeasible range,
///   `NoRailCombination` when the catalog cannot reach the range, or
///   `ArrayTooLarge` when a part total does not fit in a `u32`
pub fn calculate(inputs: &ConfigInputs) -> CalcResult<CalculationResult> {
    let geometry = geometry::resolve(inputs)?;
    let range = geometry.range;

    let combination = rail_optimizer::optimize(range.min_rail_mm, range.max_rail_mm, &RAIL_CATALOG)
        .ok_or(CalcError::NoRailCombination {
            min_rail_mm: range.min_rail_mm,
            max_rail_mm: range.max_rail_mm,
        })?;

    let result = derive_result(inputs, &geometry, &combination)?;
    info!(
        rows = inputs.rows,
        columns = inputs.columns,
        selected_rail_length_mm = result.selected_rail_length_mm,
        rail_segments_per_row = result.rail_segments_per_row,
        "configuration calculated"
    );
    Ok(result)
}

fn derive_result(
    inputs: &ConfigInputs,
    geometry: &ResolvedGeometry,
    combination: &RailCombination,
) -> CalcResult<CalculationResult> {
    let too_large = || CalcError::ArrayTooLarge {
        rows: inputs.rows,
        columns: inputs.columns,
    };
    let rows = u32::try_from(inputs.rows).map_err(|_| too_large())?;
    let columns = u32::try_from(inputs.columns).map_err(|_| too_large())?;

    let rail_parts_per_row: Vec<RailPart> = combination
        .used()
        .map(|c| RailPart {
            segment: c.segment,
            length_mm: c.segment.length_mm(),
            qty: c.count,
        })
        .collect();

    let total_rails = rail_parts_per_row
        .iter()
        .map(|part| {
            Ok(RailPart {
                qty: part.qty.checked_mul(rows).ok_or_else(too_large)?,
                ..*part
            })
        })
        .collect::<CalcResult<Vec<RailPart>>>()?;

    let selected_rail_segments = combination.segment_lengths_desc();
    let selected_rail_length_mm: u32 = selected_rail_segments.iter().sum();
    let rail_segments_per_row = combination.segment_count;

    let total_bracket_pairs = rows.checked_mul(columns).ok_or_else(too_large)?;
    let total_joiners = rail_segments_per_row
        .saturating_sub(1)
        .checked_mul(rows)
        .ok_or_else(too_large)?;

    Ok(CalculationResult {
        rows,
        columns,
        effective_display_width_mm: geometry.effective_display_width_mm,
        effective_display_height_mm: geometry.effective_display_height_mm,
        min_rail_mm: geometry.range.min_rail_mm,
        max_rail_mm: geometry.range.max_rail_mm,
        selected_rail_length_mm,
        selected_rail_segments,
        rail_parts_per_row,
        rail_segments_per_row,
        total_bracket_pairs,
        total_rails,
        total_joiners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Orientation;

    fn scenario_a() -> ConfigInputs {
        ConfigInputs::default()
    }

    #[test]
    fn test_scenario_a_landscape() {
        let result = calculate(&scenario_a()).unwrap();
        assert_eq!(result.min_rail_mm, 3360);
        assert_eq!(result.max_rail_mm, 4320);
        assert_eq!(result.selected_rail_length_mm, 3500);
        assert_eq!(result.selected_rail_segments, vec![1750, 1750]);
        assert_eq!(result.rail_segments_per_row, 2);
        assert_eq!(
            result.rail_parts_per_row,
            vec![RailPart { segment: RailSegment::R175, length_mm: 1750, qty: 2 }]
        );
        assert_eq!(
            result.total_rails,
            vec![RailPart { segment: RailSegment::R175, length_mm: 1750, qty: 6 }]
        );
        assert_eq!(result.total_bracket_pairs, 9);
        assert_eq!(result.total_joiners, 3);
        assert_eq!(result.total_rail_length_mm(), 10_500);
    }

    #[test]
    fn test_scenario_b_portrait() {
        let mut inputs = scenario_a();
        inputs.orientation = Orientation::Portrait;
        let result = calculate(&inputs).unwrap();
        assert_eq!(result.effective_display_width_mm, 810);
        assert_eq!(result.effective_display_height_mm, 1440);
        assert_eq!(result.min_rail_mm, 2100);
        assert_eq!(result.max_rail_mm, 2430);
        assert_eq!(result.selected_rail_segments, vec![1750, 480]);
        assert_eq!(result.selected_rail_length_mm, 2230);
        // Per-row parts follow catalog order
        assert_eq!(result.rail_parts_per_row[0].segment, RailSegment::R175);
        assert_eq!(result.rail_parts_per_row[1].segment, RailSegment::R48);
        assert_eq!(result.total_joiners, 3);
    }

    #[test]
    fn test_scenario_c_single_column() {
        let mut inputs = scenario_a();
        inputs.columns = 1;
        inputs.rows = 2;
        let result = calculate(&inputs).unwrap();
        assert_eq!(result.min_rail_mm, 480);
        assert_eq!(result.selected_rail_segments, vec![480]);
        assert_eq!(result.total_joiners, 0);
        assert!(!result.needs_joiners());
        assert_eq!(result.total_bracket_pairs, 2);
        assert_eq!(result.total_rails[0].qty, 2);
    }

    #[test]
    fn test_no_rail_combination() {
        let mut inputs = scenario_a();
        inputs.columns = 1;
        inputs.display_width_mm = 470;
        inputs.vesa_width_mm = 300;
        assert_eq!(
            calculate(&inputs).unwrap_err(),
            CalcError::NoRailCombination { min_rail_mm: 380, max_rail_mm: 470 }
        );
    }

    #[test]
    fn test_rows_overflowing_totals() {
        let mut inputs = scenario_a();
        inputs.rows = 3_000_000_000;
        assert_eq!(
            calculate(&inputs).unwrap_err(),
            CalcError::ArrayTooLarge { rows: 3_000_000_000, columns: 3 }
        );
    }

    #[test]
    fn test_rows_beyond_u32() {
        let mut inputs = scenario_a();
        inputs.rows = (1 << 32) + 3;
        assert_eq!(calculate(&inputs).unwrap_err().error_code(), "ARRAY_TOO_LARGE");
    }

    #[test]
    fn test_large_row_count_still_exact() {
        let mut inputs = scenario_a();
        inputs.columns = 1;
        inputs.rows = 2_000_000_000;
        let result = calculate(&inputs).unwrap();
        assert_eq!(result.rows, 2_000_000_000);
        assert_eq!(result.total_bracket_pairs, 2_000_000_000);
        assert_eq!(result.total_rails[0].qty, 2_000_000_000);
        assert_eq!(result.total_joiners, 0);
    }

    #[test]
    fn test_validation_errors_propagate() {
        let mut inputs = scenario_a();
        inputs.display_weight_kg = 51.0;
        assert_eq!(calculate(&inputs).unwrap_err().error_code(), "UNSUPPORTED_WEIGHT_CLASS");

        let mut inputs = scenario_a();
        inputs.vesa_height_mm = 401;
        assert_eq!(calculate(&inputs).unwrap_err().error_code(), "UNSUPPORTED_BRACKET_CLASS");
    }

    #[test]
    fn test_selected_length_within_range_for_presets() {
        use crate::presets::DISPLAY_PRESETS;

        for preset in DISPLAY_PRESETS.iter().filter(|p| p.display_weight_kg <= 50.0) {
            for columns in 1..=6 {
                for orientation in [Orientation::Landscape, Orientation::Portrait] {
                    let inputs = ConfigInputs {
                        columns,
                        orientation,
                        ..ConfigInputs::default()
                    }
                    .with_preset(preset);
                    if let Ok(result) = calculate(&inputs) {
                        assert!(result.selected_rail_length_mm >= result.min_rail_mm);
                        assert!(result.selected_rail_length_mm <= result.max_rail_mm);
                        assert_eq!(
                            result.selected_rail_segments.len() as u32,
                            result.rail_segments_per_row
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&scenario_a()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"segment\": \"ADB-R175\""));
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }
}
