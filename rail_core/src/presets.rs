//! Display Presets
//!
//! Typical dimensions for common display sizes. A preset fills in the five
//! display fields of a configuration; rows, columns and orientation are left
//! alone.

use serde::Serialize;

/// Average physical specification for one display size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayPreset {
    /// Diagonal size label (e.g., "65\"")
    pub size: &'static str,
    /// Display width in mm (landscape)
    pub display_width_mm: i64,
    /// Display height in mm (landscape)
    pub display_height_mm: i64,
    /// VESA hole spacing, horizontal, in mm
    pub vesa_width_mm: i64,
    /// VESA hole spacing, vertical, in mm
    pub vesa_height_mm: i64,
    /// Display weight in kg
    pub display_weight_kg: f64,
}

const fn preset(size: &'static str, width: i64, height: i64, weight: f64) -> DisplayPreset {
    DisplayPreset {
        size,
        display_width_mm: width,
        display_height_mm: height,
        vesa_width_mm: 400,
        vesa_height_mm: 400,
        display_weight_kg: weight,
    }
}

/// All presets, smallest first
pub const DISPLAY_PRESETS: [DisplayPreset; 7] = [
    preset("43\"", 953, 536, 15.0),
    preset("50\"", 1107, 622, 20.0),
    preset("55\"", 1217, 686, 25.0),
    preset("65\"", 1440, 810, 35.0),
    preset("75\"", 1661, 935, 45.0),
    preset("85\"", 1882, 1059, 50.0),
    preset("98\"", 2169, 1219, 60.0),
];

/// Find a preset by its size label.
///
/// Accepts the label with or without the inch mark, so `"65"` and `"65\""`
/// both match.
pub fn find_preset(size: &str) -> Option<&'static DisplayPreset> {
    let wanted = size.trim().trim_end_matches(['"', '”']);
    DISPLAY_PRESETS
        .iter()
        .find(|p| p.size.trim_end_matches('"') == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset() {
        let p = find_preset("65").unwrap();
        assert_eq!(p.display_width_mm, 1440);
        assert_eq!(p.display_height_mm, 810);
        assert_eq!(find_preset("98\"").unwrap().display_weight_kg, 60.0);
        assert_eq!(find_preset("85”").unwrap().display_width_mm, 1882);
        assert!(find_preset("32").is_none());
    }

    #[test]
    fn test_presets_ordered_by_size() {
        let widths: Vec<i64> = DISPLAY_PRESETS.iter().map(|p| p.display_width_mm).collect();
        let mut sorted = widths.clone();
        sorted.sort();
        assert_eq!(widths, sorted);
    }
}
