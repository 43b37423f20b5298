//! # Configuration Inputs
//!
//! The user-entered description of a display array, plus the text-field
//! state a form front end keeps while the user is typing.
//!
//! Integer fields are signed and the weight is an `f64` on purpose: values a
//! front end may produce from bad text (zero, negatives, `NaN`) must reach
//! [`geometry::resolve`](crate::calculations::geometry::resolve) so they are
//! rejected with the right error, rather than being unrepresentable.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "rows": 3,
//!   "columns": 3,
//!   "display_width_mm": 1440,
//!   "display_height_mm": 810,
//!   "vesa_width_mm": 400,
//!   "vesa_height_mm": 400,
//!   "display_weight_kg": 25.0,
//!   "orientation": "landscape"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rail_core::inputs::{InputText, NumericField};
//!
//! let mut text = InputText::default();
//! assert!(text.set_field(NumericField::Columns, "4"));
//! assert!(!text.set_field(NumericField::Columns, "4a")); // rejected, keeps "4"
//!
//! let inputs = text.to_inputs();
//! assert_eq!(inputs.columns, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::presets::DisplayPreset;

/// Display orientation on the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Long edge horizontal
    #[default]
    Landscape,
    /// Display rotated 90°, long edge vertical
    Portrait,
}

impl Orientation {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" | "l" => Ok(Orientation::Landscape),
            "portrait" | "p" => Ok(Orientation::Portrait),
            _ => Err(CalcError::invalid_field(
                "orientation",
                s,
                "Expected 'landscape' or 'portrait'",
            )),
        }
    }
}

/// Inputs for one configuration calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigInputs {
    /// Number of display rows (one rail per row)
    pub rows: i64,

    /// Number of displays per row
    pub columns: i64,

    /// Physical display width in mm, as mounted in landscape
    pub display_width_mm: i64,

    /// Physical display height in mm, as mounted in landscape
    pub display_height_mm: i64,

    /// Horizontal VESA hole spacing in mm
    pub vesa_width_mm: i64,

    /// Vertical VESA hole spacing in mm
    pub vesa_height_mm: i64,

    /// Weight of a single display in kg
    pub display_weight_kg: f64,

    /// Mounting orientation
    pub orientation: Orientation,
}

impl Default for ConfigInputs {
    /// A 3x3 wall of 65" landscape displays.
    fn default() -> Self {
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
}

impl ConfigInputs {
    /// Replace the display fields with a preset's values.
    pub fn with_preset(mut self, preset: &DisplayPreset) -> Self {
        self.display_width_mm = preset.display_width_mm;
        self.display_height_mm = preset.display_height_mm;
        self.vesa_width_mm = preset.vesa_width_mm;
        self.vesa_height_mm = preset.vesa_height_mm;
        self.display_weight_kg = preset.display_weight_kg;
        self
    }
}

/// The seven numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Rows,
    Columns,
    DisplayWidthMm,
    DisplayHeightMm,
    VesaWidthMm,
    VesaHeightMm,
    DisplayWeightKg,
}

impl NumericField {
    /// All fields in form order
    pub const ALL: [NumericField; 7] = [
        NumericField::DisplayWidthMm,
        NumericField::DisplayHeightMm,
        NumericField::VesaWidthMm,
        NumericField::VesaHeightMm,
        NumericField::DisplayWeightKg,
        NumericField::Rows,
        NumericField::Columns,
    ];

    /// Field key as used in JSON and error messages
    pub fn key(&self) -> &'static str {
        match self {
            NumericField::Rows => "rows",
            NumericField::Columns => "columns",
            NumericField::DisplayWidthMm => "display_width_mm",
            NumericField::DisplayHeightMm => "display_height_mm",
            NumericField::VesaWidthMm => "vesa_width_mm",
            NumericField::VesaHeightMm => "vesa_height_mm",
            NumericField::DisplayWeightKg => "display_weight_kg",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Rows => "Rows",
            NumericField::Columns => "Columns",
            NumericField::DisplayWidthMm => "Display width (mm)",
            NumericField::DisplayHeightMm => "Display height (mm)",
            NumericField::VesaWidthMm => "VESA width (mm)",
            NumericField::VesaHeightMm => "VESA height (mm)",
            NumericField::DisplayWeightKg => "Display weight (kg)",
        }
    }

    /// Read this field's value out of a set of inputs
    pub fn value_in(&self, inputs: &ConfigInputs) -> f64 {
        match self {
            NumericField::Rows => inputs.rows as f64,
            NumericField::Columns => inputs.columns as f64,
            NumericField::DisplayWidthMm => inputs.display_width_mm as f64,
            NumericField::DisplayHeightMm => inputs.display_height_mm as f64,
            NumericField::VesaWidthMm => inputs.vesa_width_mm as f64,
            NumericField::VesaHeightMm => inputs.vesa_height_mm as f64,
            NumericField::DisplayWeightKg => inputs.display_weight_kg,
        }
    }

    /// Write a value into this field of a set of inputs.
    ///
    /// Integer fields truncate toward zero.
    pub fn assign(&self, inputs: &mut ConfigInputs, value: f64) {
        match self {
            NumericField::Rows => inputs.rows = value as i64,
            NumericField::Columns => inputs.columns = value as i64,
            NumericField::DisplayWidthMm => inputs.display_width_mm = value as i64,
            NumericField::DisplayHeightMm => inputs.display_height_mm = value as i64,
            NumericField::VesaWidthMm => inputs.vesa_width_mm = value as i64,
            NumericField::VesaHeightMm => inputs.vesa_height_mm = value as i64,
            NumericField::DisplayWeightKg => inputs.display_weight_kg = value,
        }
    }
}

/// Check that text only contains ASCII digits (empty is allowed).
pub fn is_digit_text(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Strictly parse a field value from user text.
///
/// Unlike [`InputText::to_inputs`], this rejects empty and non-numeric text
/// with an [`CalcError::InvalidField`] naming the field.
///
/// # Example
///
/// ```rust
/// use rail_core::inputs::{parse_field, NumericField};
///
/// assert_eq!(parse_field(NumericField::Rows, " 2 ").unwrap(), 2.0);
/// assert!(parse_field(NumericField::Rows, "").is_err());
/// assert_eq!(parse_field(NumericField::DisplayWeightKg, "22.5").unwrap(), 22.5);
/// ```
pub fn parse_field(field: NumericField, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_field(field.key(), text, "Value is required"));
    }
    match field {
        NumericField::DisplayWeightKg => trimmed
            .parse::<f64>()
            .map_err(|e| CalcError::invalid_field(field.key(), text, e.to_string())),
        _ => trimmed
            .parse::<i64>()
            .map(|v| v as f64)
            .map_err(|e| CalcError::invalid_field(field.key(), text, e.to_string())),
    }
}

/// Text contents of the numeric form fields, plus the orientation toggle.
///
/// Edits are filtered to digits only. Conversion to [`ConfigInputs`] never
/// fails: text that does not parse becomes a value the geometry resolver
/// rejects (`0` for integer fields, `NaN` for the weight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputText {
    pub rows: String,
    pub columns: String,
    pub display_width_mm: String,
    pub display_height_mm: String,
    pub vesa_width_mm: String,
    pub vesa_height_mm: String,
    pub display_weight_kg: String,
    pub orientation: Orientation,
}

impl Default for InputText {
    fn default() -> Self {
        InputText::from_inputs(&ConfigInputs::default())
    }
}

impl InputText {
    /// Build form text showing the given inputs
    pub fn from_inputs(inputs: &ConfigInputs) -> Self {
        InputText {
            rows: inputs.rows.to_string(),
            columns: inputs.columns.to_string(),
            display_width_mm: inputs.display_width_mm.to_string(),
            display_height_mm: inputs.display_height_mm.to_string(),
            vesa_width_mm: inputs.vesa_width_mm.to_string(),
            vesa_height_mm: inputs.vesa_height_mm.to_string(),
            display_weight_kg: format_weight(inputs.display_weight_kg),
            orientation: inputs.orientation,
        }
    }

    /// Current text of a field
    pub fn field(&self, field: NumericField) -> &str {
        match field {
            NumericField::Rows => &self.rows,
            NumericField::Columns => &self.columns,
            NumericField::DisplayWidthMm => &self.display_width_mm,
            NumericField::DisplayHeightMm => &self.display_height_mm,
            NumericField::VesaWidthMm => &self.vesa_width_mm,
            NumericField::VesaHeightMm => &self.vesa_height_mm,
            NumericField::DisplayWeightKg => &self.display_weight_kg,
        }
    }

    fn field_mut(&mut self, field: NumericField) -> &mut String {
        match field {
            NumericField::Rows => &mut self.rows,
            NumericField::Columns => &mut self.columns,
            NumericField::DisplayWidthMm => &mut self.display_width_mm,
            NumericField::DisplayHeightMm => &mut self.display_height_mm,
            NumericField::VesaWidthMm => &mut self.vesa_width_mm,
            NumericField::VesaHeightMm => &mut self.vesa_height_mm,
            NumericField::DisplayWeightKg => &mut self.display_weight_kg,
        }
    }

    /// Apply an edit to a field.
    ///
    /// Returns `false` (and keeps the previous text) if the new text contains
    /// anything other than digits.
    pub fn set_field(&mut self, field: NumericField, text: &str) -> bool {
        if !is_digit_text(text) {
            return false;
        }
        *self.field_mut(field) = text.to_string();
        true
    }

    /// Overwrite the display fields with a preset
    pub fn apply_preset(&mut self, preset: &DisplayPreset) {
        self.display_width_mm = preset.display_width_mm.to_string();
        self.display_height_mm = preset.display_height_mm.to_string();
        self.vesa_width_mm = preset.vesa_width_mm.to_string();
        self.vesa_height_mm = preset.vesa_height_mm.to_string();
        self.display_weight_kg = format_weight(preset.display_weight_kg);
    }

    /// Convert the current text into calculation inputs.
    pub fn to_inputs(&self) -> ConfigInputs {
        ConfigInputs {
            rows: parse_int_or_zero(&self.rows),
            columns: parse_int_or_zero(&self.columns),
            display_width_mm: parse_int_or_zero(&self.display_width_mm),
            display_height_mm: parse_int_or_zero(&self.display_height_mm),
            vesa_width_mm: parse_int_or_zero(&self.vesa_width_mm),
            vesa_height_mm: parse_int_or_zero(&self.vesa_height_mm),
            // Weight is entered as whole kg, like the other fields
            display_weight_kg: self
                .display_weight_kg
                .trim()
                .parse::<i64>()
                .map(|v| v as f64)
                .unwrap_or(f64::NAN),
            orientation: self.orientation,
        }
    }
}

fn parse_int_or_zero(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

fn format_weight(weight_kg: f64) -> String {
    if weight_kg.fract() == 0.0 {
        format!("{}", weight_kg as i64)
    } else {
        weight_kg.to_string()
    }
}
