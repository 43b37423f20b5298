//! # Error Types
//!
//! Structured error types for rail_core. Every failure the engine can report
//! is a value of [`CalcError`]; nothing panics across the crate boundary.
//! Each variant carries enough context to render a distinct, actionable
//! message, and serializes to JSON for front ends that want the raw data.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::errors::{CalcError, CalcResult};
//!
//! fn check_weight(weight_kg: f64) -> CalcResult<()> {
//!     if weight_kg > 50.0 {
//!         return Err(CalcError::UnsupportedWeightClass { weight_kg });
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_weight(51.0).unwrap_err().error_code(), "UNSUPPORTED_WEIGHT_CLASS");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rail_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for configuration calculations.
///
/// Variants fall into three groups:
///
/// - malformed input the user must correct (`InvalidArrayDimensions`,
///   `InvalidDisplayDimensions`, `InvalidWeight`, `InvalidField`)
/// - input outside the modelled product line (`UnsupportedWeightClass`,
///   `UnsupportedBracketClass`), where the user should contact support
/// - inputs that are well formed but have no rail solution (`InfeasibleRange`,
///   `NoRailCombination`, `RailRangeTooLong`) or too many parts to count
///   (`ArrayTooLarge`)
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Rows or columns is not an integer >= 1
    #[error("Rows and columns must be integers greater than or equal to 1.")]
    InvalidArrayDimensions { rows: i64, columns: i64 },

    /// A display or VESA dimension is not an integer >= 1
    #[error("All dimensions must be integer millimetres greater than or equal to 1.")]
    InvalidDisplayDimensions { field: String, value: i64 },

    /// Display weight is negative or not a finite number
    #[error("Display weight must be a non-negative number.")]
    InvalidWeight { weight_kg: f64 },

    /// Display weight needs a heavier bracket class than the ADB-B400
    #[error("This tool does not support ADB-B600H configurations yet. Please contact Atdec for more information.")]
    UnsupportedWeightClass { weight_kg: f64 },

    /// VESA height needs a longer bracket than the ADB-B400
    #[error("This does not support display brackets longer than ADB-B400 yet. Please contact Atdec for more information.")]
    UnsupportedBracketClass { vesa_height_mm: i64 },

    /// Minimum rail length exceeds the maximum: no rail fits the row
    #[error("Invalid configuration: minimum rail length ({min_rail_mm} mm) exceeds maximum rail length ({max_rail_mm} mm).")]
    InfeasibleRange { min_rail_mm: i64, max_rail_mm: i64 },

    /// The range is valid but no sum of catalog segments lands inside it
    #[error("No valid rail combination exists between {min_rail_mm} mm and {max_rail_mm} mm using available rail sizes.")]
    NoRailCombination { min_rail_mm: u32, max_rail_mm: u32 },

    /// Required rail is longer than the optimizer will search
    #[error("Rail length of {max_rail_mm} mm exceeds the supported maximum of {limit_mm} mm.")]
    RailRangeTooLong { max_rail_mm: i64, limit_mm: u32 },

    /// Part quantities for the whole array overflow the quantity type
    #[error("An array of {rows} x {columns} displays is too large to count parts for.")]
    ArrayTooLarge { rows: i64, columns: i64 },

    /// Text could not be entered into a numeric field
    #[error("Invalid input for '{field}': '{value}' - {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidDisplayDimensions error
    pub fn invalid_display_dimension(field: impl Into<String>, value: i64) -> Self {
        CalcError::InvalidDisplayDimensions {
            field: field.into(),
            value,
        }
    }

    /// Create an InvalidField error
    pub fn invalid_field(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if the input is outside the supported product line.
    ///
    /// These errors cannot be fixed by correcting a typo; the front end should
    /// direct the user to contact support instead.
    pub fn requires_support(&self) -> bool {
        matches!(
            self,
            CalcError::UnsupportedWeightClass { .. } | CalcError::UnsupportedBracketClass { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidArrayDimensions { .. } => "INVALID_ARRAY_DIMENSIONS",
            CalcError::InvalidDisplayDimensions { .. } => "INVALID_DISPLAY_DIMENSIONS",
            CalcError::InvalidWeight { .. } => "INVALID_WEIGHT",
            CalcError::UnsupportedWeightClass { .. } => "UNSUPPORTED_WEIGHT_CLASS",
            CalcError::UnsupportedBracketClass { .. } => "UNSUPPORTED_BRACKET_CLASS",
            CalcError::InfeasibleRange { .. } => "INFEASIBLE_RANGE",
            CalcError::NoRailCombination { .. } => "NO_RAIL_COMBINATION",
            CalcError::RailRangeTooLong { .. } => "RAIL_RANGE_TOO_LONG",
            CalcError::ArrayTooLarge { .. } => "ARRAY_TOO_LARGE",
            CalcError::InvalidField { .. } => "INVALID_FIELD",
        }
    }
}
