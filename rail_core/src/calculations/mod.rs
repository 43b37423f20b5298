//! # Rail Calculations
//!
//! The calculation pipeline for a display array. Each stage is a pure
//! function over JSON-serializable types:
//!
//! - [`geometry`] - `resolve(inputs) -> Result<ResolvedGeometry, CalcError>`
//! - [`rail_optimizer`] - `optimize(min, max, catalog) -> Option<RailCombination>`
//! - [`configuration`] - `calculate(inputs) -> Result<CalculationResult, CalcError>`
//!
//! Nothing is cached between calls; recomputing on every input edit is cheap.

pub mod configuration;
pub mod geometry;
pub mod rail_optimizer;

// Re-export commonly used types
pub use configuration::{calculate, CalculationResult, RailPart};
pub use geometry::{resolve, RailRange, ResolvedGeometry};
pub use rail_optimizer::{optimize, RailCombination, SegmentCount};
