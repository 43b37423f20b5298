//! # rail_core - Display Rail Configuration Engine
//!
//! `rail_core` is the computational heart of Railplan. Given a grid of
//! digital displays, it works out the rail length each row needs, picks the
//! fewest catalog rail segments that fit, and derives the bill of materials
//! and a schematic layout. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use rail_core::{calculate, BillOfMaterials, ConfigInputs};
//!
//! let inputs = ConfigInputs::default(); // 3x3 wall of 1440x810 displays
//! let result = calculate(&inputs).unwrap();
//! assert_eq!(result.selected_rail_length_mm, 3500);
//!
//! let bom = BillOfMaterials::from_result(&result);
//! let json = serde_json::to_string_pretty(&bom).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Geometry resolution, rail optimization, full configuration
//! - [`catalog`] - The rail segment catalog
//! - [`inputs`] - Configuration inputs and form text handling
//! - [`presets`] - Typical display sizes
//! - [`bom`] - Bill of materials and product master
//! - [`layout`] - Schematic geometry
//! - [`errors`] - Structured error types

pub mod bom;
pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod inputs;
pub mod layout;
pub mod presets;

// Re-export commonly used types at crate root for convenience
pub use bom::{BillOfMaterials, BomLine, Product, Region};
pub use calculations::{calculate, CalculationResult, RailPart};
pub use catalog::{RailSegment, RAIL_CATALOG};
pub use errors::{CalcError, CalcResult};
pub use inputs::{ConfigInputs, InputText, NumericField, Orientation};
pub use layout::{SchematicLayout, Viewport};
pub use presets::{find_preset, DisplayPreset, DISPLAY_PRESETS};
