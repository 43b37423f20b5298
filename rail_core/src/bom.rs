//! # Bill of Materials
//!
//! Turns a [`CalculationResult`] into orderable product lines.
//!
//! Line order is fixed: the bracket pair first, then rail segments in
//! catalog order (only those used), then the rail extension kit that joins
//! segments. The joiner line is always present, even with a quantity of 0.
//!
//! ## Example
//!
//! ```rust
//! use rail_core::bom::{BillOfMaterials, Product};
//! use rail_core::calculations::calculate;
//! use rail_core::inputs::ConfigInputs;
//!
//! let result = calculate(&ConfigInputs::default()).unwrap();
//! let bom = BillOfMaterials::from_result(&result);
//!
//! let codes: Vec<&str> = bom.lines.iter().map(|l| l.product.code()).collect();
//! assert_eq!(codes, vec!["ADB-B400", "ADB-R175", "ADB-RX"]);
//! assert_eq!(bom.quantity_of(Product::RailExtensionKit), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationResult;
use crate::catalog::RailSegment;

/// Sales region for purchase links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Australia,
    NorthAmerica,
}

impl Region {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Australia => "Australia",
            Region::NorthAmerica => "North America",
        }
    }
}

/// Every product that can appear on a bill of materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "segment")]
pub enum Product {
    /// VESA 400 bracket pair, one per display
    BracketPair,
    /// A rail segment from the catalog
    Rail(RailSegment),
    /// Rail extension kit joining two adjacent segments
    RailExtensionKit,
}

impl Product {
    /// Product code
    pub fn code(&self) -> &'static str {
        match self {
            Product::BracketPair => "ADB-B400",
            Product::Rail(segment) => segment.sku(),
            Product::RailExtensionKit => "ADB-RX",
        }
    }

    /// Product description
    pub fn description(&self) -> &'static str {
        match self {
            Product::BracketPair => "ADB VESA 400 Brackets",
            Product::Rail(segment) => segment.description(),
            Product::RailExtensionKit => "ADB Rail Extension Kit",
        }
    }

    /// Purchase page for a region
    pub fn url(&self, region: Region) -> String {
        let slug = match self {
            Product::BracketPair => "adb-b400f",
            Product::Rail(RailSegment::R48) => "adb-r48-b",
            Product::Rail(RailSegment::R68) => "adb-r68-b",
            Product::Rail(RailSegment::R125) => "adb-r125-b",
            Product::Rail(RailSegment::R175) => "adb-r175-b",
            Product::RailExtensionKit => "adb-rx",
        };
        let host = match region {
            Region::Australia => "atdec.com.au",
            Region::NorthAmerica => "atdec.com",
        };
        format!("http://{}/{}", host, slug)
    }
}

/// One row of the bill of materials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub product: Product,
    pub quantity: u32,
}

impl BomLine {
    pub fn code(&self) -> &'static str {
        self.product.code()
    }

    pub fn description(&self) -> &'static str {
        self.product.description()
    }
}

/// Ordered product lines for a whole array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub lines: Vec<BomLine>,
}

impl BillOfMaterials {
    /// Build the bill of materials for a calculation result
    pub fn from_result(result: &CalculationResult) -> Self {
        let mut lines = vec![BomLine {
            product: Product::BracketPair,
            quantity: result.total_bracket_pairs,
        }];

        lines.extend(result.total_rails.iter().map(|part| BomLine {
            product: Product::Rail(part.segment),
            quantity: part.qty,
        }));

        lines.push(BomLine {
            product: Product::RailExtensionKit,
            quantity: result.total_joiners,
        });

        BillOfMaterials { lines }
    }

    /// Quantity ordered of a product (0 if not listed)
    pub fn quantity_of(&self, product: Product) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.product == product)
            .map(|line| line.quantity)
            .sum()
    }

    /// Total number of items across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
