//! # Schematic Layout
//!
//! Geometry for a front-view schematic of the wall, in millimetres, with the
//! origin at the top-left corner of the display array and y growing
//! downwards. Front ends scale and draw it; nothing here renders.
//!
//! ## Contents
//!
//! ```text
//! SchematicLayout
//! ├── wall: overall extent of the display array
//! ├── cells: one per display (display outline, VESA pattern, 4 holes, 2 brackets)
//! └── rails: one piece per segment per row, longest first, centred on the wall
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rail_core::calculations::calculate;
//! use rail_core::inputs::ConfigInputs;
//! use rail_core::layout::{SchematicLayout, Viewport};
//!
//! let inputs = ConfigInputs::default();
//! let result = calculate(&inputs).unwrap();
//! let layout = SchematicLayout::build(&inputs, &result).unwrap();
//!
//! assert_eq!(layout.cells.len(), 9);
//! assert_eq!(layout.rails.len(), 6);
//!
//! let scale = Viewport::default().fit_scale(layout.wall.width, layout.wall.height);
//! assert!(scale > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationResult;
use crate::catalog::RailSegment;
use crate::inputs::ConfigInputs;

/// Drawn height of a rail (mm)
pub const RAIL_HEIGHT_MM: f64 = 120.0;

/// Width of one bracket (mm)
pub const BRACKET_WIDTH_MM: f64 = 40.0;

/// Height of one bracket (mm)
pub const BRACKET_HEIGHT_MM: f64 = 426.0;

/// Largest array (in displays) that gets a schematic
pub const MAX_SCHEMATIC_DISPLAYS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Rect of the given size centred on a point
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Point; 4] {
        [
            Point { x: self.x, y: self.y },
            Point { x: self.right(), y: self.y },
            Point { x: self.x, y: self.bottom() },
            Point { x: self.right(), y: self.bottom() },
        ]
    }
}

/// One display and its mounting hardware
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCell {
    pub row: u32,
    pub column: u32,
    /// Display outline
    pub display: Rect,
    /// VESA hole pattern, centred on the display
    pub vesa: Rect,
    /// VESA holes (top-left, top-right, bottom-left, bottom-right)
    pub vesa_holes: [Point; 4],
    /// Left and right brackets, centred on the VESA columns
    pub brackets: [Rect; 2],
}

/// One rail segment placed on the wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailPiece {
    pub row: u32,
    pub segment: RailSegment,
    pub rect: Rect,
}

/// Full schematic geometry for an array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicLayout {
    pub wall: Rect,
    pub cells: Vec<DisplayCell>,
    pub rails: Vec<RailPiece>,
}

impl SchematicLayout {
    /// Lay out the array described by `inputs` with the rails from `result`.
    ///
    /// `result` must come from calculating `inputs`; the array and display
    /// size are taken from the result so orientation is already applied.
    /// Returns `None` for arrays of more than [`MAX_SCHEMATIC_DISPLAYS`].
    pub fn build(inputs: &ConfigInputs, result: &CalculationResult) -> Option<Self> {
        let rows = result.rows;
        let columns = result.columns;
        let displays = rows
            .checked_mul(columns)
            .filter(|&count| count <= MAX_SCHEMATIC_DISPLAYS)?;
        let display_w = f64::from(result.effective_display_width_mm);
        let display_h = f64::from(result.effective_display_height_mm);
        let vesa_w = inputs.vesa_width_mm.max(1) as f64;
        let vesa_h = inputs.vesa_height_mm.max(1) as f64;

        let wall = Rect::new(0.0, 0.0, display_w * f64::from(columns), display_h * f64::from(rows));

        let mut cells = Vec::with_capacity(displays as usize);
        for row in 0..rows {
            for column in 0..columns {
                let display = Rect::new(
                    f64::from(column) * display_w,
                    f64::from(row) * display_h,
                    display_w,
                    display_h,
                );
                let vesa = Rect::centered(display.center(), vesa_w, vesa_h);
                let bracket_y = vesa.center().y;
                let brackets = [
                    Rect::centered(Point { x: vesa.x, y: bracket_y }, BRACKET_WIDTH_MM, BRACKET_HEIGHT_MM),
                    Rect::centered(Point { x: vesa.right(), y: bracket_y }, BRACKET_WIDTH_MM, BRACKET_HEIGHT_MM),
                ];
                cells.push(DisplayCell {
                    row,
                    column,
                    display,
                    vesa,
                    vesa_holes: vesa.corners(),
                    brackets,
                });
            }
        }

        let segments: Vec<RailSegment> = result
            .selected_rail_segments
            .iter()
            .filter_map(|&length| RailSegment::from_length_mm(length))
            .collect();
        let rail_length = f64::from(result.selected_rail_length_mm);
        let rail_start = (wall.width - rail_length) / 2.0;

        let mut rails = Vec::with_capacity(segments.len() * rows as usize);
        for row in 0..rows {
            let row_center = f64::from(row) * display_h + display_h / 2.0;
            let mut cursor = rail_start;
            for &segment in &segments {
                let length = f64::from(segment.length_mm());
                rails.push(RailPiece {
                    row,
                    segment,
                    rect: Rect::new(cursor, row_center - RAIL_HEIGHT_MM / 2.0, length, RAIL_HEIGHT_MM),
                });
                cursor += length;
            }
        }

        Some(SchematicLayout { wall, cells, rails })
    }

    /// Rail pieces in one row, left to right
    pub fn rails_in_row(&self, row: u32) -> impl Iterator<Item = &RailPiece> {
        self.rails.iter().filter(move |piece| piece.row == row)
    }
}

/// Drawing area a schematic is fitted into (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin_x: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 980.0,
            height: 660.0,
            margin_x: 30.0,
            margin_top: 80.0,
            margin_bottom: 28.0,
        }
    }
}

impl Viewport {
    /// Uniform scale (pixels per mm) that fits a wall inside the margins.
    ///
    /// Returns 0 for an empty wall.
    pub fn fit_scale(&self, wall_width_mm: f64, wall_height_mm: f64) -> f64 {
        if wall_width_mm <= 0.0 || wall_height_mm <= 0.0 {
            return 0.0;
        }
        let usable_width = (self.width - self.margin_x * 2.0).max(0.0);
        let usable_height = (self.height - self.margin_top - self.margin_bottom).max(0.0);
        (usable_width / wall_width_mm).min(usable_height / wall_height_mm)
    }

    /// Left edge that centres a wall of the given scaled width
    pub fn centered_x(&self, scaled_width: f64) -> f64 {
        (self.width - scaled_width) / 2.0
    }
}
