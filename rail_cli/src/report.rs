//! Text and JSON output for the CLI.

use anyhow::Result;
use rail_core::layout::SchematicLayout;
use rail_core::{
    BillOfMaterials, CalcError, CalculationResult, ConfigInputs, Region, DISPLAY_PRESETS,
    RAIL_CATALOG,
};
use serde::Serialize;

/// Millimetres per character in the rail sketch
const SKETCH_MM_PER_CHAR: u32 = 50;

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a ConfigInputs,
    result: &'a CalculationResult,
    bill_of_materials: BillOfMaterials,
    layout: Option<SchematicLayout>,
}

/// Full result, BOM and layout as pretty JSON (layout is null for arrays
/// too large to draw)
pub fn result_json(inputs: &ConfigInputs, result: &CalculationResult) -> Result<String> {
    let report = JsonReport {
        inputs,
        result,
        bill_of_materials: BillOfMaterials::from_result(result),
        layout: SchematicLayout::build(inputs, result),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Error as pretty JSON, with its code and message alongside the details
pub fn error_json(error: &CalcError) -> Result<String> {
    let value = serde_json::json!({
        "code": error.error_code(),
        "message": error.to_string(),
        "requires_support": error.requires_support(),
        "error": error,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn print_error(error: &CalcError) {
    eprintln!("═══════════════════════════════════════");
    eprintln!("  NO VALID SOLUTION");
    eprintln!("═══════════════════════════════════════");
    eprintln!();
    eprintln!("{}", error);
    if error.requires_support() {
        eprintln!();
        eprintln!("This configuration is outside the supported product range.");
    }
}

pub fn print_result(inputs: &ConfigInputs, result: &CalculationResult, region: Region) {
    println!("═══════════════════════════════════════");
    println!("  SUMMARY");
    println!("═══════════════════════════════════════");
    println!();
    println!(
        "Array:    {} x {} ({}), {} x {} mm displays",
        inputs.rows,
        inputs.columns,
        inputs.orientation.display_name(),
        result.effective_display_width_mm,
        result.effective_display_height_mm
    );
    println!("Minimum rail length (each row):        {} mm", result.min_rail_mm);
    println!("Maximum rail length (each row):        {} mm", result.max_rail_mm);
    println!("Segment count (each row):              {}", result.rail_segments_per_row);
    println!("Selected segments combined (each row): {} mm", result.selected_rail_length_mm);
    println!();

    print_bom(&BillOfMaterials::from_result(result), region);
    println!();
    match SchematicLayout::build(inputs, result) {
        Some(layout) => print_sketch(&layout),
        None => println!("(array too large to sketch)"),
    }
}

fn print_bom(bom: &BillOfMaterials, region: Region) {
    println!("═══════════════════════════════════════");
    println!("  BILL OF MATERIALS");
    println!("═══════════════════════════════════════");
    println!();
    println!("{:<10} {:<24} {:>5}  {}", "Code", "Description", "Qty", region.display_name());
    for line in &bom.lines {
        println!(
            "{:<10} {:<24} {:>5}  {}",
            line.code(),
            line.description(),
            line.quantity,
            line.product.url(region)
        );
    }
}

fn print_sketch(layout: &SchematicLayout) {
    println!("═══════════════════════════════════════");
    println!("  RAILS (1 char = {} mm)", SKETCH_MM_PER_CHAR);
    println!("═══════════════════════════════════════");
    println!();

    let rows = layout.cells.iter().map(|c| c.row + 1).max().unwrap_or(0);
    let wall_chars = chars_for(layout.wall.width);
    for row in 0..rows {
        let mut line = String::new();
        let mut cursor = 0usize;
        for piece in layout.rails_in_row(row) {
            let start = chars_for(piece.rect.x);
            let width = chars_for(piece.rect.width).max(3);
            line.push_str(&" ".repeat(start.saturating_sub(cursor)));
            line.push_str(&segment_block(piece.segment.length_mm(), width));
            cursor = start.max(cursor) + width;
        }
        line.push_str(&" ".repeat(wall_chars.saturating_sub(cursor)));
        println!("Row {:>2} |{}|", row + 1, line);
    }
}

fn segment_block(length_mm: u32, width: usize) -> String {
    let label = length_mm.to_string();
    let inner = width - 2;
    if label.len() > inner {
        return format!("[{}]", "=".repeat(inner));
    }
    let pad = inner - label.len();
    format!("[{}{}{}]", "=".repeat(pad / 2), label, "=".repeat(pad - pad / 2))
}

fn chars_for(mm: f64) -> usize {
    (mm / f64::from(SKETCH_MM_PER_CHAR)).round().max(0.0) as usize
}

pub fn print_presets() {
    println!("{:<6} {:>12} {:>12} {:>8}", "Size", "Display (mm)", "VESA (mm)", "Weight");
    for preset in DISPLAY_PRESETS.iter() {
        println!(
            "{:<6} {:>12} {:>12} {:>5} kg",
            preset.size,
            format!("{} x {}", preset.display_width_mm, preset.display_height_mm),
            format!("{} x {}", preset.vesa_width_mm, preset.vesa_height_mm),
            preset.display_weight_kg
        );
    }
}

pub fn print_catalog() {
    println!("{:<10} {:>8}  {}", "Code", "Length", "Description");
    for segment in RAIL_CATALOG.iter() {
        println!(
            "{:<10} {:>5} mm  {}",
            segment.sku(),
            segment.length_mm(),
            segment.description()
        );
    }
}
