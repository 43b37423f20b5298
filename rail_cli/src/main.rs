//! # Railplan CLI Application
//!
//! Terminal interface for configuring a display rail array. Inputs come from
//! the defaults, an optional JSON file, a display preset, individual flags
//! and (with `--interactive`) prompts, applied in that order.
//!
//! ```text
//! railplan --columns 4 --rows 2 --preset 55
//! railplan --orientation portrait --json
//! railplan --input wall.json
//! railplan presets
//! ```

mod report;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rail_core::inputs::parse_field;
use rail_core::{calculate, find_preset, ConfigInputs, NumericField, Orientation, Region};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "railplan")]
#[command(about = "Configure modular mounting rails for a display wall", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with configuration inputs
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Display size preset (e.g. 55, 65, 75)
    #[arg(short, long)]
    preset: Option<String>,

    /// Number of display rows
    #[arg(long)]
    rows: Option<i64>,

    /// Number of displays per row
    #[arg(long)]
    columns: Option<i64>,

    /// Display width in mm
    #[arg(long)]
    width: Option<i64>,

    /// Display height in mm
    #[arg(long)]
    height: Option<i64>,

    /// VESA hole spacing, horizontal, in mm
    #[arg(long)]
    vesa_width: Option<i64>,

    /// VESA hole spacing, vertical, in mm
    #[arg(long)]
    vesa_height: Option<i64>,

    /// Display weight in kg
    #[arg(long)]
    weight: Option<f64>,

    /// landscape or portrait
    #[arg(short, long)]
    orientation: Option<Orientation>,

    /// Prompt for every field
    #[arg(long)]
    interactive: bool,

    /// Print the result (or error) as JSON
    #[arg(long)]
    json: bool,

    /// Region for purchase links in the bill of materials
    #[arg(long, value_parser = parse_region, default_value = "au")]
    region: Region,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List display size presets
    Presets,
    /// List the rail segment catalog
    Catalog,
}

/// A calculation ran and reported a configuration error
const EXIT_CALCULATION_ERROR: u8 = 1;
/// Inputs could not be read (bad file, bad JSON, unknown preset)
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_INPUT_ERROR
        }
    };
    ExitCode::from(code)
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Run one command and return the process exit code
fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Some(Commands::Presets) => {
            report::print_presets();
            return Ok(0);
        }
        Some(Commands::Catalog) => {
            report::print_catalog();
            return Ok(0);
        }
        None => {}
    }

    let inputs = gather_inputs(&cli)?;
    debug!(?inputs, "calculating configuration");

    match calculate(&inputs) {
        Ok(result) => {
            if cli.json {
                println!("{}", report::result_json(&inputs, &result)?);
            } else {
                report::print_result(&inputs, &result, cli.region);
            }
            Ok(0)
        }
        Err(e) => {
            if cli.json {
                println!("{}", report::error_json(&e)?);
            } else {
                report::print_error(&e);
            }
            Ok(EXIT_CALCULATION_ERROR)
        }
    }
}

fn gather_inputs(cli: &Cli) -> Result<ConfigInputs> {
    let mut inputs = match &cli.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid configuration JSON in {}", path.display()))?
        }
        None => ConfigInputs::default(),
    };

    if let Some(size) = &cli.preset {
        let preset = find_preset(size)
            .with_context(|| format!("Unknown display preset '{}' (see `railplan presets`)", size))?;
        inputs = inputs.with_preset(preset);
    }

    let overrides = [
        (NumericField::Rows, cli.rows.map(|v| v as f64)),
        (NumericField::Columns, cli.columns.map(|v| v as f64)),
        (NumericField::DisplayWidthMm, cli.width.map(|v| v as f64)),
        (NumericField::DisplayHeightMm, cli.height.map(|v| v as f64)),
        (NumericField::VesaWidthMm, cli.vesa_width.map(|v| v as f64)),
        (NumericField::VesaHeightMm, cli.vesa_height.map(|v| v as f64)),
        (NumericField::DisplayWeightKg, cli.weight),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            field.assign(&mut inputs, value);
        }
    }
    if let Some(orientation) = cli.orientation {
        inputs.orientation = orientation;
    }

    if cli.interactive {
        prompt_inputs(&mut inputs)?;
    }

    Ok(inputs)
}

fn prompt_inputs(inputs: &mut ConfigInputs) -> Result<()> {
    println!("Railplan - Display Rail Configurator");
    println!("====================================");
    println!("Press Enter to keep the value in brackets.");
    println!();

    for field in NumericField::ALL {
        let current = field.value_in(inputs);
        let answer = prompt(&format!("{} [{}]: ", field.label(), current))?;
        if answer.is_empty() {
            continue;
        }
        match parse_field(field, &answer) {
            Ok(value) => field.assign(inputs, value),
            Err(e) => eprintln!("  {} - keeping {}", e, current),
        }
    }

    let answer = prompt(&format!(
        "Orientation (landscape/portrait) [{}]: ",
        inputs.orientation.display_name().to_lowercase()
    ))?;
    if !answer.is_empty() {
        match answer.parse::<Orientation>() {
            Ok(orientation) => inputs.orientation = orientation,
            Err(e) => eprintln!("  {} - keeping {}", e, inputs.orientation.display_name()),
        }
    }
    println!();
    Ok(())
}

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn parse_region(s: &str) -> Result<Region, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "au" | "australia" => Ok(Region::Australia),
        "na" | "us" | "north-america" => Ok(Region::NorthAmerica),
        other => Err(format!("unknown region '{}' (expected au or na)", other)),
    }
}
