//! # BOM CLI
//!
//! Minimal terminal driver for `bom_core`: load a job spec from a JSON file
//! (or fall back to the default demo job), run the generator once, print the
//! BOM grouped by category.
//!
//! The engine itself has no CLI surface; this binary is an external
//! collaborator the way the review UI is, talking to the engine through the
//! same JSON job shape.

use std::env;
use std::fs;
use std::process::ExitCode;

use bom_core::bom::{build_bom, BomRow};
use bom_core::errors::EstimateError;
use bom_core::job::JobSpec;
use bom_core::units::format_ft_in;

fn load_spec(path: &str) -> Result<JobSpec, EstimateError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| EstimateError::file_error("read", path, e.to_string()))?;
    JobSpec::from_json(&raw)
}

fn print_bom(bom: &[BomRow]) {
    let mut current_category = None;
    for row in bom {
        if current_category != Some(row.category) {
            current_category = Some(row.category);
            println!();
            println!("=== {:?} ===", row.category);
        }
        let length = row
            .length_ft
            .map(|l| format!(" @ {}", format_ft_in(l)))
            .unwrap_or_default();
        let color = row
            .panel_color
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        let notes = row
            .notes
            .as_deref()
            .map(|n| format!("  ({})", n))
            .unwrap_or_default();
        println!(
            "  {:<28} {:>8} {}{}{}{}",
            row.item,
            row.qty,
            row.unit.abbrev(),
            length,
            color,
            notes
        );
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let spec = match env::args().nth(1) {
        Some(path) => match load_spec(&path) {
            Ok(spec) => spec,
            Err(e) => {
                eprintln!("error [{}]: {}", e.error_code(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            println!("usage: bom_cli <job.json>");
            println!("no job file given; estimating the default 30x50 job");
            JobSpec::default()
        }
    };

    let bom = build_bom(&spec);
    print_bom(&bom);
    println!();
    println!("{} rows", bom.len());
    ExitCode::SUCCESS
}
