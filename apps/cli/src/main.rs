// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LayoutLens CLI - convert room plan documents into placement JSON.
//!
//! Stands in for the renderer: each invocation is one reload. Every input
//! document is read, parsed, diagnosed and converted from scratch.
//!
//! Usage:
//!   layout-lens [room_plan.json ...] [options]

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::EnvFilter;

mod config;
mod convert;
mod source;

use config::{parse_args, Config, Options};
use convert::{convert_all, Conversion};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,layout_lens_core=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env();
    let options = parse_args(&args, &config)?;

    if options.show_help {
        print_usage();
        return Ok(());
    }

    tracing::info!(
        inputs = options.inputs.len(),
        project_dir = %options.project_dir.display(),
        wall_thickness_m = options.placement.wall_thickness_m,
        labels = options.placement.labels_enabled,
        "Starting conversion"
    );

    let results = convert_all(&options.inputs, &options.project_dir, &options.placement);

    let mut conversions = Vec::with_capacity(results.len());
    let mut failures = 0;
    for (source, result) in results {
        match result {
            Ok(conversion) => conversions.push(conversion),
            Err(err) => {
                // Prior output for this document is left untouched
                tracing::error!(%source, error = %err, "Failed to convert room plan");
                failures += 1;
            }
        }
    }

    write_output(&options, &conversions)?;

    if failures > 0 {
        bail!("{} of {} documents failed to convert", failures, options.inputs.len());
    }

    Ok(())
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    source: &'a str,
    issues: usize,
    #[serde(flatten)]
    counts: layout_lens_geometry::PlacementSummary,
}

fn write_output(options: &Options, conversions: &[Conversion]) -> Result<()> {
    if conversions.is_empty() {
        return Ok(());
    }

    let json = if options.summary_only {
        let lines: Vec<_> = conversions
            .iter()
            .map(|c| SummaryLine {
                source: &c.source,
                issues: c.issues.len(),
                counts: c.placements.summary(),
            })
            .collect();
        serde_json::to_string_pretty(&lines)?
    } else if options.inputs.len() == 1 {
        serde_json::to_string_pretty(&conversions[0].placements)?
    } else {
        serde_json::to_string_pretty(conversions)?
    };

    match &options.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("cannot write output '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote placements");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

fn print_usage() {
    println!("layout-lens - convert room plan documents into placement JSON");
    println!();
    println!("Usage: layout-lens [room_plan.json ...] [options]");
    println!();
    println!("With no documents, reads $LAYOUT_LENS_PLAN (default {}).", config::DEFAULT_PLAN_PATH);
    println!("Relative paths resolve against $LAYOUT_LENS_PROJECT_DIR or --project-dir.");
    println!();
    println!("Options:");
    println!("  -o, --output <path>       Write JSON to a file instead of stdout");
    println!("  --project-dir <dir>       Base directory for relative document paths");
    println!("  --config <file.json>      Placement configuration (missing keys use defaults)");
    println!("  --wall-thickness <cm>     Wall thickness (default 10)");
    println!("  --no-walls                Skip wall boxes");
    println!("  --no-outline              Skip room outline segments");
    println!("  --no-openings             Skip door/window outlines");
    println!("  --no-labels               Leave floor box labels empty");
    println!("  --summary                 Print per-document counts only");
    println!("  -h, --help                Show this help");
}
