//! Text exports of a generated reef.

use crate::app::RunReport;
use reefgen_core::ReefGrid;
use reefgen_data::Category;
use serde::Serialize;
use std::fmt::Write;

const EXPORT_VERSION: u32 = 1;

/// JSON document of one run. Borrows both parts to avoid cloning the grid.
#[derive(Serialize)]
pub struct ReefExportRef<'a> {
    pub version: u32,
    pub report: &'a RunReport,
    pub grid: &'a ReefGrid,
}

/// Symbol map, top row first, optionally followed by a legend.
pub fn ascii(grid: &ReefGrid, legend: bool) -> String {
    let mut out = grid.to_ascii();
    if legend {
        out.push('\n');
        for category in Category::ALL {
            let _ = writeln!(out, "  {}  {}", category.symbol(), category);
        }
    }
    out
}

pub fn json(report: &RunReport, grid: &ReefGrid) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReefExportRef {
        version: EXPORT_VERSION,
        report,
        grid,
    })
}

pub fn summary(report: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "generation:  {}", report.generation);
    let _ = writeln!(out, "seed:        {}", report.seed);
    let _ = writeln!(out, "fingerprint: {}", report.fingerprint);
    for category in Category::ALL {
        let _ = writeln!(
            out,
            "{:<13}{}",
            format!("{}:", category),
            report.counts[category.index()]
        );
    }
    match report.spawn {
        Some((x, y)) => {
            let _ = writeln!(out, "spawn:       ({}, {})", x, y);
        }
        None => {
            let _ = writeln!(out, "spawn:       none");
        }
    }
    out
}
