use seatplan_core::error::SeatplanError;
use seatplan_core::model::GuestRecord;
use seatplan_core::report;
use seatplan_core::{build_plan, plan_from_csv, CategoryOrder, PlanOptions};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    out: PathBuf,
    table_size: usize,
    category_order: CategoryOrder,
    output_format: &str,
    verbose: bool,
) -> Result<(), SeatplanError> {
    let options = PlanOptions {
        table_size,
        category_order,
    };

    // Determine input type by extension
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let bytes = std::fs::read(&input_file)?;
    let plan = if is_json {
        // Pre-parsed guest records from a `parse -O` dump
        let guests: Vec<GuestRecord> = serde_json::from_slice(&bytes)?;
        build_plan(guests, &options)
    } else {
        plan_from_csv(&bytes, &options)?
    };

    for w in &plan.trace.warnings {
        eprintln!("  warning: {}", w.message);
    }

    let report = report::project(&plan);
    output::xlsx::write_workbook(&report, &out)?;

    match output_format {
        "json" => output::json::print(&plan)?,
        _ => output::table::print_plan(&plan, verbose),
    }
    eprintln!("Wrote seating plan to {}", out.display());

    Ok(())
}
