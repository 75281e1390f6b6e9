pub mod classify;
pub mod error;
pub mod grouping;
pub mod ingest;
pub mod model;
pub mod packing;
pub mod report;
pub mod trace;

use serde::{Deserialize, Serialize};

use classify::Classified;
use error::SeatplanError;
use model::GuestRecord;
use packing::TablePlan;
use trace::PlanTrace;

pub use packing::{CategoryOrder, PlanOptions, DEFAULT_TABLE_SIZE};

/// Result of one planning run: the packed tables, the attendance buckets,
/// and the diagnostics trace. Self-contained: nothing is shared across
/// invocations, so repeated runs over the same input are reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub tables: Vec<TablePlan>,
    /// Attending guests; table members index into this list.
    pub attending: Vec<GuestRecord>,
    pub pending: Vec<GuestRecord>,
    pub declined: Vec<GuestRecord>,
    /// Base table size the plan was packed with (display row budget).
    pub table_size: usize,
    pub trace: PlanTrace,
}

/// Main API entry point: plan seating from a raw guest-list CSV export.
pub fn plan_from_csv(
    csv_bytes: &[u8],
    options: &PlanOptions,
) -> Result<SeatingPlan, SeatplanError> {
    let ingested = ingest::parse_guest_csv(csv_bytes)?;
    let trace = PlanTrace {
        warnings: ingested.warnings,
        ..PlanTrace::default()
    };
    Ok(run_pipeline(ingested.guests, options, trace))
}

/// Plan seating from already-normalized guest records (e.g. a saved JSON
/// dump of a previous `parse`).
pub fn build_plan(guests: Vec<GuestRecord>, options: &PlanOptions) -> SeatingPlan {
    run_pipeline(guests, options, PlanTrace::default())
}

fn run_pipeline(
    guests: Vec<GuestRecord>,
    options: &PlanOptions,
    mut trace: PlanTrace,
) -> SeatingPlan {
    let Classified {
        attending,
        pending,
        declined,
    } = classify::partition(guests);

    let groups = grouping::group_by_category(&attending);
    let tables = packing::pack(&groups, options, &mut trace);

    SeatingPlan {
        tables,
        attending,
        pending,
        declined,
        table_size: options.table_size,
        trace,
    }
}
