use seatplan_core::classify;
use seatplan_core::error::SeatplanError;
use seatplan_core::ingest;
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), SeatplanError> {
    let bytes = std::fs::read(&input_file)?;
    let parsed = ingest::parse_guest_csv(&bytes)?;

    for w in &parsed.warnings {
        eprintln!("  warning: {}", w.message);
    }

    let classified = classify::partition(parsed.guests);

    match output_format {
        "json" => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "attending": classified.attending,
                "pending": classified.pending,
                "declined": classified.declined,
            }))?;
            println!("{json}");
        }
        _ => output::table::print_classification(&classified),
    }

    Ok(())
}
