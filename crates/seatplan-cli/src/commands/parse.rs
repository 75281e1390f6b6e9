use seatplan_core::error::SeatplanError;
use seatplan_core::ingest;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), SeatplanError> {
    let bytes = std::fs::read(&input_file)?;
    let parsed = ingest::parse_guest_csv(&bytes)?;

    for w in &parsed.warnings {
        eprintln!("  warning: {}", w.message);
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed.guests)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} guest(s), written to {}",
                parsed.guests.len(),
                path.display()
            );
        }
        None => {
            let output_str = match output_format {
                "json" => serde_json::to_string_pretty(&parsed.guests)?,
                _ => output::table::format_guests(&parsed.guests),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
