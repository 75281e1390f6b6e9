pub mod columns;

use crate::error::SeatplanError;
use crate::model::GuestRecord;
use crate::trace::{TraceSeverity, TraceWarning};

use columns::ColumnMap;

/// Guest records parsed from an export, plus non-fatal irregularities.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub guests: Vec<GuestRecord>,
    pub warnings: Vec<TraceWarning>,
}

/// Parse a raw guest-list CSV export into normalized guest records.
///
/// Header columns are matched leniently (see [`columns::normalize_header`]).
/// A missing required column aborts before any row is read. Rows with both
/// name fields empty are kept with an empty name and a warning, never
/// dropped.
pub fn parse_guest_csv(bytes: &[u8]) -> Result<Ingested, SeatplanError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SeatplanError::EmptyInput);
    }
    let map = ColumnMap::from_headers(&headers)?;

    let mut guests = Vec::new();
    let mut warnings = Vec::new();

    for (seq, result) in reader.records().enumerate() {
        let record = result?;

        let first = field(&record, map.first_name);
        let last = field(&record, map.last_name);
        let full_name = GuestRecord::compose_name(first, last);
        if full_name.is_empty() {
            warnings.push(TraceWarning {
                seq: Some(seq),
                message: format!("row {}: both name fields are empty", seq + 1),
                severity: TraceSeverity::Important,
            });
        }

        let remarks =
            GuestRecord::combine_remarks(field(&record, map.requests), field(&record, map.comments));

        guests.push(GuestRecord {
            seq,
            full_name,
            rsvp: owned(field(&record, map.rsvp)),
            tags: owned(field(&record, map.tags)),
            party: owned(field(&record, map.party)),
            meal: owned(field(&record, map.meal)),
            baby_chair: owned(field(&record, map.baby_chair)),
            car_park: owned(field(&record, map.car_park)),
            remarks,
        });
    }

    Ok(Ingested { guests, warnings })
}

/// Fetch a cell by resolved column index; ragged rows and blank cells both
/// come back as None.
fn field(record: &csv::StringRecord, idx: usize) -> Option<&str> {
    let raw = record.get(idx)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}
