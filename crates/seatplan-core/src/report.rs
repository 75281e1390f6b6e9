use serde::{Deserialize, Serialize};

use crate::model::GuestRecord;
use crate::SeatingPlan;

/// Column labels of the seating sheet, in display order.
pub const SEATING_COLUMNS: [&str; 7] = [
    "Table",
    "Name",
    "Meal preference",
    "Baby chair",
    "Car park coupon",
    "Remarks",
    "Tags",
];

/// One display row of a table block. Placeholder rows keep their seat number
/// and leave every other field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    /// 1-based row number within the table.
    pub seat: usize,
    pub name: String,
    pub meal: String,
    pub baby_chair: String,
    pub car_park: String,
    pub remarks: String,
    pub tags: String,
}

impl SeatRow {
    fn placeholder(seat: usize) -> SeatRow {
        SeatRow {
            seat,
            name: String::new(),
            meal: String::new(),
            baby_chair: String::new(),
            car_park: String::new(),
            remarks: String::new(),
            tags: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
            && self.meal.is_empty()
            && self.baby_chair.is_empty()
            && self.car_park.is_empty()
            && self.remarks.is_empty()
            && self.tags.is_empty()
    }
}

/// The display block for one table: header marker, column labels, then the
/// padded guest rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBlock {
    pub number: u32,
    /// Header marker text, e.g. "Table #3".
    pub title: String,
    pub category: String,
    pub rows: Vec<SeatRow>,
}

/// The full multi-sheet report: seating blocks plus the pending and declined
/// row sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingReport {
    pub tables: Vec<TableBlock>,
    pub pending: Vec<GuestRecord>,
    pub declined: Vec<GuestRecord>,
}

/// Project a finished plan into display blocks.
///
/// Read-only: sorts each table's guests by (category, party, name), pads
/// with placeholder rows up to the base table size, and applies the
/// "no"-cleaning rule to the preference columns. A table seating one guest
/// over the base size emits that extra row rather than dropping a guest.
pub fn project(plan: &SeatingPlan) -> SeatingReport {
    let mut tables = Vec::with_capacity(plan.tables.len());

    for table in &plan.tables {
        let mut guests: Vec<&GuestRecord> =
            table.members.iter().map(|&idx| &plan.attending[idx]).collect();
        guests.sort_by_key(|g| (g.category().label, g.party_id(), g.full_name.clone()));

        let mut rows: Vec<SeatRow> = guests
            .iter()
            .enumerate()
            .map(|(i, guest)| SeatRow {
                seat: i + 1,
                name: guest.full_name.clone(),
                meal: clean_no(guest.meal.as_deref()),
                baby_chair: clean_no(guest.baby_chair.as_deref()),
                car_park: clean_no(guest.car_park.as_deref()),
                remarks: guest.remarks.clone(),
                tags: guest.tags.clone().unwrap_or_default(),
            })
            .collect();

        while rows.len() < plan.table_size {
            rows.push(SeatRow::placeholder(rows.len() + 1));
        }

        tables.push(TableBlock {
            number: table.number,
            title: format!("Table #{}", table.number),
            category: table.category.clone(),
            rows,
        });
    }

    SeatingReport {
        tables,
        pending: plan.pending.clone(),
        declined: plan.declined.clone(),
    }
}

/// Display-layer cleaning for the preference columns only: any cell whose
/// text contains "no" (case-insensitive) is blanked. Unrelated to RSVP
/// decline detection.
fn clean_no(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(text) => {
            if text.to_lowercase().contains("no") {
                String::new()
            } else {
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_plan;
    use crate::model::GuestRecord;
    use crate::packing::PlanOptions;

    fn guest(seq: usize, name: &str, party: Option<&str>) -> GuestRecord {
        GuestRecord {
            seq,
            full_name: name.to_string(),
            rsvp: Some("Accept".to_string()),
            tags: Some("Family".to_string()),
            party: party.map(str::to_string),
            meal: None,
            baby_chair: None,
            car_park: None,
            remarks: String::new(),
        }
    }

    #[test]
    fn test_rows_sorted_party_then_name() {
        let guests = vec![
            guest(0, "Zoe", None),
            guest(1, "Ben", Some("P1")),
            guest(2, "Amy", Some("P1")),
            guest(3, "Carl", None),
        ];
        let plan = build_plan(guests, &PlanOptions::default());
        let report = project(&plan);

        let names: Vec<&str> = report.tables[0]
            .rows
            .iter()
            .filter(|r| !r.is_placeholder())
            .map(|r| r.name.as_str())
            .collect();
        // Stated party members first (by name within the party), then solos
        // in ingestion order: each solo is its own party keyed by seq
        assert_eq!(names, vec!["Amy", "Ben", "Zoe", "Carl"]);
    }

    #[test]
    fn test_padding_to_base_size_with_row_numbers() {
        let plan = build_plan(vec![guest(0, "Solo", None)], &PlanOptions::default());
        let report = project(&plan);
        let rows = &report.tables[0].rows;
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].seat, 1);
        assert_eq!(rows[9].seat, 10);
        assert!(rows[9].is_placeholder());
        assert_eq!(report.tables[0].title, "Table #1");
    }

    #[test]
    fn test_overflow_table_emits_eleventh_row() {
        let guests: Vec<GuestRecord> = (0..11)
            .map(|seq| guest(seq, &format!("Guest {seq:02}"), None))
            .collect();
        let plan = build_plan(guests, &PlanOptions::default());
        let report = project(&plan);
        let rows = &report.tables[0].rows;
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[10].seat, 11);
        assert!(!rows[10].is_placeholder());
    }

    #[test]
    fn test_no_cleaning_hits_preferences_only() {
        let mut g = guest(0, "Ada", None);
        g.meal = Some("No beef".to_string());
        g.baby_chair = Some("Not needed".to_string());
        g.car_park = Some("Yes".to_string());
        g.remarks = "North entrance".to_string();

        let plan = build_plan(vec![g], &PlanOptions::default());
        let report = project(&plan);
        let row = &report.tables[0].rows[0];
        assert_eq!(row.meal, "");
        assert_eq!(row.baby_chair, "");
        assert_eq!(row.car_park, "Yes");
        // "North" contains "no" but remarks are not a preference column
        assert_eq!(row.remarks, "North entrance");
    }

    #[test]
    fn test_pending_and_declined_carried_through() {
        let mut pending = guest(0, "Maybe", None);
        pending.rsvp = None;
        let mut declined = guest(1, "Sorry", None);
        declined.rsvp = Some("Regretfully decline".to_string());

        let plan = build_plan(
            vec![pending, declined, guest(2, "Here", None)],
            &PlanOptions::default(),
        );
        let report = project(&plan);
        assert_eq!(report.pending.len(), 1);
        assert_eq!(report.declined.len(), 1);
        assert_eq!(report.tables.len(), 1);
    }
}
