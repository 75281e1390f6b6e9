//! Integration tests for the plan_from_csv() end-to-end pipeline.
//!
//! All inputs are built in memory as CSV text; no fixture files.

use seatplan_core::error::SeatplanError;
use seatplan_core::report::project;
use seatplan_core::{plan_from_csv, CategoryOrder, PlanOptions, SeatingPlan};

const HEADER: &str = "first name,last name,rsvp,tags,party,meal,baby chair,car park coupon,other requests,comments";

fn guest_row(first: &str, last: &str, rsvp: &str, tags: &str, party: &str) -> String {
    format!("{first},{last},{rsvp},{tags},{party},,,,,")
}

fn csv_of(rows: &[String]) -> Vec<u8> {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.into_bytes()
}

fn plan(rows: &[String]) -> SeatingPlan {
    plan_from_csv(&csv_of(rows), &PlanOptions::default()).unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: mixed export: buckets, coverage, no duplication
// ---------------------------------------------------------------------------
#[test]
fn mixed_export_partitions_and_seats_every_attendee() {
    let mut rows = vec![
        guest_row("Ada", "Lovelace", "Accept with pleasure", "Family", "L1"),
        guest_row("Charles", "Babbage", "Accept with pleasure", "Family", "L1"),
        guest_row("Grace", "Hopper", "Accept", "Navy", ""),
        guest_row("Alan", "Turing", "", "Family", ""),
        guest_row("Kurt", "Goedel", "Regretfully Decline due to travel", "Logic", ""),
    ];
    rows.push(guest_row("Emmy", "Noether", "Accept", "Navy", ""));

    let result = plan(&rows);

    assert_eq!(result.attending.len(), 4);
    assert_eq!(result.pending.len(), 1);
    assert_eq!(result.declined.len(), 1);
    assert_eq!(result.pending[0].full_name, "Alan Turing");
    assert_eq!(result.declined[0].full_name, "Kurt Goedel");

    // Every attending guest seated exactly once
    let mut seated: Vec<usize> = result
        .tables
        .iter()
        .flat_map(|t| t.members.iter().copied())
        .collect();
    seated.sort();
    assert_eq!(seated, vec![0, 1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Test 2: ten / eleven / twelve singletons: base, overflow, split
// ---------------------------------------------------------------------------
#[test]
fn singleton_counts_around_the_capacity_boundary() {
    for (count, expected_tables, expected_sizes) in [
        (10usize, 1usize, vec![10usize]),
        (11, 1, vec![11]),
        (12, 2, vec![10, 2]),
    ] {
        let rows: Vec<String> = (0..count)
            .map(|i| guest_row(&format!("Guest{i:02}"), "Smith", "Accept", "Friends", ""))
            .collect();
        let result = plan(&rows);

        assert_eq!(result.tables.len(), expected_tables, "count {count}");
        let sizes: Vec<usize> = result.tables.iter().map(|t| t.seated()).collect();
        assert_eq!(sizes, expected_sizes, "count {count}");
        assert_eq!(result.tables[0].number, 1);
    }
}

// ---------------------------------------------------------------------------
// Test 3: parties never split, singles fill the gaps
// ---------------------------------------------------------------------------
#[test]
fn parties_stay_atomic_across_tables() {
    let mut rows: Vec<String> = (0..6)
        .map(|i| guest_row(&format!("Clan{i}"), "Lee", "Accept", "Family", "ClanLee"))
        .collect();
    rows.extend((0..6).map(|i| guest_row(&format!("Crew{i}"), "Ng", "Accept", "Family", "CrewNg")));
    rows.extend((0..4).map(|i| guest_row(&format!("Solo{i}"), "Tan", "Accept", "Family", "")));

    let result = plan(&rows);

    // 6 + 6 cannot share a table of 10: two tables, singles first-fit into
    // the remaining seats of table 1
    assert_eq!(result.tables.len(), 2);
    for table in &result.tables {
        for party in ["ClanLee", "CrewNg"] {
            let members_here = table
                .members
                .iter()
                .filter(|&&m| result.attending[m].party.as_deref() == Some(party))
                .count();
            assert!(
                members_here == 0 || members_here == 6,
                "party {party} split across tables"
            );
        }
    }
    assert_eq!(result.tables[0].seated(), 10);
    assert_eq!(result.tables[1].seated(), 6);
}

// ---------------------------------------------------------------------------
// Test 4: category ordering policies and global numbering
// ---------------------------------------------------------------------------
#[test]
fn category_order_policy_drives_table_numbers() {
    let mut rows: Vec<String> = (0..3)
        .map(|i| guest_row(&format!("Fam{i}"), "A", "Accept", "Family", ""))
        .collect();
    rows.extend((0..5).map(|i| guest_row(&format!("Fri{i}"), "B", "Accept", "Friends", "")));
    rows.push(guest_row("Lone", "C", "Accept", "", ""));

    let bytes = csv_of(&rows);

    let first_seen = plan_from_csv(&bytes, &PlanOptions::default()).unwrap();
    let cats: Vec<&str> = first_seen.tables.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(cats, vec!["Family", "Friends", "Uncategorised"]);
    let numbers: Vec<u32> = first_seen.tables.iter().map(|t| t.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let largest = plan_from_csv(
        &bytes,
        &PlanOptions {
            category_order: CategoryOrder::LargestFirst,
            ..PlanOptions::default()
        },
    )
    .unwrap();
    let cats: Vec<&str> = largest.tables.iter().map(|t| t.category.as_str()).collect();
    // Fallback stays last even though it is the smallest under either policy
    assert_eq!(cats, vec!["Friends", "Family", "Uncategorised"]);
}

// ---------------------------------------------------------------------------
// Test 5: identical input, identical plan
// ---------------------------------------------------------------------------
#[test]
fn planning_is_idempotent() {
    let rows: Vec<String> = (0..25)
        .map(|i| {
            let party = if i % 4 == 0 { "Quad" } else { "" };
            guest_row(
                &format!("Guest{i:02}"),
                "Ho",
                "Accept",
                if i % 2 == 0 { "Family" } else { "Friends" },
                party,
            )
        })
        .collect();
    let bytes = csv_of(&rows);

    let a = plan_from_csv(&bytes, &PlanOptions::default()).unwrap();
    let b = plan_from_csv(&bytes, &PlanOptions::default()).unwrap();

    assert_eq!(a.tables, b.tables);
}

// ---------------------------------------------------------------------------
// Test 6: missing required column aborts before classification
// ---------------------------------------------------------------------------
#[test]
fn missing_required_column_is_fatal() {
    let bytes = b"first name,last name,rsvp\nAda,Lovelace,Accept".to_vec();
    let result = plan_from_csv(&bytes, &PlanOptions::default());
    assert!(matches!(
        result,
        Err(SeatplanError::MissingColumn { .. })
    ));
}

// ---------------------------------------------------------------------------
// Test 7: projection: padded blocks and the overflow guest row
// ---------------------------------------------------------------------------
#[test]
fn projected_report_pads_blocks_and_keeps_overflow_guest() {
    let rows: Vec<String> = (0..11)
        .map(|i| guest_row(&format!("Guest{i:02}"), "Ong", "Accept", "Friends", ""))
        .collect();
    let result = plan(&rows);
    let report = project(&result);

    assert_eq!(report.tables.len(), 1);
    let block = &report.tables[0];
    assert_eq!(block.title, "Table #1");
    // Overflow table: all eleven guests emitted, one past the row budget
    assert_eq!(block.rows.len(), 11);
    assert!(block.rows.iter().all(|r| !r.is_placeholder()));
}

// ---------------------------------------------------------------------------
// Test 8: malformed row is kept and reported, not dropped
// ---------------------------------------------------------------------------
#[test]
fn empty_name_row_survives_with_warning() {
    let rows = vec![
        guest_row("", "", "Accept", "Family", ""),
        guest_row("Ada", "Lovelace", "Accept", "Family", ""),
    ];
    let result = plan(&rows);

    assert_eq!(result.attending.len(), 2);
    assert!(result
        .trace
        .warnings
        .iter()
        .any(|w| w.message.contains("name fields are empty")));
    // Still seated
    assert_eq!(result.tables[0].seated(), 2);
}
