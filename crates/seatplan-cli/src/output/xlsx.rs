use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use seatplan_core::error::SeatplanError;
use seatplan_core::model::GuestRecord;
use seatplan_core::report::{SeatingReport, SEATING_COLUMNS};
use std::path::Path;

/// Column labels for the raw-guest sheets (Pending_RSVP, Declined).
const GUEST_COLUMNS: [&str; 8] = [
    "Name",
    "RSVP",
    "Tags",
    "Party",
    "Meal",
    "Baby chair",
    "Car park coupon",
    "Remarks",
];

/// Write the three-sheet workbook: SeatingPlan, Pending_RSVP, Declined.
pub fn write_workbook(report: &SeatingReport, path: &Path) -> Result<(), SeatplanError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    write_seating_sheet(workbook.add_worksheet(), report, &header_format)?;
    write_guest_sheet(
        workbook.add_worksheet(),
        "Pending_RSVP",
        &report.pending,
        &header_format,
    )?;
    write_guest_sheet(
        workbook.add_worksheet(),
        "Declined",
        &report.declined,
        &header_format,
    )?;

    workbook.save(path).map_err(workbook_error)?;
    Ok(())
}

/// One block per table: bold "Table #N" marker, column labels, the padded
/// guest rows, then a blank separator row.
fn write_seating_sheet(
    worksheet: &mut Worksheet,
    report: &SeatingReport,
    header_format: &Format,
) -> Result<(), SeatplanError> {
    worksheet.set_name("SeatingPlan").map_err(workbook_error)?;

    let mut row: u32 = 0;
    for block in &report.tables {
        worksheet
            .write_string_with_format(row, 0, &block.title, header_format)
            .map_err(workbook_error)?;
        row += 1;

        for (col, label) in SEATING_COLUMNS.iter().enumerate().skip(1) {
            worksheet
                .write_string_with_format(row, col as u16, *label, header_format)
                .map_err(workbook_error)?;
        }
        row += 1;

        for seat in &block.rows {
            worksheet
                .write_number(row, 0, seat.seat as f64)
                .map_err(workbook_error)?;
            for (col, value) in [
                &seat.name,
                &seat.meal,
                &seat.baby_chair,
                &seat.car_park,
                &seat.remarks,
                &seat.tags,
            ]
            .iter()
            .enumerate()
            {
                worksheet
                    .write_string(row, (col + 1) as u16, value.as_str())
                    .map_err(workbook_error)?;
            }
            row += 1;
        }

        // Blank separator row between tables
        row += 1;
    }

    // Readable widths for the text-heavy columns
    worksheet.set_column_width(1, 24.0).map_err(workbook_error)?;
    worksheet.set_column_width(5, 36.0).map_err(workbook_error)?;
    worksheet.set_column_width(6, 20.0).map_err(workbook_error)?;

    Ok(())
}

fn write_guest_sheet(
    worksheet: &mut Worksheet,
    name: &str,
    guests: &[GuestRecord],
    header_format: &Format,
) -> Result<(), SeatplanError> {
    worksheet.set_name(name).map_err(workbook_error)?;

    for (col, label) in GUEST_COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *label, header_format)
            .map_err(workbook_error)?;
    }

    for (i, guest) in guests.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells = [
            guest.full_name.as_str(),
            opt(&guest.rsvp),
            opt(&guest.tags),
            opt(&guest.party),
            opt(&guest.meal),
            opt(&guest.baby_chair),
            opt(&guest.car_park),
            guest.remarks.as_str(),
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(row, col as u16, *value)
                .map_err(workbook_error)?;
        }
    }

    worksheet.set_column_width(0, 24.0).map_err(workbook_error)?;

    Ok(())
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn workbook_error(err: XlsxError) -> SeatplanError {
    SeatplanError::Workbook(err.to_string())
}
