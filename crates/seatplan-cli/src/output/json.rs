use seatplan_core::error::SeatplanError;
use seatplan_core::SeatingPlan;

pub fn print(plan: &SeatingPlan) -> Result<(), SeatplanError> {
    let json = serde_json::to_string_pretty(plan)?;
    println!("{json}");
    Ok(())
}
