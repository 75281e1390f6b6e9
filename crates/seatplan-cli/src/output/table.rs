use seatplan_core::classify::Classified;
use seatplan_core::model::GuestRecord;
use seatplan_core::SeatingPlan;

pub fn format_guests(guests: &[GuestRecord]) -> String {
    let max_name = guests
        .iter()
        .map(|g| g.full_name.len())
        .max()
        .unwrap_or(10)
        .max(4);

    let mut lines = Vec::with_capacity(guests.len() + 1);
    lines.push(format!(
        "  {:>4}  {:<width$}  {:<9}  {:<20}  party",
        "row",
        "name",
        "status",
        "tags",
        width = max_name
    ));
    for g in guests {
        lines.push(format!(
            "  {:>4}  {:<width$}  {:<9}  {:<20}  {}",
            g.seq + 1,
            g.full_name,
            g.status().to_string(),
            g.tags.as_deref().unwrap_or("-"),
            g.party.as_deref().unwrap_or("-"),
            width = max_name
        ));
    }
    lines.join("\n")
}

pub fn print_classification(classified: &Classified) {
    println!(
        "  {} attending, {} pending, {} declined\n",
        classified.attending.len(),
        classified.pending.len(),
        classified.declined.len()
    );

    for (label, bucket) in [
        ("Attending", &classified.attending),
        ("Pending", &classified.pending),
        ("Declined", &classified.declined),
    ] {
        if bucket.is_empty() {
            continue;
        }
        println!("  {label}:");
        for g in bucket {
            println!("    {}", display_name(g));
        }
        println!();
    }
}

pub fn print_plan(plan: &SeatingPlan, verbose: bool) {
    println!(
        "  {} attending across {} table(s); {} pending, {} declined\n",
        plan.attending.len(),
        plan.tables.len(),
        plan.pending.len(),
        plan.declined.len()
    );

    let max_cat = plan
        .tables
        .iter()
        .map(|t| t.category.len())
        .max()
        .unwrap_or(10);

    for table in &plan.tables {
        let over = if table.seated() > table.capacity {
            " (over capacity)"
        } else {
            ""
        };
        println!(
            "  Table {:>3}  {:<width$}  {}/{}{}",
            table.number,
            table.category,
            table.seated(),
            table.capacity,
            over,
            width = max_cat
        );
        if verbose {
            for &idx in &table.members {
                println!("      {}", display_name(&plan.attending[idx]));
            }
        }
    }

    if verbose && !plan.trace.decisions.is_empty() {
        println!();
        for d in &plan.trace.decisions {
            println!("  [{}] {}", d.category, d.message);
        }
    }
}

fn display_name(guest: &GuestRecord) -> &str {
    if guest.full_name.is_empty() {
        "(unnamed guest)"
    } else {
        &guest.full_name
    }
}
