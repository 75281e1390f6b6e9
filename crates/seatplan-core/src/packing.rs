use serde::{Deserialize, Serialize};

use crate::grouping::CategoryGroup;
use crate::trace::PlanTrace;

pub const DEFAULT_TABLE_SIZE: usize = 10;

/// Order in which categories are packed (and therefore numbered).
///
/// The fallback category is pinned last under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryOrder {
    /// Order of first appearance among attending guests.
    #[default]
    FirstSeen,
    /// Descending attending count, ties by first appearance.
    LargestFirst,
}

#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub table_size: usize,
    pub category_order: CategoryOrder,
}

impl Default for PlanOptions {
    fn default() -> Self {
        PlanOptions {
            table_size: DEFAULT_TABLE_SIZE,
            category_order: CategoryOrder::default(),
        }
    }
}

/// One seated table in the final plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePlan {
    /// Global table number, assigned when the table is opened. Strictly
    /// increasing from 1, never reused.
    pub number: u32,
    /// Display label of the category this table belongs to.
    pub category: String,
    /// Capacity in force when the category was packed.
    pub capacity: usize,
    /// Indices into the attending slice, in seating order.
    pub members: Vec<usize>,
}

impl TablePlan {
    pub fn seated(&self) -> usize {
        self.members.len()
    }

    fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.members.len())
    }
}

/// Pack category groups into numbered tables.
///
/// Greedy first-fit, never fails: opening a new table is the unconditional
/// fallback, so every attending guest is seated. Deterministic for a given
/// input order and ordering policy.
pub fn pack(groups: &[CategoryGroup], options: &PlanOptions, trace: &mut PlanTrace) -> Vec<TablePlan> {
    let mut tables: Vec<TablePlan> = Vec::new();
    let mut next_number: u32 = 1;

    for group in order_categories(groups, options.category_order) {
        let total = group.total();
        if total == 0 {
            continue;
        }

        // One extra seat, only when the whole category is exactly one guest
        // over a single table. Avoids stranding one guest alone.
        let capacity = if total == options.table_size + 1 {
            trace.note(
                &group.tag.label,
                format!(
                    "{} attending is exactly one over a table of {}; granting one extra seat",
                    total, options.table_size
                ),
            );
            options.table_size + 1
        } else {
            options.table_size
        };

        let first = next_number;
        pack_category(group, capacity, &mut next_number, &mut tables, trace);
        trace.note(
            &group.tag.label,
            format!(
                "{} guests seated at tables {}..={}",
                total,
                first,
                next_number - 1
            ),
        );
    }

    tables
}

/// Categories in packing order: real categories per the policy, fallback
/// last when present.
fn order_categories(groups: &[CategoryGroup], order: CategoryOrder) -> Vec<&CategoryGroup> {
    let mut real: Vec<&CategoryGroup> = groups.iter().filter(|g| !g.tag.is_fallback()).collect();
    if order == CategoryOrder::LargestFirst {
        // Stable sort keeps first-seen order for equal counts
        real.sort_by(|a, b| b.total().cmp(&a.total()));
    }
    real.extend(groups.iter().filter(|g| g.tag.is_fallback()));
    real
}

/// Pack one category against its own working list of open tables.
fn pack_category(
    group: &CategoryGroup,
    capacity: usize,
    next_number: &mut u32,
    tables: &mut Vec<TablePlan>,
    trace: &mut PlanTrace,
) {
    // Tables opened for this category, candidates for first-fit scans.
    let mut open: Vec<usize> = Vec::new();

    // Stated parties first, encounter order. A party never splits: it goes
    // into the first open table with enough room, or seeds a new one.
    for party in &group.parties {
        let fit = open
            .iter()
            .copied()
            .find(|&t| tables[t].remaining() >= party.size());
        match fit {
            Some(t) => tables[t].members.extend_from_slice(&party.members),
            None => {
                if party.size() > capacity {
                    trace.warn(
                        None,
                        format!(
                            "party '{}' ({}) has {} members, over the table capacity of {}; seating together anyway",
                            party.id, group.tag.label, party.size(), capacity
                        ),
                    );
                }
                open.push(open_table(
                    tables,
                    next_number,
                    &group.tag.label,
                    capacity,
                    party.members.clone(),
                ));
            }
        }
    }

    // Then singletons, one at a time, into any open seat.
    for &idx in &group.singles {
        match open.iter().copied().find(|&t| tables[t].remaining() >= 1) {
            Some(t) => tables[t].members.push(idx),
            None => {
                open.push(open_table(
                    tables,
                    next_number,
                    &group.tag.label,
                    capacity,
                    vec![idx],
                ));
            }
        }
    }
}

fn open_table(
    tables: &mut Vec<TablePlan>,
    next_number: &mut u32,
    category: &str,
    capacity: usize,
    members: Vec<usize>,
) -> usize {
    tables.push(TablePlan {
        number: *next_number,
        category: category.to_string(),
        capacity,
        members,
    });
    *next_number += 1;
    tables.len() - 1
}
