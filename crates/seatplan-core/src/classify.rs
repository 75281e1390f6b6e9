use crate::model::{AttendanceStatus, GuestRecord};

/// The three RSVP buckets. Order within each bucket follows input order.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub attending: Vec<GuestRecord>,
    pub pending: Vec<GuestRecord>,
    pub declined: Vec<GuestRecord>,
}

/// Partition guest records by attendance status.
///
/// Pure, order-preserving, total: every record lands in exactly one bucket.
pub fn partition(guests: Vec<GuestRecord>) -> Classified {
    let mut classified = Classified::default();
    for guest in guests {
        match guest.status() {
            AttendanceStatus::Attending => classified.attending.push(guest),
            AttendanceStatus::Pending => classified.pending.push(guest),
            AttendanceStatus::Declined => classified.declined.push(guest),
        }
    }
    classified
}
