use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to guests whose tag field is missing or blank.
/// Packed like any other category, but always processed last.
pub const FALLBACK_CATEGORY: &str = "Uncategorised";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Attending,
    Pending,
    Declined,
}

impl AttendanceStatus {
    /// Classify a raw RSVP field.
    ///
    /// Declined requires the exact phrase "regretfully decline"
    /// (case-insensitive) somewhere in the text; a blank or absent field is
    /// Pending; anything else counts as Attending.
    pub fn from_rsvp(rsvp: Option<&str>) -> AttendanceStatus {
        match rsvp {
            None => AttendanceStatus::Pending,
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    AttendanceStatus::Pending
                } else if trimmed.to_lowercase().contains("regretfully decline") {
                    AttendanceStatus::Declined
                } else {
                    AttendanceStatus::Attending
                }
            }
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Attending => write!(f, "attending"),
            AttendanceStatus::Pending => write!(f, "pending"),
            AttendanceStatus::Declined => write!(f, "declined"),
        }
    }
}

/// Grouping key derived from the raw tag field.
///
/// `key` is the strict normalized form used for matching (lowercased, all
/// whitespace removed), since raw tags come from uncontrolled free-text
/// export. `label` keeps the trimmed raw text for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTag {
    pub key: String,
    pub label: String,
}

impl CategoryTag {
    pub fn from_raw(raw: Option<&str>) -> CategoryTag {
        let label = raw.map(str::trim).unwrap_or("");
        if label.is_empty() {
            return CategoryTag {
                key: normalize_tag(FALLBACK_CATEGORY),
                label: FALLBACK_CATEGORY.to_string(),
            };
        }
        CategoryTag {
            key: normalize_tag(label),
            label: label.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.key == normalize_tag(FALLBACK_CATEGORY)
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Lowercase and strip all whitespace so that "Army Friends" and
/// "armyfriends " compare equal.
fn normalize_tag(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Identifier of an indivisible seating party.
///
/// Guests without a stated party form singleton parties keyed by their
/// ingestion sequence number. Ordering: stated parties sort before solos,
/// matching the order in which the packer places them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartyId {
    Stated(String),
    Solo(usize),
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyId::Stated(id) => write!(f, "{id}"),
            PartyId::Solo(seq) => write!(f, "solo-{seq}"),
        }
    }
}

/// One normalized guest row from the RSVP export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestRecord {
    /// Stable identifier assigned in input row order at ingestion.
    pub seq: usize,
    pub full_name: String,
    /// Raw RSVP text, absent when the field was empty.
    pub rsvp: Option<String>,
    /// Raw tag text, absent when the field was empty.
    pub tags: Option<String>,
    /// Stated party identifier, absent for singleton guests.
    pub party: Option<String>,
    pub meal: Option<String>,
    pub baby_chair: Option<String>,
    pub car_park: Option<String>,
    /// The two free-text request fields combined; empty string when both
    /// were empty.
    pub remarks: String,
}

impl GuestRecord {
    /// Compose the display name from the two name fields, treating absent
    /// parts as empty.
    pub fn compose_name(first: Option<&str>, last: Option<&str>) -> String {
        let first = first.unwrap_or("");
        let last = last.unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }

    /// Join the two free-text request fields with " | ", dropping empty
    /// sides and the separator when either is missing.
    pub fn combine_remarks(requests: Option<&str>, comments: Option<&str>) -> String {
        let mut parts = Vec::new();
        for value in [requests, comments] {
            if let Some(text) = value {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
        }
        parts.join(" | ")
    }

    pub fn status(&self) -> AttendanceStatus {
        AttendanceStatus::from_rsvp(self.rsvp.as_deref())
    }

    pub fn category(&self) -> CategoryTag {
        CategoryTag::from_raw(self.tags.as_deref())
    }

    pub fn party_id(&self) -> PartyId {
        match self.party.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => PartyId::Stated(id.to_string()),
            _ => PartyId::Solo(self.seq),
        }
    }
}
