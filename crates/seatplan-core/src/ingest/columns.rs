use crate::error::SeatplanError;

/// Normalize a header cell for matching: trim, lowercase, collapse internal
/// whitespace runs to single spaces. RSVP exports are hand-edited, so header
/// matching must survive stray spacing and casing.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolved positions of the required guest-list columns.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub first_name: usize,
    pub last_name: usize,
    pub rsvp: usize,
    pub tags: usize,
    pub party: usize,
    pub meal: usize,
    pub baby_chair: usize,
    pub car_park: usize,
    pub requests: usize,
    pub comments: usize,
}

impl ColumnMap {
    /// Resolve all required columns from the header row, or fail naming the
    /// first one that is absent.
    pub fn from_headers(headers: &csv::StringRecord) -> Result<ColumnMap, SeatplanError> {
        let mut first_name = None;
        let mut last_name = None;
        let mut rsvp = None;
        let mut tags = None;
        let mut party = None;
        let mut meal = None;
        let mut baby_chair = None;
        let mut car_park = None;
        let mut requests = None;
        let mut comments = None;

        for (idx, raw) in headers.iter().enumerate() {
            let header = normalize_header(raw);
            let slot = match header.as_str() {
                "first name" => &mut first_name,
                "last name" => &mut last_name,
                "rsvp" => &mut rsvp,
                "tags" => &mut tags,
                "party" => &mut party,
                "meal" => &mut meal,
                "baby chair" => &mut baby_chair,
                "comments" => &mut comments,
                // The export uses long bilingual labels for these two;
                // match on the stable English prefix.
                h if h.starts_with("do you need a car park coupon") || h == "car park coupon" => {
                    &mut car_park
                }
                h if h.starts_with("if you have any other comments") || h == "other requests" => {
                    &mut requests
                }
                _ => continue,
            };
            // First match wins if a header repeats
            if slot.is_none() {
                *slot = Some(idx);
            }
        }

        Ok(ColumnMap {
            first_name: require(first_name, "first name")?,
            last_name: require(last_name, "last name")?,
            rsvp: require(rsvp, "rsvp")?,
            tags: require(tags, "tags")?,
            party: require(party, "party")?,
            meal: require(meal, "meal")?,
            baby_chair: require(baby_chair, "baby chair")?,
            car_park: require(car_park, "car park coupon")?,
            requests: require(requests, "other requests")?,
            comments: require(comments, "comments")?,
        })
    }
}

fn require(idx: Option<usize>, column: &'static str) -> Result<usize, SeatplanError> {
    idx.ok_or(SeatplanError::MissingColumn { column })
}
