use crate::model::{CategoryTag, GuestRecord, PartyId};

/// An indivisible block of guests that must share a table.
///
/// Members are indices into the attending slice, in encounter order.
#[derive(Debug, Clone)]
pub struct Party {
    pub id: PartyId,
    pub members: Vec<usize>,
}

impl Party {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// All attending guests of one category: stated parties first-class,
/// singleton guests kept separately.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub tag: CategoryTag,
    /// Stated parties, in order of first appearance.
    pub parties: Vec<Party>,
    /// Guests with no stated party, in encounter order.
    pub singles: Vec<usize>,
}

impl CategoryGroup {
    pub fn total(&self) -> usize {
        self.parties.iter().map(Party::size).sum::<usize>() + self.singles.len()
    }
}

/// Cluster attending guests into categories and parties.
///
/// Categories appear in order of first appearance among attending guests;
/// two raw tags that normalize to the same key share a group, displayed
/// under the first-seen label. Parties likewise keep encounter order.
pub fn group_by_category(attending: &[GuestRecord]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for (idx, guest) in attending.iter().enumerate() {
        let tag = guest.category();
        let group_pos = match groups.iter().position(|g| g.tag.key == tag.key) {
            Some(pos) => pos,
            None => {
                groups.push(CategoryGroup {
                    tag,
                    parties: Vec::new(),
                    singles: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[group_pos];

        match guest.party_id() {
            PartyId::Stated(id) => {
                let party_id = PartyId::Stated(id);
                match group.parties.iter_mut().find(|p| p.id == party_id) {
                    Some(party) => party.members.push(idx),
                    None => group.parties.push(Party {
                        id: party_id,
                        members: vec![idx],
                    }),
                }
            }
            PartyId::Solo(_) => group.singles.push(idx),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(seq: usize, tags: Option<&str>, party: Option<&str>) -> GuestRecord {
        GuestRecord {
            seq,
            full_name: format!("Guest {seq}"),
            rsvp: Some("Accept".to_string()),
            tags: tags.map(str::to_string),
            party: party.map(str::to_string),
            meal: None,
            baby_chair: None,
            car_park: None,
            remarks: String::new(),
        }
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let attending = vec![
            guest(0, Some("Family"), None),
            guest(1, Some("ArmyFriends"), None),
            guest(2, Some("Family"), None),
        ];
        let groups = group_by_category(&attending);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tag.label, "Family");
        assert_eq!(groups[1].tag.label, "ArmyFriends");
    }

    #[test]
    fn test_normalized_tags_share_a_group() {
        let attending = vec![
            guest(0, Some("Army Friends"), None),
            guest(1, Some("armyfriends"), None),
        ];
        let groups = group_by_category(&attending);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tag.label, "Army Friends");
        assert_eq!(groups[0].total(), 2);
    }

    #[test]
    fn test_parties_keep_encounter_order_and_membership() {
        let attending = vec![
            guest(0, Some("Family"), Some("P2")),
            guest(1, Some("Family"), Some("P1")),
            guest(2, Some("Family"), Some("P2")),
            guest(3, Some("Family"), None),
        ];
        let groups = group_by_category(&attending);
        let g = &groups[0];
        assert_eq!(g.parties.len(), 2);
        assert_eq!(g.parties[0].id, PartyId::Stated("P2".to_string()));
        assert_eq!(g.parties[0].members, vec![0, 2]);
        assert_eq!(g.parties[1].members, vec![1]);
        assert_eq!(g.singles, vec![3]);
        assert_eq!(g.total(), 4);
    }

    #[test]
    fn test_missing_tag_grouped_under_fallback() {
        let attending = vec![guest(0, None, None), guest(1, Some("  "), None)];
        let groups = group_by_category(&attending);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].tag.is_fallback());
        assert_eq!(groups[0].singles.len(), 2);
    }
}
