use snapsplit_core::{split, BillItem, Money, Person, PersonId, MIN_PEOPLE};

/// The most recently scanned image, normalized for display.
#[derive(Debug, Clone)]
pub struct Preview {
    /// SHA-256 hex of the original upload.
    pub hash_hex: String,
    pub png: Vec<u8>,
}

/// Everything the tool knows, held as one snapshot. Nothing persists across
/// sessions and there is no undo. Update methods never mutate in place: each
/// builds the next snapshot and the controller swaps it in wholesale.
#[derive(Debug, Clone)]
pub struct Session {
    pub people: Vec<Person>,
    pub items: Vec<BillItem>,
    pub preview: Option<Preview>,
    pub error: Option<String>,
    /// True while a scan is in flight; guards against concurrent uploads.
    pub processing: bool,
}

impl Session {
    /// A fresh session starts with the minimum group of two.
    pub fn new() -> Self {
        Session {
            people: vec![Person::numbered(1), Person::numbered(2)],
            items: Vec::new(),
            preview: None,
            error: None,
            processing: false,
        }
    }

    pub fn people_ids(&self) -> Vec<PersonId> {
        self.people.iter().map(|p| p.id).collect()
    }

    pub fn total(&self) -> Money {
        split::total(&self.items)
    }

    pub fn share_of(&self, person: PersonId) -> Money {
        split::share_of(person, &self.items)
    }

    // ── People ────────────────────────────────────────────────────────────────

    pub fn add_person(&self) -> Session {
        let mut next = self.clone();
        next.people.push(Person::numbered(next.people.len() + 1));
        next
    }

    /// Removal is refused at the floor: a bill cannot be split among one
    /// person, so the group never drops below two. The removed person is
    /// pruned from every item's assignment list.
    pub fn remove_person(&self, id: PersonId) -> Session {
        if self.people.len() <= MIN_PEOPLE {
            return self.clone();
        }
        let mut next = self.clone();
        next.people.retain(|p| p.id != id);
        if next.people.len() == self.people.len() {
            // Unknown id.
            return next;
        }
        for item in &mut next.items {
            item.assigned_to.retain(|assignee| *assignee != id);
        }
        next
    }

    pub fn rename_person(&self, id: PersonId, name: impl Into<String>) -> Session {
        let mut next = self.clone();
        if let Some(person) = next.people.iter_mut().find(|p| p.id == id) {
            person.name = name.into();
        }
        next
    }

    // ── Items ─────────────────────────────────────────────────────────────────

    pub fn set_item_description(&self, index: usize, text: impl Into<String>) -> Session {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            item.description = text.into();
        }
        next
    }

    pub fn set_item_included(&self, index: usize, included: bool) -> Session {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            item.included_in_split = included;
        }
        next
    }

    pub fn toggle_assignment(&self, index: usize, person: PersonId) -> Session {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            *item = item.toggle_assignment(person);
        }
        next
    }

    /// Drop the current bill but keep the group: items, preview, and error
    /// are cleared, people stay.
    pub fn start_new(&self) -> Session {
        Session {
            people: self.people.clone(),
            items: Vec::new(),
            preview: None,
            error: None,
            processing: self.processing,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_items(session: &Session, cents: &[i64]) -> Session {
        let ids = session.people_ids();
        let mut next = session.clone();
        next.items = cents
            .iter()
            .enumerate()
            .map(|(i, c)| BillItem::extracted(i + 1, Money::from_cents(*c), &ids))
            .collect();
        next
    }

    #[test]
    fn new_session_has_two_default_people() {
        let s = Session::new();
        assert_eq!(s.people.len(), 2);
        assert_eq!(s.people[0].name, "Person 1");
        assert_eq!(s.people[1].name, "Person 2");
        assert!(s.items.is_empty());
        assert!(!s.processing);
    }

    #[test]
    fn add_person_numbers_from_count() {
        let s = Session::new().add_person();
        assert_eq!(s.people.len(), 3);
        assert_eq!(s.people[2].name, "Person 3");
    }

    #[test]
    fn add_person_does_not_touch_existing_assignments() {
        let s = with_items(&Session::new(), &[1000]);
        let before = s.items[0].assigned_to.clone();
        let s = s.add_person();
        assert_eq!(s.items[0].assigned_to, before);
    }

    #[test]
    fn remove_person_blocked_at_the_floor() {
        let s = Session::new();
        let target = s.people[0].id;
        let s = s.remove_person(target);
        assert_eq!(s.people.len(), 2);
    }

    #[test]
    fn remove_person_prunes_item_assignments() {
        let s = with_items(&Session::new().add_person(), &[1200]);
        let removed = s.people[0].id;
        let kept: Vec<PersonId> = s.people[1..].iter().map(|p| p.id).collect();

        let s = s.remove_person(removed);
        assert_eq!(s.people.len(), 2);
        assert_eq!(s.items[0].assigned_to, kept);
        // Remaining assignees now split the item two ways.
        assert_eq!(s.share_of(kept[0]).to_cents(), 600);
    }

    #[test]
    fn remove_unknown_person_is_noop() {
        let s = Session::new().add_person();
        let s = s.remove_person(PersonId::new());
        assert_eq!(s.people.len(), 3);
    }

    #[test]
    fn rename_person_by_id() {
        let s = Session::new();
        let id = s.people[0].id;
        let s = s.rename_person(id, "Alice");
        assert_eq!(s.people[0].name, "Alice");
        assert_eq!(s.people[1].name, "Person 2");
    }

    #[test]
    fn rename_unknown_person_is_noop() {
        let s = Session::new().rename_person(PersonId::new(), "Ghost");
        assert_eq!(s.people[0].name, "Person 1");
        assert_eq!(s.people[1].name, "Person 2");
    }

    #[test]
    fn item_edits_by_index() {
        let s = with_items(&Session::new(), &[500, 300]);
        let s = s.set_item_description(1, "Fries").set_item_included(0, false);
        assert_eq!(s.items[1].description, "Fries");
        assert!(!s.items[0].included_in_split);
        assert_eq!(s.total().to_cents(), 300);
    }

    #[test]
    fn item_edits_out_of_range_are_noops() {
        let s = with_items(&Session::new(), &[500]);
        let s = s.set_item_included(5, false).set_item_description(9, "x");
        assert_eq!(s.items.len(), 1);
        assert!(s.items[0].included_in_split);
    }

    #[test]
    fn toggle_assignment_through_the_session() {
        let s = with_items(&Session::new(), &[1000]);
        let id = s.people[0].id;
        let s = s.toggle_assignment(0, id);
        assert!(!s.items[0].is_assigned_to(id));
        // The other person now carries the whole item.
        assert_eq!(s.share_of(s.people[1].id).to_cents(), 1000);
    }

    #[test]
    fn toggle_assignment_out_of_range_is_noop() {
        let s = with_items(&Session::new(), &[500]);
        let before = s.items[0].assigned_to.clone();
        let id = s.people[0].id;
        let s = s.toggle_assignment(7, id);
        assert_eq!(s.items[0].assigned_to, before);
    }

    #[test]
    fn start_new_clears_bill_but_keeps_people() {
        let mut s = with_items(&Session::new().add_person(), &[750]);
        s.preview = Some(Preview { hash_hex: "ab".repeat(32), png: vec![1, 2, 3] });
        s.error = Some("old error".into());

        let s = s.start_new();
        assert_eq!(s.people.len(), 3);
        assert!(s.items.is_empty());
        assert!(s.preview.is_none());
        assert!(s.error.is_none());
    }
}
