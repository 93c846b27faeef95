use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::person::PersonId;

/// One billable line on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillItem {
    pub description: String,
    pub amount: Money,
    /// Items switched out of the split contribute nothing to any total.
    pub included_in_split: bool,
    /// Who shares this item's cost. Order carries no meaning.
    pub assigned_to: Vec<PersonId>,
}

impl BillItem {
    /// A freshly extracted item: numbered placeholder description (1-based,
    /// in extraction order), included, assigned to everyone known at
    /// extraction time.
    pub fn extracted(position: usize, amount: Money, assignees: &[PersonId]) -> Self {
        BillItem {
            description: format!("Item {position}"),
            amount,
            included_in_split: true,
            assigned_to: assignees.to_vec(),
        }
    }

    pub fn is_assigned_to(&self, person: PersonId) -> bool {
        self.assigned_to.contains(&person)
    }

    /// Add or remove an assignee, returning the updated item. Removing the
    /// sole assignee is refused: an included item must keep someone to bill.
    pub fn toggle_assignment(&self, person: PersonId) -> BillItem {
        let mut next = self.clone();
        match next.assigned_to.iter().position(|id| *id == person) {
            Some(pos) if next.assigned_to.len() > 1 => {
                next.assigned_to.remove(pos);
            }
            Some(_) => {}
            None => next.assigned_to.push(person),
        }
        next
    }
}
