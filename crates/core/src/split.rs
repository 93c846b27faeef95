use crate::item::BillItem;
use crate::money::Money;
use crate::person::PersonId;

/// Sum of amounts over items currently included in the split.
pub fn total(items: &[BillItem]) -> Money {
    items
        .iter()
        .filter(|i| i.included_in_split)
        .map(|i| i.amount)
        .fold(Money::zero(), |a, b| a + b)
}

/// What `person` owes: every included item they are assigned to contributes
/// its amount divided evenly among that item's assignees (headcount only, no
/// weighting). An item that has lost all of its assignees contributes
/// nothing instead of dividing by zero.
pub fn share_of(person: PersonId, items: &[BillItem]) -> Money {
    items
        .iter()
        .filter(|i| i.included_in_split && i.is_assigned_to(person))
        .map(|i| i.amount.split_among(i.assigned_to.len()))
        .fold(Money::zero(), |a, b| a + b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_of_empty_list_is_zero() {
        assert!(total(&[]).is_zero());
    }

    #[test]
    fn total_skips_excluded_items() {
        let a = PersonId::new();
        let mut excluded = BillItem::extracted(2, Money::from_cents(500), &[a]);
        excluded.included_in_split = false;
        let items = vec![
            BillItem::extracted(1, Money::from_cents(1000), &[a]),
            excluded,
        ];
        assert_eq!(total(&items).to_cents(), 1000);
    }

    #[test]
    fn two_people_split_twenty_evenly() {
        let a = PersonId::new();
        let b = PersonId::new();
        let items = vec![BillItem::extracted(1, Money::from_cents(2000), &[a, b])];
        assert_eq!(share_of(a, &items).to_cents(), 1000);
        assert_eq!(share_of(b, &items).to_cents(), 1000);
    }

    #[test]
    fn three_way_split_rounds_at_display() {
        let people = [PersonId::new(), PersonId::new(), PersonId::new()];
        let items = vec![BillItem::extracted(1, Money::from_cents(2000), &people)];
        for p in people {
            assert_eq!(share_of(p, &items).to_string(), "$6.67");
        }
        assert_eq!(total(&items).to_string(), "$20.00");
        // Formatted shares ($6.67 each) overshoot the total by exactly one cent.
        let formatted_sum: i64 = 3 * 667;
        assert!((formatted_sum - total(&items).to_cents()).abs() <= 1);
    }

    #[test]
    fn shares_sum_to_total_across_mixed_assignments() {
        let a = PersonId::new();
        let b = PersonId::new();
        let c = PersonId::new();
        let items = vec![
            BillItem::extracted(1, Money::from_cents(1200), &[a, b, c]),
            BillItem::extracted(2, Money::from_cents(750), &[a]),
            BillItem::extracted(3, Money::from_cents(901), &[b, c]),
        ];
        let sum = share_of(a, &items) + share_of(b, &items) + share_of(c, &items);
        assert_eq!(sum.to_cents(), total(&items).to_cents());
    }

    #[test]
    fn excluded_items_do_not_contribute_to_shares() {
        let a = PersonId::new();
        let mut item = BillItem::extracted(1, Money::from_cents(800), &[a]);
        item.included_in_split = false;
        assert!(share_of(a, &[item]).is_zero());
    }

    #[test]
    fn item_with_no_assignees_contributes_nothing() {
        let a = PersonId::new();
        let mut orphaned = BillItem::extracted(1, Money::from_cents(400), &[a]);
        orphaned.assigned_to.clear();
        let items = vec![orphaned, BillItem::extracted(2, Money::from_cents(600), &[a])];
        // The orphaned item still counts toward the total but no share.
        assert_eq!(total(&items).to_cents(), 1000);
        assert_eq!(share_of(a, &items).to_cents(), 600);
    }
}
