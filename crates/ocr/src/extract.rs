use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

use snapsplit_core::{BillItem, Money, PersonId};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No recognizable amounts found")]
    NoAmounts,
}

/// A priced line ends in an amount: optional `$`, then digits, optionally
/// followed by exactly two decimals, anchored at the end of the line. The
/// token must stand alone (start of line or preceded by whitespace) so that
/// fragments like the `345` in `12.345` never qualify.
fn re_trailing_amount() -> &'static Regex {
    static R: OnceLock<Regex> = OnceLock::new();
    R.get_or_init(|| {
        Regex::new(r"(?:^|\s)\$?\s*(\d+(?:\.\d{2})?)$").expect("invalid regex")
    })
}

/// Amounts outside this band (in cents) are discarded as OCR noise: stray
/// single digits, page numbers, phone-number fragments. A heuristic filter,
/// not a statement about valid prices.
const MIN_CENTS: i64 = 50;
const MAX_CENTS: i64 = 100_000;

/// Turn raw OCR text into billable items, one per line that ends in a
/// plausible dollar amount. Items come out in line order, numbered `Item 1`,
/// `Item 2`, …, included in the split, and assigned to a snapshot of
/// `people` taken now (not a live reference).
pub fn extract_items(
    raw_text: &str,
    people: &[PersonId],
) -> Result<Vec<BillItem>, ExtractError> {
    let mut items = Vec::new();

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = re_trailing_amount().captures(line) else {
            continue;
        };
        let token = &caps[1];
        match parse_candidate(token) {
            Some(amount) => {
                tracing::trace!(line, token, %amount, "amount candidate accepted");
                items.push(BillItem::extracted(items.len() + 1, amount, people));
            }
            None => {
                tracing::trace!(line, token, "amount candidate outside plausible range");
            }
        }
    }

    if items.is_empty() {
        return Err(ExtractError::NoAmounts);
    }
    Ok(items)
}

fn parse_candidate(token: &str) -> Option<Money> {
    let value = Decimal::from_str(token).ok()?;
    let cents = (value * Decimal::from(100)).to_i64()?;
    if !(MIN_CENTS..=MAX_CENTS).contains(&cents) {
        return None;
    }
    Some(Money::from_cents(cents))
}
