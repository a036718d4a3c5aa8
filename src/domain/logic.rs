// src/domain/logic.rs

use super::shoe::Shoe;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::fmt;

/// The mutually exclusive presentation states of a shoe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determines the card variant of a shoe.
/// The order of checks determines the precedence.
///
/// A shoe can be both discounted and recently released; 'on-sale' wins.
/// Any sale price counts, including zero.
pub fn classify(shoe: &Shoe, today: NaiveDate) -> Variant {
    if shoe.sale_price.is_some() {
        return Variant::OnSale;
    }
    if is_new_shoe(shoe.release_date, today) {
        return Variant::NewRelease;
    }
    Variant::Default
}

/// True when the release date falls within the month before `today`.
/// Upcoming releases count as new.
///
/// Day granularity: both sides are calendar dates, and the window is one
/// calendar month rather than a rolling duration from the current instant.
pub fn is_new_shoe(release_date: NaiveDate, today: NaiveDate) -> bool {
    match today.checked_sub_months(Months::new(1)) {
        Some(cutoff) => release_date > cutoff,
        None => true,
    }
}

/// Whether the card prints a secondary sale price line.
///
/// Checked on the value, not on presence: a sale price of zero classifies
/// as `OnSale` but prints no line.
pub fn shows_sale_price(shoe: &Shoe) -> Option<i64> {
    shoe.sale_price.filter(|&cents| cents != 0)
}
