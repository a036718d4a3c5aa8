// src/domain/shoe.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single shoe listing as it arrives from the catalog file.
/// Prices are integer cents. Missing display fields render empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_src: String,
    pub price: i64,
    /// `None` when the shoe is not discounted. `Some(0)` is still a sale.
    #[serde(default)]
    pub sale_price: Option<i64>,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub num_of_colors: u32,
}

impl Shoe {
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Slugs go into links unescaped, so only unreserved URL characters are allowed.
    pub fn has_url_safe_slug(&self) -> bool {
        !self.slug.is_empty()
            && self
                .slug
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    }
}
