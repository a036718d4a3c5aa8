// templates/pages/shoe_detail.rs

use crate::domain::Shoe;
use crate::templates::{desktop_layout, shoe_card};
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn shoe_detail_page(shoe: &Shoe, today: NaiveDate) -> Markup {
    desktop_layout(
        &shoe.name,
        html! {
            main class="container shoe-detail" {
                p { a href="/" { "← All shoes" } }
                h1 { (shoe.name) }
                (shoe_card(shoe, today))
                p class="release-date" {
                    "Released " (shoe.release_date.format("%B %-d, %Y").to_string())
                }
            }
        },
    )
}
