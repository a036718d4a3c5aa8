// templates/pages/shoe_index.rs

use crate::catalog::SortOrder;
use crate::domain::Shoe;
use crate::templates::{desktop_layout, shoe_card};
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn shoe_index_page(shoes: &[&Shoe], sort: SortOrder, today: NaiveDate) -> Markup {
    desktop_layout(
        "All Shoes",
        html! {
            main class="container" {
                header class="shoe-index-header" {
                    h2 { "Running" }
                    form method="get" action="/" {
                        label for="sort" { "Sort" }
                        select name="sort" id="sort" onchange="this.form.submit()" {
                            @for order in [SortOrder::Newest, SortOrder::Price] {
                                option value=(order.as_str()) selected[order == sort] {
                                    @match order {
                                        SortOrder::Newest => { "Newest Releases" },
                                        SortOrder::Price => { "Price" },
                                    }
                                }
                            }
                        }
                    }
                }
                @if shoes.is_empty() {
                    p class="empty" { "No shoes yet." }
                } @else {
                    section class="shoe-grid" {
                        @for shoe in shoes {
                            (shoe_card(shoe, today))
                        }
                    }
                }
            }
        },
    )
}
