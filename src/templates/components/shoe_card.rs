use crate::domain::{classify, shows_sale_price, Shoe, Variant};
use crate::formatting::{format_price, pluralize};
use chrono::NaiveDate;
use maud::{html, Markup};

/// A linked card for one shoe: image, badge, name, prices and color count.
pub fn shoe_card(shoe: &Shoe, today: NaiveDate) -> Markup {
    let variant = classify(shoe, today);

    html! {
        a class="shoe-card-link" href=(shoe.href()) {
            article class="shoe-card" data-variant=(variant.as_str()) {
                div class="shoe-card-image" {
                    img alt="" src=(shoe.image_src);
                    @match variant {
                        Variant::NewRelease => {
                            div class="flag flag-new-release" { "Just Released!" }
                        },
                        Variant::OnSale => {
                            div class="flag flag-on-sale" { "Sale" }
                        },
                        Variant::Default => {},
                    }
                }
                div class="spacer" style="height: 12px;" {}
                div class="shoe-card-row" {
                    h3 class="shoe-card-name" { (shoe.name) }
                    span class="shoe-card-price" { (format_price(shoe.price)) }
                }
                div class="shoe-card-row" {
                    p class="shoe-card-colors" {
                        (shoe.num_of_colors) " " (pluralize("Color", shoe.num_of_colors))
                    }
                    @if let Some(sale_price) = shows_sale_price(shoe) {
                        span class="shoe-card-sale-price" { (format_price(sale_price)) }
                    }
                }
            }
        }
    }
}
