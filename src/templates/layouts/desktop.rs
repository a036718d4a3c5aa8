use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Shoe Shelf" }
            }
            body {
                header class="site-header" {
                    a class="logo" href="/" { "Shoe Shelf" }
                    nav {
                        ul {
                            li { a href="/?sort=newest" { "Newest" } }
                            li { a href="/?sort=price" { "Price" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
