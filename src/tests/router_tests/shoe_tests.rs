// src/tests/router_tests/shoe_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_catalog, test_today};

#[test]
fn shoe_page_renders_its_card() {
    let catalog = test_catalog();
    let resp = handle(get("/shoe/gel-kayano"), &catalog, test_today()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<h1>Gel-Kayano</h1>"));
    assert!(body.contains("$125.00"));
    assert!(body.contains("$95.00"));
    assert!(body.contains("1 Color<"));
    assert!(body.contains("Released October 12, 2026"));
}

#[test]
fn zero_sale_price_page_has_badge_but_no_sale_line() {
    let catalog = test_catalog();
    let body = body_string(handle(get("/shoe/free-sample"), &catalog, test_today()).unwrap());

    assert!(body.contains(r#"data-variant="on-sale""#));
    assert!(!body.contains("shoe-card-sale-price"));
    assert!(body.contains("0 Colors"));
}

#[test]
fn unknown_slug_is_not_found() {
    let catalog = test_catalog();
    let err = handle(get("/shoe/missing"), &catalog, test_today()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(get("/shoe/"), &catalog, test_today()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn nested_slug_is_bad_request() {
    let catalog = test_catalog();
    let err = handle(get("/shoe/gel-kayano/extra"), &catalog, test_today()).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn every_card_link_resolves() {
    let catalog = test_catalog();
    let index = body_string(handle(get("/"), &catalog, test_today()).unwrap());

    let hrefs: Vec<&str> = index
        .split(r#"href=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|href| href.starts_with("/shoe/"))
        .collect();
    assert_eq!(hrefs.len(), catalog.len());

    for href in hrefs {
        let resp = handle(get(href), &catalog, test_today()).unwrap();
        assert_eq!(resp.status(), 200, "{href} did not resolve");
    }
}
