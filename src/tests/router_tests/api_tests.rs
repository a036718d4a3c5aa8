// src/tests/router_tests/api_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_catalog, test_today};
use serde_json::Value;

#[test]
fn api_lists_shoes_with_variants() {
    let catalog = test_catalog();
    let resp = handle(get("/api/shoes"), &catalog, test_today()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    let shoes = json.as_array().unwrap();
    assert_eq!(shoes.len(), 4);

    let variant_of = |slug: &str| {
        shoes
            .iter()
            .find(|s| s["slug"] == slug)
            .map(|s| s["variant"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(variant_of("tech-challenge-20"), "new-release");
    assert_eq!(variant_of("gel-kayano"), "on-sale");
    assert_eq!(variant_of("free-sample"), "on-sale");
    assert_eq!(variant_of("old-faithful"), "default");
}

#[test]
fn api_keeps_camel_case_fields() {
    let catalog = test_catalog();
    let json: Value = serde_json::from_str(&body_string(
        handle(get("/api/shoes?sort=price"), &catalog, test_today()).unwrap(),
    ))
    .unwrap();

    let first = &json[0];
    assert_eq!(first["slug"], "old-faithful");
    assert_eq!(first["imageSrc"], "/assets/old-faithful.jpg");
    assert_eq!(first["releaseDate"], "2021-03-01");
    assert_eq!(first["numOfColors"], 5);
    assert!(first["salePrice"].is_null());
}
