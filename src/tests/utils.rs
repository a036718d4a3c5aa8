use crate::catalog::Catalog;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use std::io::Read;

pub const TEST_CATALOG: &str = r#"[
    {"slug":"tech-challenge-20","name":"Tech Challenge 20","imageSrc":"/assets/tech-challenge-20.jpg",
     "price":16500,"salePrice":null,"releaseDate":"2026-10-10","numOfColors":2},
    {"slug":"gel-kayano","name":"Gel-Kayano","imageSrc":"/assets/gel-kayano.jpg",
     "price":12500,"salePrice":9500,"releaseDate":"2026-10-12","numOfColors":1},
    {"slug":"free-sample","name":"Free Sample","imageSrc":"/assets/free-sample.jpg",
     "price":9000,"salePrice":0,"releaseDate":"2019-01-01","numOfColors":0},
    {"slug":"old-faithful","name":"Old Faithful","imageSrc":"/assets/old-faithful.jpg",
     "price":4000,"releaseDate":"2021-03-01","numOfColors":5}
]"#;

/// Catalog shared by the router tests.
pub fn test_catalog() -> Catalog {
    Catalog::from_json_str(TEST_CATALOG).unwrap_or_else(|e| panic!("Bad test catalog: {e}"))
}

/// Fixed evaluation date so recency checks are deterministic.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
