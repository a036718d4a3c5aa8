use crate::catalog::{Catalog, SortOrder};
use crate::domain::{classify, Shoe, Variant};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates;
use astra::Request;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// One entry of `/api/shoes`: the record plus its computed variant.
#[derive(Serialize)]
struct ShoeSummary<'a> {
    #[serde(flatten)]
    shoe: &'a Shoe,
    variant: Variant,
}

pub fn handle(req: Request, catalog: &Catalog, today: NaiveDate) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    tracing::info!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let sort = SortOrder::from_query(params.get("sort").map(String::as_str));
            let shoes = catalog.sorted(sort);
            html_response(templates::pages::shoe_index_page(&shoes, sort, today))
        }
        ("GET", "/api/shoes") => {
            let sort = SortOrder::from_query(params.get("sort").map(String::as_str));
            let summaries: Vec<ShoeSummary> = catalog
                .sorted(sort)
                .into_iter()
                .map(|shoe| ShoeSummary {
                    shoe,
                    variant: classify(shoe, today),
                })
                .collect();
            json_response(&summaries)
        }
        ("GET", p) if p.starts_with("/shoe/") => {
            let slug = &p["/shoe/".len()..];
            if slug.is_empty() {
                return Err(ServerError::NotFound);
            }
            if slug.contains('/') {
                return Err(ServerError::BadRequest(format!("Invalid shoe slug: {slug}")));
            }
            let shoe = catalog.find(slug).ok_or(ServerError::NotFound)?;
            html_response(templates::pages::shoe_detail_page(shoe, today))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
