use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
mod config;
mod domain;
mod errors;
mod formatting;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shoe_shelf=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            std::process::exit(1);
        }
    };

    if catalog.is_empty() {
        tracing::warn!(path = %config.catalog_path.display(), "catalog has no shoes");
    }

    tracing::info!(addr = %config.addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    // The recency window is evaluated against the date each request arrives.
    let result = server.serve(move |req, _info| {
        let today = Utc::now().date_naive();
        match handle(req, &catalog, today) {
            Ok(resp) => resp,
            Err(err) => responses::html_error_response(err),
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
