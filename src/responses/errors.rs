use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::error_page;
use astra::{Body, Response};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        tracing::error!(%err, status, "request failed");
    } else {
        tracing::debug!(%err, status, "request rejected");
    }

    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        other => other.to_string(),
    };

    html_with_status(status, error_page(status, &message))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
