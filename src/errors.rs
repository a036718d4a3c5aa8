use astra::Response;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the catalog it serves.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Catalog Error: {0}")]
    CatalogError(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::CatalogError(_)
            | ServerError::ConfigError(_)
            | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
