use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numclass_core::response::NumberInputError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] NumberInputError),

    #[error("Malformed request query: {0}")]
    RequestParse(String),

    #[error("Fun fact lookup failed: {0}")]
    UpstreamFetch(String),

    #[error("Classification failed: {0}")]
    Classification(String),
}

impl Error {
    /// Short label recorded with every logged failure
    pub fn category(&self) -> &'static str {
        match self {
            Error::Input(_) => "client_input",
            Error::RequestParse(_) => "request_parse",
            Error::UpstreamFetch(_) => "upstream_fetch",
            Error::Classification(_) => "classification",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::Input(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let category = self.category();

        match self {
            Error::Input(err) => {
                log::warn!("category={category} details={err}");
                (status, Json(err.to_error_result())).into_response()
            }
            // Upstream and internal details stay in the log.
            other => {
                log::error!("category={category} details={other}");
                status.into_response()
            }
        }
    }
}
