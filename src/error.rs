use serde::{Deserialize, Serialize};

/// Everything that can go wrong while talking to the Business API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No access token was configured for an endpoint that needs one
    #[error("access token must be set either via argument or the TIKTOK_ACCESS_TOKEN environment variable")]
    MissingToken,
    /// The request body could not be serialized
    #[error("failed to marshal request body: {0}")]
    Body(#[source] serde_json::Error),
    /// A query parameter could not be serialized
    #[error("failed to marshal {key}: {source}")]
    Param {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The request was rejected before it left the process (bad URL, bad header value)
    #[error("failed to create request: {0}")]
    Build(#[source] reqwest::Error),
    /// Connection, timeout or body read failure
    #[error("failed to execute request: {0}")]
    Http(#[from] reqwest::Error),
    /// The response was not a valid envelope
    #[error("failed to unmarshal response envelope: {0}")]
    Decode(#[source] serde_json::Error),
    /// The envelope `data` did not match the expected shape
    #[error("failed to unmarshal response: {0}")]
    Data(#[source] serde_json::Error),
    /// The envelope carried a non-zero `code`
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The request was refused locally before sending
    #[error("{0}")]
    Validation(String),
    /// A download answered with something other than 200
    #[error("failed to download: status code {0}")]
    Status(u16),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The application error behind this failure, if the server answered with one
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api_error) => Some(api_error),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

/// An application level error reported through the response envelope
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1737172488964097)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("api error {code}: {message} (request_id: {request_id})")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    pub request_id: String,
}
