use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Result type for `snoosh`, using [`snoosh::error::Error`].
///
/// [`snoosh::error::Error`]: enum.Error.html
pub type Result<T> = ::std::result::Result<T, Error>;

/// Enum for `snoosh` errors.
///
/// The capability traits never produce or translate errors themselves: whatever the [`Client`]
/// returns is handed back to the caller as-is.
///
/// [`Client`]: crate::client::Client
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// An HTTP error has occurred. `reason` is the failure message given by the API, if any.
    #[error("HTTP error {code}{}", http_reason(*code, reason.as_deref()))]
    Http { code: u16, reason: Option<String> },

    /// The request went through but Reddit rejected it. Only the first reported error is kept.
    #[error("API error {code}: {message}{}", field.as_ref().map(|f| format!(" (on field `{}`)", f)).unwrap_or_default())]
    Api {
        code: String,
        message: String,
        field: Option<String>,
    },

    /// Serialization error. Contains a description of the error.
    #[error("Serialization error: {0}")]
    Serial(String),

    /// The request couldn't be send. Contains a description of the error.
    #[error("Couldn't send request: {0}")]
    CannotSendRequest(String),

    /// The client couldn't be created. Contains a description of the error.
    #[error("Couldn't create client: {0}")]
    CannotCreateClient(String),

    /// An endpoint URL couldn't be built.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A listing contained an item of a kind other than the one requested.
    #[error("Expected an item of kind {expected}, got {found}")]
    UnexpectedKind { expected: String, found: String },

    /// A string couldn't be parsed as a fullname.
    #[error("Invalid fullname: {0:?}")]
    ParseFullname(String),
}

fn http_reason(code: u16, reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!(": {}", reason),
        // Give em a generic reason
        None => match code {
            401 => String::from(" Unauthorized: Missing or expired access token"),
            403 => String::from(" Forbidden: Access denied. May indicate that your request lacks a User-Agent header or the required OAuth scope."),
            404 => String::from(" Not Found"),
            409 => String::from(" Conflict"),
            429 => String::from(" Too Many Requests: You have exceeded the request rate limit. Try again later or decrease your rate of requests."),
            500 => String::from(" Internal Server Error: Some unknown error occurred on the server"),
            502 => String::from(" Bad Gateway"),
            503 => String::from(" Service Unavailable: Server cannot currently handle the request. Try again later."),
            504 => String::from(" Gateway Timeout"),
            _ => String::new(),
        },
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(e: InvalidHeaderValue) -> Error {
        Error::CannotCreateClient(format!("Invalid header value: {}", e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serial(format!("{}", e))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        match e.status() {
            Some(status) => Error::Http {
                code: status.as_u16(),
                reason: None,
            },
            None => Error::CannotSendRequest(format!("{}", e)),
        }
    }
}
