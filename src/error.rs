use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

/// Broad classification of everything that can go wrong talking to the API.
///
/// The variants are deliberately flat so callers can branch on them, e.g.
/// backing off on [`Kind::RateLimited`] or [`Kind::ServiceUnavailable`]
/// instead of string-matching messages. The crate itself never retries.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// No API key is configured; the request was never sent.
    NoApiKey,
    /// An API key or language value failed shape validation at the setter.
    Configuration,
    /// Caller-supplied arguments violate an endpoint precondition.
    Validation,
    /// DNS, connect, I/O, or timeout failure below the HTTP layer.
    Transport,
    /// The response body could not be decoded into the expected shape.
    Decode,
    /// The API answered 503.
    ServiceUnavailable,
    /// The API answered 429.
    RateLimited,
    /// The API answered some other non-200 status.
    Status,
    /// HTTP 200, but the payload's own success flag reports failure.
    InvalidResponse,
    /// Internal error from dependencies.
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            source: None,
            backtrace: Backtrace::capture(),
        }
    }

    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Configuration {
            reason: message.into(),
        }
        .into()
    }

    pub fn status(status_code: StatusCode, path: &str) -> Self {
        let detail = Status {
            status_code,
            path: path.to_owned(),
        };
        match status_code {
            StatusCode::SERVICE_UNAVAILABLE => Error::with_source(Kind::ServiceUnavailable, detail),
            StatusCode::TOO_MANY_REQUESTS => Error::with_source(Kind::RateLimited, detail),
            _ => Error::with_source(Kind::Status, detail),
        }
    }

    pub fn invalid_response(path: &str) -> Self {
        InvalidResponse {
            path: path.to_owned(),
        }
        .into()
    }

    pub fn decode<S: StdError + Send + Sync + 'static>(source: S) -> Self {
        Error::with_source(Kind::Decode, source)
    }

    /// Returns the HTTP status code for status-classified errors.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        self.downcast_ref::<Status>().map(|s| s.status_code)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub path: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making GET call to {}",
            self.status_code, self.path
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Configuration {
    pub reason: String,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.reason)
    }
}

impl StdError for Configuration {}

#[non_exhaustive]
#[derive(Debug)]
pub struct InvalidResponse {
    pub path: String,
}

impl fmt::Display for InvalidResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "endpoint {} reported failure despite HTTP 200",
            self.path
        )
    }
}

impl StdError for InvalidResponse {}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Configuration> for Error {
    fn from(err: Configuration) -> Self {
        Error::with_source(Kind::Configuration, err)
    }
}

impl From<InvalidResponse> for Error {
    fn from(err: InvalidResponse) -> Self {
        Error::with_source(Kind::InvalidResponse, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Error::with_source(Kind::Internal, e)
        } else {
            Error::with_source(Kind::Transport, e)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Decode, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classifies_503_as_service_unavailable() {
        let error = Error::status(StatusCode::SERVICE_UNAVAILABLE, "/ISteamApps/GetAppList/v2");

        assert_eq!(error.kind(), Kind::ServiceUnavailable);
        assert_eq!(error.status_code(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn status_classifies_429_as_rate_limited() {
        let error = Error::status(StatusCode::TOO_MANY_REQUESTS, "/ISteamApps/GetAppList/v2");

        assert_eq!(error.kind(), Kind::RateLimited);
    }

    #[test]
    fn status_carries_numeric_code_for_other_statuses() {
        let error = Error::status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "/ISteamUserStats/GetUserStatsForGame/v2",
        );

        assert_eq!(error.kind(), Kind::Status);
        assert_eq!(error.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn validation_into_error() {
        let error = Error::validation("too many steam ids, max 100");

        assert_eq!(error.kind(), Kind::Validation);
        assert!(error.to_string().contains("max 100"));
    }
}
