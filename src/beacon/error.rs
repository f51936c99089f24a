//! Consensus client errors and their failover classification.

use reqwest::StatusCode;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

use crate::fallback::{EndpointError, Recoverable};

/// The closed set of per-attempt failures that move on to the next beacon node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The attempt exceeded the configured timeout.
    Timeout,
    /// The node actively refused the TCP connection.
    ConnectionRefused,
    /// The node's host name could not be resolved.
    Dns,
    /// Any other failure while establishing the connection (TLS, unreachable network, ...).
    Connect,
    /// The connection broke while sending the request or reading the response.
    Connection,
    /// The node answered with a non-2xx status.
    Status,
    /// The response body was empty, truncated or not valid JSON.
    Decode,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::ConnectionRefused => "connection_refused",
            FailureKind::Dns => "dns",
            FailureKind::Connect => "connect",
            FailureKind::Connection => "connection",
            FailureKind::Status => "status",
            FailureKind::Decode => "decode",
        }
    }

    /// Classify a transport error, or `None` if the request never left the client.
    pub fn of(error: &reqwest::Error) -> Option<Self> {
        if error.is_builder() {
            return None;
        }
        let kind = if error.is_timeout() {
            FailureKind::Timeout
        } else if error.is_connect() {
            classify_connect(error)
        } else if error.is_status() {
            FailureKind::Status
        } else if error.is_decode() || error.is_body() {
            FailureKind::Decode
        } else {
            FailureKind::Connection
        };
        Some(kind)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn classify_connect(error: &reqwest::Error) -> FailureKind {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            if io_error.kind() == io::ErrorKind::ConnectionRefused {
                return FailureKind::ConnectionRefused;
            }
        }
        // hyper-util reports resolver failures as a `ConnectError` with this message.
        if cause.to_string().starts_with("dns error") {
            return FailureKind::Dns;
        }
        source = cause.source();
    }
    FailureKind::Connect
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_ref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum Error {
    /// The request to a beacon node failed in transit.
    #[error("{endpoint}: {kind} error: {source}")]
    Transport {
        endpoint: String,
        kind: FailureKind,
        #[source]
        source: reqwest::Error,
    },

    /// The beacon node returned a non-2xx status.
    #[error("{endpoint}: server returned {status}{}", message_suffix(.message))]
    Status {
        endpoint: String,
        status: StatusCode,
        message: Option<String>,
    },

    /// The beacon node returned a body that could not be decoded.
    #[error("{endpoint}: invalid JSON response: {source}")]
    InvalidJson {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// A write was attempted without any beacon node configured.
    #[error("no beacon node endpoints configured")]
    NoEndpoints,

    /// A validator query was attempted without any validator ids.
    #[error("no validator ids supplied")]
    NoValidatorIds,

    #[error(transparent)]
    InvalidUrl(#[from] EndpointError),

    /// The request could not be built; no beacon node was contacted.
    #[error("failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// Wrap a `reqwest` error raised while talking to `endpoint`.
    pub fn transport(endpoint: impl fmt::Display, error: reqwest::Error) -> Self {
        match FailureKind::of(&error) {
            Some(kind) => Error::Transport {
                endpoint: endpoint.to_string(),
                kind,
                source: error,
            },
            None => Error::Request(error),
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Error::Transport { kind, .. } => Some(*kind),
            Error::Status { .. } => Some(FailureKind::Status),
            Error::InvalidJson { .. } => Some(FailureKind::Decode),
            Error::NoEndpoints
            | Error::NoValidatorIds
            | Error::InvalidUrl(_)
            | Error::Request(_)
            | Error::Serialize(_) => None,
        }
    }

    /// If the error has a HTTP status code, return it.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Transport { source, .. } => source.status(),
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The (redacted) endpoint the error was produced by, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Error::Transport { endpoint, .. }
            | Error::Status { endpoint, .. }
            | Error::InvalidJson { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}

impl Recoverable for Error {
    fn is_recoverable(&self) -> bool {
        self.kind().is_some()
    }

    fn failure_label(&self) -> &'static str {
        self.kind().map_or("unrecoverable", |kind| kind.as_str())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
