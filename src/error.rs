use std::sync::Arc;

use thiserror::Error;

/// Errors produced by the bridge itself, before the wrapped SDK is reached.
///
/// The `Display` text of these variants is what callers receive as the
/// error payload of their callback.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("missing argument at index {0}")]
    MissingArgument(usize),
    #[error("argument at index {index}: expected {expected}")]
    WrongArgumentType {
        index: usize,
        expected: &'static str,
    },
    #[error("invalid launch config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
    #[error("invalid log level code: {0}")]
    InvalidLogLevel(i64),
    // std::io::Error is not clonable, so we're wrapping it in an Arc.
    #[error("failed to start bridge threads")]
    Io(#[source] Arc<std::io::Error>),
}

impl From<std::io::Error> for BridgeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(Arc::new(value))
    }
}

/// Opaque failure reported by the wrapped SDK. The bridge never inspects
/// it beyond forwarding its text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SdkError(pub String);

impl SdkError {
    pub fn new(reason: impl Into<String>) -> Self {
        SdkError(reason.into())
    }
}
