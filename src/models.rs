use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::{client::LifecycleListener, error::BridgeError};

/// Severity accepted by the SDK's log-level control.
///
/// The inbound surface addresses levels by integer code, 1 (debug)
/// through 5 (off); any other code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Off,
}

impl LogLevel {
    pub fn from_code(code: i64) -> Result<Self, BridgeError> {
        match code {
            1 => Ok(LogLevel::Debug),
            2 => Ok(LogLevel::Info),
            3 => Ok(LogLevel::Warning),
            4 => Ok(LogLevel::Error),
            5 => Ok(LogLevel::Off),
            other => Err(BridgeError::InvalidLogLevel(other)),
        }
    }
}

/// Immutable launch options, built once per `launch`/`launchSynchronously`
/// call from the caller-supplied JSON object.
pub struct VwoConfig {
    pub opt_out: Option<bool>,
    pub preview_disabled: bool,
    /// Custom variable values; a JSON `null` in the inbound object maps to
    /// `None`, never to the string "null".
    pub custom_variables: HashMap<String, Option<String>>,
    /// Shared with every other config built by the same bridge.
    pub lifecycle: Arc<dyn LifecycleListener>,
}

/// Wire shape of the config argument. Unrecognized keys are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVwoConfig {
    disable_preview: Option<bool>,
    opt_out: Option<bool>,
    custom_variables: Option<HashMap<String, Option<String>>>,
}

impl VwoConfig {
    /// Builds a config from the caller's JSON object, attaching the
    /// bridge-owned lifecycle listener.
    ///
    /// `disablePreview` only takes effect when explicitly `true`; `optOut`
    /// is passed through whenever present, including `false`.
    pub fn from_json(
        raw: &Value,
        lifecycle: Arc<dyn LifecycleListener>,
    ) -> Result<Self, BridgeError> {
        let raw: RawVwoConfig =
            serde_json::from_value(raw.clone()).map_err(BridgeError::InvalidConfig)?;
        Ok(VwoConfig {
            opt_out: raw.opt_out,
            preview_disabled: raw.disable_preview == Some(true),
            custom_variables: raw.custom_variables.unwrap_or_default(),
            lifecycle,
        })
    }
}
