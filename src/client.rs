//! The outbound capability: traits the wrapped VWO SDK implements.
use std::time::Duration;

use serde_json::Value;

use crate::{
    error::SdkError,
    models::{LogLevel, VwoConfig},
};

/// Completion listener for the asynchronous `launch` call. Exactly one of
/// the two methods fires, exactly once.
pub trait VwoStatusListener: Send {
    fn on_loaded(&self);
    fn on_load_failure(&self, reason: &str);
}

/// Receives host application foreground/background transitions.
///
/// One instance lives for the whole life of a [`crate::Bridge`] and is
/// shared by reference with every [`VwoConfig`] built by it, so events
/// delivered before or after a given launch still reach the SDK.
pub trait LifecycleListener: Send + Sync {
    fn on_pause(&self);
    fn on_resume(&self);
    fn on_stop(&self);
    fn on_start(&self);
}

/// The wrapped A/B-testing SDK.
///
/// The bridge treats the implementation as opaque and thread-safe;
/// bucketing, targeting and assignment state all live behind this trait.
pub trait VwoClient: Send + Sync {
    /// Blocking initialization. Does not return until the SDK finished
    /// loading or gave up within `timeout`.
    fn launch_synchronously(
        &self,
        api_key: &str,
        timeout: Duration,
        config: VwoConfig,
    ) -> Result<(), SdkError>;

    /// Non-blocking initialization; completion is reported through
    /// `status`.
    fn launch(&self, api_key: &str, config: VwoConfig, status: Box<dyn VwoStatusListener>);

    fn set_custom_variable(&self, key: &str, value: &str);

    fn version(&self) -> String;

    /// Generic accessor; `None` when the key has no assigned value.
    fn object_for_key(&self, key: &str) -> Option<Value>;

    fn int_for_key(&self, key: &str, default: i64) -> i64;
    fn string_for_key(&self, key: &str, default: &str) -> Option<String>;
    fn bool_for_key(&self, key: &str, default: bool) -> bool;
    fn float_for_key(&self, key: &str, default: f64) -> f64;

    fn track_conversion(&self, goal_identifier: &str);
    fn track_conversion_with_value(&self, goal_identifier: &str, value: f64);

    fn set_log_level(&self, level: LogLevel);

    /// May fail inside the SDK, e.g. when the campaign is unknown.
    fn variation_name_for_test_key(&self, test_key: &str) -> Result<String, SdkError>;
}
