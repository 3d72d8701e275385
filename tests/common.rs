use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde_json::Value;
use vwo_bridge::{
    client::{LifecycleListener, VwoClient, VwoStatusListener},
    models::{LogLevel, VwoConfig},
    Bridge, CallbackHandle, Response, SdkError,
};

pub struct LaunchRecord {
    pub api_key: String,
    /// `None` for the asynchronous launch variant.
    pub timeout: Option<Duration>,
    pub config: VwoConfig,
}

#[derive(Default)]
pub struct FakeState {
    pub objects: HashMap<String, Value>,
    pub launches: Vec<LaunchRecord>,
    pub custom_variables: Vec<(String, String)>,
    pub conversions: Vec<(String, Option<f64>)>,
    pub log_levels: Vec<LogLevel>,
    pub launch_failure: Option<String>,
    pub variation_failure: bool,
}

/// Recording stand-in for the wrapped SDK.
#[derive(Default)]
pub struct FakeVwo {
    state: Mutex<FakeState>,
}

impl FakeVwo {
    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("should always be able to acquire lock")
    }
}

impl VwoClient for FakeVwo {
    fn launch_synchronously(
        &self,
        api_key: &str,
        timeout: Duration,
        config: VwoConfig,
    ) -> Result<(), SdkError> {
        let mut state = self.state();
        state.launches.push(LaunchRecord {
            api_key: api_key.to_string(),
            timeout: Some(timeout),
            config,
        });
        match &state.launch_failure {
            Some(reason) => Err(SdkError::new(reason.clone())),
            None => Ok(()),
        }
    }

    fn launch(&self, api_key: &str, config: VwoConfig, status: Box<dyn VwoStatusListener>) {
        let failure = {
            let mut state = self.state();
            state.launches.push(LaunchRecord {
                api_key: api_key.to_string(),
                timeout: None,
                config,
            });
            state.launch_failure.clone()
        };
        match failure {
            Some(reason) => status.on_load_failure(&reason),
            None => status.on_loaded(),
        }
    }

    fn set_custom_variable(&self, key: &str, value: &str) {
        self.state()
            .custom_variables
            .push((key.to_string(), value.to_string()));
    }

    fn version(&self) -> String {
        "fake-2.3.4".to_string()
    }

    fn object_for_key(&self, key: &str) -> Option<Value> {
        self.state().objects.get(key).cloned()
    }

    fn int_for_key(&self, key: &str, default: i64) -> i64 {
        self.object_for_key(key)
            .and_then(|v| v.as_i64())
            .unwrap_or(default)
    }

    fn string_for_key(&self, key: &str, default: &str) -> Option<String> {
        match self.state().objects.get(key) {
            Some(Value::Null) => None,
            Some(value) => value.as_str().map(str::to_owned),
            None => Some(default.to_string()),
        }
    }

    fn bool_for_key(&self, key: &str, default: bool) -> bool {
        self.object_for_key(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    fn float_for_key(&self, key: &str, default: f64) -> f64 {
        self.object_for_key(key)
            .and_then(|v| v.as_f64())
            .unwrap_or(default)
    }

    fn track_conversion(&self, goal_identifier: &str) {
        self.state()
            .conversions
            .push((goal_identifier.to_string(), None));
    }

    fn track_conversion_with_value(&self, goal_identifier: &str, value: f64) {
        self.state()
            .conversions
            .push((goal_identifier.to_string(), Some(value)));
    }

    fn set_log_level(&self, level: LogLevel) {
        self.state().log_levels.push(level);
    }

    fn variation_name_for_test_key(&self, test_key: &str) -> Result<String, SdkError> {
        let state = self.state();
        if state.variation_failure {
            return Err(SdkError::new("campaign not running"));
        }
        Ok(state
            .objects
            .get(test_key)
            .and_then(|v| v.as_str())
            .unwrap_or("control")
            .to_string())
    }
}

/// Lifecycle listener that records every event it receives.
#[derive(Default)]
pub struct RecordingLifecycle {
    pub events: Mutex<Vec<String>>,
}

impl RecordingLifecycle {
    fn record(&self, event: &str) {
        self.events
            .lock()
            .expect("should always be able to acquire lock")
            .push(event.to_string());
    }
}

impl LifecycleListener for RecordingLifecycle {
    fn on_pause(&self) {
        self.record("pause");
    }
    fn on_resume(&self) {
        self.record("resume");
    }
    fn on_stop(&self) {
        self.record("stop");
    }
    fn on_start(&self) {
        self.record("start");
    }
}

pub fn create_bridge() -> (Bridge, Arc<FakeVwo>, Arc<RecordingLifecycle>) {
    let sdk = Arc::new(FakeVwo::default());
    let listener = Arc::new(RecordingLifecycle::default());
    let bridge = Bridge::new(sdk.clone(), listener.clone())
        .expect("should be able to create the bridge");
    (bridge, sdk, listener)
}

/// Dispatches and hands back the handled flag plus the callback channel.
pub fn dispatch(
    bridge: &Bridge,
    action: &str,
    args: &[Value],
) -> (bool, mpsc::Receiver<Response>) {
    let (tx, rx) = mpsc::channel();
    let callback = CallbackHandle::new(move |response| {
        let _ = tx.send(response);
    });
    let handled = bridge.dispatch(action, args, callback);
    (handled, rx)
}

pub fn dispatch_and_wait(bridge: &Bridge, action: &str, args: &[Value]) -> Response {
    let (handled, rx) = dispatch(bridge, action, args);
    assert!(handled, "action {action} should be handled");
    rx.recv_timeout(Duration::from_secs(2))
        .expect("callback should resolve")
}

/// Waits until every previously submitted UI task has run. `version` runs
/// on the UI thread, so its response doubles as a barrier.
pub fn drain_ui(bridge: &Bridge) {
    dispatch_and_wait(bridge, "version", &[]);
}
