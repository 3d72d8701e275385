use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use vwo_bridge::{
    client::{LifecycleListener, VwoClient, VwoStatusListener},
    models::{LogLevel, VwoConfig},
    Bridge, CallbackHandle, SdkError,
};

struct QuietListener;

impl LifecycleListener for QuietListener {
    fn on_pause(&self) {}
    fn on_resume(&self) {}
    fn on_stop(&self) {}
    fn on_start(&self) {}
}

/// In-memory stand-in for the native SDK, just enough to drive the bridge.
struct DemoSdk {
    values: Mutex<HashMap<String, Value>>,
}

impl VwoClient for DemoSdk {
    fn launch_synchronously(
        &self,
        _api_key: &str,
        _timeout: Duration,
        _config: VwoConfig,
    ) -> Result<(), SdkError> {
        Ok(())
    }

    fn launch(&self, _api_key: &str, _config: VwoConfig, status: Box<dyn VwoStatusListener>) {
        status.on_loaded();
    }

    fn set_custom_variable(&self, key: &str, value: &str) {
        println!("custom variable {key}={value}");
    }

    fn version(&self) -> String {
        "demo-1.0.0".to_string()
    }

    fn object_for_key(&self, key: &str) -> Option<Value> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn int_for_key(&self, key: &str, default: i64) -> i64 {
        self.object_for_key(key)
            .and_then(|v| v.as_i64())
            .unwrap_or(default)
    }

    fn string_for_key(&self, key: &str, default: &str) -> Option<String> {
        match self.object_for_key(key) {
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
        println!("conversion {goal_identifier}");
    }

    fn track_conversion_with_value(&self, goal_identifier: &str, value: f64) {
        println!("conversion {goal_identifier}={value}");
    }

    fn set_log_level(&self, level: LogLevel) {
        println!("log level {level:?}");
    }

    fn variation_name_for_test_key(&self, test_key: &str) -> Result<String, SdkError> {
        self.object_for_key(test_key)
            .and_then(|v| v.as_str().map(str::to_owned))
            .ok_or_else(|| SdkError::new(format!("no campaign for {test_key}")))
    }
}

fn main() {
    let sdk = Arc::new(DemoSdk {
        values: Mutex::new(HashMap::from([
            ("button_color".to_string(), json!("red")),
            ("checkout_test".to_string(), json!("variation-2")),
        ])),
    });
    let bridge = Bridge::new(sdk, Arc::new(QuietListener)).unwrap();

    let calls: Vec<(&str, Vec<Value>)> = vec![
        ("launch", vec![json!("api-key"), json!({ "optOut": false })]),
        ("version", vec![]),
        ("objectForKey", vec![json!("button_color")]),
        ("intForKey", vec![json!("rollout_percent"), json!(10)]),
        ("variationNameForTestKey", vec![json!("checkout_test")]),
        ("setLogLevel", vec![json!(2)]),
        ("setLogLevel", vec![json!(42)]),
        ("somethingElse", vec![]),
    ];

    for (action, args) in calls {
        let (tx, rx) = mpsc::channel();
        let callback = CallbackHandle::new(move |response| {
            let _ = tx.send(response);
        });
        let handled = bridge.dispatch(action, &args, callback);
        println!(
            "{action}: handled={handled}, response={:?}",
            rx.recv_timeout(Duration::from_secs(1))
        );
    }
}
