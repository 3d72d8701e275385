use std::{sync::Arc, time::Duration};

use serde_json::Value;
use tracing::{event, Level};

use crate::{
    args::ArgumentList,
    callback::CallbackHandle,
    client::{LifecycleListener, VwoClient, VwoStatusListener},
    error::BridgeError,
    lifecycle::LifecycleForwarder,
    models::{LogLevel, VwoConfig},
    scheduler::Scheduler,
};

/// The bridge dispatcher: decodes a named action plus positional JSON
/// arguments, runs the matching SDK call on its required execution context
/// and resolves the callback with the JSON-safe result.
pub struct Bridge {
    client: Arc<dyn VwoClient>,
    listener: Arc<dyn LifecycleListener>,
    scheduler: Scheduler,
}

impl Bridge {
    /// Creates a bridge around the given SDK. The lifecycle listener is
    /// held for the bridge's whole lifetime and shared by reference with
    /// every config built by [`dispatch`](Self::dispatch).
    pub fn new(
        client: Arc<dyn VwoClient>,
        listener: Arc<dyn LifecycleListener>,
    ) -> Result<Self, BridgeError> {
        Ok(Bridge {
            client,
            listener,
            scheduler: Scheduler::new()?,
        })
    }

    /// Returns a forwarder sharing this bridge's lifecycle listener.
    pub fn lifecycle(&self) -> LifecycleForwarder {
        LifecycleForwarder::new(self.listener.clone())
    }

    /// Dispatches one inbound call.
    ///
    /// Returns `false` for unrecognized action names without touching the
    /// callback. Recognized actions always return `true`; failures,
    /// including malformed arguments, are reported asynchronously through
    /// the callback, never through the return value.
    pub fn dispatch(&self, action: &str, args: &[Value], callback: CallbackHandle) -> bool {
        let args = ArgumentList::new(args);
        let accepted = match action {
            "launchSynchronously" => self.launch_synchronously(&args, callback.clone()),
            "launch" => self.launch(&args, callback.clone()),
            "setCustomVariable" => self.set_custom_variable(&args),
            "version" => self.version(callback.clone()),
            "objectForKey" => self.object_for_key(&args, callback.clone()),
            "intForKey" => self.int_for_key(&args, callback.clone()),
            "stringForKey" => self.string_for_key(&args, callback.clone()),
            "boolForKey" => self.bool_for_key(&args, callback.clone()),
            "floatForKey" => self.float_for_key(&args, callback.clone()),
            "trackConversion" => self.track_conversion(&args),
            "trackConversionWithValue" => self.track_conversion_with_value(&args),
            "setLogLevel" => self.set_log_level(&args, callback.clone()),
            "variationNameForTestKey" => {
                self.variation_name_for_test_key(&args, callback.clone())
            }
            _ => return false,
        };
        if let Err(err) = accepted {
            event!(Level::WARN, "rejecting {}: {}", action, err);
            callback.fail(err.to_string());
        }
        true
    }
}

// Private methods
impl Bridge {
    fn launch_synchronously(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let api_key = args.string(0)?;
        // Callers express the timeout in seconds, the SDK takes
        // milliseconds, truncated.
        let timeout = Duration::from_millis((args.number(1)? * 1000.0) as u64);
        let config = VwoConfig::from_json(args.object(2)?, self.listener.clone())?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            match client.launch_synchronously(&api_key, timeout, config) {
                Ok(()) => callback.succeed("VWO Initialized"),
                Err(err) => callback.fail(err.to_string()),
            }
        });
        Ok(())
    }

    fn launch(&self, args: &ArgumentList, callback: CallbackHandle) -> Result<(), BridgeError> {
        let api_key = args.string(0)?;
        let config = VwoConfig::from_json(args.object(1)?, self.listener.clone())?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            client.launch(&api_key, config, Box::new(LaunchCallback { callback }));
        });
        Ok(())
    }

    fn set_custom_variable(&self, args: &ArgumentList) -> Result<(), BridgeError> {
        let key = args.string(0)?;
        let value = args.string(1)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            client.set_custom_variable(&key, &value);
        });
        Ok(())
    }

    fn version(&self, callback: CallbackHandle) -> Result<(), BridgeError> {
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            callback.succeed(client.version());
        });
        Ok(())
    }

    fn object_for_key(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let key = args.string(0)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            let value = client.object_for_key(&key).unwrap_or(Value::Null);
            callback.succeed(wrapper_object(key, value));
        });
        Ok(())
    }

    fn int_for_key(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let key = args.string(0)?;
        let default = args.integer(1)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            let value = client.int_for_key(&key, default);
            callback.succeed(wrapper_object(key, value.into()));
        });
        Ok(())
    }

    fn string_for_key(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let key = args.string(0)?;
        let default = args.string(1)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            let value = client
                .string_for_key(&key, &default)
                .map_or(Value::Null, Value::String);
            callback.succeed(wrapper_object(key, value));
        });
        Ok(())
    }

    fn bool_for_key(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let key = args.string(0)?;
        let default = args.boolean(1)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            let value = client.bool_for_key(&key, default);
            callback.succeed(wrapper_object(key, value.into()));
        });
        Ok(())
    }

    fn float_for_key(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let key = args.string(0)?;
        let default = args.number(1)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            let value = client.float_for_key(&key, default);
            callback.succeed(wrapper_object(key, value.into()));
        });
        Ok(())
    }

    fn track_conversion(&self, args: &ArgumentList) -> Result<(), BridgeError> {
        let goal = args.string(0)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            client.track_conversion(&goal);
        });
        Ok(())
    }

    fn track_conversion_with_value(&self, args: &ArgumentList) -> Result<(), BridgeError> {
        let goal = args.string(0)?;
        let value = args.numeric_string(1)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            client.track_conversion_with_value(&goal, value);
        });
        Ok(())
    }

    fn set_log_level(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let level = LogLevel::from_code(args.integer(0)?)?;
        let client = self.client.clone();
        self.scheduler.run_in_background(move || {
            client.set_log_level(level);
            callback.succeed("Log level changed successfully");
        });
        Ok(())
    }

    fn variation_name_for_test_key(
        &self,
        args: &ArgumentList,
        callback: CallbackHandle,
    ) -> Result<(), BridgeError> {
        let test_key = args.string(0)?;
        let client = self.client.clone();
        self.scheduler.run_on_ui(move || {
            match client.variation_name_for_test_key(&test_key) {
                Ok(name) => callback.succeed(name),
                Err(err) => {
                    // Logged only; the callback stays unresolved.
                    event!(
                        Level::ERROR,
                        "variation lookup for {} failed: {}",
                        test_key,
                        err
                    );
                }
            }
        });
        Ok(())
    }
}

fn wrapper_object(key: String, value: Value) -> Value {
    let mut wrapper = serde_json::Map::new();
    wrapper.insert(key, value);
    Value::Object(wrapper)
}

struct LaunchCallback {
    callback: CallbackHandle,
}

impl VwoStatusListener for LaunchCallback {
    fn on_loaded(&self) {
        self.callback.succeed("VWO Loaded");
    }

    fn on_load_failure(&self, reason: &str) {
        event!(Level::ERROR, "VWO failed to load: {}", reason);
        self.callback.fail("VWO Load Failure");
    }
}
