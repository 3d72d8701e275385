use std::sync::Arc;

use crate::client::LifecycleListener;

/// Relays host application lifecycle transitions to the SDK's listener.
///
/// The host framework's own base handling is passed in as a hook so the
/// relative ordering stays fixed: the listener hears `pause`/`stop`/`start`
/// before the base handling runs, and `resume` after it.
pub struct LifecycleForwarder {
    listener: Arc<dyn LifecycleListener>,
}

impl LifecycleForwarder {
    pub fn new(listener: Arc<dyn LifecycleListener>) -> Self {
        LifecycleForwarder { listener }
    }

    pub fn on_pause(&self, base: impl FnOnce()) {
        self.listener.on_pause();
        base();
    }

    pub fn on_resume(&self, base: impl FnOnce()) {
        base();
        self.listener.on_resume();
    }

    pub fn on_stop(&self, base: impl FnOnce()) {
        self.listener.on_stop();
        base();
    }

    pub fn on_start(&self, base: impl FnOnce()) {
        self.listener.on_start();
        base();
    }
}
