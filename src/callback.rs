use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{event, Level};

/// Terminal result delivered back to the caller of a dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Success(Value),
    Error(String),
}

type Sink = Box<dyn FnOnce(Response) + Send>;

/// Single-resolution channel back to the original caller.
///
/// Exactly one of [`succeed`](Self::succeed) / [`fail`](Self::fail) may
/// take effect; later attempts are dropped with a warning. Fire-and-forget
/// actions drop the handle without ever resolving it.
#[derive(Clone)]
pub struct CallbackHandle {
    sink: Arc<Mutex<Option<Sink>>>,
}

impl CallbackHandle {
    pub fn new(sink: impl FnOnce(Response) + Send + 'static) -> Self {
        CallbackHandle {
            sink: Arc::new(Mutex::new(Some(Box::new(sink)))),
        }
    }

    pub fn succeed(&self, value: impl Into<Value>) {
        self.resolve(Response::Success(value.into()));
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.resolve(Response::Error(message.into()));
    }

    fn resolve(&self, response: Response) {
        let sink = self
            .sink
            .lock()
            .expect("should always be able to acquire lock")
            .take();
        match sink {
            Some(sink) => sink(response),
            None => {
                event!(Level::WARN, "callback already resolved, dropping response");
            }
        }
    }
}
