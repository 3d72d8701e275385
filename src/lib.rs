//! Implements the bridge between a hybrid app's web layer and the native
//! VWO A/B-testing SDK.
//!
//! Inbound calls arrive as an action name plus a positional JSON argument
//! array and resolve through a single-use [`CallbackHandle`]. The wrapped
//! SDK is injected as a [`client::VwoClient`] trait object; the bridge only
//! marshals arguments and results.
mod args;
mod bridge;
mod callback;
mod error;
mod lifecycle;
mod scheduler;

pub mod client;
pub mod models;

pub use crate::bridge::Bridge;
pub use crate::callback::{CallbackHandle, Response};
pub use crate::error::{BridgeError, SdkError};
pub use crate::lifecycle::LifecycleForwarder;
