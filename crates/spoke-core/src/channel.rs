//! The consumed transport boundary.
//!
//! The transport itself — socket, framing, request/response correlation,
//! timeouts, reconnects — lives behind these traits and is supplied by the
//! embedding application. This crate only sequences operations against
//! them. A [`Connector`] resolves to a ready channel handle or fails; there
//! is no partially-open state observable here.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;

use crate::app::CapabilityKey;
use crate::wire::{CallResponse, InboundCall};

/// Transport-level failure reported by the channel implementation.
///
/// Opaque to this crate: it is propagated, never interpreted or retried.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ChannelError(String);

impl ChannelError {
    /// Wrap a transport failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A specialized Result type for channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// A handler bound under a capability key.
///
/// The channel invokes it once per matching inbound call; a failure is the
/// channel's to convert into a protocol-level error reply.
pub type CallHandler =
    Arc<dyn Fn(InboundCall) -> BoxFuture<'static, anyhow::Result<CallResponse>> + Send + Sync>;

/// Opens a channel to the hub.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Connect to the hub at `url`, resolving once the underlying
    /// connection reports open.
    async fn connect(&self, url: &str) -> ChannelResult<Arc<dyn Channel>>;
}

/// An open bidirectional channel to the hub.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Make an outbound call and await the hub's reply.
    async fn make_call(&self, name: &str, payload: Value) -> ChannelResult<Value>;

    /// Bind `handler` under `key` for inbound calls.
    ///
    /// Binding is local bookkeeping on the handle; it does not suspend.
    fn register_handler(&self, key: CapabilityKey, handler: CallHandler);
}

impl std::fmt::Debug for dyn Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_error_displays_its_message() {
        let err = ChannelError::new("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn channel_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChannelError>();
    }
}
