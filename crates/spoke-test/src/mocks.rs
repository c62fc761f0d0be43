//! Mock channel and connector.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use spoke_core::{
    CallHandler, CallResponse, CapabilityKey, Channel, ChannelError, ChannelResult, Connector,
    InboundCall,
};

/// One observable action on a [`MockChannel`], in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    /// An outbound call was made.
    Call {
        /// Call name (e.g. `register`).
        name: String,
        /// JSON payload sent with the call.
        payload: Value,
    },
    /// A handler was bound.
    Bind {
        /// The capability key the handler was bound under.
        key: CapabilityKey,
    },
}

/// In-memory [`Channel`] that records everything done to it.
///
/// Uses `std::sync::Mutex` internally so builder methods work in both sync
/// and async contexts without a tokio runtime.
#[derive(Clone, Default)]
pub struct MockChannel {
    events: Arc<Mutex<Vec<ChannelEvent>>>,
    handlers: Arc<Mutex<Vec<(CapabilityKey, CallHandler)>>>,
    failing_calls: Arc<Mutex<Vec<String>>>,
}

impl MockChannel {
    /// Create an empty mock channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every outbound call named `name` fail.
    #[must_use]
    pub fn with_failing_call(self, name: impl Into<String>) -> Self {
        self.fail_call(name);
        self
    }

    /// Make every outbound call named `name` fail, on an existing channel.
    pub fn fail_call(&self, name: impl Into<String>) {
        if let Ok(mut guard) = self.failing_calls.lock() {
            guard.push(name.into());
        }
    }

    /// Everything recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<ChannelEvent> {
        self.events.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Keys with a bound handler, in binding order.
    #[must_use]
    pub fn bound_keys(&self) -> Vec<CapabilityKey> {
        self.handlers
            .lock()
            .map(|g| g.iter().map(|(key, _)| key.clone()).collect())
            .unwrap_or_default()
    }

    /// Invoke the handler bound under `key`, the way the hub would.
    ///
    /// # Panics
    ///
    /// Panics if no handler is bound under `key`.
    pub async fn invoke(
        &self,
        key: &CapabilityKey,
        call: InboundCall,
    ) -> anyhow::Result<CallResponse> {
        let handler = {
            let guard = self.handlers.lock().expect("handler table poisoned");
            guard
                .iter()
                .find(|(bound, _)| bound == key)
                .map(|(_, handler)| Arc::clone(handler))
                .unwrap_or_else(|| panic!("no handler bound under `{key}`"))
        };
        handler(call).await
    }
}

impl std::fmt::Debug for MockChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockChannel")
            .field("events", &self.events())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Channel for MockChannel {
    async fn make_call(&self, name: &str, payload: Value) -> ChannelResult<Value> {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(ChannelEvent::Call {
                name: name.to_owned(),
                payload,
            });
        }
        let failing = self
            .failing_calls
            .lock()
            .map(|g| g.iter().any(|n| n == name))
            .unwrap_or_default();
        if failing {
            return Err(ChannelError::new(format!("call `{name}` rejected")));
        }
        Ok(Value::Null)
    }

    fn register_handler(&self, key: CapabilityKey, handler: CallHandler) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(ChannelEvent::Bind { key: key.clone() });
        }
        if let Ok(mut guard) = self.handlers.lock() {
            guard.push((key, handler));
        }
    }
}

/// [`Connector`] handing out one shared [`MockChannel`].
#[derive(Clone, Default)]
pub struct MockConnector {
    channel: MockChannel,
    fail_connect: bool,
    attempts: Arc<Mutex<usize>>,
}

impl MockConnector {
    /// A connector whose `connect` succeeds with a fresh mock channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A connector whose `connect` always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_connect: true,
            ..Self::default()
        }
    }

    /// The shared channel this connector hands out.
    #[must_use]
    pub fn channel(&self) -> &MockChannel {
        &self.channel
    }

    /// Number of connect attempts observed.
    #[must_use]
    pub fn connect_attempts(&self) -> usize {
        self.attempts.lock().map(|g| *g).unwrap_or_default()
    }
}

impl std::fmt::Debug for MockConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockConnector")
            .field("fail_connect", &self.fail_connect)
            .field("attempts", &self.connect_attempts())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self, url: &str) -> ChannelResult<Arc<dyn Channel>> {
        if let Ok(mut guard) = self.attempts.lock() {
            *guard = guard.saturating_add(1);
        }
        if self.fail_connect {
            return Err(ChannelError::new(format!("connection refused: {url}")));
        }
        Ok(Arc::new(self.channel.clone()))
    }
}
