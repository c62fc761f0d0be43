//! Canned applications, intents, and handlers.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;

use spoke_core::{
    Application, CallContext, InboundCall, Intent, IntentHandler, Parameter, SlotValues,
};

/// Handler replying with a fixed text.
#[derive(Debug, Clone)]
pub struct StaticReply(pub &'static str);

#[async_trait]
impl IntentHandler for StaticReply {
    async fn run(&self, _args: &SlotValues, _ctx: &CallContext) -> anyhow::Result<String> {
        Ok(self.0.to_owned())
    }
}

/// Handler replying with the language the call ran under.
///
/// With a barrier, every invocation waits until the expected number of
/// calls is in flight before reading its language — used to show that
/// concurrent calls each observe their own language.
#[derive(Debug, Clone, Default)]
pub struct LangEcho {
    barrier: Option<Arc<Barrier>>,
}

impl LangEcho {
    /// A plain language echo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A language echo that rendezvous at `barrier` before answering.
    #[must_use]
    pub fn with_barrier(barrier: Arc<Barrier>) -> Self {
        Self {
            barrier: Some(barrier),
        }
    }
}

#[async_trait]
impl IntentHandler for LangEcho {
    async fn run(&self, _args: &SlotValues, ctx: &CallContext) -> anyhow::Result<String> {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        Ok(ctx.lang().to_owned())
    }
}

/// Handler that always fails with the given message.
#[derive(Debug, Clone)]
pub struct AlwaysFails(pub &'static str);

#[async_trait]
impl IntentHandler for AlwaysFails {
    async fn run(&self, _args: &SlotValues, _ctx: &CallContext) -> anyhow::Result<String> {
        anyhow::bail!(self.0)
    }
}

/// A one-intent application with a single free-form parameter.
///
/// # Panics
///
/// Panics if the identifiers violate the structural checks (test usage).
#[must_use]
pub fn test_app(app_id: &str, intent_id: &str, handler: Arc<dyn IntentHandler>) -> Application {
    let intent = Intent::new(intent_id, vec![Parameter::new("Value", "text")], handler);
    Application::new(app_id, vec![intent]).expect("valid test application")
}

/// The `hello` application with one intent `greet` replying `"Hello"`.
#[must_use]
pub fn greeting_app() -> Application {
    test_app("hello", "greet", Arc::new(StaticReply("Hello")))
}

/// An inbound call with a language tag and no arguments.
#[must_use]
pub fn call_with_lang(lang: &str) -> InboundCall {
    InboundCall {
        lang: Some(lang.to_owned()),
        args: SlotValues::new(),
    }
}
