//! Inbound call dispatch.

use std::sync::Arc;

use tracing::debug;

use spoke_core::{CallContext, CallResponse, ExecutionContext, InboundCall, Intent};

/// Routes one inbound call to its intent's handler and shapes the reply.
///
/// Arguments are handed to the handler exactly as received: validating
/// their shape against the intent's declared schema is a separate concern
/// that would sit at this boundary, between language resolution and the
/// handler invocation, if one is ever added.
#[derive(Debug, Clone)]
pub struct CallDispatcher {
    context: Arc<ExecutionContext>,
}

impl CallDispatcher {
    /// Create a dispatcher over the shared execution context.
    #[must_use]
    pub fn new(context: Arc<ExecutionContext>) -> Self {
        Self { context }
    }

    /// Handle one inbound call for `intent`.
    ///
    /// Never fails for a normal handler result. A handler failure
    /// propagates to the channel layer, which owns the protocol-level
    /// error reply.
    ///
    /// # Errors
    ///
    /// Whatever the intent's `run` raises.
    pub async fn handle(&self, intent: &Intent, call: InboundCall) -> anyhow::Result<CallResponse> {
        debug!(intent = intent.id(), args = ?call.args, "intent called");

        // Language is scoped to this call; nothing process-wide changes,
        // so concurrent calls cannot see each other's language.
        let ctx = CallContext::new(call.resolved_lang(), Arc::clone(&self.context));
        let text = intent.run(&call.args, &ctx).await?;
        Ok(CallResponse::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spoke_core::{DEFAULT_LANG, InboundCall, SlotValues};
    use spoke_test::fixtures::{AlwaysFails, LangEcho, StaticReply, call_with_lang, test_app};
    use std::sync::Arc;

    fn dispatcher() -> CallDispatcher {
        CallDispatcher::new(Arc::new(ExecutionContext::new(Vec::new(), DEFAULT_LANG)))
    }

    #[tokio::test]
    async fn wraps_the_handler_result_in_a_response_envelope() {
        let app = test_app("hello", "greet", Arc::new(StaticReply("Hello")));
        let intent = app.intent("greet").unwrap();

        let response = dispatcher()
            .handle(intent, call_with_lang("en"))
            .await
            .unwrap();
        assert_eq!(response, CallResponse::new("Hello"));
    }

    #[tokio::test]
    async fn missing_language_tag_falls_back_to_default() {
        let app = test_app("echo", "lang", Arc::new(LangEcho::new()));
        let intent = app.intent("lang").unwrap();

        let response = dispatcher()
            .handle(intent, InboundCall::default())
            .await
            .unwrap();
        assert_eq!(response.response_text, DEFAULT_LANG);
    }

    #[tokio::test]
    async fn the_call_language_reaches_the_handler() {
        let app = test_app("echo", "lang", Arc::new(LangEcho::new()));
        let intent = app.intent("lang").unwrap();

        let response = dispatcher()
            .handle(intent, call_with_lang("fr"))
            .await
            .unwrap();
        assert_eq!(response.response_text, "fr");
    }

    #[tokio::test]
    async fn handler_failures_are_not_swallowed() {
        let app = test_app("broken", "boom", Arc::new(AlwaysFails("kaput")));
        let intent = app.intent("boom").unwrap();

        let err = dispatcher()
            .handle(intent, call_with_lang("en"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "kaput");
    }

    #[tokio::test]
    async fn arguments_pass_through_unvalidated() {
        // The dispatcher performs no schema checks; whatever the hub sent
        // reaches the handler as-is.
        struct ArgEcho;

        #[async_trait::async_trait]
        impl spoke_core::IntentHandler for ArgEcho {
            async fn run(&self, args: &SlotValues, _ctx: &CallContext) -> anyhow::Result<String> {
                Ok(args
                    .get("Anything")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_owned())
            }
        }

        let app = test_app("echo", "args", Arc::new(ArgEcho));
        let intent = app.intent("args").unwrap();

        let mut call = call_with_lang("en");
        call.args
            .insert("Anything".to_owned(), serde_json::json!("goes"));

        let response = dispatcher().handle(intent, call).await.unwrap();
        assert_eq!(response.response_text, "goes");
    }
}
