//! Applications, intents, and the routing key derived from them.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::CallContext;
use crate::error::{CoreError, CoreResult};

/// Arguments delivered with an inbound call, keyed by slot name.
pub type SlotValues = serde_json::Map<String, Value>;

/// The local implementation of an intent.
///
/// Implementations receive the call arguments and a per-call context and
/// produce the response text sent back to the hub. Argument shapes are
/// handed over exactly as received — schema validation is not performed at
/// this layer, so a handler given malformed arguments decides for itself
/// how to fail. Failures propagate to the channel layer unmasked.
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// Run the intent with the given arguments.
    async fn run(&self, args: &SlotValues, ctx: &CallContext) -> anyhow::Result<String>;
}

impl fmt::Debug for dyn IntentHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentHandler").finish_non_exhaustive()
    }
}

/// A named parameter descriptor in an intent's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Slot name the hub fills when invoking the intent.
    pub name: String,
    /// Parameter type name (owned by the hub's type system).
    #[serde(rename = "type")]
    pub param_type: String,
    /// Accepted values for enumerated types; empty for free-form types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Parameter {
    /// Create a free-form parameter descriptor.
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            values: Vec::new(),
        }
    }

    /// Restrict the parameter to an enumerated set of accepted values.
    #[must_use]
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }
}

/// A named, remotely-invokable operation: identifier, parameter schema,
/// and local implementation.
///
/// Immutable after construction. The schema may be empty (an intent with
/// no slots); an intent *without* a schema is unrepresentable here — JSON
/// definitions missing one are rejected at load with
/// [`CoreError::MissingParameters`].
#[derive(Clone)]
pub struct Intent {
    id: String,
    parameters: Vec<Parameter>,
    handler: Arc<dyn IntentHandler>,
}

impl Intent {
    /// Create an intent backed by `handler`.
    pub fn new(
        id: impl Into<String>,
        parameters: Vec<Parameter>,
        handler: Arc<dyn IntentHandler>,
    ) -> Self {
        Self {
            id: id.into(),
            parameters,
            handler,
        }
    }

    /// Intent identifier, unique within its application.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The declared parameter schema.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Invoke the local implementation.
    pub async fn run(&self, args: &SlotValues, ctx: &CallContext) -> anyhow::Result<String> {
        self.handler.run(args, ctx).await
    }
}

impl fmt::Debug for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intent")
            .field("id", &self.id)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// An application: an identifier plus its ordered intents.
///
/// Construction validates the structural invariants once, at load; the
/// value is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Application {
    id: String,
    intents: Vec<Intent>,
}

impl Application {
    /// Create an application from already-built intents.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyId`] if `id` is empty
    /// - [`CoreError::EmptyIntents`] if `intents` is empty
    /// - [`CoreError::DuplicateIntent`] if two intents share an identifier
    pub fn new(id: impl Into<String>, intents: Vec<Intent>) -> CoreResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyId);
        }
        if intents.is_empty() {
            return Err(CoreError::EmptyIntents { app: id });
        }
        let mut seen = BTreeSet::new();
        for intent in &intents {
            if !seen.insert(intent.id().to_owned()) {
                return Err(CoreError::DuplicateIntent {
                    app: id,
                    intent: intent.id().to_owned(),
                });
            }
        }
        Ok(Self { id, intents })
    }

    /// Application identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The intents, in load order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Look up an intent by identifier.
    pub fn intent(&self, id: &str) -> Option<&Intent> {
        self.intents.iter().find(|intent| intent.id() == id)
    }
}

/// The unique routing key `applicationId/intentId` under which an intent's
/// handler is bound on the channel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapabilityKey(String);

impl CapabilityKey {
    /// Derive the key for an application/intent pair.
    pub fn new(app_id: &str, intent_id: &str) -> Self {
        Self(format!("{app_id}/{intent_id}"))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reply(&'static str);

    #[async_trait]
    impl IntentHandler for Reply {
        async fn run(&self, _args: &SlotValues, _ctx: &CallContext) -> anyhow::Result<String> {
            Ok(self.0.to_owned())
        }
    }

    fn intent(id: &str) -> Intent {
        Intent::new(id, vec![Parameter::new("Value", "text")], Arc::new(Reply("ok")))
    }

    #[test]
    fn application_requires_an_id() {
        let err = Application::new("", vec![intent("a")]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyId));
    }

    #[test]
    fn application_requires_intents() {
        let err = Application::new("hello", vec![]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyIntents { app } if app == "hello"));
    }

    #[test]
    fn application_rejects_duplicate_intent_ids() {
        let err = Application::new("hello", vec![intent("greet"), intent("greet")]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateIntent { app, intent } if app == "hello" && intent == "greet"
        ));
    }

    #[test]
    fn intents_keep_load_order() {
        let app = Application::new("hello", vec![intent("b"), intent("a")]).unwrap();
        let ids: Vec<&str> = app.intents().iter().map(Intent::id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(app.intent("a").is_some());
        assert!(app.intent("c").is_none());
    }

    #[test]
    fn capability_key_joins_app_and_intent_ids() {
        let key = CapabilityKey::new("hello", "greet");
        assert_eq!(key.as_str(), "hello/greet");
        assert_eq!(key.to_string(), "hello/greet");
    }

    #[tokio::test]
    async fn intent_run_delegates_to_its_handler() {
        use crate::context::{DEFAULT_LANG, ExecutionContext};

        let it = intent("greet");
        let ctx = CallContext::new(
            DEFAULT_LANG,
            Arc::new(ExecutionContext::new(Vec::new(), DEFAULT_LANG)),
        );
        let text = it.run(&SlotValues::new(), &ctx).await.unwrap();
        assert_eq!(text, "ok");
    }
}
