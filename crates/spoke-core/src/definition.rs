//! JSON definition format for applications.
//!
//! Applications describe their intents declaratively in JSON; handlers are
//! bound separately, by intent identifier, when the definition is loaded.
//! This layer is where structural absence is representable: an intent
//! without a `parameters` object still parses, and is then rejected by
//! [`AppDefinition::into_application`] — before any registration traffic.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::app::{Application, Intent, IntentHandler, Parameter};
use crate::error::{CoreError, CoreResult};

/// Handlers to bind to a definition's intents, keyed by intent identifier.
pub type HandlerMap = BTreeMap<String, Arc<dyn IntentHandler>>;

/// Declarative description of one application.
#[derive(Debug, Clone, Deserialize)]
pub struct AppDefinition {
    /// Application identifier.
    pub id: String,
    /// Intent definitions keyed by intent identifier. Iteration (and thus
    /// binding order) is deterministic: sorted by identifier.
    #[serde(default)]
    pub intents: BTreeMap<String, IntentDefinition>,
}

/// Declarative description of one intent.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentDefinition {
    /// Parameter descriptors keyed by slot name. Optional here so that a
    /// malformed definition parses; absence is a load-time error.
    pub parameters: Option<BTreeMap<String, ParameterDefinition>>,
}

/// Declarative description of one parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDefinition {
    /// Parameter type name.
    #[serde(rename = "type")]
    pub param_type: String,
    /// Accepted values for enumerated types.
    #[serde(default)]
    pub values: Vec<String>,
}

impl AppDefinition {
    /// Parse a definition from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the text is not a valid
    /// definition document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Bind handlers to the defined intents and produce a validated
    /// [`Application`].
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingParameters`] if an intent lacks its
    ///   `parameters` object
    /// - [`CoreError::MissingHandler`] if `handlers` has no entry for a
    ///   defined intent
    /// - the [`Application::new`] structural checks
    pub fn into_application(self, mut handlers: HandlerMap) -> CoreResult<Application> {
        let mut intents = Vec::with_capacity(self.intents.len());
        for (intent_id, definition) in self.intents {
            let Some(parameters) = definition.parameters else {
                return Err(CoreError::MissingParameters {
                    app: self.id,
                    intent: intent_id,
                });
            };
            let Some(handler) = handlers.remove(&intent_id) else {
                return Err(CoreError::MissingHandler {
                    app: self.id,
                    intent: intent_id,
                });
            };
            let parameters = parameters
                .into_iter()
                .map(|(name, p)| Parameter {
                    name,
                    param_type: p.param_type,
                    values: p.values,
                })
                .collect();
            intents.push(Intent::new(intent_id, parameters, handler));
        }
        Application::new(self.id, intents)
    }
}
