//! Capability manifest sent with an application's `register` call.

use serde_json::{Map, Value, json};

use crate::app::Application;

/// Build the JSON capability manifest for one application.
///
/// Shape:
///
/// ```json
/// {
///   "id": "weather",
///   "intents": {
///     "forecast": {
///       "parameters": {
///         "City": { "type": "builtin.city" },
///         "Day": { "type": "builtin.day", "values": ["today", "tomorrow"] }
///       }
///     }
///   }
/// }
/// ```
///
/// `values` is present only for enumerated parameters. The hub owns the
/// registration contract; this is the producer side of it.
pub fn capability_manifest(app: &Application) -> Value {
    let intents: Map<String, Value> = app
        .intents()
        .iter()
        .map(|intent| {
            let parameters: Map<String, Value> = intent
                .parameters()
                .iter()
                .map(|p| {
                    let mut descriptor = Map::new();
                    descriptor.insert("type".to_owned(), json!(p.param_type));
                    if !p.values.is_empty() {
                        descriptor.insert("values".to_owned(), json!(p.values));
                    }
                    (p.name.clone(), Value::Object(descriptor))
                })
                .collect();
            (
                intent.id().to_owned(),
                json!({ "parameters": parameters }),
            )
        })
        .collect();

    json!({ "id": app.id(), "intents": intents })
}
