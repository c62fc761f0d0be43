//! Wire envelopes exchanged with the hub for a single invocation.

use serde::{Deserialize, Serialize};

use crate::app::SlotValues;
use crate::context::DEFAULT_LANG;

/// One inbound invocation as delivered by the channel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundCall {
    /// 2-letter language code; absent means the default language.
    #[serde(default)]
    pub lang: Option<String>,
    /// Argument values keyed by slot name.
    #[serde(default)]
    pub args: SlotValues,
}

impl InboundCall {
    /// The language this call should run under (`lang` or the default).
    pub fn resolved_lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }
}

/// The response envelope returned to the hub for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallResponse {
    /// Text the hub relays back to the end user.
    #[serde(rename = "responseText")]
    pub response_text: String,
}

impl CallResponse {
    /// Wrap a handler result as a response envelope.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            response_text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inbound_call_deserializes_lang_and_args() {
        let call: InboundCall =
            serde_json::from_value(json!({ "lang": "fr", "args": { "City": "Paris" } })).unwrap();
        assert_eq!(call.resolved_lang(), "fr");
        assert_eq!(call.args.get("City"), Some(&json!("Paris")));
    }

    #[test]
    fn missing_lang_resolves_to_default() {
        let call: InboundCall = serde_json::from_value(json!({ "args": {} })).unwrap();
        assert_eq!(call.resolved_lang(), DEFAULT_LANG);
        assert!(call.args.is_empty());
    }

    #[test]
    fn response_serializes_as_response_text() {
        let value = serde_json::to_value(CallResponse::new("Hello")).unwrap();
        assert_eq!(value, json!({ "responseText": "Hello" }));
    }
}
