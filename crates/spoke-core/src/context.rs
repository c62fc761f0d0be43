//! Execution context shared by handlers, and the per-call view of it.

use std::sync::Arc;

use crate::app::Application;

/// Language used when a call carries no language tag (2-letter ISO code).
pub const DEFAULT_LANG: &str = "en";

/// Process-lifetime state shared by all in-flight calls.
///
/// Populated once at startup and immutable afterwards. Deliberately, there
/// is no "active language" field here: language is call-scoped and travels
/// in [`CallContext`], so concurrent calls with different language tags
/// cannot observe each other's language.
#[derive(Debug)]
pub struct ExecutionContext {
    applications: Vec<Arc<Application>>,
    default_lang: String,
}

impl ExecutionContext {
    /// Create the context over the loaded applications.
    pub fn new(applications: Vec<Arc<Application>>, default_lang: impl Into<String>) -> Self {
        Self {
            applications,
            default_lang: default_lang.into(),
        }
    }

    /// The loaded applications, in submission order.
    pub fn applications(&self) -> &[Arc<Application>] {
        &self.applications
    }

    /// Look up an application by identifier.
    pub fn application(&self, id: &str) -> Option<&Arc<Application>> {
        self.applications.iter().find(|app| app.id() == id)
    }

    /// The language used when a call carries no tag.
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }
}

/// Per-call state threaded to a handler invocation.
///
/// Created by the dispatcher for each inbound call and discarded with it;
/// the language lives here rather than in [`ExecutionContext`] precisely so
/// that it is scoped to one call.
#[derive(Debug, Clone)]
pub struct CallContext {
    lang: String,
    shared: Arc<ExecutionContext>,
}

impl CallContext {
    /// Create the context for one call.
    pub fn new(lang: impl Into<String>, shared: Arc<ExecutionContext>) -> Self {
        Self {
            lang: lang.into(),
            shared,
        }
    }

    /// The language this call runs under (2-letter ISO code).
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The shared execution context.
    pub fn shared(&self) -> &ExecutionContext {
        &self.shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_context_carries_its_own_language() {
        let shared = Arc::new(ExecutionContext::new(Vec::new(), DEFAULT_LANG));
        let fr = CallContext::new("fr", Arc::clone(&shared));
        let en = CallContext::new("en", shared);
        assert_eq!(fr.lang(), "fr");
        assert_eq!(en.lang(), "en");
        assert_eq!(fr.shared().default_lang(), DEFAULT_LANG);
    }
}
