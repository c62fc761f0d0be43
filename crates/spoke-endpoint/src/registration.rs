//! Application registration and handler binding.

use std::sync::Arc;

use tracing::{debug, info};

use spoke_core::{Application, CallHandler, CapabilityKey, Channel, Intent, capability_manifest};

use crate::dispatch::CallDispatcher;
use crate::error::{EndpointError, EndpointResult};

/// Announces applications to the hub and binds their intent handlers.
#[derive(Debug, Clone)]
pub struct RegistrationCoordinator {
    dispatcher: CallDispatcher,
}

impl RegistrationCoordinator {
    /// Create a coordinator that routes bound calls through `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: CallDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Register one application with the hub.
    ///
    /// Sends a `register` call carrying the application's capability
    /// manifest and awaits the hub's acknowledgement, then binds one
    /// handler per intent under its [`CapabilityKey`]. The acknowledgement
    /// must come first: the hub rejects calls for capabilities it has not
    /// been told about.
    ///
    /// # Errors
    ///
    /// [`EndpointError::Register`] if the hub rejects the registration;
    /// no handlers are bound in that case.
    pub async fn register_application(
        &self,
        app: &Arc<Application>,
        channel: &Arc<dyn Channel>,
    ) -> EndpointResult<()> {
        channel
            .make_call("register", capability_manifest(app))
            .await
            .map_err(|source| EndpointError::Register {
                app: app.id().to_owned(),
                source,
            })?;

        for intent in app.intents() {
            let key = CapabilityKey::new(app.id(), intent.id());
            debug!(key = %key, "binding intent handler");
            channel.register_handler(key, self.call_handler(intent.clone()));
        }

        info!(
            app = app.id(),
            intents = app.intents().len(),
            "application registered"
        );
        Ok(())
    }

    /// The closure bound on the channel for one intent; each invocation
    /// delegates to the dispatcher.
    fn call_handler(&self, intent: Intent) -> CallHandler {
        let dispatcher = self.dispatcher.clone();
        Arc::new(move |call| {
            let dispatcher = dispatcher.clone();
            let intent = intent.clone();
            Box::pin(async move { dispatcher.handle(&intent, call).await })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spoke_core::{DEFAULT_LANG, ExecutionContext};
    use spoke_test::mocks::{ChannelEvent, MockChannel};
    use spoke_test::fixtures::{StaticReply, call_with_lang, test_app};

    fn coordinator(apps: Vec<Arc<Application>>) -> RegistrationCoordinator {
        let context = Arc::new(ExecutionContext::new(apps, DEFAULT_LANG));
        RegistrationCoordinator::new(CallDispatcher::new(context))
    }

    #[tokio::test]
    async fn register_call_carries_the_manifest_and_precedes_bindings() {
        let app = Arc::new(test_app("hello", "greet", Arc::new(StaticReply("Hello"))));
        let mock = MockChannel::new();
        let channel: Arc<dyn Channel> = Arc::new(mock.clone());

        coordinator(vec![Arc::clone(&app)])
            .register_application(&app, &channel)
            .await
            .unwrap();

        let events = mock.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            ChannelEvent::Call { name, payload }
                if name == "register" && payload == &capability_manifest(&app)
        ));
        assert!(matches!(
            &events[1],
            ChannelEvent::Bind { key } if key.as_str() == "hello/greet"
        ));
    }

    #[tokio::test]
    async fn bound_handlers_route_through_the_dispatcher() {
        let app = Arc::new(test_app("hello", "greet", Arc::new(StaticReply("Hello"))));
        let mock = MockChannel::new();
        let channel: Arc<dyn Channel> = Arc::new(mock.clone());

        coordinator(vec![Arc::clone(&app)])
            .register_application(&app, &channel)
            .await
            .unwrap();

        let response = mock
            .invoke(&CapabilityKey::new("hello", "greet"), call_with_lang("en"))
            .await
            .unwrap();
        assert_eq!(response.response_text, "Hello");
    }

    #[tokio::test]
    async fn rejected_registration_binds_nothing() {
        let app = Arc::new(test_app("hello", "greet", Arc::new(StaticReply("Hello"))));
        let mock = MockChannel::new().with_failing_call("register");
        let channel: Arc<dyn Channel> = Arc::new(mock.clone());

        let err = coordinator(vec![Arc::clone(&app)])
            .register_application(&app, &channel)
            .await
            .unwrap_err();

        assert!(matches!(err, EndpointError::Register { app, .. } if app == "hello"));
        assert!(mock.bound_keys().is_empty());
    }
}
