//! Endpoint lifecycle: connect → load → register → serve.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use spoke_core::{Application, Channel, Connector, DEFAULT_LANG, ExecutionContext};

use crate::config::EndpointConfig;
use crate::dispatch::CallDispatcher;
use crate::error::{EndpointError, EndpointResult};
use crate::registration::RegistrationCoordinator;

/// A client-side endpoint serving a set of applications to a dispatch hub.
pub struct AppServer {
    config: EndpointConfig,
    connector: Arc<dyn Connector>,
}

impl AppServer {
    /// Create an endpoint that will connect through `connector` to the
    /// configured hub.
    #[must_use]
    pub fn new(config: EndpointConfig, connector: Arc<dyn Connector>) -> Self {
        Self { config, connector }
    }

    /// Start the endpoint.
    ///
    /// Preconditions are checked before any network activity. Then, in
    /// order: the channel is opened, the execution context is populated
    /// for the fixed initial language, and each application is registered
    /// sequentially — application B's registration starts only after A's
    /// has completed. Once every application is registered a readiness
    /// event is logged and the serving handle is returned.
    ///
    /// This is a boot-time operation: any failure during connect or
    /// registration aborts startup with no partial-success recovery.
    ///
    /// # Errors
    ///
    /// - [`EndpointError::NoApplications`] for an empty list
    /// - [`EndpointError::DuplicateApplication`] if two applications share
    ///   an id (their capability keys would collide)
    /// - [`EndpointError::Connect`] if the channel fails to open
    /// - [`EndpointError::Register`] if the hub rejects a registration
    pub async fn start(&self, applications: Vec<Application>) -> EndpointResult<ServingEndpoint> {
        if applications.is_empty() {
            return Err(EndpointError::NoApplications);
        }
        let mut seen = BTreeSet::new();
        for app in &applications {
            if !seen.insert(app.id().to_owned()) {
                return Err(EndpointError::DuplicateApplication {
                    id: app.id().to_owned(),
                });
            }
        }

        let channel = self
            .connector
            .connect(&self.config.hub_url)
            .await
            .map_err(|source| EndpointError::Connect {
                url: self.config.hub_url.clone(),
                source,
            })?;
        debug!(url = %self.config.hub_url, "connected to hub");

        let applications: Vec<Arc<Application>> =
            applications.into_iter().map(Arc::new).collect();
        let context = Arc::new(ExecutionContext::new(applications.clone(), DEFAULT_LANG));
        let coordinator = RegistrationCoordinator::new(CallDispatcher::new(Arc::clone(&context)));

        for app in &applications {
            coordinator.register_application(app, &channel).await?;
        }

        info!(
            applications = applications.len(),
            "endpoint registered and serving"
        );
        Ok(ServingEndpoint { channel, context })
    }
}

impl fmt::Debug for AppServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppServer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A started endpoint.
///
/// Holds the open channel; inbound calls are served through the handlers
/// bound during registration for as long as this handle (and the channel
/// behind it) lives. Dropping it releases the channel — there is no other
/// shutdown or cancellation signal.
pub struct ServingEndpoint {
    channel: Arc<dyn Channel>,
    context: Arc<ExecutionContext>,
}

impl ServingEndpoint {
    /// The open channel to the hub.
    #[must_use]
    pub fn channel(&self) -> &Arc<dyn Channel> {
        &self.channel
    }

    /// The shared execution context.
    #[must_use]
    pub fn context(&self) -> &Arc<ExecutionContext> {
        &self.context
    }
}

impl fmt::Debug for ServingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServingEndpoint")
            .field("applications", &self.context.applications().len())
            .finish_non_exhaustive()
    }
}
