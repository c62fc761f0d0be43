//! Errors raised while starting an endpoint.

use thiserror::Error;

use spoke_core::{ChannelError, CoreError};

/// Failures during endpoint startup.
///
/// Every variant is a boot-time failure: preconditions fail fast before
/// any I/O, and transport failures abort startup. There is no retry or
/// partial-success recovery at this layer — transport-level resilience, if
/// any, belongs to the channel implementation.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// `start` was given an empty application list.
    #[error("need at least one application to serve")]
    NoApplications,

    /// Two applications share an identifier.
    #[error("application id `{id}` is declared more than once")]
    DuplicateApplication {
        /// The repeated identifier.
        id: String,
    },

    /// Structural failure in the application data model.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The channel failed to open.
    #[error("failed to connect to hub at {url}")]
    Connect {
        /// Hub URL the connection was attempted against.
        url: String,
        /// Transport failure.
        #[source]
        source: ChannelError,
    },

    /// The hub rejected an application's registration call.
    #[error("registration of application `{app}` failed")]
    Register {
        /// Application identifier.
        app: String,
        /// Transport failure.
        #[source]
        source: ChannelError,
    },

    /// The configuration file could not be read or parsed.
    #[error("failed to load config from {path}: {message}")]
    Config {
        /// Path of the offending file.
        path: String,
        /// What went wrong.
        message: String,
    },
}

/// A specialized Result type for endpoint operations.
pub type EndpointResult<T> = Result<T, EndpointError>;
