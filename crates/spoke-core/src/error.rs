//! Structural and load-time errors in the application data model.

use thiserror::Error;

/// Failures raised while loading or validating applications.
///
/// All of these are fail-fast boot errors: they are raised before any
/// network activity and abort startup entirely. There is no recovery path.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The application identifier was empty.
    #[error("application identifier must not be empty")]
    EmptyId,

    /// The application declared no intents.
    #[error("application `{app}` declares no intents")]
    EmptyIntents {
        /// Application identifier.
        app: String,
    },

    /// An intent definition lacked its parameter schema.
    #[error("intent `{intent}` of application `{app}` declares no parameter schema")]
    MissingParameters {
        /// Application identifier.
        app: String,
        /// Intent identifier.
        intent: String,
    },

    /// Two intents in the same application share an identifier.
    #[error("application `{app}` declares intent `{intent}` more than once")]
    DuplicateIntent {
        /// Application identifier.
        app: String,
        /// Intent identifier.
        intent: String,
    },

    /// A definition intent has no handler bound to it.
    #[error("no handler bound for intent `{intent}` of application `{app}`")]
    MissingHandler {
        /// Application identifier.
        app: String,
        /// Intent identifier.
        intent: String,
    },
}

/// A specialized Result type for data-model operations.
pub type CoreResult<T> = Result<T, CoreError>;
