//! Spoke endpoint — connects to a remote dispatch hub, advertises local
//! capabilities, and serves inbound invocations.
//!
//! The lifecycle is connect → load → register → serve:
//!
//! - [`AppServer`] opens the channel, populates the execution context, and
//!   registers each application in submission order
//! - [`RegistrationCoordinator`] announces one application and binds its
//!   intent handlers
//! - [`CallDispatcher`] routes one inbound call to its handler and shapes
//!   the response envelope
//! - [`EndpointConfig`] carries the single setting: the hub URL
//!
//! The transport behind the [`spoke_core::Channel`] trait is supplied by
//! the embedding application; so are the intent handlers. Everything here
//! is thin orchestration — there is deliberately no retry, timeout, or
//! recovery logic at this layer.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod lifecycle;
pub mod registration;

/// Prelude re-exports for convenient use.
pub mod prelude {
    pub use crate::config::{DEFAULT_HUB_URL, EndpointConfig, HUB_URL_ENV};
    pub use crate::dispatch::CallDispatcher;
    pub use crate::error::{EndpointError, EndpointResult};
    pub use crate::lifecycle::{AppServer, ServingEndpoint};
    pub use crate::registration::RegistrationCoordinator;
}

// Re-export key types at crate root for convenience.
pub use config::EndpointConfig;
pub use dispatch::CallDispatcher;
pub use error::{EndpointError, EndpointResult};
pub use lifecycle::{AppServer, ServingEndpoint};
pub use registration::RegistrationCoordinator;
