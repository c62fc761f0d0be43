//! Spoke core — the data model for a client-side capability endpoint.
//!
//! An endpoint serves one or more [`Application`]s to a remote dispatch
//! hub. Each application declares a set of intents; each [`Intent`] carries
//! a parameter schema and a local [`IntentHandler`] implementation. The hub
//! routes end-user requests back to the endpoint under the
//! [`CapabilityKey`] derived from the application and intent identifiers.
//!
//! This crate contains:
//! - the validated application/intent model ([`app`])
//! - the JSON definition format applications are loaded from ([`definition`])
//! - the consumed transport boundary ([`channel`])
//! - the shared and per-call execution contexts ([`context`])
//! - the call/response wire envelopes ([`wire`])
//! - the capability manifest sent at registration ([`manifest`])
//!
//! The endpoint lifecycle itself (connect → register → serve) lives in the
//! `spoke-endpoint` crate.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod channel;
pub mod context;
pub mod definition;
pub mod error;
pub mod manifest;
pub mod wire;

/// Prelude re-exports for convenient use.
pub mod prelude {
    pub use crate::app::{Application, CapabilityKey, Intent, IntentHandler, Parameter, SlotValues};
    pub use crate::channel::{CallHandler, Channel, ChannelError, ChannelResult, Connector};
    pub use crate::context::{CallContext, DEFAULT_LANG, ExecutionContext};
    pub use crate::definition::{AppDefinition, HandlerMap, IntentDefinition, ParameterDefinition};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::manifest::capability_manifest;
    pub use crate::wire::{CallResponse, InboundCall};
}

// Re-export key types at crate root for convenience.
pub use app::{Application, CapabilityKey, Intent, IntentHandler, Parameter, SlotValues};
pub use channel::{CallHandler, Channel, ChannelError, ChannelResult, Connector};
pub use context::{CallContext, DEFAULT_LANG, ExecutionContext};
pub use definition::{AppDefinition, HandlerMap, IntentDefinition, ParameterDefinition};
pub use error::{CoreError, CoreResult};
pub use manifest::capability_manifest;
pub use wire::{CallResponse, InboundCall};
