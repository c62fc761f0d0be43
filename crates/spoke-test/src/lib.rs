//! Shared test utilities for the spoke endpoint crates.
//!
//! This crate provides mock channel implementations and canned
//! applications used across the workspace as a dev-dependency.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spoke_test::prelude::*;
//!
//! #[tokio::test]
//! async fn registers_the_greeting_app() {
//!     let connector = MockConnector::new();
//!     let channel = connector.channel();
//!
//!     // ... start an endpoint against `connector` ...
//!
//!     assert_eq!(
//!         channel.bound_keys(),
//!         vec![CapabilityKey::new("hello", "greet")]
//!     );
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;
pub mod logging;
pub mod mocks;

/// Prelude re-exports for convenient use.
pub mod prelude {
    pub use crate::fixtures::{
        AlwaysFails, LangEcho, StaticReply, call_with_lang, greeting_app, test_app,
    };
    pub use crate::logging::init_test_logging;
    pub use crate::mocks::{ChannelEvent, MockChannel, MockConnector};
}

pub use fixtures::*;
pub use logging::*;
pub use mocks::*;
