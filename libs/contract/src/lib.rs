//! Contract-testing types for the product catalog.
//!
//! Provides the recorded request/response pairs a verifier replays
//! against the provider, and the named provider states that seed the
//! catalog before each replay. Everything here lives outside the
//! provider's production contract: states inject data through the
//! [`catalog::Catalog`] constructor seam only.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod contract;
pub mod fixtures;
pub mod states;

pub use contract::{Contract, ContractMetadata, Interaction, PactSpecification, Participant, Request, Response};
pub use states::{ProviderState, UnknownStateError};
