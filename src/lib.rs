//! Beacon node API client with ordered endpoint failover.
//!
//! Validator tooling talks to one or more consensus-layer nodes. Every call made through
//! [`ConsensusClient`] tries the configured endpoints in order and only fails once the last
//! one has failed.

pub mod beacon;
pub mod config;
pub mod fallback;
pub mod observability;

pub use beacon::{ConsensusClient, Error, SignedVoluntaryExit, StateId, ValidatorStatus};
pub use config::Config;
pub use fallback::{Endpoint, Fallback};
