//! Consensus-layer (beacon node) API subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → client.rs (validator lookup / voluntary exit)
//!     → fallback::Fallback (one endpoint at a time)
//!     → reqwest (shared session for reads, fresh session per write attempt)
//!     → types.rs (JSON payloads) / error.rs (failure classification)
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{ConsensusClient, DEFAULT_TIMEOUT};
pub use error::{Error, FailureKind, Result};
pub use types::{
    SignedVoluntaryExit, StateId, StatusGroup, ValidatorData, ValidatorStatus, VoluntaryExit,
    ACTIVE_STATUSES, EXITED_STATUSES, PENDING_STATUSES,
};
