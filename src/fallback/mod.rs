//! Endpoint failover subsystem.
//!
//! # Data Flow
//! ```text
//! operation (read or write)
//!     → executor.rs (try each endpoint in configured order)
//!         → per-endpoint closure (build URL from endpoint.rs, send, check status, decode)
//!         → recoverable failure: log, count, next endpoint
//!         → unrecoverable failure or last endpoint: return error
//!     → first success returned to caller
//! ```
//!
//! # Design Decisions
//! - Endpoints are never contacted concurrently; order expresses preference
//! - No backoff between endpoints and no state carried across calls
//! - Only the last endpoint's error is returned; earlier ones are logged

pub mod endpoint;
pub mod executor;

pub use endpoint::{Endpoint, EndpointError};
pub use executor::{Fallback, Recoverable};
