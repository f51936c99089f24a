//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fallback executor / consensus client produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (per-endpoint request and error counters)
//!
//! Consumers:
//!     → whatever subscriber the embedding process installs (stdout for beacon-cli)
//!     → whatever `metrics` recorder the embedding process installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing a subscriber or recorder is up to the binary
//! - Endpoints are always recorded in redacted form

pub mod logging;
pub mod metrics;
