//! Sequential failover over an ordered list of servers.

use std::fmt::Display;
use std::future::Future;
use std::slice::Iter;

use crate::observability::metrics;

/// Classification of a per-server failure.
pub trait Recoverable {
    /// Whether the next server should be tried after this error.
    fn is_recoverable(&self) -> bool;

    /// Short label used in logs and metrics.
    fn failure_label(&self) -> &'static str;
}

/// Tries servers one at a time, in configured order.
#[derive(Clone, Debug)]
pub struct Fallback<T> {
    servers: Vec<T>,
}

impl<T: Display> Fallback<T> {
    pub fn new(servers: Vec<T>) -> Self {
        Self { servers }
    }

    /// Return the first successful result.
    ///
    /// A recoverable error moves on to the next server immediately; the error from the last
    /// server is returned once every server has failed. An unrecoverable error is returned
    /// straight away. `Ok(None)` means there were no servers to try.
    pub async fn first_success<'a, F, R, O, E>(&'a self, func: F) -> Result<Option<O>, E>
    where
        F: Fn(&'a T) -> R,
        R: Future<Output = Result<O, E>>,
        E: Recoverable + Display,
    {
        let last = self.servers.len().saturating_sub(1);

        for (i, server) in self.servers.iter().enumerate() {
            let endpoint = server.to_string();
            metrics::record_endpoint_request(&endpoint);

            match func(server).await {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_recoverable() => {
                    metrics::record_endpoint_error(&endpoint, e.failure_label());
                    tracing::error!(
                        endpoint = %endpoint,
                        attempt = i,
                        kind = e.failure_label(),
                        error = %e,
                        "Beacon node request failed"
                    );
                    if i == last {
                        return Err(e);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        endpoint = %endpoint,
                        attempt = i,
                        error = %e,
                        "Unrecoverable error, not trying remaining beacon nodes"
                    );
                    return Err(e);
                }
            }
        }

        Ok(None)
    }
}

impl<T> Fallback<T> {
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn iter_servers(&self) -> Iter<'_, T> {
        self.servers.iter()
    }
}
