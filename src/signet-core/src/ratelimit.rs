//! Sliding-window rate limiting keyed by client address.

use std::net::IpAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;

/// Sliding-window rate limiter for oracle requests.
///
/// Tracks request timestamps per client address; a client that exceeds
/// `max_requests` inside the window is rejected until enough of its
/// requests age out.
pub struct RateLimiter {
    /// Request timestamps per client in the current window.
    requests: DashMap<IpAddr, Vec<u64>>,
    /// Window size in seconds.
    window_seconds: u64,
    /// Max requests per window.
    max_requests: u32,
}

impl RateLimiter {
    /// Create a limiter with the given window and per-client budget.
    #[must_use]
    pub fn new(window_seconds: u64, max_requests: u32) -> Self {
        Self {
            requests: DashMap::new(),
            window_seconds,
            max_requests,
        }
    }

    /// Check whether a request from `client` is allowed, recording it if so.
    pub fn check_and_record(&self, client: IpAddr) -> bool {
        let now = unix_now();
        let cutoff = now.saturating_sub(self.window_seconds);

        let mut entry = self.requests.entry(client).or_default();

        // Remove requests that fell out of the window
        entry.retain(|&ts| ts > cutoff);

        if entry.len() >= self.max_requests as usize {
            return false;
        }

        entry.push(now);
        true
    }

    /// Drop clients whose every recorded request has aged out.
    pub fn cleanup(&self) {
        let now = unix_now();
        let cutoff = now.saturating_sub(self.window_seconds);

        self.requests.retain(|_, timestamps| {
            timestamps.retain(|&ts| ts > cutoff);
            !timestamps.is_empty()
        });
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
