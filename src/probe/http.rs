// src/probe/http.rs
// =============================================================================
// This module probes URLs with HTTP requests and times them.
//
// Key functionality:
// - Makes one HTTP HEAD request per URL (lightweight, no body download)
// - Measures wall-clock latency around the request
// - Classifies every outcome into an explicit status enum
//
// There is no error type here on purpose: a probe cannot fail, it can only
// report a bad status. Timeouts, refused connections and everything else
// come back as ordinary ProbeResult values, so one dead URL never stops
// the rest of the run.
// =============================================================================

use reqwest::Client;
use std::fmt;
use std::time::Instant;

// How a single probe turned out.
//
// Sentinel variants mirror the three error classes we care to distinguish;
// everything that produced an actual HTTP response keeps its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Got a response with this HTTP status code
    Code(u16),
    /// The request exceeded the timeout
    Timeout,
    /// The connection could not be established (refused, unreachable, DNS)
    ConnError,
    /// Any other failure
    Error,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Code(code) => write!(f, "{}", code),
            ProbeStatus::Timeout => write!(f, "Timeout"),
            ProbeStatus::ConnError => write!(f, "ConnError"),
            ProbeStatus::Error => write!(f, "Error"),
        }
    }
}

/// The result of probing a single URL.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Status code or sentinel
    pub status: ProbeStatus,
    /// Wall-clock seconds the request took; 0.0 on any sentinel status
    pub elapsed: f64,
    /// true iff the status code was in 200..400
    pub ok: bool,
}

// Probes a single URL with a HEAD request.
//
// The client carries the timeout and redirect policy, so a probe is bounded
// by the per-request timeout and follows redirects along the way. Elapsed
// time is measured from just before send to just after the response (or
// error) arrives.
pub async fn quick_check(client: &Client, url: &str) -> ProbeResult {
    let start = Instant::now();

    match client.head(url).send().await {
        Ok(response) => {
            let elapsed = start.elapsed().as_secs_f64();
            let code = response.status().as_u16();
            ProbeResult {
                status: ProbeStatus::Code(code),
                elapsed,
                ok: (200..400).contains(&code),
            }
        }
        Err(e) => classify_error(e),
    }
}

// Maps a reqwest error onto our sentinel statuses.
//
// Order matters: a timed-out connect attempt reports is_timeout() and
// is_connect() both, and we want it labeled Timeout.
fn classify_error(error: reqwest::Error) -> ProbeResult {
    let status = if error.is_timeout() {
        ProbeStatus::Timeout
    } else if error.is_connect() {
        ProbeStatus::ConnError
    } else {
        ProbeStatus::Error
    };

    ProbeResult {
        status,
        elapsed: 0.0,
        ok: false,
    }
}
