// src/probe/mod.rs
// =============================================================================
// This module contains the URL-probing logic.
//
// Submodules:
// - url: normalizes raw targets and extracts the host for display
// - http: issues one HEAD request per target and classifies the outcome
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers write `probe::quick_check()` instead of `probe::http::quick_check()`.
// =============================================================================

mod http;
mod url;

pub use http::{quick_check, ProbeResult, ProbeStatus};
pub use url::{domain_of, normalize_urls};
