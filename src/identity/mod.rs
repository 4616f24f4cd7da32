// src/identity/mod.rs
// =============================================================================
// This module answers "who am I on the network?".
//
// Submodules:
// - host: hostname + the local IP the OS routes outbound traffic through
// - public_ip: the internet-facing IP, as seen by an external echo service
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `identity::resolve()` instead of `identity::host::resolve()`.
//
// Everything in here degrades to "unknown" on failure. Nothing returns an
// error to the caller.
// =============================================================================

mod host;
mod public_ip;

pub use host::{resolve, HostIdentity};
pub use public_ip::fetch_public_ip;
