// src/identity/host.rs
// =============================================================================
// This module figures out the machine's hostname and local network address.
//
// The local address is the interesting part. Asking "what is my IP?" is
// ambiguous on a machine with several interfaces (ethernet, wifi, VPN,
// loopback). The trick used here:
//
// 1. Bind a UDP socket to 0.0.0.0:0 (any interface, any port)
// 2. connect() it to a well-known external address (8.8.8.8:80)
// 3. Read back the socket's own local address
//
// For UDP, connect() only sets the default destination - no packet is sent.
// But the OS must consult its routing table to pick the outbound interface,
// and local_addr() then tells us which one it picked. That is exactly the
// address another host on the network would see us coming from.
//
// Every failure path here degrades to a sentinel value instead of returning
// an error - a machine with no network still gets a report.
// =============================================================================

use std::net::{ToSocketAddrs, UdpSocket};

/// What we know about the local machine, resolved once per run.
#[derive(Debug, Clone)]
pub struct HostIdentity {
    /// The machine's hostname, or "unknown"
    pub hostname: String,
    /// The local network address, or "unknown"
    pub local_addr: String,
}

// Resolves the hostname and local address.
//
// Resolution order for the address:
// 1. The connected-UDP-socket trick (preferred - picks the routed interface)
// 2. Resolving our own hostname through DNS/hosts
// 3. The "unknown" sentinel
pub fn resolve() -> HostIdentity {
    let hostname = real_hostname();

    let local_addr = outbound_local_addr()
        .or_else(|| fallback_local_addr(hostname.as_deref()))
        .unwrap_or_else(|| "unknown".to_string());

    HostIdentity {
        hostname: hostname.unwrap_or_else(|| "unknown".to_string()),
        local_addr,
    }
}

// The hostname if the OS actually gave us one; None otherwise. The
// "unknown" sentinel is applied at the edge so the fallback below never
// sees it.
fn real_hostname() -> Option<String> {
    hostname::get().ok().and_then(|h| h.into_string().ok())
}

// Only a real hostname is worth resolving: on networks with wildcard DNS,
// looking up the literal sentinel string would fabricate an address.
fn fallback_local_addr(hostname: Option<&str>) -> Option<String> {
    resolve_hostname(hostname?)
}

// The dummy-socket trick described in the module header.
//
// Returns None if the machine has no route to 8.8.8.8 at all (e.g. no
// network interfaces are up). The socket is closed when it drops at the
// end of the function.
fn outbound_local_addr() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let addr = socket.local_addr().ok()?;
    Some(addr.ip().to_string())
}

// Fallback: ask the resolver what our own hostname maps to.
//
// This can return loopback on machines whose /etc/hosts maps the hostname
// to 127.0.0.1, which is why it is only the fallback.
fn resolve_hostname(name: &str) -> Option<String> {
    let mut addrs = (name, 0).to_socket_addrs().ok()?;
    addrs.next().map(|a| a.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_never_panics_and_fills_both_fields() {
        let identity = resolve();
        // Whatever the environment, both fields hold something printable
        assert!(!identity.hostname.is_empty());
        assert!(!identity.local_addr.is_empty());
    }

    #[test]
    fn test_resolve_hostname_localhost() {
        // "localhost" resolves everywhere; the result is a loopback address
        let addr = resolve_hostname("localhost").expect("localhost should resolve");
        assert!(addr == "127.0.0.1" || addr == "::1");
    }

    #[test]
    fn test_resolve_hostname_garbage_is_none() {
        assert_eq!(resolve_hostname("no.such.host.invalid"), None);
    }

    #[test]
    fn test_no_hostname_means_no_dns_fallback() {
        // Without a real hostname there is nothing safe to resolve - a
        // wildcard DNS zone would happily answer for made-up names
        assert_eq!(fallback_local_addr(None), None);
    }

    #[test]
    fn test_fallback_resolves_a_real_name() {
        let addr = fallback_local_addr(Some("localhost")).expect("localhost should resolve");
        assert!(addr == "127.0.0.1" || addr == "::1");
    }
}
