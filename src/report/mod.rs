// src/report/mod.rs
// =============================================================================
// This module renders the dashboard to stdout.
//
// Layout (all widths fixed so the table lines up in a terminal):
//
//   === Network Explorer Dashboard ===
//   Hostname : mybox
//   Local IP : 192.168.1.23
//   Public IP: 203.0.113.7
//
//   URL Checks (HEAD requests):
//   Domain                                  Status   Elapsed(s)    OK
//   ------------------------------------------------------------------
//   weber.edu                                  200         0.31  true
//   ...
//
// followed by a usage hint. Plain text only - no JSON mode, no colors.
// =============================================================================

use crate::identity::HostIdentity;
use crate::probe::ProbeResult;

// Column widths for the checks table
const DOMAIN_WIDTH: usize = 35;
const STATUS_WIDTH: usize = 10;
const ELAPSED_WIDTH: usize = 12;
const OK_WIDTH: usize = 5;
const RULE_WIDTH: usize = 66;

// Prints the whole report: identity header, one table row per probed URL,
// and the usage hint.
pub fn print_report(identity: &HostIdentity, public_ip: &str, rows: &[(String, ProbeResult)]) {
    println!();
    println!("=== Network Explorer Dashboard ===");
    println!("Hostname : {}", identity.hostname);
    println!("Local IP : {}", identity.local_addr);
    println!("Public IP: {}", public_ip);

    println!();
    println!("URL Checks (HEAD requests):");
    println!(
        "{:<dw$} {:>sw$} {:>ew$} {:>ow$}",
        "Domain",
        "Status",
        "Elapsed(s)",
        "OK",
        dw = DOMAIN_WIDTH,
        sw = STATUS_WIDTH,
        ew = ELAPSED_WIDTH,
        ow = OK_WIDTH,
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for (domain, result) in rows {
        println!("{}", format_row(domain, result));
    }

    println!();
    println!("Tip: pass your own URLs, e.g.:");
    println!("  net-explorer https://weber.edu https://www.python.org");
    println!();
}

// One table row: domain left-aligned, everything else right-aligned,
// elapsed with two decimals.
fn format_row(domain: &str, result: &ProbeResult) -> String {
    format!(
        "{:<dw$} {:>sw$} {:>ew$.2} {:>ow$}",
        domain,
        result.status.to_string(),
        result.elapsed,
        result.ok,
        dw = DOMAIN_WIDTH,
        sw = STATUS_WIDTH,
        ew = ELAPSED_WIDTH,
        ow = OK_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeStatus;

    #[test]
    fn test_row_with_status_code() {
        let result = ProbeResult {
            status: ProbeStatus::Code(200),
            elapsed: 0.3141,
            ok: true,
        };
        let row = format_row("example.com", &result);
        // domain(35) + status(10) + elapsed(12) + ok(5) + three separators
        assert_eq!(row.len(), 65);
        assert!(row.starts_with("example.com "));
        assert!(row.contains("       200"));
        assert!(row.contains("0.31"));
        assert!(row.ends_with(" true"));
    }

    #[test]
    fn test_row_with_sentinel_status() {
        let result = ProbeResult {
            status: ProbeStatus::ConnError,
            elapsed: 0.0,
            ok: false,
        };
        let row = format_row("127.0.0.1", &result);
        assert!(row.contains("ConnError"));
        assert!(row.contains("0.00"));
        assert!(row.ends_with("false"));
    }

    #[test]
    fn test_long_domains_do_not_panic() {
        let result = ProbeResult {
            status: ProbeStatus::Code(404),
            elapsed: 1.0,
            ok: false,
        };
        let long = "a.very.long.subdomain.chain.that.overflows.the.column.example.com";
        let row = format_row(long, &result);
        // Over-wide domains just push the row past the fixed width
        assert!(row.starts_with(long));
        assert!(row.contains("404"));
    }
}
