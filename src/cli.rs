// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The surface is intentionally tiny:
// - zero or more positional URLs/hostnames to check
// - one -t/--timeout option shared by every network call
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "net-explorer",
    version = "0.1.0",
    about = "Network Explorer Dashboard: host/IP info + quick URL checks",
    long_about = "net-explorer prints your hostname, local IP and public IP, then probes a \
                  list of URLs with HEAD requests and reports status and latency for each."
)]
pub struct Cli {
    /// Optional URLs to check; if omitted, defaults are used
    ///
    /// Schemes are optional - bare hostnames get "https://" prepended
    pub urls: Vec<String>,

    /// HTTP timeout per request (seconds)
    ///
    /// Applied uniformly to the public-IP lookup and every URL probe
    #[arg(short = 't', long, default_value_t = 5)]
    pub timeout: u64,
}

impl Cli {
    /// Returns the URLs to check: the user's, or the default trio.
    ///
    /// Order is preserved and nothing is deduplicated - if you pass the
    /// same URL twice you get two rows.
    pub fn targets(&self) -> Vec<String> {
        if self.urls.is_empty() {
            vec![
                "https://weber.edu".to_string(),
                "https://github.com".to_string(),
                "https://www.python.org".to_string(),
            ]
        } else {
            self.urls.clone()
        }
    }
}
