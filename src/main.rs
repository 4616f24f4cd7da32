// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Normalize the target URLs (add https:// where missing)
// 3. Resolve host identity and fetch the public IP
// 4. Probe each URL sequentially with a HEAD request
// 5. Print everything as one report
//
// Every network failure along the way is caught inside the component that
// produced it and rendered as a sentinel value ("unknown", Timeout, ...),
// so the process exits 0 no matter how the probes turn out. The only way
// to exit nonzero is an internal error like failing to build the HTTP
// client.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod identity; // src/identity/ - hostname, local IP, public IP
mod probe;    // src/probe/ - URL normalizing and HEAD probing
mod report;   // src/report/ - the text dashboard

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use std::time::Duration;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Probe outcomes are report content, not process failures, so run()
    // only errs on internal problems
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// The whole pipeline, straight-line from arguments to printed report.
async fn run() -> Result<()> {
    let cli = Cli::parse();
    let urls = probe::normalize_urls(&cli.targets());

    // One client for the public-IP fetch and every probe: same timeout
    // everywhere, redirects followed, connections pooled
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;

    let host = identity::resolve();
    let public_ip = identity::fetch_public_ip(&client).await;

    // Sequential on purpose: one row at a time, input order, and a dead
    // URL only costs its own timeout
    let mut rows = Vec::with_capacity(urls.len());
    for url in &urls {
        let result = probe::quick_check(&client, url).await;
        rows.push((probe::domain_of(url), result));
    }

    report::print_report(&host, &public_ip, &rows);
    Ok(())
}
