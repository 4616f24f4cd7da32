// src/identity/public_ip.rs
// =============================================================================
// This module asks an external echo service for our public IP address.
//
// Why an external service? Behind NAT, no local API can tell you the
// address the rest of the internet sees - only something on the outside
// can. api.ipify.org answers with a tiny JSON body: {"ip": "203.0.113.7"}
//
// We deliberately keep the contract with the service loose: the body is
// read as untyped JSON and we just pick out the "ip" field if it is there.
// A missing field, a malformed body, a timeout, or no network at all are
// all the same to the caller: "unknown".
// =============================================================================

use reqwest::Client;

const ECHO_SERVICE_URL: &str = "https://api.ipify.org?format=json";

// Fetches the public IP address, or "unknown".
//
// The client carries the user's timeout, so this never blocks longer than
// one request is allowed to. Never returns an error - this is report
// content, not a failure condition.
pub async fn fetch_public_ip(client: &Client) -> String {
    fetch_from(client, ECHO_SERVICE_URL).await
}

async fn fetch_from(client: &Client, url: &str) -> String {
    match try_fetch(client, url).await {
        Some(ip) => ip,
        None => "unknown".to_string(),
    }
}

// The fallible half, collapsed to Option so the caller stays a single
// match. Any None here means some step of request -> JSON -> "ip" field
// fell through.
async fn try_fetch(client: &Client, url: &str) -> Option<String> {
    let response = client.get(url).send().await.ok()?;
    let body: serde_json::Value = response.json().await.ok()?;
    let ip = body.get("ip")?.as_str()?;
    Some(ip.to_string())
}
