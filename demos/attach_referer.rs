//! Attaching a policy-correct `Referer` header to outgoing requests.
//!
//! This example shows how an HTTP client would use the engine:
//! 1. Pick a policy (directly or from a `Referrer-Policy` header)
//! 2. Compute the referrer for each navigation
//! 3. Attach the header only when a referrer was produced
//! 4. Register a custom policy built on `normalize`
//!
//! Run with: `RUST_LOG=debug cargo run --example attach_referer`

use referrer_policy::{normalize, PolicyId, Referrer, REFERER};
use tracing_subscriber::EnvFilter;

/// Sends the origin only when both ends are TLS-protected.
const TLS_ONLY: PolicyId = PolicyId::custom(8);

fn tls_only(from_url: &str, to_url: &str) -> String {
    let (Ok(from), Ok(to)) = (normalize(from_url), normalize(to_url)) else {
        return String::new();
    };
    if from.is_tls() && to.is_tls() {
        return from.origin().to_owned();
    }
    String::new()
}

fn show(referrer: &Referrer, from_url: &str, to_url: &str) {
    println!("GET {}", to_url);
    match referrer.make(from_url, to_url) {
        Some(value) => println!("  {}: {}", REFERER, value),
        None => println!("  (no {} header)", REFERER),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Referer Example ===\n");

    let mut referrer = Referrer::new();

    // Scenario 1: default policy
    println!("--- Scenario 1: {} (default) ---", referrer.policy());
    show(&referrer, "https://example.com/from", "https://example.com/to");
    show(&referrer, "https://example.com/from", "http://example.com/to");

    // Scenario 2: policy taken from a response header
    println!("\n--- Scenario 2: Referrer-Policy header ---");
    referrer.set_policy_from_header("no-referrer, origin-when-cross-origin");
    println!("active policy: {}", referrer.policy());
    show(&referrer, "http://example.com/from?q=1", "http://example.com/to");
    show(&referrer, "http://example.com/from?q=1", "http://golang.org/to");

    // Scenario 3: local schemes never send a referrer
    println!("\n--- Scenario 3: local scheme source ---");
    show(&referrer, "data:text/html,<a href=x>", "http://example.com/");

    // Scenario 4: custom policy
    println!("\n--- Scenario 4: custom policy {} ---", TLS_ONLY);
    referrer.register(TLS_ONLY, tls_only);
    referrer.set_policy(TLS_ONLY);
    show(&referrer, "https://example.com/from", "https://golang.org/to");
    show(&referrer, "https://example.com/from", "http://golang.org/to");

    println!("\n=== Example Complete ===");
}
