// Bills Tracker - Web Server

use anyhow::{Context, Result};
use std::env;

use bills_tracker::{build_router, AppState};

/// Default listen address; override with an argument or BILLS_ADDR
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    println!("Bills Tracker - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let addr = env::args()
        .nth(1)
        .or_else(|| env::var("BILLS_ADDR").ok())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    let state = AppState::new();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("✓ Listening on http://{}", addr);
    println!("\n🚀 Bills Tracker App is running!");
    println!("   API: http://{}/bills", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
