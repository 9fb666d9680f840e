//! `humanpdf-replay` - replay a recorded gesture trace and print each emitted
//! drag/resize outcome as one JSON line.
//!
//! ```sh
//! RUST_LOG=humanpdf=debug humanpdf-replay trace.json
//! ```

use anyhow::{Context, Result, bail};
use humanpdf::PointerCapture;
use humanpdf::replay::GestureTrace;
use std::fs;
use std::io::{self, Write};

fn main() -> Result<()> {
    humanpdf::logging::init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: humanpdf-replay <trace.json>");
    };

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read trace {}", path))?;
    let trace: GestureTrace =
        serde_json::from_str(&content).with_context(|| format!("Invalid trace {}", path))?;

    let capture = PointerCapture::new();
    let outcomes = trace
        .replay(capture.clone())
        .context("Trace configuration rejected")?;
    tracing::info!(
        events = trace.events.len(),
        outcomes = outcomes.len(),
        leaked_subscriptions = capture.active_subscriptions(),
        "Replay finished"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for outcome in &outcomes {
        serde_json::to_writer(&mut out, outcome)?;
        writeln!(out)?;
    }
    Ok(())
}
