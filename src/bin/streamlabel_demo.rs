//! Demo driver: capture timer-driven output into a terminal-backed label.
//!
//! Run with: cargo run --bin streamlabel_demo

use std::error::Error;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use streamlabel::{CaptureLabel, CaptureStreamBuilder, LabelSurface, StdoutMirror, UiThread};

const TICKS: u32 = 10;

/// A "label" for terminals: prints each markup update on its own line of
/// stderr, standing in for a real widget.
#[derive(Debug)]
struct TerminalLabel;

impl LabelSurface for TerminalLabel {
    fn set_text(&self, markup: String) {
        eprintln!("label: {markup}");
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let ui = UiThread::spawn()?;
    let label = Arc::new(CaptureLabel::new(Arc::new(TerminalLabel), ui.handle()));
    label.set_err(true);

    // Everything written here shows up on the label and, via the mirror,
    // on the real stdout.
    let mut stream = CaptureStreamBuilder::new()
        .prefix("STDERR")
        .consumer(label)
        .mirror(Arc::new(StdoutMirror::new()))
        .build()?;

    for tick in 0..TICKS {
        writeln!(stream, "Activity at \"</p>{tick}")?;
        thread::sleep(Duration::from_secs(1));
    }

    ui.shutdown().map_err(|_| "UI thread panicked")?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("streamlabel_demo: {e}");
        std::process::exit(1);
    }
}
