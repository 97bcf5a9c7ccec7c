//! Line-oriented transition event intake.
//!
//! Reads newline-delimited JSON `TransitionEvent`s and hands each one to the
//! handler on its own task. Lines that are not UTF-8 or not a valid event are
//! logged and skipped; only I/O failures of the reader end the run. Finished
//! event tasks are reaped as input arrives, so a long-lived stream does not
//! accumulate completed tasks.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

use crate::handlers::{TransitionEventHandler, TransitionOutcome};
use crate::model::TransitionEvent;

/// Tally of one worker run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerSummary {
    /// Lines parsed into events and handed to the handler.
    pub accepted: usize,
    /// Non-blank lines that were not valid UTF-8 or not a valid event.
    pub skipped: usize,
    /// Event tasks that panicked or were cancelled.
    pub aborted: usize,
    /// Most event tasks outstanding at once after reaping.
    pub peak_in_flight: usize,
}

enum Line {
    Blank,
    Event(TransitionEvent),
    Malformed(String),
}

fn parse_line(raw: &[u8]) -> Line {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text.trim(),
        Err(e) => return Line::Malformed(e.to_string()),
    };
    if text.is_empty() {
        return Line::Blank;
    }
    match serde_json::from_str(text) {
        Ok(event) => Line::Event(event),
        Err(e) => Line::Malformed(e.to_string()),
    }
}

fn reap(joined: Result<TransitionOutcome, JoinError>, summary: &mut WorkerSummary) {
    match joined {
        Ok(outcome) => debug!(?outcome, "Transition event finished"),
        Err(e) => {
            warn!(error = %e, "Transition event task aborted");
            summary.aborted += 1;
        }
    }
}

/// Consume `reader` to EOF, handling every event concurrently.
///
/// Returns once input is closed and every spawned event has finished.
pub async fn run_worker<R>(
    mut reader: R,
    handler: Arc<TransitionEventHandler>,
) -> std::io::Result<WorkerSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = WorkerSummary::default();
    let mut events = JoinSet::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_number += 1;

        match parse_line(&buf) {
            Line::Blank => {}
            Line::Event(event) => {
                summary.accepted += 1;
                let handler = Arc::clone(&handler);
                events.spawn(async move { handler.handle(event).await });
            }
            Line::Malformed(reason) => {
                warn!(line = line_number, %reason, "Skipping malformed transition event");
                summary.skipped += 1;
            }
        }

        while let Some(joined) = events.try_join_next() {
            reap(joined, &mut summary);
        }
        summary.peak_in_flight = summary.peak_in_flight.max(events.len());
    }

    while let Some(joined) = events.join_next().await {
        reap(joined, &mut summary);
    }

    info!(
        accepted = summary.accepted,
        skipped = summary.skipped,
        aborted = summary.aborted,
        "Input closed"
    );
    Ok(summary)
}
