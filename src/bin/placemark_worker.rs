//! placemark-worker: transition event worker
//!
//! Reads region transition events as newline-delimited JSON on stdin and
//! logs a notification for every reminder whose region was entered.
//!
//! ## Architecture
//! ```text
//! [platform] --(JSON lines)--> [placemark-worker] --> ReminderStore
//!                                      |
//!                                      v
//!                              notifications (log)
//! ```
//!
//! ## Configuration
//! - PLACEMARK_CONFIG: Path to YAML config file (optional)
//! - PLACEMARK__STORAGE__TYPE / PLACEMARK__STORAGE__PATH: storage overrides
//! - PLACEMARK_LOG: Log filter (default: info)
//!
//! Each event is handled on its own task; events are not serialized
//! against each other. Malformed lines, including non-UTF-8 input, are
//! logged and skipped.

use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;

use placemark::config::Config;
use placemark::handlers::TransitionEventHandler;
use placemark::notification::LogNotificationSink;
use placemark::repository::ReminderRepository;
use placemark::storage::init_storage;
use placemark::utils::bootstrap::init_tracing;
use placemark::worker::run_worker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref())?;

    let store = init_storage(&config.storage).await?;
    let handler = Arc::new(TransitionEventHandler::new(
        ReminderRepository::new(store),
        Arc::new(LogNotificationSink),
    ));

    info!(storage_type = %config.storage.storage_type, "placemark-worker started");

    let summary = run_worker(BufReader::new(tokio::io::stdin()), handler).await?;

    info!(
        accepted = summary.accepted,
        skipped = summary.skipped,
        "placemark-worker stopping"
    );
    Ok(())
}
