//! Console output for GreenCity logs.
//!
//! Provides a custom `tracing` layer that renders events as
//!
//! ```text
//! 2025-03-14 09:26:53 | INFO    | Running DP knapsack: n=1,200, capacity=50,000
//! ```
//!
//! Events carrying a known `event` field (`catalog_loaded`, `solve_start`,
//! `progress`, ...) get a fixed message built from their fields; any other
//! event prints its message as-is.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (catalog loaded, solve start/end, report saved)
//! - **WARN**: Skipped catalog rows
//! - **ERROR**: Failures the session recovers from

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter directive.
pub const DEFAULT_DIRECTIVE: &str = "greencity=info";

/// Filter directive used by `--quiet`.
pub const QUIET_DIRECTIVE: &str = "greencity=warn";

/// Initializes console logging with [`DEFAULT_DIRECTIVE`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE);
}

/// Initializes console logging, using `directive` unless `RUST_LOG` is set.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init_with_directive(directive: &str) {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that prints GreenCity events to stderr.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("greencity") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let message = render_message(&visitor);
        if message.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!(
            "{} | {} | {}",
            timestamp.bright_black(),
            format_level(*metadata.level()),
            message
        );
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }
}

/// Fields GreenCity events carry.
#[derive(Debug, Default)]
pub struct EventVisitor {
    message: Option<String>,
    event: Option<String>,
    path: Option<String>,
    reason: Option<String>,
    count: Option<u64>,
    line: Option<u64>,
    item_count: Option<u64>,
    capacity: Option<u64>,
    processed: Option<u64>,
    total: Option<u64>,
    selected_count: Option<u64>,
    elapsed_ms: Option<u64>,
    total_value: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "message" => self.message = Some(s),
            "event" => self.event = Some(s),
            "path" => self.path = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "event" => self.event = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "count" => self.count = Some(value),
            "line" => self.line = Some(value),
            "item_count" => self.item_count = Some(value),
            "capacity" => self.capacity = Some(value),
            "processed" => self.processed = Some(value),
            "total" => self.total = Some(value),
            "selected_count" => self.selected_count = Some(value),
            "elapsed_ms" => self.elapsed_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "total_value" {
            self.total_value = Some(value);
        }
    }
}

fn grouped(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

/// Builds the uncolored message text for an event.
pub fn render_message(v: &EventVisitor) -> String {
    let mut out = String::new();
    match v.event.as_deref() {
        Some("catalog_loaded") => {
            let _ = write!(
                out,
                "Loaded {} devices from {}",
                grouped(v.count),
                v.path.as_deref().unwrap_or("?")
            );
        }
        Some("row_skipped") => {
            let _ = write!(
                out,
                "Skipping malformed row {}: {}",
                v.line.unwrap_or(0),
                v.reason.as_deref().unwrap_or("unknown reason")
            );
        }
        Some("solve_start") => {
            let _ = write!(
                out,
                "Running DP knapsack: n={}, capacity={}",
                grouped(v.item_count),
                grouped(v.capacity)
            );
        }
        Some("progress") => {
            let _ = write!(
                out,
                "Processed {} / {} devices...",
                grouped(v.processed),
                grouped(v.total)
            );
        }
        Some("solve_end") => {
            let _ = write!(
                out,
                "DP complete. Chosen devices: {} (Σ value {:.1})",
                grouped(v.selected_count),
                v.total_value.unwrap_or(0.0)
            );
        }
        Some("optimisation_finished") => {
            let _ = write!(
                out,
                "Optimisation finished in {} ms",
                grouped(v.elapsed_ms)
            );
        }
        Some("report_saved") => {
            let _ = write!(
                out,
                "Saved report → {}",
                v.path.as_deref().unwrap_or("?")
            );
        }
        _ => {
            if let Some(message) = &v.message {
                out.push_str(message);
            }
        }
    }
    out
}

fn format_level(level: Level) -> String {
    let label = format!("{:<7}", level.as_str());
    match level {
        Level::ERROR => label.bright_red().bold().to_string(),
        Level::WARN => label.bright_yellow().bold().to_string(),
        Level::INFO => label.bright_green().to_string(),
        Level::DEBUG => label.bright_blue().to_string(),
        Level::TRACE => label.bright_black().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_start_message() {
        let v = EventVisitor {
            event: Some("solve_start".to_string()),
            item_count: Some(1200),
            capacity: Some(50_000),
            ..Default::default()
        };
        assert_eq!(
            render_message(&v),
            "Running DP knapsack: n=1,200, capacity=50,000"
        );
    }

    #[test]
    fn test_progress_message() {
        let v = EventVisitor {
            event: Some("progress".to_string()),
            processed: Some(50),
            total: Some(120),
            ..Default::default()
        };
        assert_eq!(render_message(&v), "Processed 50 / 120 devices...");
    }

    #[test]
    fn test_solve_end_message() {
        let v = EventVisitor {
            event: Some("solve_end".to_string()),
            selected_count: Some(2),
            total_value: Some(75.0),
            ..Default::default()
        };
        assert_eq!(
            render_message(&v),
            "DP complete. Chosen devices: 2 (Σ value 75.0)"
        );
    }

    #[test]
    fn test_row_skipped_message() {
        let v = EventVisitor {
            event: Some("row_skipped".to_string()),
            line: Some(4),
            reason: Some("expected 5 fields, found 3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            render_message(&v),
            "Skipping malformed row 4: expected 5 fields, found 3"
        );
    }

    #[test]
    fn test_plain_message_passthrough() {
        let v = EventVisitor {
            message: Some("Exit requested - terminating.".to_string()),
            ..Default::default()
        };
        assert_eq!(render_message(&v), "Exit requested - terminating.");
    }

    #[test]
    fn test_unknown_event_without_message_is_silent() {
        let v = EventVisitor {
            event: Some("mystery".to_string()),
            ..Default::default()
        };
        assert!(render_message(&v).is_empty());
    }

    #[test]
    fn test_level_is_padded() {
        let label = format_level(Level::INFO);
        assert!(label.contains("INFO   "));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_directive(QUIET_DIRECTIVE);
        tracing::info!(event = "progress", processed = 1u64, total = 2u64);
    }
}
