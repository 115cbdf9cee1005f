//! Colorful console output for hash code demonstrations.
//!
//! Provides a custom `tracing` layer that formats demo events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (menu start/exit, demonstration start/end)
//! - **DEBUG**: Key presses
//! - **TRACE**: Individual field hashes

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Fallback directive when the configured filter does not parse.
pub const DEFAULT_FILTER: &str = "hashcode=warn";

/// Initializes console logging.
///
/// `default_filter` is an `EnvFilter` directive such as `hashcode=info`;
/// `RUST_LOG` takes precedence when set. Safe to call multiple times - only
/// the first call has effect.
pub fn init(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HashConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats demo events with colors.
pub struct HashConsoleLayer;

impl<S: Subscriber> Layer<S> for HashConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from hashcode crates only
        if !metadata.target().starts_with("hashcode") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    first: Option<String>,
    second: Option<String>,
    field: Option<String>,
    key: Option<String>,
    hash: Option<i64>,
    first_hash: Option<i64>,
    second_hash: Option<i64>,
    equal: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "hash" => self.hash = Some(value),
            "first_hash" => self.first_hash = Some(value),
            "second_hash" => self.second_hash = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_i64(field, value as i64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "equal" {
            self.equal = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "strategy" => &mut self.strategy,
            "first" => &mut self.first,
            "second" => &mut self.second,
            "field" => &mut self.field,
            "key" => &mut self.key,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "menu_start" => format!("{} Menu started", "▶".bright_green().bold()),
        "menu_exit" => format!("{} Menu closed", "■".bright_cyan().bold()),
        "menu_key" => format_key(v),
        "demo_start" => format_demo_start(v),
        "demo_end" => format_demo_end(v),
        "field" => format_field(v, level),
        _ => String::new(),
    }
}

fn format_key(v: &EventVisitor) -> String {
    let key = v.key.as_deref().unwrap_or("?");
    format!("{} Key {}", "⌨".bright_black(), key.bright_yellow())
}

fn format_demo_start(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("Unknown");
    let first = v.first.as_deref().unwrap_or("-");
    let second = v.second.as_deref().unwrap_or("-");

    format!(
        "{} {} │ {} │ {}",
        "▶".bright_blue(),
        strategy.white().bold(),
        first.bright_yellow(),
        second.bright_yellow()
    )
}

fn format_demo_end(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("Unknown");
    let first = v.first_hash.unwrap_or(0);
    let second = v.second_hash.unwrap_or(0);
    let equal = v.equal.unwrap_or(first == second);

    let status = if equal {
        "EQUAL".bright_green().bold().to_string()
    } else {
        "DIFFERENT".bright_red().bold().to_string()
    };

    format!(
        "{} {} │ {} │ {} │ {}",
        "◀".bright_blue(),
        strategy.white().bold(),
        format_hash(first),
        format_hash(second),
        status
    )
}

fn format_field(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let strategy = v.strategy.as_deref().unwrap_or("Unknown");
    let field = v.field.as_deref().unwrap_or("?");
    let hash = v.hash.unwrap_or(0);

    format!(
        "  {} {:<20} {:<10} {}",
        "·".bright_black(),
        strategy.bright_black(),
        field.white(),
        format_hash(hash).bright_black()
    )
}

fn format_hash(hash: i64) -> String {
    if hash < 0 {
        hash.bright_magenta().to_string()
    } else {
        hash.bright_cyan().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("other"), Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }

    #[test]
    fn test_demo_start() {
        let mut v = visitor("demo_start");
        v.strategy = Some("ManualContact".to_string());
        v.first = Some("Gerhard/64".to_string());
        v.second = Some("Gerda/64".to_string());

        let output = format_event(&v, Level::INFO);
        assert!(output.contains("ManualContact"));
        assert!(output.contains("Gerhard/64"));
        assert!(output.contains("Gerda/64"));
    }

    #[test]
    fn test_demo_end_status() {
        let mut v = visitor("demo_end");
        v.strategy = Some("SelectorContact".to_string());
        v.first_hash = Some(12);
        v.second_hash = Some(-7);
        v.equal = Some(false);

        let output = format_event(&v, Level::INFO);
        assert!(output.contains("DIFFERENT"));
        assert!(output.contains("-7"));

        v.second_hash = Some(12);
        v.equal = Some(true);
        assert!(format_event(&v, Level::INFO).contains("EQUAL"));
    }

    #[test]
    fn test_field_only_at_trace() {
        let mut v = visitor("field");
        v.field = Some("age".to_string());
        v.hash = Some(64);

        assert!(format_event(&v, Level::DEBUG).is_empty());
        let output = format_event(&v, Level::TRACE);
        assert!(output.contains("age"));
        assert!(output.contains("64"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init("hashcode=off");
        init("not a [valid filter");
    }
}
