//! Colorful console output for dashboard events.
//!
//! Provides a custom `tracing` layer that formats lexicon, startup and
//! analysis events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (lexicon loaded, probes, static assets,
//!   server listening) and the per-request analysis breakdown
//! - **WARN**: Lexicon fallback, rejected requests
//! - **ERROR**: Failed requests

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Prints the
/// banner and installs the tracing subscriber. `RUST_LOG` takes precedence
/// over `default_filter`.
pub fn init(default_filter: &str) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(DashboardConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 ____             _   _ _____
/ ___|  ___ _ __ | |_(_)  ___|__  _ __ __ _  ___
\___ \ / _ \ '_ \| __| | |_ / _ \| '__/ _` |/ _ \
 ___) |  __/ | | | |_| |  _| (_) | | | (_| |  __/
|____/ \___|_| |_|\__|_|_|  \___/|_|  \__, |\___|
                                      |___/
"#;

    let version_line = format!(
        "             v{} - Lexicon-Weighted Sentiment Dashboard\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats dashboard events with colors.
pub struct DashboardConsoleLayer;

impl<S: Subscriber> Layer<S> for DashboardConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("sentiforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    path: Option<String>,
    reason: Option<String>,
    word: Option<String>,
    text: Option<String>,
    sentiment: Option<String>,
    found: Option<String>,
    address: Option<String>,
    entries: Option<u64>,
    found_count: Option<u64>,
    present: Option<bool>,
    score: Option<f64>,
    polarity: Option<f64>,
    external: Option<f64>,
    lexicon_avg: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "entries" => self.entries = Some(value),
            "found_count" => self.found_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "score" => self.score = Some(value),
            "polarity" => self.polarity = Some(value),
            "external" => self.external = Some(value),
            "lexicon_avg" => self.lexicon_avg = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "present" {
            self.present = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "message" => self.message = value,
            "path" => self.path = value,
            "reason" => self.reason = value,
            "word" => self.word = value,
            "text" => self.text = value,
            "sentiment" => self.sentiment = value,
            "found" => self.found = value,
            "address" => self.address = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "lexicon_loaded" => format_lexicon_loaded(v),
        "lexicon_fallback" => format_lexicon_fallback(v),
        "probe" => format_probe(v),
        "static_asset" => format_static_asset(v),
        "self_test" | "analysis" => format_analysis(v),
        "server_listening" => format_listening(v),
        "request_rejected" | "request_failed" => format_request_problem(v, level),
        _ => format_message(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_lexicon_loaded(v: &EventVisitor) -> String {
    let entries = v.entries.unwrap_or(0);
    format!(
        "{} {} Lexicon loaded │ {} words │ {}",
        format_elapsed(),
        "✓".bright_green().bold(),
        entries.to_formatted_string(&Locale::en).bright_yellow(),
        v.path.as_deref().unwrap_or("?").bright_black()
    )
}

fn format_lexicon_fallback(v: &EventVisitor) -> String {
    let entries = v.entries.unwrap_or(0);
    format!(
        "{} {} Lexicon unavailable ({}) │ using {} built-in words │ {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        v.reason.as_deref().unwrap_or("unknown error").red(),
        entries.to_formatted_string(&Locale::en).bright_yellow(),
        v.path.as_deref().unwrap_or("?").bright_black()
    )
}

fn format_probe(v: &EventVisitor) -> String {
    let word = v.word.as_deref().unwrap_or("?");
    if v.present.unwrap_or(false) {
        format!(
            "{}   {} '{}': {} ({})",
            format_elapsed(),
            "✓".bright_green(),
            word.white().bold(),
            v.sentiment.as_deref().unwrap_or("?"),
            format_score(v.score.unwrap_or(0.0))
        )
    } else {
        format!(
            "{}   {} '{}' not found in lexicon",
            format_elapsed(),
            "✗".bright_red(),
            word.white().bold()
        )
    }
}

fn format_static_asset(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    if v.present.unwrap_or(false) {
        format!("{}   {} {}", format_elapsed(), "✓".bright_green(), path.white())
    } else {
        format!(
            "{}   {} {} missing",
            format_elapsed(),
            "✗".bright_red(),
            path.white().bold()
        )
    }
}

fn format_analysis(v: &EventVisitor) -> String {
    let sentiment = v.sentiment.as_deref().unwrap_or("?");
    let mut output = format!(
        "{} {} '{}' → {} │ polarity {}",
        format_elapsed(),
        "▸".bright_cyan(),
        truncate(v.text.as_deref().unwrap_or(""), 48).white(),
        format_label(sentiment),
        format_score(v.polarity.unwrap_or(0.0))
    );

    if let Some(external) = v.external {
        output.push_str(&format!(" │ external {}", format_score(external)));
    }

    match v.found_count {
        Some(n) if n > 0 => output.push_str(&format!(
            " │ lexicon {} [{}]",
            format_score(v.lexicon_avg.unwrap_or(0.0)),
            v.found.as_deref().unwrap_or("").bright_magenta()
        )),
        Some(_) => output.push_str(&format!(" │ {}", "no lexicon words".bright_black())),
        None => {}
    }

    output
}

fn format_listening(v: &EventVisitor) -> String {
    format!(
        "{} {} Server listening on {}",
        format_elapsed(),
        "▸".bright_green(),
        format!("http://{}", v.address.as_deref().unwrap_or("?"))
            .bright_cyan()
            .underline()
    )
}

fn format_request_problem(v: &EventVisitor, level: Level) -> String {
    let icon = if level == Level::ERROR {
        "✗".bright_red().bold().to_string()
    } else {
        "!".bright_yellow().bold().to_string()
    };
    format!(
        "{} {} Request {}: {}",
        format_elapsed(),
        icon,
        if level == Level::ERROR {
            "failed"
        } else {
            "rejected"
        },
        v.reason.as_deref().unwrap_or("unknown")
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };
    let tag = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => " WARN".bright_yellow().bold().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        _ => "TRACE".bright_black().to_string(),
    };
    format!("{} {} {}", format_elapsed(), tag, message)
}

fn format_label(sentiment: &str) -> String {
    let upper = sentiment.to_uppercase();
    match sentiment {
        "positive" => upper.bright_green().bold().to_string(),
        "slightly positive" => upper.green().to_string(),
        "negative" => upper.bright_red().bold().to_string(),
        "slightly negative" => upper.red().to_string(),
        _ => upper.white().to_string(),
    }
}

fn format_score(score: f64) -> String {
    let s = format!("{:+.4}", score);
    if score > 0.0 {
        s.bright_green().to_string()
    } else if score < 0.0 {
        s.bright_red().to_string()
    } else {
        s.white().to_string()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ääääää", 3), "ää…");
    }

    #[test]
    fn test_probe_formats() {
        let found = EventVisitor {
            event: Some("probe".into()),
            word: Some("gloomy".into()),
            present: Some(true),
            sentiment: Some("negative".into()),
            score: Some(-0.6),
            ..Default::default()
        };
        let output = format_event(&found, Level::INFO);
        assert!(output.contains("gloomy"));
        assert!(output.contains("-0.6000"));

        let missing = EventVisitor {
            event: Some("probe".into()),
            word: Some("sad".into()),
            present: Some(false),
            ..Default::default()
        };
        assert!(format_event(&missing, Level::INFO).contains("not found in lexicon"));
    }

    #[test]
    fn test_static_asset_formats() {
        let present = EventVisitor {
            event: Some("static_asset".into()),
            path: Some("static/index.html".into()),
            present: Some(true),
            ..Default::default()
        };
        let output = format_event(&present, Level::INFO);
        assert!(output.contains("static/index.html"));
        assert!(!output.contains("missing"));

        let missing = EventVisitor {
            event: Some("static_asset".into()),
            path: Some("static/script.js".into()),
            present: Some(false),
            ..Default::default()
        };
        assert!(format_event(&missing, Level::INFO).contains("script.js missing"));
    }

    #[test]
    fn test_analysis_lists_found_words() {
        let v = EventVisitor {
            event: Some("analysis".into()),
            text: Some("so gloomy".into()),
            sentiment: Some("negative".into()),
            polarity: Some(-0.57),
            external: Some(0.0),
            lexicon_avg: Some(-0.6),
            found: Some("gloomy".into()),
            found_count: Some(1),
            ..Default::default()
        };
        let output = format_event(&v, Level::INFO);
        assert!(output.contains("NEGATIVE"));
        assert!(output.contains("-0.5700"));
        assert!(output.contains("gloomy"));
    }

    #[test]
    fn test_unknown_event_without_message_is_silent() {
        let v = EventVisitor {
            event: Some("something_else".into()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_plain_message_is_shown() {
        let v = EventVisitor {
            message: Some("config not found".into()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::WARN).contains("config not found"));
    }
}
