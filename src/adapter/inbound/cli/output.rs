//! Terminal and JSON-line output for CLI handlers.
//!
//! Handlers never print directly. In `--json` mode every call below emits one
//! `{"type": ..., "payload": ...}` line on stdout instead of styled text, and
//! `--quiet` drops regular lines while keeping warnings, errors and command
//! payloads.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

use crate::domain::AmericanPrice;

/// Global flags that shape output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit JSON lines instead of styled text.
    pub json: bool,
    /// Suppress regular output.
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn cell() -> &'static RwLock<OutputConfig> {
    OUTPUT.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    match cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Install the output flags parsed from the command line.
pub fn configure(config: OutputConfig) {
    match cell().write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Whether `--quiet` hides a line.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Regular,
    Important,
}

fn json_line(kind: &str, payload: Value) -> Value {
    json!({ "type": kind, "payload": payload })
}

fn emit(level: Level, kind: &str, payload: Value, render: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", json_line(kind, payload));
        return;
    }
    if config.quiet && level == Level::Regular {
        return;
    }
    render();
}

/// `linescout <version>` banner.
pub fn header(version: &str) {
    emit(
        Level::Regular,
        "header",
        json!({ "app": "linescout", "version": version }),
        || println!("{} {}\n", "linescout".bold(), version.dimmed()),
    );
}

pub fn section(title: &str) {
    emit(Level::Regular, "section", json!({ "title": title }), || {
        println!("\n{}", title.bold());
    });
}

/// A dimmed label followed by its value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        Level::Regular,
        "field",
        json!({ "label": label, "value": value }),
        || println!("  {:<12} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit(Level::Regular, "success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

pub fn warning(message: &str) {
    emit(Level::Important, "warning", json!({ "message": message }), || {
        println!("  {} {}", "⚠".yellow(), message);
    });
}

/// Errors go to stderr in both modes.
pub fn error(message: &str) {
    if current().json {
        eprintln!("{}", json_line("error", json!({ "message": message })));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

pub fn note(message: &str) {
    emit(Level::Regular, "note", json!({ "message": message }), || {
        println!("  {}", message.dimmed());
    });
}

pub fn hint(message: &str) {
    emit(Level::Regular, "hint", json!({ "message": message }), || {
        println!("  {}: {}", "hint".cyan().dimmed(), message.dimmed());
    });
}

/// Indent and print a pre-rendered block such as a table.
pub fn lines(content: &str) {
    emit(Level::Regular, "lines", json!({ "content": content }), || {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Print a command's result document as a single JSON line.
pub fn json_output(value: Value) {
    println!("{value}");
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner. Hidden in JSON and quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let config = current();
    let pb = if config.json || config.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template("  {spinner:.cyan} {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };
    pb.set_message(message.to_string());
    pb
}

pub fn spinner_success(pb: &ProgressBar, message: &str) {
    finish_spinner(pb, message, true);
}

pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    finish_spinner(pb, message, false);
}

fn finish_spinner(pb: &ProgressBar, message: &str, ok: bool) {
    let config = current();
    if config.json {
        let kind = if ok { "spinner_success" } else { "spinner_fail" };
        println!("{}", json_line(kind, json!({ "message": message })));
        pb.finish_and_clear();
        return;
    }
    if config.quiet && ok {
        pb.finish_and_clear();
        return;
    }
    let mark = if ok {
        "✓".green().to_string()
    } else {
        "×".red().to_string()
    };
    pb.finish_with_message(format!("{mark} {message}"));
}

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Bad,
    Accent,
    Dim,
}

/// Color a value, or leave it plain in JSON mode.
fn paint(value: impl Display, tone: Tone) -> String {
    let text = value.to_string();
    if is_json() {
        return text;
    }
    match tone {
        Tone::Good => text.green().to_string(),
        Tone::Bad => text.red().to_string(),
        Tone::Accent => text.cyan().to_string(),
        Tone::Dim => text.dimmed().to_string(),
    }
}

pub fn negative(value: impl Display) -> String {
    paint(value, Tone::Bad)
}

pub fn highlight(value: impl Display) -> String {
    paint(value, Tone::Accent)
}

pub fn muted(value: impl Display) -> String {
    paint(value, Tone::Dim)
}

/// Outlier score to four places, green when it beats the consensus.
pub fn score(value: f64) -> String {
    let tone = if value > 1.0 { Tone::Good } else { Tone::Dim };
    paint(format!("{value:.4}"), tone)
}

/// Signed American price, red when negative.
pub fn price(value: impl Into<AmericanPrice>) -> String {
    let value = value.into();
    if value.value() < 0 {
        paint(value, Tone::Bad)
    } else {
        value.to_string()
    }
}
