//! Output formatting: table, JSON, YAML, plain.
//!
//! MobileApi results are loosely-typed JSON, so the table renderer derives
//! columns from the keys it finds rather than from a `Tabled` derive.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde_json::Value;
use tabled::{builder::Builder, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled on stderr.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Print a success line to stderr, respecting quiet mode.
pub fn print_success(message: &str, color: &ColorMode, quiet: bool) {
    if quiet {
        return;
    }
    if should_color(color) {
        eprintln!("{} {message}", "✓".green());
    } else {
        eprintln!("✓ {message}");
    }
}

// ── Render dispatcher ────────────────────────────────────────────────

/// Render a JSON result in the chosen format.
///
/// - `table`: arrays of objects become one row per element
/// - `json` / `json-compact` / `yaml`: serialized via serde
/// - `plain`: one line per element, values tab-separated
pub fn render_value(format: &OutputFormat, value: &Value) -> String {
    match format {
        OutputFormat::Table => render_table(value),
        OutputFormat::Json => render_json_pretty(value),
        OutputFormat::JsonCompact => render_json_compact(value),
        OutputFormat::Yaml => render_yaml(value),
        OutputFormat::Plain => render_plain(value),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Write report text to stdout exactly as received.
pub fn print_raw(text: &str, quiet: bool) -> io::Result<()> {
    if quiet {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::new(),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let columns = collect_columns(items);
            let mut builder = Builder::default();
            builder.push_record(columns.iter().cloned());
            for item in items {
                builder.push_record(
                    columns
                        .iter()
                        .map(|c| item.get(c).map(cell).unwrap_or_default()),
                );
            }
            builder.build().with(Style::rounded()).to_string()
        }
        Value::Array(items) => {
            let mut builder = Builder::default();
            builder.push_record(["Value".to_string()]);
            for item in items {
                builder.push_record([cell(item)]);
            }
            builder.build().with(Style::rounded()).to_string()
        }
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field".to_string(), "Value".to_string()]);
            for (key, v) in map {
                builder.push_record([key.clone(), cell(v)]);
            }
            builder.build().with(Style::rounded()).to_string()
        }
        scalar => cell(scalar),
    }
}

/// Union of object keys in first-seen order.
fn collect_columns(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
        if !columns.iter().any(|c| c == key) {
            columns.push(key.clone());
        }
    }
    columns
}

/// Table cell text: strings unquoted, nested values as compact JSON.
fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render_plain(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(plain_line).collect::<Vec<_>>().join("\n"),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}\t{}", cell(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        scalar => cell(scalar),
    }
}

fn plain_line(value: &Value) -> String {
    match value {
        Value::Object(map) => map.values().map(cell).collect::<Vec<_>>().join("\t"),
        other => cell(other),
    }
}

/// Pretty-printed JSON.
pub(crate) fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Compact single-line JSON.
pub(crate) fn render_json_compact<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).expect("serialization should not fail")
}

/// YAML output.
pub(crate) fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
