//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: colored status
//! messages, per-path change markers, and JSON printing.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const INFO: &str = "•";
    pub const ADD: &str = "+";
    pub const MODIFY: &str = "~";
    pub const REMOVE: &str = "-";
}

/// Shorten a digest for human-readable listings.
pub fn truncate_hash(hash: &str) -> &str {
    let len = hash.len().min(12);
    &hash[..len]
}

pub fn print_success(message: &str) {
    println!(
        "{} {}",
        symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
        message
    );
}

pub fn print_info(message: &str) {
    println!(
        "{} {}",
        symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
        message
    );
}

pub fn print_stat(label: &str, value: &str) {
    println!(
        "  {}: {}",
        label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        value
    );
}

pub fn print_added(path: &str) {
    println!(
        "  {} {}",
        symbols::ADD.if_supports_color(Stream::Stdout, |s| s.green()),
        path
    );
}

pub fn print_modified(path: &str) {
    println!(
        "  {} {}",
        symbols::MODIFY.if_supports_color(Stream::Stdout, |s| s.yellow()),
        path
    );
}

pub fn print_removed(path: &str) {
    println!(
        "  {} {}",
        symbols::REMOVE.if_supports_color(Stream::Stdout, |s| s.red()),
        path
    );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_hash() {
        assert_eq!(truncate_hash("abcdef123456789"), "abcdef123456");
        assert_eq!(truncate_hash("short"), "short");
        assert_eq!(truncate_hash(""), "");
    }
}
