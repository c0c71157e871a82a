use chrono::{DateTime, Utc};
use colored::Colorize;
use tagsmith::api::{CmdMessage, MessageLevel, ScanEntry, TagSummary};
use unicode_width::UnicodeWidthStr;

const ACTIVE_MARKER: &str = "*";
const SELECTED_MARKER: &str = "x";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_tags(tags: &[TagSummary]) {
    for summary in tags {
        let marker = if summary.active { ACTIVE_MARKER } else { " " };
        let count = format!(
            "{} file{}",
            summary.path_count,
            if summary.path_count == 1 { "" } else { "s" }
        );
        let name = if summary.active {
            summary.name.bold()
        } else {
            summary.name.normal()
        };
        println!("{} {}  {}", marker.yellow(), name, count.dimmed());
    }
}

pub(crate) fn print_paths(paths: &[String]) {
    for path in paths {
        println!("{}", path);
    }
}

pub(crate) fn print_entries(entries: &[ScanEntry]) {
    let path_width = entries
        .iter()
        .map(|e| e.entry.relative_path.width())
        .max()
        .unwrap_or(0);

    for scan_entry in entries {
        let entry = &scan_entry.entry;
        let marker = if scan_entry.selected {
            format!("[{}]", SELECTED_MARKER).green()
        } else {
            "[ ]".normal()
        };
        let padding = path_width.saturating_sub(entry.relative_path.width());
        println!(
            "{} {}{}  {:>9}  {:<24}  {}",
            marker,
            entry.relative_path,
            " ".repeat(padding),
            format_size(entry.size),
            entry.mime_type.dimmed(),
            format_timestamp(entry.modified).dimmed()
        );
    }
}

fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{:.1} MB", size as f64 / (1024.0 * 1024.0))
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}
