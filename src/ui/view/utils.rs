//! View utility functions
//!
//! Contains helper functions used across view components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::ViewLoader => Color::Cyan,
        Worker::InsightFetcher => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Replace verbose HTTP error texts with short readable ones
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("reqwest::Error") && msg.contains("ConnectTimeout") {
        return "Veza sa poslužiteljem je istekla".to_string();
    }
    if msg.contains("reqwest::Error") && msg.contains("TimedOut") {
        return "Zahtjev je istekao".to_string();
    }
    if msg.contains("reqwest::Error") {
        return "Mrežna pogreška".to_string();
    }
    msg.to_string()
}

/// Format a score for axis labels, without a trailing `.0` on whole values.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
