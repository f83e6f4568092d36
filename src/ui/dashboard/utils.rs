//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Refresher => Color::Cyan,
        Source::Exporter => Color::Green,
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

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Request error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - will retry next cycle".to_string();
    }
    if msg.contains("Request error") && msg.contains("TimedOut") {
        return "Request timed out - will retry next cycle".to_string();
    }
    if msg.contains("Request error") {
        return "Network error - will retry next cycle".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_and_time() {
        assert_eq!(
            format_compact_timestamp("2026-08-06 14:03:27"),
            "08-06 14:03"
        );
    }

    #[test]
    fn compact_timestamp_falls_back_on_unknown_formats() {
        assert_eq!(format_compact_timestamp("just now"), "just now");
    }

    #[test]
    fn transport_errors_read_as_friendly_messages() {
        assert_eq!(
            clean_http_error_message("Request error: error sending request (TimedOut)"),
            "Request timed out - will retry next cycle"
        );
        assert_eq!(
            clean_http_error_message("HTTP error with status 500: boom"),
            "HTTP error with status 500: boom"
        );
    }
}
