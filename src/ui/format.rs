//! Value formatting for dashboard display
//!
//! Counters, rates, date labels, and sanitization of feed-supplied text.

use chrono::NaiveDate;

/// Format a counter for card display: millions and thousands collapse to one
/// decimal with a suffix, smaller values keep digit grouping.
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        group_digits(value)
    }
}

/// Percentage-like values render to one decimal place.
pub fn format_rate(value: f64) -> String {
    format!("{:.1}", value)
}

/// Short calendar label for chart axes, e.g. "Jul 30".
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Group digits in threes, thousands-separated with commas.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Sanitize feed-supplied text for display.
///
/// Control characters (including escape sequences) are stripped so untrusted
/// labels are always presented literally and cannot drive the terminal.
pub fn sanitize_label(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_collapse_to_suffixed_magnitudes() {
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(2_500), "2.5K");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(999_999), "1000.0K");
        assert_eq!(format_count(1_000_000), "1.0M");
    }

    #[test]
    fn rates_render_to_one_decimal() {
        assert_eq!(format_rate(0.0), "0.0");
        assert_eq!(format_rate(87.25), "87.2");
        assert_eq!(format_rate(4.56), "4.6");
    }

    #[test]
    fn digit_grouping_inserts_commas_in_threes() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn date_labels_are_short_month_day() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 30).unwrap();
        assert_eq!(format_date_label(date), "Jul 30");
    }

    #[test]
    // Untrusted markup-looking text passes through literally.
    fn sanitize_keeps_markup_literal() {
        assert_eq!(sanitize_label("<b>x</b>"), "<b>x</b>");
        assert_eq!(sanitize_label("Wireless & \"smart\" plug"), "Wireless & \"smart\" plug");
    }

    #[test]
    // Terminal control sequences in feed text are stripped, not rendered.
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize_label("red\x1b[31malert"), "red[31malert");
        assert_eq!(sanitize_label("line\nbreak\ttab"), "linebreaktab");
    }
}
