// Display formatters
//
// Shared formatting for call rows, the detail modal, and truncation.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Call start time, e.g. "Mar 4, 2024 • 9:05 PM"
pub fn format_call_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%b %-d, %Y • %-I:%M %p").to_string()
}

/// Whole seconds, e.g. "61s"
pub fn format_duration(secs: u64) -> String {
    format!("{}s", secs)
}

/// Dollars to three places, e.g. "$0.125"
pub fn format_cost(dollars: f64) -> String {
    format!("${:.3}", dollars)
}

/// Cut `s` to at most `width` display columns, marking the cut with '…'
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns. Newlines in the input are kept;
/// words wider than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;

        for word in paragraph.split_whitespace() {
            let w = word.width();
            if used > 0 && used + 1 + w > width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            if w > width {
                // Hard-split an overlong word
                for c in word.chars() {
                    let cw = c.width().unwrap_or(0);
                    if used + cw > width {
                        lines.push(std::mem::take(&mut line));
                        used = 0;
                    }
                    line.push(c);
                    used += cw;
                }
                continue;
            }
            if used > 0 {
                line.push(' ');
                used += 1;
            }
            line.push_str(word);
            used += w;
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn call_time_format() {
        let t = Utc.with_ymd_and_hms(2024, 3, 4, 21, 5, 0).unwrap();
        assert_eq!(format_call_time(&t), "Mar 4, 2024 • 9:05 PM");

        let t = Utc.with_ymd_and_hms(2024, 11, 20, 0, 30, 0).unwrap();
        assert_eq!(format_call_time(&t), "Nov 20, 2024 • 12:30 AM");
    }

    #[test]
    fn cost_and_duration() {
        assert_eq!(format_cost(0.125), "$0.125");
        assert_eq!(format_cost(1.0), "$1.000");
        assert_eq!(format_duration(61), "61s");
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Asked about hours", 8), "Asked a…");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 9),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }
}
