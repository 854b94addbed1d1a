// crates/daylog-core/src/entry.rs - Entry addressing
//
// An entry is addressed by formatting the configured filename pattern
// against a clock reading. Tokens resemble strftime but are deliberately
// not strftime: %U here is ceil(elapsed-since-Jan-1 / one-week), which can
// yield 00 on Jan 1 and values past 52 near year end. That approximation is
// intentional and unclamped; do not "fix" it toward ISO-8601 weeks.
//
// TOKENS:
//   %Y  4-digit year
//   %m  2-digit month, zero-padded
//   %d  2-digit day, zero-padded
//   %U  2-digit week-of-year, zero-padded (approximate, see above)
//
// Substitution is a single left-to-right pass over the pattern, so tokens
// are replaced at most once per occurrence and digits produced by one token
// can never be re-read as part of another.

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, Utc};

const MS_PER_WEEK: i64 = 7 * 24 * 60 * 60 * 1000;

/// How many lines of an entry feed its listing excerpt.
const EXCERPT_LINES: usize = 3;

/// Maximum excerpt length in characters, before the ellipsis marker.
const EXCERPT_MAX_CHARS: usize = 60;

const ELLIPSIS: &str = "...";

/// Which wall clock the date fields are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Local,
    Utc,
}

impl Clock {
    /// Sample the current instant in this clock mode.
    ///
    /// Callers sample once per invocation and pass the reading down, so
    /// every derived name within one run agrees on the date.
    pub fn now(self) -> NaiveDateTime {
        match self {
            Clock::Local => Local::now().naive_local(),
            Clock::Utc => Utc::now().naive_utc(),
        }
    }
}

/// Format an entry filename from a pattern and a clock reading.
///
/// Pure: a fixed `at` and pattern always produce the same name. A token
/// that does not appear in the pattern is simply not substituted; a `%`
/// followed by anything else (or nothing) passes through literally.
pub fn format_name(pattern: &str, at: NaiveDateTime) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('Y') => {
                chars.next();
                out.push_str(&format!("{:04}", at.year()));
            }
            Some('m') => {
                chars.next();
                out.push_str(&format!("{:02}", at.month()));
            }
            Some('d') => {
                chars.next();
                out.push_str(&format!("{:02}", at.day()));
            }
            Some('U') => {
                chars.next();
                out.push_str(&format!("{:02}", week_of_year(at)));
            }
            _ => out.push('%'),
        }
    }

    out
}

/// Week-of-year as `ceil(elapsed since Jan 1 midnight / one week)`.
///
/// Unclamped: Jan 1 itself yields 0, and a long year's tail can exceed 52.
/// The value is only ever used as a filename component.
pub fn week_of_year(at: NaiveDateTime) -> i64 {
    let start_of_year = at
        .date()
        .with_ordinal(1)
        .map(|jan1| jan1.and_time(NaiveTime::MIN))
        .unwrap_or(at);
    let elapsed_ms = (at - start_of_year).num_milliseconds();
    (elapsed_ms + MS_PER_WEEK - 1).div_euclid(MS_PER_WEEK)
}

/// The pattern's literal extension: everything from the last `.` on.
///
/// The extension is assumed to be a static suffix of the pattern (date
/// tokens never produce dots), so this works on the unformatted pattern.
/// Patterns without a dot yield an empty string; configuration validation
/// rejects those up front.
pub fn extension_of(pattern: &str) -> &str {
    pattern
        .rfind('.')
        .map(|idx| &pattern[idx..])
        .unwrap_or("")
}

/// Build the short listing excerpt for an entry's content.
///
/// First three lines joined with single spaces, truncated to 60 characters;
/// the ellipsis marker is appended only when truncation actually occurred.
pub fn excerpt(content: &str) -> String {
    let joined = content
        .lines()
        .take(EXCERPT_LINES)
        .collect::<Vec<_>>()
        .join(" ");

    if joined.chars().count() <= EXCERPT_MAX_CHARS {
        return joined;
    }

    let mut clipped: String = joined.chars().take(EXCERPT_MAX_CHARS).collect();
    clipped.push_str(ELLIPSIS);
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_formats_known_date() {
        assert_eq!(
            format_name("%Y-%m-%d.md", at(2024, 3, 7, 9, 30)),
            "2024-03-07.md"
        );
    }

    #[test]
    fn test_format_is_deterministic() {
        let instant = at(2024, 3, 7, 9, 30);
        assert_eq!(
            format_name("%Y-w%U.md", instant),
            format_name("%Y-w%U.md", instant)
        );
    }

    #[test]
    fn test_zero_pads_month_and_day() {
        assert_eq!(format_name("%m%d.md", at(2025, 1, 5, 0, 0)), "0105.md");
    }

    #[test]
    fn test_absent_tokens_are_not_substituted() {
        assert_eq!(format_name("journal.md", at(2024, 3, 7, 0, 0)), "journal.md");
    }

    #[test]
    fn test_unknown_percent_sequences_pass_through() {
        assert_eq!(format_name("%q-%d.md", at(2024, 3, 7, 0, 0)), "%q-07.md");
        assert_eq!(format_name("%d%", at(2024, 3, 7, 0, 0)), "07%");
    }

    #[test]
    fn test_week_is_zero_on_jan_first() {
        assert_eq!(week_of_year(at(2024, 1, 1, 0, 0)), 0);
        assert_eq!(format_name("%U.md", at(2024, 1, 1, 0, 0)), "00.md");
    }

    #[test]
    fn test_week_boundary_is_exact_at_seven_days() {
        // Exactly one week elapsed: still week 1, one ms later rolls to 2.
        assert_eq!(week_of_year(at(2024, 1, 8, 0, 0)), 1);
        assert_eq!(week_of_year(at(2024, 1, 8, 0, 1)), 2);
    }

    #[test]
    fn test_week_for_early_march_leap_year() {
        // 2024-03-07 is ordinal day 67: 66 full days after Jan 1.
        assert_eq!(week_of_year(at(2024, 3, 7, 12, 0)), 10);
    }

    #[test]
    fn test_week_can_exceed_fifty_two() {
        assert_eq!(week_of_year(at(2021, 12, 31, 23, 0)), 53);
    }

    #[test]
    fn test_extension_of_pattern() {
        assert_eq!(extension_of("%Y-%m-%d.md"), ".md");
        assert_eq!(extension_of("notes.%U.txt"), ".txt");
        assert_eq!(extension_of("no-extension"), "");
    }

    #[test]
    fn test_excerpt_joins_first_three_lines() {
        assert_eq!(excerpt("one\ntwo\nthree\nfour"), "one two three");
    }

    #[test]
    fn test_excerpt_below_limit_has_no_ellipsis() {
        let content = "a".repeat(59);
        assert_eq!(excerpt(&content), content);
    }

    #[test]
    fn test_excerpt_at_limit_has_no_ellipsis() {
        let content = "a".repeat(60);
        assert_eq!(excerpt(&content), content);
    }

    #[test]
    fn test_excerpt_over_limit_is_clipped_with_ellipsis() {
        let content = "a".repeat(61);
        let got = excerpt(&content);
        assert_eq!(got, format!("{}...", "a".repeat(60)));
    }

    #[test]
    fn test_excerpt_counts_chars_after_join() {
        // 20 + 1 (joining space) + 40 = 61 chars joined.
        let content = format!("{}\n{}", "a".repeat(20), "b".repeat(40));
        let got = excerpt(&content);
        assert!(got.ends_with("..."));
        assert_eq!(got.chars().count(), 63);
    }
}
