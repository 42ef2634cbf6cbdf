//! Timestamp display for warning start and end times.
//!
//! Human-readable dates follow the CMS convention: the pattern comes from the
//! language file (`DATE_FORMAT_LC2`) and uses PHP `date()` letters, with day
//! and month names resolved through the same [`Language`].

use chrono::{DateTime, Datelike, FixedOffset, Offset, SecondsFormat, Timelike, Utc};

use crate::language::Language;

const DAY_KEYS: [(&str, &str); 7] = [
    ("MONDAY", "MON"),
    ("TUESDAY", "TUE"),
    ("WEDNESDAY", "WED"),
    ("THURSDAY", "THU"),
    ("FRIDAY", "FRI"),
    ("SATURDAY", "SAT"),
    ("SUNDAY", "SUN"),
];

const MONTH_KEYS: [(&str, &str); 12] = [
    ("JANUARY", "JANUARY_SHORT"),
    ("FEBRUARY", "FEBRUARY_SHORT"),
    ("MARCH", "MARCH_SHORT"),
    ("APRIL", "APRIL_SHORT"),
    ("MAY", "MAY_SHORT"),
    ("JUNE", "JUNE_SHORT"),
    ("JULY", "JULY_SHORT"),
    ("AUGUST", "AUGUST_SHORT"),
    ("SEPTEMBER", "SEPTEMBER_SHORT"),
    ("OCTOBER", "OCTOBER_SHORT"),
    ("NOVEMBER", "NOVEMBER_SHORT"),
    ("DECEMBER", "DECEMBER_SHORT"),
];

/// Formats Unix timestamps in a fixed site offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    offset: FixedOffset,
}

impl DateFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Parse `Z`, `UTC`, `+HH:MM`, `+HHMM` or `+HH`.
    pub fn parse_offset(raw: &str) -> Option<FixedOffset> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
            return Some(Utc.fix());
        }

        let (sign, rest) = if let Some(rest) = raw.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = raw.strip_prefix('-') {
            (-1, rest)
        } else {
            return None;
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let (hours, minutes) = match digits.len() {
            2 => (digits.parse::<i32>().ok()?, 0),
            4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
            _ => return None,
        };
        if minutes >= 60 {
            return None;
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn local(&self, timestamp: i64) -> Option<DateTime<FixedOffset>> {
        DateTime::<Utc>::from_timestamp(timestamp, 0).map(|dt| dt.with_timezone(&self.offset))
    }

    /// Machine-readable form for `<time datetime>`, e.g. `2024-02-01T18:00:00+01:00`.
    pub fn iso8601(&self, timestamp: i64) -> Option<String> {
        self.local(timestamp)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    /// Render `timestamp` with a PHP `date()` style pattern.
    ///
    /// Supported letters: `d D j l N w F M m n Y y H G h g i s a A`; a backslash
    /// emits the next character literally and anything else is copied as is.
    pub fn format(&self, timestamp: i64, pattern: &str, language: &Language) -> Option<String> {
        let dt = self.local(timestamp)?;
        let day = DAY_KEYS[dt.weekday().num_days_from_monday() as usize];
        let month = MONTH_KEYS[dt.month0() as usize];
        let (pm, hour12) = dt.hour12();

        let mut out = String::with_capacity(pattern.len() * 2);
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(next) = chars.next() {
                        out.push(next);
                    }
                }
                'd' => out.push_str(&format!("{:02}", dt.day())),
                'j' => out.push_str(&dt.day().to_string()),
                'D' => out.push_str(&language.text(day.1)),
                'l' => out.push_str(&language.text(day.0)),
                'N' => out.push_str(&dt.weekday().number_from_monday().to_string()),
                'w' => out.push_str(&dt.weekday().num_days_from_sunday().to_string()),
                'F' => out.push_str(&language.text(month.0)),
                'M' => out.push_str(&language.text(month.1)),
                'm' => out.push_str(&format!("{:02}", dt.month())),
                'n' => out.push_str(&dt.month().to_string()),
                'Y' => out.push_str(&dt.year().to_string()),
                'y' => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
                'H' => out.push_str(&format!("{:02}", dt.hour())),
                'G' => out.push_str(&dt.hour().to_string()),
                'h' => out.push_str(&format!("{:02}", hour12)),
                'g' => out.push_str(&hour12.to_string()),
                'i' => out.push_str(&format!("{:02}", dt.minute())),
                's' => out.push_str(&format!("{:02}", dt.second())),
                'a' => out.push_str(if pm { "pm" } else { "am" }),
                'A' => out.push_str(if pm { "PM" } else { "AM" }),
                other => out.push(other),
            }
        }
        Some(out)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-02-01 17:30:05 UTC, a Thursday
    const TS: i64 = 1_706_808_605;

    #[test]
    fn test_iso8601_utc() {
        assert_eq!(
            DateFormatter::utc().iso8601(TS).as_deref(),
            Some("2024-02-01T17:30:05+00:00")
        );
    }

    #[test]
    fn test_iso8601_with_offset() {
        let offset = DateFormatter::parse_offset("+01:00").unwrap();
        assert_eq!(
            DateFormatter::new(offset).iso8601(TS).as_deref(),
            Some("2024-02-01T18:30:05+01:00")
        );
    }

    #[test]
    fn test_parse_offset_variants() {
        assert_eq!(DateFormatter::parse_offset("Z"), Some(Utc.fix()));
        assert_eq!(DateFormatter::parse_offset("+0530").map(|o| o.local_minus_utc()), Some(19_800));
        assert_eq!(DateFormatter::parse_offset("-03").map(|o| o.local_minus_utc()), Some(-10_800));
        assert_eq!(DateFormatter::parse_offset("+1:00"), None);
        assert_eq!(DateFormatter::parse_offset("01:00"), None);
        assert_eq!(DateFormatter::parse_offset("+01:75"), None);
        assert_eq!(DateFormatter::parse_offset(""), None);
    }

    #[test]
    fn test_long_format_english() {
        let en = Language::builtin("en-GB").unwrap();
        let out = DateFormatter::utc().format(TS, "l, d F Y H:i", &en);
        assert_eq!(out.as_deref(), Some("Thursday, 01 February 2024 17:30"));
    }

    #[test]
    fn test_long_format_german() {
        let de = Language::builtin("de-DE").unwrap();
        let out = DateFormatter::utc().format(TS, "l, d. F Y H:i", &de);
        assert_eq!(out.as_deref(), Some("Donnerstag, 01. Februar 2024 17:30"));
    }

    #[test]
    fn test_short_names_and_escapes() {
        let en = Language::builtin("en-GB").unwrap();
        let out = DateFormatter::utc().format(TS, "D j M y, g:i A \\a\\t s", &en);
        assert_eq!(out.as_deref(), Some("Thu 1 Feb 24, 5:30 PM at 05"));
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let en = Language::builtin("en-GB").unwrap();
        assert_eq!(DateFormatter::utc().iso8601(i64::MAX), None);
        assert_eq!(DateFormatter::utc().format(i64::MAX, "Y", &en), None);
    }
}
