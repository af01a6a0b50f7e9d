//! Display formatting for episode metadata

use chrono::{DateTime, Locale, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Locale used for publication dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLocale {
    /// Brazilian Portuguese ("22 jan 21")
    #[default]
    PtBr,
    /// US English ("22 Jan 21")
    EnUs,
}

impl DisplayLocale {
    fn chrono_locale(self) -> Locale {
        match self {
            Self::PtBr => Locale::pt_BR,
            Self::EnUs => Locale::en_US,
        }
    }
}

/// Format a duration as zero-padded `HH:MM:SS`
///
/// Hours are not wrapped at 24.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a publication date as `dd MMM yy` in the given locale
pub fn format_published_date(date: DateTime<Utc>, locale: DisplayLocale) -> String {
    date.format_localized("%d %b %y", locale.chrono_locale())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn duration_is_zero_padded() {
        assert_eq!(format_duration(Duration::ZERO), "00:00:00");
        assert_eq!(format_duration(Duration::from_secs(5)), "00:00:05");
        assert_eq!(format_duration(Duration::from_secs(3725)), "01:02:05");
    }

    #[test]
    fn duration_ignores_subsecond_part() {
        assert_eq!(format_duration(Duration::from_millis(61_999)), "00:01:01");
    }

    #[test]
    fn duration_hours_do_not_wrap() {
        assert_eq!(format_duration(Duration::from_secs(100 * 3600)), "100:00:00");
    }

    #[test]
    fn published_date_en_us() {
        let date = Utc.with_ymd_and_hms(2021, 1, 22, 14, 56, 0).unwrap();
        assert_eq!(format_published_date(date, DisplayLocale::EnUs), "22 Jan 21");
    }

    #[test]
    fn published_date_pt_br() {
        let date = Utc.with_ymd_and_hms(2021, 1, 22, 14, 56, 0).unwrap();
        let formatted = format_published_date(date, DisplayLocale::PtBr);
        assert!(formatted.starts_with("22 "));
        assert!(formatted.ends_with(" 21"));
        assert!(formatted.to_lowercase().contains("jan"));
    }

    #[test]
    fn locale_serde_names() {
        let json = serde_json::to_string(&DisplayLocale::PtBr).unwrap();
        assert_eq!(json, "\"ptbr\"");
        let parsed: DisplayLocale = serde_json::from_str("\"enus\"").unwrap();
        assert_eq!(parsed, DisplayLocale::EnUs);
    }
}
