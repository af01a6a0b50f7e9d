//! Conversion from API records to display-ready episodes.

use crate::error::{CatalogError, Result};
use crate::types::{ApiEpisode, RawDuration};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use podcastr_core::{format_duration, format_published_date, DisplayLocale, Episode, EpisodeId};
use std::time::Duration;

/// Layout json-server seeds use for `published_at`
const PLAIN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl ApiEpisode {
    /// Normalize into an [`Episode`] with pre-formatted display strings.
    pub fn into_episode(self, locale: DisplayLocale) -> Result<Episode> {
        let id = EpisodeId::parse(&self.id).map_err(|e| invalid(&self.id, e.to_string()))?;

        let published = parse_published_at(&self.published_at).ok_or_else(|| {
            invalid(
                &self.id,
                format!("unrecognized publication date '{}'", self.published_at),
            )
        })?;

        let duration = duration_from_raw(&self.file.duration)
            .ok_or_else(|| invalid(&self.id, format!("bad duration {:?}", self.file.duration)))?;

        Ok(Episode {
            id,
            title: self.title,
            thumbnail_url: self.thumbnail,
            members: self.members,
            published_at: format_published_date(published, locale),
            duration,
            duration_display: format_duration(duration),
            media_url: self.file.url,
            description: self.description,
        })
    }
}

fn invalid(id: &str, reason: String) -> CatalogError {
    CatalogError::InvalidEpisode {
        id: id.to_string(),
        reason,
    }
}

/// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS` (taken as UTC).
pub(crate) fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, PLAIN_DATE_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Whole seconds; fractions are truncated, negatives rejected.
pub(crate) fn duration_from_raw(raw: &RawDuration) -> Option<Duration> {
    let seconds = match raw {
        RawDuration::Seconds(secs) => return Some(Duration::from_secs(*secs)),
        RawDuration::Fractional(secs) => *secs,
        RawDuration::Text(text) => text.trim().parse::<f64>().ok()?,
    };

    if seconds.is_finite() && seconds >= 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Duration::from_secs(seconds.trunc() as u64))
    } else {
        None
    }
}
