//! Metadata normalization. Pure functions, no I/O.

use chrono::{Duration, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{watch_url, Track, Video};

const MAX_TITLE_CHARS: usize = 500;
const MAX_CHANNEL_CHARS: usize = 200;
const MAX_DESCRIPTION_CHARS: usize = 5000;

lazy_static! {
    static ref RELATIVE_DATE_RE: Regex =
        Regex::new(r"(?i)(\d+)\s+(second|minute|hour|day|week|month|year)s?\s+ago").unwrap();
}

/// Normalize a scraped search video: relative publish date becomes an
/// absolute ISO 8601 timestamp (or None when unparseable), text fields are
/// trimmed and truncated.
pub fn normalize_video(video: Video) -> Video {
    let Video {
        video_id,
        title,
        url,
        channel,
        channel_url,
        publish_date,
        view_count,
        description,
    } = video;
    Video {
        video_id,
        title: clean_text(title, MAX_TITLE_CHARS),
        url,
        channel: clean_text(channel, MAX_CHANNEL_CHARS),
        channel_url,
        publish_date: publish_date.as_deref().and_then(normalize_publish_date),
        view_count,
        description: clean_text(description, MAX_DESCRIPTION_CHARS),
    }
}

/// Normalize a playlist track. Unlike search videos, tracks keep YouTube's
/// raw relative date and duration strings; playlist consumers expect the
/// native display format.
pub fn normalize_track(track: Track) -> Track {
    let Track {
        video_id,
        title,
        url,
        channel,
        channel_url,
        publish_date,
        duration,
        view_count,
        position,
    } = track;
    let cleaned_title = clean_text(Some(title.clone()), MAX_TITLE_CHARS).unwrap_or(title);
    let url = if url.is_empty() {
        watch_url(&video_id)
    } else {
        url
    };
    Track {
        video_id,
        title: cleaned_title,
        url,
        channel: clean_text(channel, MAX_CHANNEL_CHARS),
        channel_url,
        publish_date,
        duration,
        view_count,
        position,
    }
}

/// Convert relative time text ("2 days ago") to an ISO 8601 UTC timestamp
/// with second precision. Months are 30 days, years 365. Anything that does
/// not match the pattern yields None.
pub fn normalize_publish_date(relative_text: &str) -> Option<String> {
    let captures = RELATIVE_DATE_RE.captures(relative_text)?;
    let amount: i64 = captures.get(1)?.as_str().parse().ok()?;
    let unit_seconds = match captures.get(2)?.as_str().to_lowercase().as_str() {
        "second" => 1,
        "minute" => 60,
        "hour" => 3_600,
        "day" => 86_400,
        "week" => 604_800,
        "month" => 2_592_000,
        "year" => 31_536_000,
        _ => return None,
    };
    let delta = Duration::try_seconds(amount.checked_mul(unit_seconds)?)?;
    let estimated = Utc::now().checked_sub_signed(delta)?;
    Some(estimated.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn clean_text(text: Option<String>, max_chars: usize) -> Option<String> {
    let cleaned = text?.trim().to_string();
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.chars().count() > max_chars {
        return Some(cleaned.chars().take(max_chars).collect());
    }
    Some(cleaned)
}
