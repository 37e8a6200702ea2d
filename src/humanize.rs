//! Humanized relative timestamps
//!
//! Formats the "last updated X ago" fragment shown on every result row.
//! Buckets are coarse on purpose: nobody cares whether a repository was
//! updated 61 or 89 minutes ago.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Distance from `then` to `now` in words, without the "ago" suffix.
///
/// Timestamps in the future (clock skew between the API and the local host)
/// collapse into the smallest bucket.
pub fn distance(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    if secs < 45 {
        return "less than a minute".to_string();
    }
    if secs < 90 {
        return "1 minute".to_string();
    }

    let minutes = (secs + MINUTE / 2) / MINUTE;
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }

    let hours = (secs + HOUR / 2) / HOUR;
    if hours < 24 {
        return format!("about {hours} hours");
    }

    let days = secs / DAY;
    if days < 2 {
        return "1 day".to_string();
    }
    if days < 30 {
        return format!("{days} days");
    }

    let months = secs / MONTH;
    if months < 2 {
        return "about 1 month".to_string();
    }
    if months < 12 {
        return format!("{months} months");
    }

    let years = secs / YEAR;
    if years < 2 {
        return "about 1 year".to_string();
    }
    format!("about {years} years")
}

/// "last updated X ago" for a result row
pub fn last_updated(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("last updated {} ago", distance(then, now))
}
