//! Creation date heuristic.
//!
//! Reads the leading decimal digits of the chat id as Unix seconds. This is an
//! approximation tied to how Telegram allocated ids at some point; it is not a
//! documented property of the platform.
//!
//! Dates are taken in the local time zone, the same one the report footer uses.

use crate::domain::{ChatId, CreationEstimate};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Ids shorter than this carry no usable timestamp.
const MIN_DIGITS: usize = 6;
/// Width of the prefix read as seconds since the epoch.
const PREFIX_DIGITS: usize = 10;

pub fn estimate_creation(chat_id: ChatId) -> CreationEstimate {
    estimate_creation_in(chat_id, &Local)
}

/// Same estimate, with the calendar date taken in `tz`.
pub fn estimate_creation_in<Tz: TimeZone>(chat_id: ChatId, tz: &Tz) -> CreationEstimate {
    let digits = chat_id.unsigned_abs().to_string();
    if digits.len() < MIN_DIGITS {
        return CreationEstimate::Unknown;
    }
    let prefix = &digits[..digits.len().min(PREFIX_DIGITS)];
    prefix
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| CreationEstimate::Date(dt.with_timezone(tz).date_naive()))
        .unwrap_or(CreationEstimate::Unknown)
}
