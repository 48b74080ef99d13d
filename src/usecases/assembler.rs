//! Report assembly: order enriched chats by member count and stamp the report.

use crate::domain::{EnrichedChat, Report};
use chrono::{DateTime, Local};
use std::cmp::Reverse;

/// Build a report stamped with the current local time.
pub fn assemble(records: Vec<EnrichedChat>) -> Report {
    assemble_at(records, Local::now())
}

pub fn assemble_at(mut records: Vec<EnrichedChat>, generated_at: DateTime<Local>) -> Report {
    sort_by_members(&mut records);
    Report {
        chats: records,
        generated_at,
    }
}

/// Member count descending. `sort_by_key` is stable, so ties keep enrichment order.
pub fn sort_by_members(records: &mut [EnrichedChat]) {
    records.sort_by_key(|chat| Reverse(chat.member_count));
}
