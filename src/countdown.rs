use crate::models::Event;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency bucket for a countdown target, used for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Ended,
    Urgent,
    Soon,
    Upcoming,
    Distant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days_remaining: i64,
    pub is_past: bool,
    pub tier: Tier,
}

/// Days-remaining classification between two calendar dates.
///
/// Working on whole dates keeps the arithmetic midnight-aligned: the target
/// day itself counts as zero days remaining and already past, never a
/// fraction from clock skew.
pub fn classify(target: NaiveDate, now: NaiveDate) -> Countdown {
    let diff = (target - now).num_days();
    let is_past = diff <= 0;
    let days_remaining = diff.max(0);
    let tier = if is_past {
        Tier::Ended
    } else if days_remaining <= 7 {
        Tier::Urgent
    } else if days_remaining <= 28 {
        Tier::Soon
    } else if days_remaining <= 60 {
        Tier::Upcoming
    } else {
        Tier::Distant
    };

    Countdown {
        days_remaining,
        is_past,
        tier,
    }
}

/// Classify a stored `YYYY-MM-DD` date string. An unparsable date degrades
/// to "already ended" rather than an error.
pub fn classify_date(date: &str, now: NaiveDate) -> Countdown {
    match parse_event_date(date) {
        Some(target) => classify(target, now),
        None => Countdown {
            days_remaining: 0,
            is_past: true,
            tier: Tier::Ended,
        },
    }
}

/// Concatenate fixed-then-custom and stable-sort ascending by date, so equal
/// dates keep fixed entries ahead of custom ones. Unparsable dates sort
/// first, alongside the long past.
pub fn merge_events(fixed: Vec<Event>, custom: Vec<Event>) -> Vec<Event> {
    let mut merged: Vec<Event> = fixed.into_iter().chain(custom).collect();
    merged.sort_by_key(|event| parse_event_date(&event.date).unwrap_or(NaiveDate::MIN));
    merged
}

fn parse_event_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}
