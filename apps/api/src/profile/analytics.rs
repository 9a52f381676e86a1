//! Read-only summaries over the profile: skill counts and the employment timeline.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::profile::path::profile_path;
use crate::profile::store::ProfileStore;
use crate::query::format::{field_text, NOT_PROVIDED};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsCount {
    pub primary: usize,
    pub frameworks: usize,
    pub databases: usize,
    pub tools: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub company: String,
    pub role: String,
    /// Free-text range as stored, e.g. `"Sep 2022 - Present"`.
    pub period: String,
    pub current: bool,
    /// First day of the starting month, when `period` parses.
    pub start: Option<NaiveDate>,
    /// First day of the ending month; `None` for open-ended ranges.
    pub end: Option<NaiveDate>,
}

/// Number of entries in each list-valued skill category (0 when absent).
pub fn skills_count(store: &ProfileStore) -> SkillsCount {
    let len = |category: &str| {
        store
            .get(&profile_path!["skills", category])
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    };

    SkillsCount {
        primary: len("primary"),
        frameworks: len("frameworks"),
        databases: len("databases"),
        tools: len("tools"),
    }
}

/// Current job first, then previous jobs in stored order.
pub fn experience_timeline(store: &ProfileStore) -> Vec<TimelineEntry> {
    let current = store
        .get(&profile_path!["experience", "current"])
        .filter(|job| job.is_object())
        .map(|job| timeline_entry(job, true));

    let previous = store
        .get(&profile_path!["experience", "previous"])
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|job| job.is_object())
        .map(|job| timeline_entry(job, false));

    current.into_iter().chain(previous).collect()
}

fn timeline_entry(job: &Value, current: bool) -> TimelineEntry {
    let period = field_text(job.get("duration"), NOT_PROVIDED);
    let (start, end) = parse_period(&period);
    TimelineEntry {
        company: field_text(job.get("company"), NOT_PROVIDED),
        role: field_text(job.get("role"), NOT_PROVIDED),
        period,
        current,
        start,
        end,
    }
}

/// Splits `"Aug 2021 - Jun 2022"` into month dates. Unparseable halves are `None`.
fn parse_period(period: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let mut halves = period.splitn(2, '-');
    let start = halves.next().and_then(parse_month);
    let end = halves.next().and_then(parse_month);
    (start, end)
}

fn parse_month(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", text.trim()), "%d %b %Y").ok()
}
