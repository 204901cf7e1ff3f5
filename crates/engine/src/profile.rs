//! Explicit default-filling.
//!
//! All optional request fields are resolved once at entry into a fully
//! populated [`SessionProfile`], so downstream components never repeat
//! "is this present" checks. Out-of-range numeric values resolve to the
//! documented defaults instead of erroring — the engine is total over
//! the request shape.

use studymate_core::AssistantRequest;

/// Subject used when none was given.
pub const DEFAULT_SUBJECT: &str = "your subject";
/// Goal used when none was given.
pub const DEFAULT_GOAL: &str = "make steady progress";
/// Minutes per study day when absent or non-positive.
pub const DEFAULT_MINUTES: u32 = 60;
/// Day count when absent or outside the plannable range.
pub const DEFAULT_DAYS: u32 = 6;
/// Largest plannable day count.
pub const MAX_PLAN_DAYS: u32 = 14;

/// A request's study context with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProfile {
    pub subject: String,
    pub goal: String,
    /// Raw `YYYY-MM-DD` string; parsed (and possibly discarded) by the
    /// schedule synthesizer.
    pub exam_date: Option<String>,
    pub grade_level: Option<String>,
    pub learning_style: Option<String>,
    pub minutes_per_day: u32,
    /// Always within `[1, MAX_PLAN_DAYS]`.
    pub days_available: u32,
    /// Whether the request carried an explicit day count at all — check-in
    /// mode only schedules when it did.
    pub days_requested: bool,
}

impl SessionProfile {
    /// Resolve a request's context into a fully populated profile.
    pub fn from_request(request: &AssistantRequest) -> Self {
        let ctx = request.context.clone().unwrap_or_default();
        Self {
            subject: non_blank(ctx.subject).unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            goal: non_blank(ctx.goal).unwrap_or_else(|| DEFAULT_GOAL.to_string()),
            exam_date: non_blank(ctx.exam_date),
            grade_level: non_blank(ctx.grade_level),
            learning_style: non_blank(ctx.learning_style),
            minutes_per_day: normalize_minutes(ctx.time_per_day),
            days_available: normalize_days(ctx.days_available),
            days_requested: ctx.days_available.is_some(),
        }
    }
}

/// The web client sends `""` for untouched fields; treat blank as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn normalize_minutes(raw: Option<i64>) -> u32 {
    match raw {
        Some(minutes) if minutes > 0 => minutes as u32,
        _ => DEFAULT_MINUTES,
    }
}

/// Day counts outside `[1, MAX_PLAN_DAYS]` resolve to the default rather
/// than saturating at the bounds.
fn normalize_days(raw: Option<i64>) -> u32 {
    match raw {
        Some(days) if (1..=MAX_PLAN_DAYS as i64).contains(&days) => days as u32,
        _ => DEFAULT_DAYS,
    }
}
