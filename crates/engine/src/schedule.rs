//! Schedule synthesis.
//!
//! Each day of the plan takes a role from a fixed pedagogical progression
//! (introduce → deliberate practice → mixed review → simulated assessment
//! → light reset → consolidation), cycling when the plan is longer than
//! the progression. The daily minute budget splits roughly 70/30 into
//! deep work and review, rendered at 5-minute granularity.

use chrono::{Local, NaiveDate};
use studymate_core::{StudyBlock, StudyPlan};

use crate::profile::SessionProfile;

/// Share of the daily minutes that goes to deep work, in percent.
const DEEP_WORK_PCT: u32 = 70;
/// Granularity of rendered durations, in minutes.
const ROUND_STEP: u32 = 5;
/// Wire format of the exam date (`<input type="date">` value).
const EXAM_DATE_FMT: &str = "%Y-%m-%d";

/// One role in the pedagogical progression.
struct DayTheme {
    /// Headline prefix for the day's focus, e.g. "Introduce".
    label: &'static str,
    /// Short angle for the secondary focus line.
    angle: &'static str,
    deep_work: &'static str,
    review: &'static str,
    checkpoints: &'static [&'static str],
}

const PROGRESSION: [DayTheme; 6] = [
    DayTheme {
        label: "Introduce",
        angle: "new ground",
        deep_work: "first-pass study of new material",
        review: "recap of today's notes",
        checkpoints: &[
            "Write down the three ideas that felt hardest today.",
            "Can you state today's topic in one sentence, from memory?",
        ],
    },
    DayTheme {
        label: "Practice",
        angle: "drill day",
        deep_work: "deliberate practice on core problems",
        review: "walkthrough of every miss",
        checkpoints: &["Redo the two problems you missed without looking at solutions."],
    },
    DayTheme {
        label: "Mixed review",
        angle: "mixing it up",
        deep_work: "mixed problems across everything so far",
        review: "flagging of weak spots",
        checkpoints: &[
            "Which topic cost you the most time today?",
            "Quiz yourself out of order, not in note order.",
        ],
    },
    DayTheme {
        label: "Assess",
        angle: "test conditions",
        deep_work: "a timed mock assessment",
        review: "scoring and an error log",
        checkpoints: &["Score the mock test and list every miss by topic."],
    },
    DayTheme {
        label: "Reset",
        angle: "easy pace",
        deep_work: "light review at an easy pace",
        review: "a short pass over your error log",
        checkpoints: &["Name one thing that got easier since you started."],
    },
    DayTheme {
        label: "Consolidate",
        angle: "tying it together",
        deep_work: "rebuilding your summary sheet from memory",
        review: "spot-checks against the source material",
        checkpoints: &[
            "Teach the whole topic out loud in five minutes.",
            "What would you study first with one more day?",
        ],
    },
];

/// Build the study plan for a profile, anchored to the local date.
pub fn build_plan(profile: &SessionProfile) -> StudyPlan {
    plan_for_date(profile, Local::now().date_naive())
}

/// Date-pinned core, separated so tests control "today".
pub(crate) fn plan_for_date(profile: &SessionProfile, today: NaiveDate) -> StudyPlan {
    let (deep_minutes, review_minutes) = split_minutes(profile.minutes_per_day);

    let blocks = (0..profile.days_available)
        .map(|i| {
            let theme = &PROGRESSION[i as usize % PROGRESSION.len()];
            StudyBlock {
                day: format!("Day {}", i + 1),
                focus: vec![
                    format!("{}: {}", theme.label, profile.goal),
                    format!("{} — {}", profile.subject, theme.angle),
                ],
                deep_work: format!("{deep_minutes} min {}", theme.deep_work),
                review: format!("{review_minutes} min {}", theme.review),
                checkpoints: theme.checkpoints.iter().map(|c| c.to_string()).collect(),
            }
        })
        .collect();

    StudyPlan {
        summary: plan_summary(profile),
        exam_countdown: exam_countdown(profile.exam_date.as_deref(), today),
        blocks,
    }
}

fn plan_summary(profile: &SessionProfile) -> String {
    let level = profile
        .grade_level
        .as_deref()
        .map(|g| format!(" at {g} level"))
        .unwrap_or_default();
    format!(
        "A {}-day {} sprint{} aimed at: {}.",
        profile.days_available, profile.subject, level, profile.goal
    )
}

/// 70/30 deep-work/review split, each rounded to the nearest 5 minutes
/// with a 5-minute floor so tiny budgets never render "0 min".
fn split_minutes(total: u32) -> (u32, u32) {
    let deep_raw = total * DEEP_WORK_PCT / 100;
    let deep = round_step(deep_raw).max(ROUND_STEP);
    let review = round_step(total - deep_raw).max(ROUND_STEP);
    (deep, review)
}

fn round_step(minutes: u32) -> u32 {
    (minutes + ROUND_STEP / 2) / ROUND_STEP * ROUND_STEP
}

/// Whole days until the exam. `None` for a missing, unparsable, or past
/// date — a malformed date must never fail the request.
fn exam_countdown(exam_date: Option<&str>, today: NaiveDate) -> Option<u32> {
    let date = NaiveDate::parse_from_str(exam_date?.trim(), EXAM_DATE_FMT).ok()?;
    u32::try_from((date - today).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn profile(days: u32, minutes: u32) -> SessionProfile {
        SessionProfile {
            subject: "Biology".into(),
            goal: "Master mitosis".into(),
            exam_date: None,
            grade_level: None,
            learning_style: None,
            minutes_per_day: minutes,
            days_available: days,
            days_requested: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn block_count_matches_profile_days() {
        for days in 1..=14 {
            let plan = plan_for_date(&profile(days, 60), today());
            assert_eq!(plan.blocks.len(), days as usize);
        }
    }

    #[test]
    fn day_labels_are_unique_and_ordered() {
        let plan = plan_for_date(&profile(14, 60), today());
        assert_eq!(plan.blocks[0].day, "Day 1");
        assert_eq!(plan.blocks[13].day, "Day 14");
        let mut days: Vec<&str> = plan.blocks.iter().map(|b| b.day.as_str()).collect();
        days.dedup();
        assert_eq!(days.len(), 14);
    }

    #[test]
    fn progression_cycles_past_six_days() {
        let plan = plan_for_date(&profile(8, 60), today());
        // Day 7 wraps back to the first role.
        assert_eq!(plan.blocks[6].focus[0], plan.blocks[0].focus[0]);
        assert_eq!(plan.blocks[7].focus[0], plan.blocks[1].focus[0]);
    }

    #[test]
    fn sixty_minutes_split_to_forty_twenty() {
        let plan = plan_for_date(&profile(4, 60), today());
        for block in &plan.blocks {
            assert!(block.deep_work.starts_with("40 min "), "{}", block.deep_work);
            assert!(block.review.starts_with("20 min "), "{}", block.review);
        }
    }

    #[test]
    fn ninety_minutes_round_to_five() {
        let plan = plan_for_date(&profile(1, 90), today());
        assert!(plan.blocks[0].deep_work.starts_with("65 min "));
        assert!(plan.blocks[0].review.starts_with("25 min "));
    }

    #[test]
    fn tiny_budget_never_renders_zero_minutes() {
        let plan = plan_for_date(&profile(1, 5), today());
        assert!(plan.blocks[0].deep_work.starts_with("5 min "));
        assert!(plan.blocks[0].review.starts_with("5 min "));
    }

    #[test]
    fn first_day_introduces_and_fourth_day_assesses() {
        let plan = plan_for_date(&profile(6, 60), today());
        assert_eq!(plan.blocks[0].focus[0], "Introduce: Master mitosis");
        assert!(plan.blocks[3].deep_work.contains("mock assessment"));
        assert!(plan.blocks[3].checkpoints[0].contains("mock test"));
    }

    #[test]
    fn every_block_has_checkpoints_and_focus() {
        let plan = plan_for_date(&profile(14, 60), today());
        for block in &plan.blocks {
            assert!(!block.focus.is_empty());
            assert!((1..=2).contains(&block.checkpoints.len()));
        }
    }

    #[test]
    fn countdown_counts_whole_days() {
        let mut p = profile(4, 60);
        let exam = today().checked_add_days(Days::new(10)).unwrap();
        p.exam_date = Some(exam.format("%Y-%m-%d").to_string());
        let plan = plan_for_date(&p, today());
        assert_eq!(plan.exam_countdown, Some(10));
    }

    #[test]
    fn exam_today_counts_as_zero() {
        let mut p = profile(4, 60);
        p.exam_date = Some(today().format("%Y-%m-%d").to_string());
        let plan = plan_for_date(&p, today());
        assert_eq!(plan.exam_countdown, Some(0));
    }

    #[test]
    fn past_or_malformed_dates_yield_no_countdown() {
        for bad in ["2020-01-01", "not-a-date", "2026/03/20", ""] {
            let mut p = profile(4, 60);
            p.exam_date = Some(bad.into());
            let plan = plan_for_date(&p, today());
            assert_eq!(plan.exam_countdown, None, "exam_date = {bad:?}");
        }
    }

    #[test]
    fn summary_names_days_subject_and_goal() {
        let plan = plan_for_date(&profile(4, 60), today());
        assert_eq!(plan.summary, "A 4-day Biology sprint aimed at: Master mitosis.");
    }

    #[test]
    fn summary_includes_grade_level_when_present() {
        let mut p = profile(4, 60);
        p.grade_level = Some("AP".into());
        let plan = plan_for_date(&p, today());
        assert!(plan.summary.contains("at AP level"));
    }
}
