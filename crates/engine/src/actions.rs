//! Action item synthesis.
//!
//! A fixed, ordered rule table maps keyword hits in the goal, message,
//! and learning-style text to imperative next steps. At most one item per
//! category, table order preserved, generic fallbacks filling up to the
//! three-item minimum, hard cap at five.

use studymate_core::{Mode, StudyPlan};

use crate::profile::SessionProfile;

/// Fewest items ever returned.
const MIN_ITEMS: usize = 3;
/// Most items ever returned.
const MAX_ITEMS: usize = 5;

/// One category of the keyword table. Keywords are lowercase stems
/// matched by substring, so "memoriz" covers memorize/memorizing/memorized.
struct ActionRule {
    keywords: &'static [&'static str],
    item: &'static str,
}

/// Ordered table; earlier categories outrank later ones.
const RULES: &[ActionRule] = &[
    ActionRule {
        keywords: &["exam", "test", "final", "midterm", "quiz"],
        item: "Schedule a full-length timed practice test this week.",
    },
    ActionRule {
        keywords: &["practice", "problem", "exercise", "drill"],
        item: "Pick ten problems at mixed difficulty and mark every miss.",
    },
    ActionRule {
        keywords: &["memoriz", "flashcard", "vocab", "recall"],
        item: "Build a 20-card flashcard deck and run it twice today.",
    },
    ActionRule {
        keywords: &["essay", "writ", "frq"],
        item: "Outline one full written answer, then draft it under time.",
    },
    ActionRule {
        keywords: &["read", "chapter", "textbook", "notes"],
        item: "Summarize each section you read in one line, from memory.",
    },
    ActionRule {
        keywords: &["visual", "diagram", "map"],
        item: "Draw a one-page diagram of the topic without your notes.",
    },
    ActionRule {
        keywords: &["stuck", "confus", "lost", "behind"],
        item: "List exactly what is confusing and bring it to one focused session.",
    },
];

/// Generic study-habit fallbacks, used in order when too few rules fire.
const FALLBACKS: &[&str] = &[
    "Set a 25-minute timer and start with the hardest topic first.",
    "End today by writing tomorrow's first task on a note.",
    "Put your phone in another room for the next session.",
];

/// 3–5 concrete next steps for this request. Deterministic: identical
/// inputs always yield the identical ordered list.
pub fn synthesize(
    profile: &SessionProfile,
    mode: Mode,
    plan: Option<&StudyPlan>,
    message: &str,
) -> Vec<String> {
    let haystack = format!(
        "{} {} {}",
        profile.goal,
        message,
        profile.learning_style.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let mut items: Vec<String> = Vec::new();

    // Lead item: anchor the plan when there is one, otherwise the
    // check-in ritual.
    if let Some(first_block) = plan.and_then(|p| p.blocks.first()) {
        items.push(format!(
            "Lock in {} on your calendar — {}.",
            first_block.day, first_block.deep_work
        ));
    } else if mode == Mode::CheckIn {
        items.push("Write one honest sentence about how today's session went.".to_string());
    }

    for rule in RULES {
        if items.len() == MAX_ITEMS {
            break;
        }
        if rule.keywords.iter().any(|k| haystack.contains(k)) {
            items.push(rule.item.to_string());
        }
    }

    for fallback in FALLBACKS {
        if items.len() >= MIN_ITEMS {
            break;
        }
        items.push(fallback.to_string());
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_goal(goal: &str) -> SessionProfile {
        SessionProfile {
            subject: "Biology".into(),
            goal: goal.into(),
            exam_date: None,
            grade_level: None,
            learning_style: None,
            minutes_per_day: 60,
            days_available: 6,
            days_requested: false,
        }
    }

    #[test]
    fn quiet_chat_request_gets_three_fallbacks() {
        let items = synthesize(&profile_with_goal("do well"), Mode::Chat, None, "hi");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], FALLBACKS[0]);
    }

    #[test]
    fn exam_language_triggers_the_mock_test_item() {
        let items = synthesize(
            &profile_with_goal("pass the final exam"),
            Mode::Chat,
            None,
            "",
        );
        assert!(items.iter().any(|i| i.contains("timed practice test")));
    }

    #[test]
    fn one_item_per_category_even_with_many_hits() {
        let items = synthesize(
            &profile_with_goal("exam test quiz midterm final"),
            Mode::Chat,
            None,
            "",
        );
        let mock_items = items
            .iter()
            .filter(|i| i.contains("timed practice test"))
            .count();
        assert_eq!(mock_items, 1);
    }

    #[test]
    fn learning_style_feeds_the_keyword_scan() {
        let mut profile = profile_with_goal("do well");
        profile.learning_style = Some("visual".into());
        let items = synthesize(&profile, Mode::Chat, None, "hi");
        assert!(items.iter().any(|i| i.contains("diagram")));
    }

    #[test]
    fn plan_lead_item_anchors_the_first_block() {
        let plan = crate::schedule::plan_for_date(
            &profile_with_goal("Master mitosis"),
            chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        );
        let items = synthesize(
            &profile_with_goal("Master mitosis"),
            Mode::Plan,
            Some(&plan),
            "",
        );
        assert!(items[0].contains("Day 1"));
    }

    #[test]
    fn check_in_without_plan_leads_with_the_ritual() {
        let items = synthesize(&profile_with_goal("keep going"), Mode::CheckIn, None, "");
        assert!(items[0].contains("honest sentence"));
    }

    #[test]
    fn capped_at_five_items() {
        let items = synthesize(
            &profile_with_goal("exam practice flashcards essay reading visual stuck"),
            Mode::Chat,
            None,
            "",
        );
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn identical_input_yields_identical_items() {
        let profile = profile_with_goal("practice for the test");
        let a = synthesize(&profile, Mode::Chat, None, "help me focus");
        let b = synthesize(&profile, Mode::Chat, None, "help me focus");
        assert_eq!(a, b);
    }
}
