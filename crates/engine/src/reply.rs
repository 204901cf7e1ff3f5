//! Summary and reply composition.
//!
//! The reply is pure string templating over already-computed parts; the
//! only branching is presence checks on optional fields. Newlines become
//! paragraph breaks in the chat client.

use studymate_core::{ChatTurn, Mode, StudyPlan};

use crate::profile::SessionProfile;

const OPENER_FRESH: &str = "Let's get to work.";
const OPENER_RETURNING: &str = "Good — picking up where we left off.";
const CLOSING: &str = "What do you want to tackle first?";

/// One-line session summary for the focus board.
pub fn summarize(profile: &SessionProfile, mode: Mode) -> String {
    match mode {
        Mode::Chat => format!("Today's focus: {} — {}.", profile.subject, profile.goal),
        Mode::Plan => format!(
            "{} days of {} mapped out, working toward: {}.",
            profile.days_available, profile.subject, profile.goal
        ),
        Mode::CheckIn => format!("Checking in on {} — {}.", profile.subject, profile.goal),
    }
}

/// Merge the response fragments into the conversational reply.
pub fn compose(
    history: &[ChatTurn],
    summary: &str,
    action_items: &[String],
    plan: Option<&StudyPlan>,
) -> String {
    let opener = if history.is_empty() {
        OPENER_FRESH
    } else {
        OPENER_RETURNING
    };

    let mut reply = format!("{opener} {summary}");

    if let Some(first) = action_items.first() {
        reply.push_str("\nStart here: ");
        reply.push_str(first);
    }
    if let Some(second) = action_items.get(1) {
        reply.push_str("\nAfter that: ");
        reply.push_str(second);
    }
    if let Some(plan) = plan {
        reply.push_str("\nYour schedule: ");
        reply.push_str(&plan.summary);
    }

    reply.push('\n');
    reply.push_str(CLOSING);
    reply
}
