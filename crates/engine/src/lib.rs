//! # StudyMate Engine
//!
//! The assistant-response generator: a pure, synchronous, deterministic
//! function from a study request to a structured response. No I/O, no
//! shared state, no randomness — identical requests produce identical
//! responses (exam countdowns aside, which are measured from the current
//! date).
//!
//! Control flow: [`generate`] resolves defaults into a [`SessionProfile`],
//! dispatches on [`Mode`], and assembles the response from the schedule,
//! action-item, resource, and morale components.
//!
//! [`Mode`]: studymate_core::Mode

pub mod actions;
pub mod catalog;
pub mod morale;
pub mod profile;
pub mod reply;
pub mod schedule;

use studymate_core::{AssistantRequest, AssistantResponse, Mode};
use tracing::debug;

pub use profile::SessionProfile;

/// Generate the full response for a request.
///
/// Total over the request shape: unknown or missing optional fields mean
/// "use the default", never an error. Concurrent calls are independent —
/// all state is call-local and the catalogs are read-only.
pub fn generate(request: &AssistantRequest) -> AssistantResponse {
    let profile = SessionProfile::from_request(request);
    debug!(mode = ?request.mode, subject = %profile.subject, "generating assistant response");

    // Plan mode always schedules; check-in schedules only when the
    // request carried an explicit day count.
    let study_plan = match request.mode {
        Mode::Plan => Some(schedule::build_plan(&profile)),
        Mode::CheckIn if profile.days_requested => Some(schedule::build_plan(&profile)),
        _ => None,
    };

    let action_items =
        actions::synthesize(&profile, request.mode, study_plan.as_ref(), &request.message);
    let resources = catalog::recommend(&profile, &request.message);
    let (motivation, reflection) = morale::compose(request.mode, &request.message, &profile);
    let summary = reply::summarize(&profile, request.mode);
    let reply = reply::compose(&request.history, &summary, &action_items, study_plan.as_ref());

    AssistantResponse {
        reply,
        summary,
        action_items,
        resources,
        study_plan,
        motivation,
        reflection,
    }
}
