//! Response-side domain types.
//!
//! The response mirrors what the web client renders: a reply paragraph for
//! the chat stream, a session summary and action items for the focus
//! board, recommended resources, and — in plan mode — the day-by-day
//! study plan. Optional sections are skipped entirely when absent so the
//! serialized JSON stays compact.

use serde::{Deserialize, Serialize};

/// A recommendable study resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// One day's unit of a generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBlock {
    /// Label unique within the plan, e.g. "Day 3".
    pub day: String,

    /// Non-empty; the first element is the day's headline topic.
    pub focus: Vec<String>,

    /// Human-readable deep-work allocation, e.g. "40 min focused practice".
    pub deep_work: String,

    /// Human-readable review allocation.
    pub review: String,

    /// Self-check prompts for the day.
    pub checkpoints: Vec<String>,
}

/// A multi-day study schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    /// One-sentence description of the plan.
    pub summary: String,

    /// Whole days until the exam; absent when the date is missing,
    /// unparsable, or already past.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_countdown: Option<u32>,

    /// One block per planned day, in order.
    pub blocks: Vec<StudyBlock>,
}

/// The engine's single output — always fully populated for the required
/// fields, optional sections present only when the mode produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    /// The conversational reply. Never empty.
    pub reply: String,

    /// One-line session summary for the focus board.
    pub summary: String,

    /// 3–5 imperative next steps.
    pub action_items: Vec<String>,

    /// Recommended resources; titles are unique.
    pub resources: Vec<Resource>,

    /// Present in plan mode, and in check-in mode when a day count was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_plan: Option<StudyPlan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}
