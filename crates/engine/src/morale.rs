//! Motivation and reflection composition.
//!
//! Fires for every check-in exchange and for stress language in any mode.
//! Sentence choice hashes the message and subject into a fixed table with
//! SHA-256, so identical requests always produce identical text — there
//! is deliberately no randomness anywhere in the engine.

use sha2::{Digest, Sha256};
use studymate_core::Mode;

use crate::profile::SessionProfile;

/// Message fragments that signal the user is struggling.
const STRESS_MARKERS: &[&str] = &[
    "stuck",
    "overwhelmed",
    "behind",
    "stressed",
    "anxious",
    "panic",
    "burned out",
    "burnt out",
    "exhausted",
    "give up",
    "hopeless",
];

const MOTIVATION_LINES: &[&str] = &[
    "Progress today counts double because it felt hard. Keep the streak alive.",
    "You don't need a perfect session — you need the next twenty focused minutes.",
    "Feeling behind is a signal to shrink the task, not to stop. Pick the smallest next step.",
    "Every pass through hard material rewires it a little. Show up again tomorrow.",
    "The plan only works if it survives a bad day. Make today a short day, not a zero day.",
];

const REFLECTION_PROMPTS: &[&str] = &[
    "What was the single hardest moment this week, and what made it hard?",
    "Which study tactic gave you the most progress per minute lately?",
    "If tomorrow's session could only cover one thing, what would move you furthest?",
    "When were you most focused recently, and what did that environment look like?",
    "What would you tell a friend who was exactly where you are right now?",
];

/// Motivation/reflection for this exchange: check-in gets both, stress
/// language outside check-in gets motivation only, everything else gets
/// neither.
pub fn compose(
    mode: Mode,
    message: &str,
    profile: &SessionProfile,
) -> (Option<String>, Option<String>) {
    let stressed = is_stressed(message);
    if mode != Mode::CheckIn && !stressed {
        return (None, None);
    }

    let motivation = pick(MOTIVATION_LINES, "motivation", message, &profile.subject);
    if mode == Mode::CheckIn {
        let reflection = pick(REFLECTION_PROMPTS, "reflection", message, &profile.subject);
        (Some(motivation), Some(reflection))
    } else {
        (Some(motivation), None)
    }
}

fn is_stressed(message: &str) -> bool {
    let lowered = message.to_lowercase();
    STRESS_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Stable table pick: SHA-256 over a salt, the message, and the subject;
/// the first eight digest bytes index the table.
fn pick(table: &[&str], salt: &str, message: &str, subject: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(message.as_bytes());
    hasher.update(subject.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let index = u64::from_be_bytes(prefix) % table.len() as u64;
    table[index as usize].to_string()
}
