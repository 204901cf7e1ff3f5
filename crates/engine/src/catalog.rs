//! Static resource catalog and topic lookup.
//!
//! The catalog is a fixed ordered table; lookup scans it once against
//! tokens drawn from the subject, goal, and message, keeping catalog
//! order among matches. No matches at all falls back to the leading
//! general-purpose entries.

use studymate_core::Resource;

use crate::profile::SessionProfile;

/// Most resources ever recommended.
const MAX_RESULTS: usize = 4;
/// How many leading entries form the no-match default set.
const DEFAULT_COUNT: usize = 3;

struct CatalogEntry {
    title: &'static str,
    url: &'static str,
    description: &'static str,
    /// Lowercase singular topic tags.
    tags: &'static [&'static str],
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Khan Academy",
        url: "https://www.khanacademy.org",
        description: "Free lessons and exercises across math and the sciences.",
        tags: &[
            "math", "algebra", "calculus", "geometry", "biology", "chemistry", "physics",
            "science", "statistic",
        ],
    },
    CatalogEntry {
        title: "Anki",
        url: "https://apps.ankiweb.net",
        description: "Spaced-repetition flashcards that schedule reviews for you.",
        tags: &["flashcard", "memorize", "vocab", "vocabulary", "recall", "language"],
    },
    CatalogEntry {
        title: "Pomofocus",
        url: "https://pomofocus.io",
        description: "A no-friction Pomodoro timer for focus blocks.",
        tags: &["focus", "timer", "pomodoro", "procrastination", "overwhelmed", "distracted"],
    },
    CatalogEntry {
        title: "Quizlet",
        url: "https://quizlet.com",
        description: "Shared decks and practice tests for almost any course.",
        tags: &["quiz", "term", "definition", "flashcard", "test"],
    },
    CatalogEntry {
        title: "OpenStax",
        url: "https://openstax.org",
        description: "Peer-reviewed, openly licensed college textbooks.",
        tags: &[
            "textbook", "biology", "chemistry", "physics", "history", "economics",
            "psychology", "sociology",
        ],
    },
    CatalogEntry {
        title: "Paul's Online Math Notes",
        url: "https://tutorial.math.lamar.edu",
        description: "Worked examples from algebra through differential equations.",
        tags: &["math", "algebra", "calculus", "equation", "derivative", "integral"],
    },
    CatalogEntry {
        title: "Purdue OWL",
        url: "https://owl.purdue.edu",
        description: "Writing, citation, and grammar guides from Purdue.",
        tags: &["essay", "writing", "grammar", "citation", "thesis", "english"],
    },
    CatalogEntry {
        title: "Crash Course",
        url: "https://www.youtube.com/@crashcourse",
        description: "Fast, well-produced topic overviews in video form.",
        tags: &["history", "biology", "literature", "government", "overview", "video"],
    },
];

/// Recommend up to four resources for this request, catalog order
/// preserved, titles unique.
pub fn recommend(profile: &SessionProfile, message: &str) -> Vec<Resource> {
    let text = format!("{} {} {}", profile.subject, profile.goal, message);
    let tokens = tokenize(&text);

    let mut picks: Vec<Resource> = Vec::new();
    for entry in CATALOG {
        if picks.len() == MAX_RESULTS {
            break;
        }
        if entry.matches(&tokens) && !picks.iter().any(|r| r.title == entry.title) {
            picks.push(entry.to_resource());
        }
    }

    if picks.is_empty() {
        picks = CATALOG
            .iter()
            .take(DEFAULT_COUNT)
            .map(CatalogEntry::to_resource)
            .collect();
    }

    picks
}

/// Lowercase alphanumeric runs.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl CatalogEntry {
    /// A tag matches a token exactly or with a trailing plural `s` shed.
    fn matches(&self, tokens: &[String]) -> bool {
        self.tags.iter().any(|tag| {
            tokens
                .iter()
                .any(|token| token == tag || token.trim_end_matches('s') == *tag)
        })
    }

    fn to_resource(&self) -> Resource {
        Resource {
            title: self.title.to_string(),
            url: self.url.to_string(),
            description: self.description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(subject: &str, goal: &str) -> SessionProfile {
        SessionProfile {
            subject: subject.into(),
            goal: goal.into(),
            exam_date: None,
            grade_level: None,
            learning_style: None,
            minutes_per_day: 60,
            days_available: 6,
            days_requested: false,
        }
    }

    fn titles(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn no_match_falls_back_to_the_leading_entries() {
        let picks = recommend(&profile("your subject", "make steady progress"), "hi");
        assert_eq!(
            titles(&picks),
            vec!["Khan Academy", "Anki", "Pomofocus"]
        );
    }

    #[test]
    fn subject_match_preserves_catalog_order() {
        let picks = recommend(&profile("Biology", "Master mitosis"), "");
        assert_eq!(
            titles(&picks),
            vec!["Khan Academy", "OpenStax", "Crash Course"]
        );
    }

    #[test]
    fn result_capped_at_four() {
        let picks = recommend(
            &profile("Math", "write a history essay"),
            "flashcards and focus",
        );
        assert_eq!(picks.len(), 4);
    }

    #[test]
    fn titles_are_unique() {
        let picks = recommend(&profile("Math", "algebra and calculus practice"), "math");
        let mut seen = titles(&picks);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), picks.len());
    }

    #[test]
    fn plural_tokens_match_singular_tags() {
        let picks = recommend(&profile("Spanish", "drill flashcards daily"), "");
        assert!(titles(&picks).contains(&"Anki"));
    }

    #[test]
    fn identical_input_yields_identical_resources() {
        let p = profile("Chemistry", "balance equations");
        assert_eq!(recommend(&p, "help"), recommend(&p, "help"));
    }
}
