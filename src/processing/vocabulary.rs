//! Fixed skill vocabulary and case-insensitive presence tests

use crate::error::{Result, ResumeMatcherError};
use aho_corasick::{AhoCorasick, MatchKind};

/// Skills recognised when no vocabulary is configured
pub const DEFAULT_SKILLS: [&str; 10] = [
    "Python", "Java", "SQL", "FastAPI", "React", "Node", "Django", "AWS", "Docker", "Kubernetes",
];

/// Ordered, immutable list of canonical skill names.
///
/// Matching is plain substring containment after lowercasing both sides, with
/// no word-boundary checks: "Java" is found inside "JavaScript".
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<String>,
    automaton: AhoCorasick,
}

impl SkillVocabulary {
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();

        if let Some(pos) = entries.iter().position(|e| e.is_empty()) {
            return Err(ResumeMatcherError::Configuration(format!(
                "Skill vocabulary entry {} is empty",
                pos + 1
            )));
        }

        let folded: Vec<String> = entries.iter().map(|e| e.to_lowercase()).collect();

        // Overlapping search needs standard semantics so that every pattern
        // occurring anywhere in the text is reported
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&folded)
            .map_err(|e| ResumeMatcherError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { entries, automaton })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Case-insensitive substring test of `entry` inside `text`
    pub fn contains(&self, text: &str, entry: &str) -> bool {
        self.contains_folded(&text.to_lowercase(), entry)
    }

    /// `contains` for a text that is already lowercased, so one folding of a
    /// document serves every entry tested against it
    pub fn contains_folded(&self, folded_text: &str, entry: &str) -> bool {
        folded_text.contains(&entry.to_lowercase())
    }

    /// Presence flag for every entry, in vocabulary order, from a single scan
    pub fn presence(&self, text: &str) -> Vec<bool> {
        let mut found = vec![false; self.entries.len()];
        if self.entries.is_empty() {
            return found;
        }

        let folded_text = text.to_lowercase();
        let mut remaining = self.entries.len();
        for mat in self.automaton.find_overlapping_iter(&folded_text) {
            let slot = &mut found[mat.pattern().as_usize()];
            if !*slot {
                *slot = true;
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }

        found
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS).expect("default skill vocabulary is valid")
    }
}
