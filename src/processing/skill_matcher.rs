//! Skill detection against the configured vocabulary

use crate::processing::vocabulary::SkillVocabulary;

/// Placeholder shown in place of an empty skill list when viewing a single resume
pub const NOT_EXTRACTED: &str = "Not Extracted";

pub struct SkillMatcher<'a> {
    vocabulary: &'a SkillVocabulary,
}

impl<'a> SkillMatcher<'a> {
    pub fn new(vocabulary: &'a SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Vocabulary entries present in `text`, in vocabulary order.
    /// An empty result means no skill was found.
    pub fn match_skills(&self, text: &str) -> Vec<String> {
        self.vocabulary
            .entries()
            .iter()
            .zip(self.vocabulary.presence(text))
            .filter_map(|(entry, present)| present.then(|| entry.clone()))
            .collect()
    }

    /// Entries of `required` that also occur in `text`, keeping `required`'s order
    pub fn match_required(&self, text: &str, required: &[String]) -> Vec<String> {
        if required.is_empty() {
            return Vec::new();
        }

        let folded_text = text.to_lowercase();
        required
            .iter()
            .filter(|skill| self.vocabulary.contains_folded(&folded_text, skill))
            .cloned()
            .collect()
    }
}

/// Skill list for display: the sentinel stands in for "nothing found"
pub fn display_skills(skills: Vec<String>) -> Vec<String> {
    if skills.is_empty() {
        vec![NOT_EXTRACTED.to_string()]
    } else {
        skills
    }
}
