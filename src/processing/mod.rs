//! Skill detection, job scoring and the request pipeline

pub mod vocabulary;
pub mod skill_matcher;
pub mod scorer;
pub mod pipeline;

pub use pipeline::ResumePipeline;
pub use scorer::{JobScorer, MatchResult, RankedMatches};
pub use skill_matcher::{SkillMatcher, NOT_EXTRACTED};
pub use vocabulary::SkillVocabulary;
