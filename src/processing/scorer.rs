//! Job matching: score candidates by the share of required skills they mention

use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::vocabulary::SkillVocabulary;
use serde::{Deserialize, Serialize};

/// Outcome for one candidate document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub filename: String,
    /// Subset of the job's skills found in the document, in job-skill order
    pub matched_skills: Vec<String>,
    /// Percentage of job skills matched, rounded to two decimals
    pub match_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatches {
    pub job_skills: Vec<String>,
    pub matches: Vec<MatchResult>,
}

pub struct JobScorer<'a> {
    matcher: SkillMatcher<'a>,
}

impl<'a> JobScorer<'a> {
    pub fn new(vocabulary: &'a SkillVocabulary) -> Self {
        Self {
            matcher: SkillMatcher::new(vocabulary),
        }
    }

    /// Score every `(name, text)` pair against `job_description`.
    ///
    /// Produces exactly one result per document. Results are ranked by
    /// descending score; equal scores keep the order documents were supplied in.
    pub fn score<I, N, T>(&self, job_description: &str, documents: I) -> RankedMatches
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let job_skills = self.matcher.match_skills(job_description);

        let mut matches: Vec<MatchResult> = documents
            .into_iter()
            .map(|(name, text)| {
                let matched_skills = self.matcher.match_required(text.as_ref(), &job_skills);
                let match_score = match_score(matched_skills.len(), job_skills.len());
                MatchResult {
                    filename: name.into(),
                    matched_skills,
                    match_score,
                }
            })
            .collect();

        // sort_by is stable
        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        RankedMatches { job_skills, matches }
    }
}

/// `matched / required * 100` rounded to two decimals, exact halves to even;
/// zero when nothing is required
pub fn match_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    let raw = matched as f64 / required as f64 * 100.0;
    (raw * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(matches: &[MatchResult]) -> Vec<&str> {
        matches.iter().map(|m| m.filename.as_str()).collect()
    }

    #[test]
    fn test_two_candidate_scenario() {
        let vocab = SkillVocabulary::new(["Python", "SQL"]).unwrap();
        let scorer = JobScorer::new(&vocab);

        let ranked = scorer.score(
            "Need Python and SQL skills",
            vec![("A", "I know Python"), ("B", "I know SQL and Python")],
        );

        assert_eq!(ranked.job_skills, vec!["Python", "SQL"]);
        assert_eq!(names(&ranked.matches), vec!["B", "A"]);
        assert_eq!(ranked.matches[0].matched_skills, vec!["Python", "SQL"]);
        assert_eq!(ranked.matches[0].match_score, 100.0);
        assert_eq!(ranked.matches[1].matched_skills, vec!["Python"]);
        assert_eq!(ranked.matches[1].match_score, 50.0);
    }

    #[test]
    fn test_no_job_requirements_scores_zero() {
        let vocab = SkillVocabulary::default();
        let scorer = JobScorer::new(&vocab);

        let ranked = scorer.score(
            "Friendly barista wanted",
            vec![("a.txt", "Python SQL Docker"), ("b.txt", "")],
        );

        assert!(ranked.job_skills.is_empty());
        assert_eq!(ranked.matches.len(), 2);
        for m in &ranked.matches {
            assert_eq!(m.match_score, 0.0);
            assert!(m.matched_skills.is_empty());
        }
        assert_eq!(names(&ranked.matches), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_full_coverage_is_exactly_one_hundred() {
        let vocab = SkillVocabulary::default();
        let scorer = JobScorer::new(&vocab);

        let ranked = scorer.score(
            "Python, Django, AWS",
            vec![("cv.txt", "aws certified; DJANGO and python daily")],
        );
        assert_eq!(ranked.matches[0].match_score, 100.0);
    }

    #[test]
    fn test_ties_keep_supplied_order() {
        let vocab = SkillVocabulary::new(["Python", "SQL"]).unwrap();
        let scorer = JobScorer::new(&vocab);

        let ranked = scorer.score(
            "Python and SQL",
            vec![
                ("first", "python"),
                ("full", "python sql"),
                ("second", "sql"),
            ],
        );

        let scores: Vec<f64> = ranked.matches.iter().map(|m| m.match_score).collect();
        assert_eq!(scores, vec![100.0, 50.0, 50.0]);
        assert_eq!(names(&ranked.matches), vec!["full", "first", "second"]);
    }

    #[test]
    fn test_empty_documents_still_reported() {
        let vocab = SkillVocabulary::default();
        let scorer = JobScorer::new(&vocab);

        let ranked = scorer.score("Docker", vec![("empty.pdf", String::new())]);
        assert_eq!(ranked.matches.len(), 1);
        assert_eq!(ranked.matches[0].match_score, 0.0);
        assert!(ranked.matches[0].matched_skills.is_empty());
    }

    #[test]
    fn test_match_score_rounding() {
        assert_eq!(match_score(1, 3), 33.33);
        assert_eq!(match_score(2, 3), 66.67);
        assert_eq!(match_score(0, 4), 0.0);
        assert_eq!(match_score(0, 0), 0.0);
    }

    #[test]
    fn test_match_score_halves_round_to_even() {
        // 1/32, 3/32 and 5/32 land exactly on a half at the third decimal
        assert_eq!(match_score(1, 32), 3.12);
        assert_eq!(match_score(3, 32), 9.38);
        assert_eq!(match_score(5, 32), 15.62);
        assert_eq!(match_score(1, 8), 12.5);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = MatchResult {
            filename: "cv.pdf".to_string(),
            matched_skills: vec!["AWS".to_string()],
            match_score: 50.0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["filename"], "cv.pdf");
        assert_eq!(json["matched_skills"][0], "AWS");
        assert_eq!(json["match_score"], 50.0);
    }
}
