//! Gap Analyzer: deterministic containment scoring of a resume against
//! extracted job requirements. No LLM call.
//!
//! A keyword is present when it occurs as a substring of the normalized
//! resume text (lowercase, whitespace collapsed). Score is the percentage
//! of keywords present, rounded to the nearest integer; zero keywords
//! score 100 (vacuously satisfied).

use serde::Serialize;

use crate::markup::ResumeDocument;
use crate::pipeline::job_analyzer::JobRequirements;

/// Scoring policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct GapPolicy {
    /// A present keyword occurring fewer times than this counts as weak.
    /// The default of 1 means the weak set is empty unless raised.
    pub weak_occurrence_threshold: u32,
}

impl Default for GapPolicy {
    fn default() -> Self {
        Self {
            weak_occurrence_threshold: 1,
        }
    }
}

/// Result of comparing a resume against job requirements.
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    /// Percentage of requirement keywords found in the resume, 0 to 100.
    pub score: u32,
    pub missing_keywords: Vec<String>,
    pub weak_keywords: Vec<String>,
    pub missing_responsibilities: Vec<String>,
}

impl GapReport {
    pub fn gap_count(&self) -> usize {
        self.missing_keywords.len() + self.weak_keywords.len() + self.missing_responsibilities.len()
    }
}

/// Compares the resume against the requirements under the given policy.
pub fn analyze(
    document: &ResumeDocument,
    requirements: &JobRequirements,
    policy: GapPolicy,
) -> GapReport {
    let haystack = normalized_document_text(document);

    let mut present = 0usize;
    let mut missing_keywords = Vec::new();
    let mut weak_keywords = Vec::new();

    for skill in &requirements.skills {
        let needle = normalize_term(&skill.keyword);
        let occurrences = haystack.matches(needle.as_str()).count() as u32;
        if occurrences == 0 {
            missing_keywords.push(skill.keyword.clone());
        } else {
            present += 1;
            if occurrences < policy.weak_occurrence_threshold {
                weak_keywords.push(skill.keyword.clone());
            }
        }
    }

    let total = requirements.skills.len();
    let score = if total == 0 {
        100
    } else {
        ((present as f64 / total as f64) * 100.0).round() as u32
    };

    let missing_responsibilities = requirements
        .responsibilities
        .iter()
        .filter(|phrase| !haystack.contains(normalize_term(phrase).as_str()))
        .cloned()
        .collect();

    GapReport {
        score,
        missing_keywords,
        weak_keywords,
        missing_responsibilities,
    }
}

/// Normal form shared by the analyzer and the requirement extractor:
/// lowercase with runs of whitespace collapsed to single spaces.
pub(crate) fn normalize_term(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn normalized_document_text(document: &ResumeDocument) -> String {
    let joined = document.content_lines().collect::<Vec<_>>().join("\n");
    normalize_term(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup;
    use crate::pipeline::job_analyzer::SkillKeyword;

    fn make_requirements(keywords: &[&str], responsibilities: &[&str]) -> JobRequirements {
        JobRequirements {
            job_title: None,
            skills: keywords
                .iter()
                .map(|k| SkillKeyword {
                    keyword: k.to_string(),
                    category: None,
                })
                .collect(),
            responsibilities: responsibilities.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn make_document(text: &str) -> ResumeDocument {
        markup::parse(text).unwrap()
    }

    #[test]
    fn test_zero_keywords_scores_100() {
        let doc = make_document("## Skills\n- whatever\n");
        let report = analyze(&doc, &make_requirements(&[], &[]), GapPolicy::default());
        assert_eq!(report.score, 100);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_all_keywords_present_scores_100() {
        let doc = make_document("## Skills\n- Rust, Kubernetes\n");
        let report = analyze(
            &doc,
            &make_requirements(&["rust", "kubernetes"], &[]),
            GapPolicy::default(),
        );
        assert_eq!(report.score, 100);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_half_present_scores_50() {
        let doc = make_document("## Skills\n- Rust\n");
        let report = analyze(
            &doc,
            &make_requirements(&["rust", "kafka"], &[]),
            GapPolicy::default(),
        );
        assert_eq!(report.score, 50);
        assert_eq!(report.missing_keywords, vec!["kafka"]);
    }

    #[test]
    fn test_score_rounds_to_nearest_integer() {
        let doc = make_document("## Skills\n- Rust\n");
        let report = analyze(
            &doc,
            &make_requirements(&["rust", "kafka", "terraform"], &[]),
            GapPolicy::default(),
        );
        // 1 of 3 = 33.33 -> 33
        assert_eq!(report.score, 33);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let doc = make_document("## Skills\n- RUST and PostgreSQL\n");
        let report = analyze(
            &doc,
            &make_requirements(&["rust", "postgresql"], &[]),
            GapPolicy::default(),
        );
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_multi_word_keyword_matches_across_collapsed_whitespace() {
        let doc = make_document("## Experience\n- Built  distributed   systems at scale\n");
        let report = analyze(
            &doc,
            &make_requirements(&["distributed systems"], &[]),
            GapPolicy::default(),
        );
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_score_is_monotone_in_keyword_coverage() {
        let requirements = make_requirements(&["rust", "kafka", "terraform"], &[]);
        let before = analyze(
            &make_document("## Skills\n- Rust\n"),
            &requirements,
            GapPolicy::default(),
        );
        let after = analyze(
            &make_document("## Skills\n- Rust\n- Kafka\n"),
            &requirements,
            GapPolicy::default(),
        );
        assert!(after.score >= before.score);
    }

    #[test]
    fn test_default_policy_produces_empty_weak_set() {
        let doc = make_document("## Skills\n- Rust\n");
        let report = analyze(&doc, &make_requirements(&["rust"], &[]), GapPolicy::default());
        assert!(report.weak_keywords.is_empty());
    }

    #[test]
    fn test_raised_threshold_flags_single_occurrence_as_weak() {
        let doc = make_document("## Skills\n- Rust\n");
        let policy = GapPolicy {
            weak_occurrence_threshold: 2,
        };
        let report = analyze(&doc, &make_requirements(&["rust"], &[]), policy);
        assert_eq!(report.weak_keywords, vec!["rust"]);
        // weak keywords are still present, so the score is unaffected
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_missing_responsibilities_are_reported() {
        let doc = make_document("## Experience\n- Designed APIs\n");
        let report = analyze(
            &doc,
            &make_requirements(&[], &["designed apis", "led incident response"]),
            GapPolicy::default(),
        );
        assert_eq!(
            report.missing_responsibilities,
            vec!["led incident response"]
        );
    }

    #[test]
    fn test_gap_count_sums_all_buckets() {
        let report = GapReport {
            score: 50,
            missing_keywords: vec!["a".to_string(), "b".to_string()],
            weak_keywords: vec!["c".to_string()],
            missing_responsibilities: vec!["d".to_string()],
        };
        assert_eq!(report.gap_count(), 4);
    }

    #[test]
    fn test_normalize_term_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize_term("  Distributed\t Systems "), "distributed systems");
    }
}
