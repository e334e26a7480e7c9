//! Job Requirement Extractor: turns raw job-description text into
//! structured, normalized requirements via one LLM call.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{complete_json, TextGenerator};
use crate::pipeline::gap_analyzer::normalize_term;
use crate::pipeline::prompts::{JOB_ANALYZER_PROMPT_TEMPLATE, JOB_ANALYZER_SYSTEM};

/// A requirement keyword with its optional named skill category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillKeyword {
    pub keyword: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Structured output of job analysis. Keywords and responsibility phrases
/// are case-normalized and deduplicated, preserving first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub job_title: Option<String>,
    pub skills: Vec<SkillKeyword>,
    pub responsibilities: Vec<String>,
}

/// Extracts requirements from a job description.
/// Blank input fails before any call is made.
pub async fn extract_requirements(
    gen: &dyn TextGenerator,
    job_text: &str,
) -> Result<JobRequirements, AppError> {
    if job_text.trim().is_empty() {
        return Err(AppError::EmptyInput(
            "job description is blank".to_string(),
        ));
    }

    let prompt = JOB_ANALYZER_PROMPT_TEMPLATE.replace("{job_text}", job_text);
    let raw: JobRequirements = complete_json(gen, &prompt, JOB_ANALYZER_SYSTEM)
        .await
        .map_err(|e| AppError::ExternalService(format!("job analysis failed: {e}")))?;

    Ok(normalize_requirements(raw))
}

/// Lowercases, collapses whitespace, and deduplicates keywords and
/// responsibility phrases, keeping the first occurrence of each.
fn normalize_requirements(raw: JobRequirements) -> JobRequirements {
    let mut seen = std::collections::HashSet::new();
    let skills = raw
        .skills
        .into_iter()
        .map(|s| SkillKeyword {
            keyword: normalize_term(&s.keyword),
            category: s.category,
        })
        .filter(|s| !s.keyword.is_empty() && seen.insert(s.keyword.clone()))
        .collect();

    let mut seen_phrases = std::collections::HashSet::new();
    let responsibilities = raw
        .responsibilities
        .into_iter()
        .map(|p| normalize_term(&p))
        .filter(|p| !p.is_empty() && seen_phrases.insert(p.clone()))
        .collect();

    JobRequirements {
        job_title: raw.job_title,
        skills,
        responsibilities,
    }
}
