//! Recommendation Generator: turns gap-report items into prioritized,
//! concrete edit suggestions via one batched LLM call.
//!
//! Priorities are assigned locally by a fixed policy, never by the model:
//! missing keyword with a named skill category -> 1, missing keyword
//! without one and missing responsibility phrases -> 2, weak keywords -> 3.
//! The model only drafts the text of each suggestion, and must cover every
//! gap item; uncovered items are named in the resulting error instead of
//! being silently dropped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{complete_json, TextGenerator};
use crate::markup::ResumeDocument;
use crate::pipeline::gap_analyzer::GapReport;
use crate::pipeline::job_analyzer::JobRequirements;
use crate::pipeline::prompts::{RECOMMENDER_PROMPT_TEMPLATE, RECOMMENDER_SYSTEM};

/// The edit a recommendation proposes, applied mechanically by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SuggestedChange {
    /// Rewrite the first entry of the target section containing `find`.
    Replace { find: String, replace: String },
    /// Add a new bullet line at the end of the target section.
    Append { text: String },
}

/// A single proposed edit. Ordered by ascending priority (1 = highest),
/// ties preserving generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub priority: u8,
    pub target_section: String,
    pub change: SuggestedChange,
    pub rationale: String,
}

/// One gap to close, handed to the model with a stable key.
#[derive(Debug, Clone, Serialize)]
struct GapItem {
    key: String,
    kind: &'static str,
    detail: String,
    priority: u8,
}

#[derive(Debug, Deserialize)]
struct DraftSuggestion {
    key: String,
    target_section: String,
    action: String,
    #[serde(default)]
    find: Option<String>,
    text: String,
    #[serde(default)]
    rationale: String,
}

#[derive(Debug, Deserialize)]
struct DraftBatch {
    suggestions: Vec<DraftSuggestion>,
}

/// Generates recommendations for every gap in the report.
/// Returns an empty list when there is nothing to recommend, without
/// calling the model.
pub async fn generate_recommendations(
    gen: &dyn TextGenerator,
    report: &GapReport,
    document: &ResumeDocument,
    requirements: &JobRequirements,
) -> Result<Vec<Recommendation>, AppError> {
    let items = build_gap_items(report, requirements);
    if items.is_empty() {
        info!("No gaps identified; nothing to recommend");
        return Ok(Vec::new());
    }

    let prompt = build_prompt(&items, document, requirements)?;
    let batch: DraftBatch = complete_json(gen, &prompt, RECOMMENDER_SYSTEM)
        .await
        .map_err(|e| AppError::ExternalService(format!("recommendation drafting failed: {e}")))?;

    let recommendations = assemble(&items, batch)?;

    let counts = priority_counts(&recommendations);
    info!(
        "Generated {} recommendations (P1: {}, P2: {}, P3: {})",
        recommendations.len(),
        counts.0,
        counts.1,
        counts.2
    );

    Ok(recommendations)
}

/// Builds gap items in report order, then stable-sorts by priority so
/// ties keep their generation order.
fn build_gap_items(report: &GapReport, requirements: &JobRequirements) -> Vec<GapItem> {
    let category_of = |keyword: &str| {
        requirements
            .skills
            .iter()
            .find(|s| s.keyword == keyword)
            .and_then(|s| s.category.as_deref())
    };

    let mut items = Vec::new();

    for keyword in &report.missing_keywords {
        match category_of(keyword) {
            Some(category) => items.push(GapItem {
                key: format!("kw:{keyword}"),
                kind: "missing_keyword",
                detail: format!("the resume lacks the {category} keyword '{keyword}'"),
                priority: 1,
            }),
            None => items.push(GapItem {
                key: format!("kw:{keyword}"),
                kind: "missing_keyword",
                detail: format!("the resume lacks the keyword '{keyword}'"),
                priority: 2,
            }),
        }
    }

    for phrase in &report.missing_responsibilities {
        items.push(GapItem {
            key: format!("resp:{phrase}"),
            kind: "missing_responsibility",
            detail: format!("the resume does not reflect the responsibility '{phrase}'"),
            priority: 2,
        });
    }

    for keyword in &report.weak_keywords {
        items.push(GapItem {
            key: format!("weak:{keyword}"),
            kind: "weak_keyword",
            detail: format!("the keyword '{keyword}' is underrepresented in the resume"),
            priority: 3,
        });
    }

    items.sort_by_key(|item| item.priority);
    items
}

fn build_prompt(
    items: &[GapItem],
    document: &ResumeDocument,
    requirements: &JobRequirements,
) -> Result<String, AppError> {
    let gap_items_json = serde_json::to_string_pretty(items)
        .map_err(|e| anyhow::anyhow!("failed to serialize gap items: {e}"))?;

    let mut outline = String::new();
    for section in &document.sections {
        outline.push_str(&section.header);
        outline.push('\n');
        for entry in &section.entries {
            if !entry.raw.trim().is_empty() {
                outline.push_str(&entry.raw);
                outline.push('\n');
            }
        }
    }

    Ok(RECOMMENDER_PROMPT_TEMPLATE
        .replace("{gap_items_json}", &gap_items_json)
        .replace("{resume_outline}", &outline)
        .replace(
            "{job_title}",
            requirements.job_title.as_deref().unwrap_or("the target role"),
        ))
}

/// Pairs drafts with gap items, validates coverage and shape, assigns
/// `rec_NNN` ids in final order.
fn assemble(items: &[GapItem], batch: DraftBatch) -> Result<Vec<Recommendation>, AppError> {
    let mut drafts: HashMap<String, DraftSuggestion> = batch
        .suggestions
        .into_iter()
        .map(|s| (s.key.clone(), s))
        .collect();

    let mut uncovered = Vec::new();
    let mut malformed = Vec::new();
    let mut recommendations = Vec::new();

    for item in items {
        let Some(draft) = drafts.remove(&item.key) else {
            uncovered.push(item.key.clone());
            continue;
        };

        let change = match draft.action.as_str() {
            "replace" => match draft.find {
                Some(find) if !find.is_empty() => SuggestedChange::Replace {
                    find,
                    replace: draft.text,
                },
                _ => {
                    malformed.push(format!("{} (replace without find text)", item.key));
                    continue;
                }
            },
            "append" => SuggestedChange::Append { text: draft.text },
            other => {
                malformed.push(format!("{} (unknown action '{other}')", item.key));
                continue;
            }
        };

        recommendations.push(Recommendation {
            id: String::new(),
            priority: item.priority,
            target_section: draft.target_section,
            change,
            rationale: draft.rationale,
        });
    }

    if !uncovered.is_empty() {
        return Err(AppError::ExternalService(format!(
            "model response did not cover gap items: {}",
            uncovered.join(", ")
        )));
    }
    if !malformed.is_empty() {
        return Err(AppError::ExternalService(format!(
            "model returned malformed suggestions: {}",
            malformed.join(", ")
        )));
    }

    for (index, rec) in recommendations.iter_mut().enumerate() {
        rec.id = format!("rec_{:03}", index + 1);
    }

    Ok(recommendations)
}

fn priority_counts(recommendations: &[Recommendation]) -> (usize, usize, usize) {
    let count = |p: u8| recommendations.iter().filter(|r| r.priority == p).count();
    (count(1), count(2), count(3))
}
