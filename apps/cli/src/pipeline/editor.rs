//! Editor: applies a selected subset of recommendations to the resume.
//!
//! Purely mechanical, no LLM. Produces a new document; the input is never
//! mutated. A recommendation whose target cannot be resolved fails alone
//! and is collected into the result while the rest still apply.

use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::markup::{Entry, ResumeDocument};
use crate::pipeline::recommender::{Recommendation, SuggestedChange};

/// Record of one change that was applied.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedChange {
    pub recommendation_id: String,
    pub section: String,
    pub description: String,
}

/// Record of one recommendation that could not be applied.
#[derive(Debug, Clone, Serialize)]
pub struct FailedEdit {
    pub recommendation_id: String,
    pub reason: String,
}

/// The edited resume plus the ledger of what happened to each selected
/// recommendation.
#[derive(Debug, Clone)]
pub struct OptimizedResume {
    pub document: ResumeDocument,
    pub applied: Vec<AppliedChange>,
    pub failed: Vec<FailedEdit>,
}

/// Applies the recommendations whose ids are in `selected_ids`, in
/// recommendation order. Untouched lines survive byte-for-byte.
pub fn apply_recommendations(
    document: &ResumeDocument,
    recommendations: &[Recommendation],
    selected_ids: &[String],
) -> OptimizedResume {
    let mut edited = document.clone();
    let mut applied = Vec::new();
    let mut failed = Vec::new();

    for rec in recommendations
        .iter()
        .filter(|r| selected_ids.contains(&r.id))
    {
        match apply_one(&mut edited, rec) {
            Ok(change) => applied.push(change),
            Err(error) => {
                warn!("Skipping {}: {error}", rec.id);
                failed.push(FailedEdit {
                    recommendation_id: rec.id.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }

    OptimizedResume {
        document: edited,
        applied,
        failed,
    }
}

/// Applies a single recommendation, failing with `TargetNotFound` when the
/// section or the text to replace no longer exists.
fn apply_one(
    document: &mut ResumeDocument,
    rec: &Recommendation,
) -> Result<AppliedChange, AppError> {
    let section = document
        .sections
        .iter_mut()
        .find(|s| s.name.eq_ignore_ascii_case(&rec.target_section))
        .ok_or_else(|| AppError::TargetNotFound {
            recommendation_id: rec.id.clone(),
            reason: format!("section '{}' is not present", rec.target_section),
        })?;

    match &rec.change {
        SuggestedChange::Replace { find, replace } => {
            let entry = section
                .entries
                .iter_mut()
                .find(|e| e.raw.contains(find.as_str()))
                .ok_or_else(|| AppError::TargetNotFound {
                    recommendation_id: rec.id.clone(),
                    reason: format!(
                        "no entry in section '{}' contains '{}'",
                        section.name, find
                    ),
                })?;
            entry.raw = entry.raw.replacen(find.as_str(), replace, 1);
            Ok(AppliedChange {
                recommendation_id: rec.id.clone(),
                section: section.name.clone(),
                description: format!("rewrote an entry in '{}'", section.name),
            })
        }
        SuggestedChange::Append { text } => {
            let bullet = if text.trim_start().starts_with("- ") {
                text.clone()
            } else {
                format!("- {text}")
            };
            // Insert before the section's trailing blank lines so the
            // blank separator to the next section stays last.
            let insert_at = section
                .entries
                .iter()
                .rposition(|e| !e.raw.trim().is_empty())
                .map(|i| i + 1)
                .unwrap_or(0);
            section.entries.insert(insert_at, Entry { raw: bullet });
            Ok(AppliedChange {
                recommendation_id: rec.id.clone(),
                section: section.name.clone(),
                description: format!("added a bullet to '{}'", section.name),
            })
        }
    }
}
