//! Pipeline driver: runs the analysis stages strictly in order, passing
//! each stage's output forward and accumulating results in one state
//! object. The first error aborts the run.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::markup;
use crate::pipeline::gap_analyzer::{self, GapPolicy};
use crate::pipeline::job_analyzer;
use crate::pipeline::recommender;
use crate::pipeline::state::PipelineState;

/// Inputs shorter than these are rejected before any stage runs.
const MIN_RESUME_CHARS: usize = 100;
const MIN_JOB_CHARS: usize = 50;

/// Runs stages 1 through 4 (parse, job analysis, gap analysis,
/// recommendations). Editing and selection happen after, on the caller's
/// side, so `analyze` runs can stop here.
pub async fn run_analysis(
    gen: &dyn TextGenerator,
    resume_text: &str,
    job_text: &str,
    policy: GapPolicy,
) -> Result<PipelineState, AppError> {
    validate_inputs(resume_text, job_text)?;

    info!("Parsing resume structure");
    let document = markup::parse(resume_text)?;
    info!("Parsed {} sections", document.sections.len());

    info!("Extracting job requirements");
    let requirements = job_analyzer::extract_requirements(gen, job_text).await?;
    info!(
        "Extracted {} skill keywords, {} responsibilities",
        requirements.skills.len(),
        requirements.responsibilities.len()
    );

    let gap_report = gap_analyzer::analyze(&document, &requirements, policy);
    info!(
        "Similarity score: {}/100 ({} missing, {} weak)",
        gap_report.score,
        gap_report.missing_keywords.len(),
        gap_report.weak_keywords.len()
    );

    let recommendations =
        recommender::generate_recommendations(gen, &gap_report, &document, &requirements).await?;

    Ok(PipelineState {
        resume_text: resume_text.to_string(),
        document,
        requirements,
        gap_report,
        recommendations,
    })
}

fn validate_inputs(resume_text: &str, job_text: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyInput("resume is blank".to_string()));
    }
    if resume_text.len() < MIN_RESUME_CHARS {
        return Err(AppError::EmptyInput(format!(
            "resume appears too short (less than {MIN_RESUME_CHARS} characters)"
        )));
    }
    if job_text.trim().is_empty() {
        return Err(AppError::EmptyInput("job description is blank".to_string()));
    }
    if job_text.len() < MIN_JOB_CHARS {
        return Err(AppError::EmptyInput(format!(
            "job description appears too short (less than {MIN_JOB_CHARS} characters)"
        )));
    }
    Ok(())
}
