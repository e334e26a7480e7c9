//! Shared pipeline state: one object accumulates every stage's output.

use crate::markup::ResumeDocument;
use crate::pipeline::gap_analyzer::GapReport;
use crate::pipeline::job_analyzer::JobRequirements;
use crate::pipeline::recommender::Recommendation;

/// Everything the analysis stages produced for one run. Built by
/// [`crate::pipeline::runner::run_analysis`]; each field is filled by
/// exactly one stage and read only by later ones.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub resume_text: String,
    pub document: ResumeDocument,
    pub requirements: JobRequirements,
    pub gap_report: GapReport,
    pub recommendations: Vec<Recommendation>,
}
