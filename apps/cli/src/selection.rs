//! Selection policy: which recommendations actually get applied.
//!
//! A pure function over (recommendations, mode, decisions); gathering the
//! interactive decisions is `ui::prompt`'s job, so this stays testable.

use crate::pipeline::recommender::Recommendation;

/// How recommendations are selected for application. Modes are mutually
/// exclusive per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Per-item accept/skip decisions supplied by the user.
    Interactive,
    /// Select every recommendation with priority <= the cutoff, no prompting.
    AutoPriority(u8),
    /// Select nothing; analysis is reported but no edits are applied.
    ReportOnly,
}

/// Returns the ids of the selected recommendations, in recommendation
/// order. `decisions[i]` answers "apply recommendations[i]?" in
/// interactive mode; a missing decision counts as skip.
pub fn select_recommendations(
    recommendations: &[Recommendation],
    mode: SelectionMode,
    decisions: &[bool],
) -> Vec<String> {
    match mode {
        SelectionMode::Interactive => recommendations
            .iter()
            .enumerate()
            .filter(|(i, _)| decisions.get(*i).copied().unwrap_or(false))
            .map(|(_, r)| r.id.clone())
            .collect(),
        SelectionMode::AutoPriority(cutoff) => recommendations
            .iter()
            .filter(|r| r.priority <= cutoff)
            .map(|r| r.id.clone())
            .collect(),
        SelectionMode::ReportOnly => Vec::new(),
    }
}
