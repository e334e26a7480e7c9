mod config;
mod errors;
mod files;
mod llm_client;
mod markup;
mod pipeline;
mod selection;
mod ui;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::pipeline::editor;
use crate::pipeline::gap_analyzer::GapPolicy;
use crate::pipeline::runner::run_analysis;
use crate::pipeline::state::PipelineState;
use crate::selection::{select_recommendations, SelectionMode};

/// Tailor a resume to a job description with LLM-driven gap analysis.
#[derive(Parser)]
#[clap(name = "resume-optimizer", version)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write an optimized resume
    Optimize {
        /// Path to the resume file (Markdown-style sections)
        #[clap(long, short)]
        resume: PathBuf,
        /// Path to the job description file (plain text)
        #[clap(long, short)]
        job: PathBuf,
        /// Output path (default: <resume>_optimized.<ext>)
        #[clap(long, short)]
        output: Option<PathBuf>,
        /// Skip interactive approval and select nothing (report only)
        #[clap(long, conflicts_with = "auto_priority")]
        auto: bool,
        /// Auto-select recommendations with priority <= N, no prompting
        #[clap(long, value_name = "N")]
        auto_priority: Option<u8>,
    },
    /// Analyze the resume against the job description, write nothing
    Analyze {
        /// Path to the resume file (Markdown-style sections)
        #[clap(long, short)]
        resume: PathBuf,
        /// Path to the job description file (plain text)
        #[clap(long, short)]
        job: PathBuf,
    },
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Version => {
            println!(
                "resume-optimizer v{}",
                env!("CARGO_PKG_VERSION")
            );
            Ok(())
        }
        Commands::Analyze { resume, job } => {
            let state = analyze(&resume, &job).await?;
            ui::prompt::display_recommendations(&state.recommendations);
            print_summary(&state, None);
            println!("{}", "Use 'optimize' to apply recommendations.".dimmed());
            Ok(())
        }
        Commands::Optimize {
            resume,
            job,
            output,
            auto,
            auto_priority,
        } => {
            let state = analyze(&resume, &job).await?;

            let mode = if auto {
                SelectionMode::ReportOnly
            } else if let Some(cutoff) = auto_priority {
                SelectionMode::AutoPriority(cutoff)
            } else {
                SelectionMode::Interactive
            };

            let decisions = match mode {
                SelectionMode::Interactive if !state.recommendations.is_empty() => {
                    ui::prompt::review_recommendations(&state.recommendations)?
                }
                _ => {
                    ui::prompt::display_recommendations(&state.recommendations);
                    Vec::new()
                }
            };
            let selected = select_recommendations(&state.recommendations, mode, &decisions);
            if let SelectionMode::AutoPriority(cutoff) = mode {
                info!(
                    "Auto-selected {} recommendations (priority <= {cutoff})",
                    selected.len()
                );
            }

            let result =
                editor::apply_recommendations(&state.document, &state.recommendations, &selected);
            for failure in &result.failed {
                eprintln!(
                    "{} {} could not be applied: {}",
                    "Warning:".yellow(),
                    failure.recommendation_id,
                    failure.reason
                );
            }

            if result.applied.is_empty() {
                println!(
                    "\n{}",
                    "No recommendations applied; resume left unchanged.".yellow()
                );
                print_summary(&state, Some(0));
                return Ok(());
            }

            let optimized_text = markup::serialize(&result.document);
            ui::diff::render_diff(&state.resume_text, &optimized_text);

            let output_path = output.unwrap_or_else(|| files::default_output_path(&resume));
            files::write_output(&output_path, &optimized_text, &resume)?;
            println!(
                "\n{} {}",
                "Optimized resume saved to:".green(),
                output_path.display()
            );

            print_summary(&state, Some(result.applied.len()));
            Ok(())
        }
    }
}

/// Shared front half of both subcommands: config, logging, input files,
/// and the four analysis stages.
async fn analyze(resume: &Path, job: &Path) -> Result<PipelineState, AppError> {
    // Credential check comes first, before any file or network work.
    let config = Config::from_env()?;
    init_tracing(&config);

    info!("Reading resume from {}", resume.display());
    let resume_text = files::read_input_file(resume)?;
    info!("Reading job description from {}", job.display());
    let job_text = files::read_input_file(job)?;

    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.model.clone());
    run_analysis(&llm, &resume_text, &job_text, GapPolicy::default()).await
}

fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_summary(state: &PipelineState, applied: Option<usize>) {
    println!("\n{}", "Results:".bold());
    if let Some(title) = state.requirements.job_title.as_deref() {
        println!("  Target role:      {title}");
    }
    println!("  Similarity score: {}/100", state.gap_report.score);
    println!("  Gaps identified:  {}", state.gap_report.gap_count());
    println!(
        "  Recommendations:  {}",
        state.recommendations.len()
    );
    if let Some(count) = applied {
        println!("  Changes applied:  {count}");
    }
    println!();
}
