use chrono::Local;
use clap::Args;
use medsim::config::AppConfig;
use medsim::conversation::ConversationAnalysis;
use medsim::error::AppError;
use medsim::evaluation::{self, write_metric_csv, EvaluationInput, EvaluationResult};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Evaluator output to score (defaults to APP_EVALUATION_FILE)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Include the per-metric breakdown for every domain
    #[arg(long)]
    pub(crate) metrics: bool,
    /// Also write the per-metric breakdown to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_evaluation_report(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        input,
        metrics,
        csv,
    } = args;

    // An explicit path must exist; the configured default falls back to the
    // Unknown case the way the review page does.
    let input = match input {
        Some(path) => EvaluationInput::from_path(path)?,
        None => EvaluationInput::load_or_default(&config.evaluation.input_path),
    };

    let result = input.evaluate();
    let conversation = ConversationAnalysis::from_items(&input.conversation_data);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_evaluation_report(&mut out, &result, &conversation, metrics)?;

    if let Some(path) = csv {
        let file = File::create(&path)?;
        write_metric_csv(&result, file)?;
        info!(path = %path.display(), "wrote metric breakdown");
    }

    Ok(())
}

pub(crate) fn run_case_listing() {
    println!("Scored cases");
    for summary in evaluation::catalog::summaries() {
        println!("\n{} ({} points)", summary.name, summary.max_total);
        for domain in &summary.domains {
            println!(
                "- {}: {} metrics, {} points",
                domain.label, domain.metric_count, domain.max_total
            );
        }
    }
}

pub(crate) fn render_evaluation_report<W: Write>(
    out: &mut W,
    result: &EvaluationResult,
    conversation: &ConversationAnalysis,
    list_metrics: bool,
) -> io::Result<()> {
    writeln!(out, "Performance per concept")?;
    writeln!(
        out,
        "Case: {} (generated {})",
        result.case_name,
        Local::now().format("%Y-%m-%d %H:%M")
    )?;
    writeln!(out, "Highest performance: {}", result.highest().label)?;
    writeln!(out, "Lowest performance: {}", result.lowest().label)?;

    writeln!(out, "\nDomains")?;
    for domain in &result.domains {
        writeln!(
            out,
            "- {}: {}/{} ({}%)",
            domain.label, domain.earned, domain.max, domain.percentage
        )?;

        if !list_metrics {
            continue;
        }
        if domain.metrics.is_empty() {
            writeln!(out, "    No evaluation metrics available for this section.")?;
        }
        for metric in &domain.metrics {
            writeln!(
                out,
                "    {}. {} - {}/{} points [{}]",
                metric.id,
                metric.description,
                metric.earned,
                metric.max_score,
                score_bar(metric.earned, metric.max_score)
            )?;
        }
    }

    writeln!(
        out,
        "\nTotal score: {}/{}",
        result.total.earned, result.total.max
    )?;

    match conversation {
        ConversationAnalysis::Empty => writeln!(out, "\nConversation analysis: none")?,
        ConversationAnalysis::Pending => writeln!(
            out,
            "\nConversation analysis: not yet available for this attempt"
        )?,
        ConversationAnalysis::Entries(entries) => {
            writeln!(out, "\nConversation analysis")?;
            for entry in entries {
                writeln!(out, "- Q: {}", entry.question)?;
                writeln!(out, "  Comment: {}", entry.comment)?;
            }
        }
    }

    Ok(())
}

/// One cell per available point, filled for each point earned.
fn score_bar(earned: i64, max_score: u32) -> String {
    (0..i64::from(max_score))
        .map(|cell| if earned > cell { '#' } else { '.' })
        .collect()
}
