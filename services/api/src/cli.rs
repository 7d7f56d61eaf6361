use crate::report::{run_case_listing, run_evaluation_report, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use medsim::config::AppConfig;
use medsim::error::AppError;
use medsim::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Simulated Patient Exam Service",
    about = "Score and review simulated patient history-taking exams",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an evaluator output file and print the per-domain report
    Evaluate(EvaluateArgs),
    /// List the scored cases and their domain maxima
    Cases,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Evaluate(args) => run_evaluation_report(&config, args),
        Command::Cases => {
            run_case_listing();
            Ok(())
        }
    }
}
