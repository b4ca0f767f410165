use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use venture_profile::config::AppConfig;
use venture_profile::error::AppError;
use venture_profile::questionnaire::{AnalysisEngine, ResponseSet, Role};
use venture_profile::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "venture-profile",
    about = "Analyze questionnaire responses into a normalized match profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a responses file and print the resulting profile as JSON
    Analyze(AnalyzeArgs),
    /// Print the question catalog for a role
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Role the responses belong to (startup or investor)
    #[arg(long)]
    role: String,
    /// Path to a JSON object mapping question ids to answers
    #[arg(long)]
    responses: PathBuf,
    /// Pretty-print the profile JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Role whose question set to print (startup or investor)
    #[arg(long)]
    role: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let role: Role = args.role.parse()?;
    let raw = std::fs::read_to_string(&args.responses)?;
    let responses: ResponseSet = serde_json::from_str(&raw)?;

    let engine = AnalysisEngine::standard();
    let profile = engine.analyze(&responses, role);
    info!(
        role = %role,
        answered = responses.len(),
        categories = profile.categories.len(),
        tags = profile.tags.len(),
        "analysis complete"
    );

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&profile)?
    } else {
        serde_json::to_string(&profile)?
    };
    println!("{rendered}");
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let role: Role = args.role.parse()?;
    let engine = AnalysisEngine::standard();
    let questions = engine.catalog().questions_for(role);
    println!("{}", serde_json::to_string_pretty(questions)?);
    Ok(())
}
