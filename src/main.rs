//! mailscore: deliverability and compliance scoring for HTML emails.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use mailscore::cli::{run_analyze, AnalyzeConfig};
use mailscore::pipeline::exit_codes;
use mailscore::reports::ReportFormat;
use mailscore::spamcheck::DEFAULT_ENDPOINT;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mailscore")]
#[command(version)]
#[command(about = "Deliverability and compliance scoring for HTML emails", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Analysis completed (score at or above --fail-under, if set)
    1  Score below the --fail-under threshold
    2  Error occurred

EXAMPLES:
    # Score a newsletter and print the summary
    mailscore analyze newsletter.html

    # CI check: fail the build under 75/100, skip the network call
    mailscore analyze newsletter.html --no-spam-check --fail-under 75

    # Export JSON for processing
    mailscore analyze message.eml -o json > report.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the email (.html, .htm or .eml)
    input: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Skip the external SpamAssassin scoring call
    #[arg(long)]
    no_spam_check: bool,

    /// Spam-check service endpoint
    #[arg(long, env = "MAILSCORE_SPAM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    spam_endpoint: String,

    /// Spam-check timeout in seconds
    #[arg(long, default_value_t = 30)]
    spam_timeout: u64,

    /// Request the short (score-only) service report
    #[arg(long)]
    short_spam_report: bool,

    /// Exit with code 1 when the overall score is below this threshold
    #[arg(long, value_parser = clap::value_parser!(u8).range(..=100))]
    fail_under: Option<u8>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an email and score its deliverability
    Analyze(AnalyzeArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let code = match cli.command {
        Commands::Analyze(args) => run_analyze(AnalyzeConfig {
            input: args.input,
            output: args.output,
            output_file: args.output_file,
            no_spam_check: args.no_spam_check,
            spam_endpoint: args.spam_endpoint,
            spam_timeout: Duration::from_secs(args.spam_timeout),
            short_spam_report: args.short_spam_report,
            fail_under: args.fail_under,
            no_color: cli.no_color,
            quiet: cli.quiet,
        })?,
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "mailscore", &mut io::stdout());
            exit_codes::SUCCESS
        }
    };

    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
