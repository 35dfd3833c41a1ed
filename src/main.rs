use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use healer_assessment::config::Config;
use healer_assessment::engine::Session;
use healer_assessment::error::{AppError, ReportError};
use healer_assessment::reporter::{reporter_for, score_only, OutputFormat};
use healer_assessment::telemetry;

#[derive(Parser)]
#[command(
    name = "healer-assessment",
    version,
    about = "Score the healer growth questionnaire and render the diagnostic report"
)]
struct Cli {
    /// Working directory holding the config and saved answers
    #[arg(long, short = 'C', default_value = ".", global = true)]
    dir: PathBuf,

    /// Show insight detail and risk signals
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the report for the saved answers
    Report {
        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Only output the average score (0-100)
        #[arg(long)]
        score: bool,

        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Record an answer; omit the value to clear it
    Answer {
        id: String,
        value: Vec<String>,
    },
    /// Replace the coach notes
    Notes { text: Vec<String> },
    /// Clear all answers and notes
    Reset,
    /// List the questions and their options
    Questions,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(&cli.dir)?;
    telemetry::init(&config.log)?;
    let mut session = Session::with_config(&cli.dir, config)?;

    match cli.command.unwrap_or(Command::Report {
        format: None,
        score: false,
        output: None,
    }) {
        Command::Report {
            format,
            score,
            output,
        } => {
            let result = session.evaluate();
            let rendered = if score {
                score_only(&result.summary)
            } else {
                let format = format.unwrap_or(session.config.report.format);
                result.render(
                    reporter_for(format).as_ref(),
                    &session.questionnaire,
                    cli.verbose,
                )?
            };
            emit(&rendered, output.as_deref())?;
        }
        Command::Answer { id, value } => {
            session.answer(&id, &value)?;
            session.save()?;
            let summary = session.summary();
            println!(
                "{id} saved. Completion {}%, average {}",
                summary.completion, summary.average
            );
        }
        Command::Notes { text } => {
            session.store.set_notes(&text.join(" "));
            session.save()?;
        }
        Command::Reset => {
            session.store.reset();
            session.save()?;
            println!("Answers and notes cleared.");
        }
        Command::Questions => print_questions(&session),
    }
    Ok(())
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => std::fs::write(path, rendered).map_err(|source| {
            AppError::from(ReportError::Write {
                path: path.to_path_buf(),
                source,
            })
        }),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn print_questions(session: &Session) {
    let q = &session.questionnaire;
    for meta in &q.dimensions {
        println!("\n{} ({})", meta.label, meta.key);
        for question in q.by_dimension(meta.key) {
            let scored = if question.is_scored() { "scored" } else { "info" };
            println!("  {:<4} [{}] {}", question.id, scored, question.title);
            for option in &question.options {
                println!("         {:<5.2} {}", option.value, option.key());
            }
        }
    }
}
