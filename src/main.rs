use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::{Cli, Commands, RememberInput};
use config::Config;
use srs::error::SrsError;
use srs::session::Session;
use srs::storage::FileBackend;

fn setup_logging(level: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("srs")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("srs.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    let store_path = config.store_path(cli.store.as_ref());
    info!("Using task store: {}", store_path.display());

    if cli.is_verbose() {
        println!("{} {}", "Task store:".yellow(), store_path.display());
    }

    let mut session = Session::open(FileBackend::new(&store_path), config.review.scheduler_config())
        .with_context(|| format!("Failed to open task store {}", store_path.display()))?;

    if cli.is_verbose() {
        println!("{} {}", "Today:".yellow(), session.today());
    }

    let outcome = match &cli.command {
        Commands::Tasks { category } => handle_tasks_command(&session, category.as_deref()),
        Commands::Remember { category, text } => handle_remember_command(&mut session, category, text),
        Commands::Review { index, grade } => handle_review_command(&mut session, *index, *grade),
        Commands::Forget { index } => handle_forget_command(&mut session, *index),
    };

    report_not_found(outcome)
}

/// Not-found failures are reported and the program carries on.
fn report_not_found(outcome: Result<()>) -> Result<()> {
    match outcome {
        Err(e) if e.downcast_ref::<SrsError>().is_some_and(SrsError::is_not_found) => {
            println!("{}", e.to_string().red());
            Ok(())
        }
        other => other,
    }
}

fn handle_tasks_command(session: &Session, category: Option<&str>) -> Result<()> {
    info!("Listing tasks (category: {:?})", category);
    let tasks = session.list_tasks(category);
    if tasks.is_empty() {
        println!("{}", "no tasks left! (or empty category..)".green());
        return Ok(());
    }
    for (index, prompt) in tasks {
        println!("{} {}", index.to_string().cyan(), prompt);
    }
    Ok(())
}

fn handle_remember_command(session: &mut Session, category: &str, text: &[String]) -> Result<()> {
    let input = RememberInput::parse(text)?;
    let id = session.remember(category, &input.prompt, &input.answer, input.stage)?;
    println!("{} [{}] {}", "Remembering:".green(), category, input.prompt);
    if let Some(task) = session.store().get(id) {
        println!("  first review on {}", task.review_date);
    }
    Ok(())
}

fn handle_review_command(session: &mut Session, index: usize, grade: i32) -> Result<()> {
    let prompt = session.task(index)?.prompt.clone();
    let outcome = session.review(index, grade)?;
    println!("{} {}", "Reviewed:".green(), prompt);
    if let Some(answer) = &outcome.answer {
        println!("{} {}", "Answer:".yellow(), answer);
    }
    println!(
        "{} {} days (stage {}, {})",
        "Next review in".green(),
        outcome.days,
        outcome.stage,
        outcome.review_date
    );
    Ok(())
}

fn handle_forget_command(session: &mut Session, index: usize) -> Result<()> {
    let task = session.forget(index)?;
    println!("{} {}", "Forgot:".red(), task.prompt);
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_level.as_deref().unwrap_or("info")).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
