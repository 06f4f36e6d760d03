use std::io::{self, Write as _};
use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use time::format_description::well_known::Rfc3339;

use calog::cli::{Cli, Command};
use calog::identity::EnvInitData;
use calog::logs::LogEntry;
use calog::ui::{App, DeleteConfirm, EntryForm, Submission, ViewState};
use calog::{AppConfig, LogsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "calog=debug" } else { "calog=info" };
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let api = LogsClient::new(&config, Arc::new(EnvInitData))?;
    let mut app = App::new(api);
    app.load().await;

    match cli.command {
        Command::List => {}
        Command::Add {
            food,
            calories,
            confidence,
        } => {
            let mut form = EntryForm::create();
            form.food_items_text = food;
            form.calories_text = calories;
            form.confidence = confidence;
            submit_and_reload(&mut app, form).await?;
        }
        Command::Edit {
            id,
            food,
            calories,
            confidence,
        } => {
            let entry = require_entry(&app, &id)?.clone();
            let mut form = EntryForm::edit(entry);
            if let Some(food) = food {
                form.food_items_text = food;
            }
            if let Some(calories) = calories {
                form.calories_text = calories;
            }
            if let Some(confidence) = confidence {
                form.confidence = confidence;
            }
            submit_and_reload(&mut app, form).await?;
        }
        Command::Delete { id, yes } => {
            let entry = require_entry(&app, &id)?.clone();
            let gate = DeleteConfirm::new(entry);
            if !yes && !prompt_confirm(&gate)? {
                println!("Cancelled.");
                return Ok(());
            }
            app.delete_entry(gate).await?;
            println!("Deleted.");
        }
    }

    render(&app)
}

fn require_entry<'a>(app: &'a App, id: &str) -> anyhow::Result<&'a LogEntry> {
    if let ViewState::Error(msg) = app.state() {
        bail!("{msg}");
    }
    app.find_entry(id)
        .ok_or_else(|| anyhow::anyhow!("no log entry with id {id}"))
}

async fn submit_and_reload(app: &mut App, mut form: EntryForm) -> anyhow::Result<()> {
    match form.submit(app.api()).await {
        Submission::Saved(entry) => {
            // The list is refreshed before the form result is reported.
            app.reload().await;
            println!("Saved: {}", entry.summary());
            Ok(())
        }
        Submission::Rejected => {
            for msg in form.errors() {
                eprintln!("{msg}");
            }
            bail!("log entry was not saved");
        }
    }
}

fn prompt_confirm(gate: &DeleteConfirm) -> anyhow::Result<bool> {
    println!("Are you sure you want to delete this log entry?");
    println!("  {}", gate.summary());
    println!("This action cannot be undone.");
    print!("Delete? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn render(app: &App) -> anyhow::Result<()> {
    match app.state() {
        ViewState::Loading => println!("Loading logs..."),
        ViewState::Error(msg) => bail!("{msg}"),
        ViewState::Ready => {
            if app.entries().is_empty() {
                println!("No logs yet");
                println!("Start tracking your calories by adding a new log entry.");
                return Ok(());
            }
            println!(
                "{:<24}  {:<40}  {:>8}  {:<10}  {}",
                "Date/Time", "Food Items", "Calories", "Confidence", "Id"
            );
            for entry in app.entries() {
                let ts = entry
                    .timestamp
                    .format(&Rfc3339)
                    .unwrap_or_else(|_| entry.timestamp.to_string());
                println!(
                    "{:<24}  {:<40}  {:>8}  {:<10}  {}",
                    ts,
                    entry.food_items.join(", "),
                    entry.calories,
                    entry.confidence.as_str(),
                    entry.id
                );
            }
        }
    }
    Ok(())
}
