use clap::{Parser, Subcommand};
use colored::*;

use crate::{
    models::{date::Date, document::LogDocument},
    services::{diary, milestones, milestones::ProgressPointError, todos},
    session::Session,
    storage::store::DocumentStore,
};

mod config;
mod models;
mod services;
mod session;
mod storage;
mod ui;

#[derive(Parser)]
#[command(
    name = "daylog",
    about = "A personal journal of todos, milestones and diary entries for your terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new log and open it
    New { name: String },

    /// Open an existing log and show its contents
    Open { name: String },

    /// Delete an existing log
    Delete {
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List all known logs
    List,

    /// Manage todos in a log
    #[command(subcommand)]
    Todo(TodoCommands),

    /// Manage milestones in a log
    #[command(subcommand)]
    Milestone(MilestoneCommands),

    /// Manage diary entries in a log
    #[command(subcommand)]
    Diary(DiaryCommands),
}

#[derive(Subcommand)]
enum TodoCommands {
    /// Add a todo
    Add {
        /// Log to add to
        log: String,

        /// Todo title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Due date (e.g. 2025-03-01); defaults to today
        #[arg(long)]
        due: Option<String>,
    },

    /// Remove a todo by id
    Remove { log: String, id: i32 },

    /// Mark a todo as done
    Done { log: String, id: i32 },

    /// Mark a todo as not done
    Undone { log: String, id: i32 },

    /// List todos
    List { log: String },
}

#[derive(Subcommand)]
enum MilestoneCommands {
    /// Add a milestone starting today
    Add {
        /// Log to add to
        log: String,

        /// Milestone name
        name: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Remove a milestone by id
    Remove { log: String, id: i32 },

    /// Record today's progress point on a milestone
    Progress {
        log: String,
        id: i32,

        /// Mark the milestone as completed by this point
        #[arg(long)]
        completed: bool,

        /// What happened today
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List milestones with their progress points
    List { log: String },
}

#[derive(Subcommand)]
enum DiaryCommands {
    /// Add a diary entry for today
    Add {
        /// Log to add to
        log: String,

        /// Entry title
        title: String,

        /// Entry text
        #[arg(short, long)]
        body: Option<String>,
    },

    /// List diary entries
    List { log: String },

    /// List dates with diary activity, most recent first
    Dates { log: String },
}

fn main() {
    let cli = Cli::parse();

    let dir = config::config_dir();
    if let Err(e) = config::prepare_config_dir(&dir) {
        eprintln!(
            "Error: Failed to prepare config directory '{}': {}",
            dir.display(),
            e
        );
        std::process::exit(1);
    }

    let mut store = match DocumentStore::open(dir, config::INDEX_FILE_NAME) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: Failed to load log index: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::New { name } => {
            if let Err(e) = store.create(&name) {
                eprintln!("Error: Failed to create log: {}", e);
                std::process::exit(1);
            }
            println!("✓ Log created: {}", name);
            match store.open_document(&name) {
                Ok(document) => ui::render_overview(&document),
                Err(e) => {
                    eprintln!("Error: Failed to open log '{}': {}", name, e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Open { name } => {
            let session = open_session(&store, &name);
            ui::render_overview(session.document());
        }
        Commands::Delete { name, yes } => {
            if !yes {
                let prompt = format!("Are you sure you want to delete '{}'? (y/n): ", name);
                let confirmed = ui::confirm(&prompt).unwrap_or(false);
                if !confirmed {
                    println!("Operation canceled.");
                    return;
                }
            }
            if let Err(e) = store.delete(&name) {
                eprintln!("Error: Failed to delete log: {}", e);
                std::process::exit(1);
            }
            println!("✓ Log deleted: {}", name);
        }
        Commands::List => {
            let names = store.known_names();
            if names.is_empty() {
                println!("No logs found");
            } else {
                ui::render_view_header("Logs", names.len(), "log", "logs");
                for name in names {
                    println!("  {} {}", "•".green(), name.bold());
                }
            }
        }
        Commands::Todo(command) => run_todo_command(&store, command),
        Commands::Milestone(command) => run_milestone_command(&store, command),
        Commands::Diary(command) => run_diary_command(&store, command),
    }
}

/// Opens a log into an editing session, or exits with a message when the
/// store only has the empty sentinel for that name.
fn open_session(store: &DocumentStore, name: &str) -> Session {
    match store.open_document(name) {
        Ok(document) => {
            if document == LogDocument::default() {
                eprintln!(
                    "Error: Failed to open log '{}'. (maybe it does not exist?)",
                    name
                );
                std::process::exit(1);
            }
            Session::new(name, document)
        }
        Err(e) => {
            eprintln!("Error: Failed to open log '{}': {}", name, e);
            std::process::exit(1);
        }
    }
}

fn save_session(session: &mut Session, store: &DocumentStore) {
    if let Err(e) = session.save(store) {
        eprintln!("Error: Failed to save log '{}': {}", session.name(), e);
        std::process::exit(1);
    }
}

fn parse_due_date(input: &str) -> Date {
    match input.parse::<jiff::civil::Date>() {
        Ok(date) => Date::from_civil(date),
        Err(e) => {
            eprintln!("Error: Invalid due date '{}': {}", input, e);
            eprintln!("\nExpected format: YYYY-MM-DD (e.g., 2025-03-01)");
            std::process::exit(1);
        }
    }
}

fn run_todo_command(store: &DocumentStore, command: TodoCommands) {
    match command {
        TodoCommands::Add {
            log,
            title,
            description,
            due,
        } => {
            let due_date = match due {
                Some(text) => parse_due_date(&text),
                None => Date::today(),
            };
            let mut session = open_session(store, &log);
            let id = todos::add_todo(
                session.document_mut(),
                title.clone(),
                description.unwrap_or_default(),
                due_date,
            );
            save_session(&mut session, store);
            println!("✓ Todo added: {}", title);
            println!("  #{}", id);
        }
        TodoCommands::Remove { log, id } => {
            let mut session = open_session(store, &log);
            todos::remove_todo(session.document_mut(), id);
            if !session.is_dirty() {
                eprintln!("Error: No todo #{} in '{}'", id, log);
                std::process::exit(1);
            }
            save_session(&mut session, store);
            println!("✓ Todo removed: #{}", id);
        }
        TodoCommands::Done { log, id } => {
            set_done(store, &log, id, true);
        }
        TodoCommands::Undone { log, id } => {
            set_done(store, &log, id, false);
        }
        TodoCommands::List { log } => {
            let session = open_session(store, &log);
            ui::render_todos(session.document());
        }
    }
}

fn set_done(store: &DocumentStore, log: &str, id: i32, done: bool) {
    let mut session = open_session(store, log);
    if !session.document().todos.iter().any(|todo| todo.id == id) {
        eprintln!("Error: No todo #{} in '{}'", id, log);
        std::process::exit(1);
    }
    todos::set_todo_done(session.document_mut(), id, done);
    if session.is_dirty() {
        save_session(&mut session, store);
    }
    let state = if done { "done" } else { "not done" };
    println!("✓ Todo #{} marked {}", id, state);
}

fn run_milestone_command(store: &DocumentStore, command: MilestoneCommands) {
    match command {
        MilestoneCommands::Add {
            log,
            name,
            description,
        } => {
            let mut session = open_session(store, &log);
            let id = milestones::add_milestone(
                session.document_mut(),
                name.clone(),
                description.unwrap_or_default(),
            );
            save_session(&mut session, store);
            println!("✓ Milestone added: {}", name);
            println!("  #{}", id);
        }
        MilestoneCommands::Remove { log, id } => {
            let mut session = open_session(store, &log);
            milestones::remove_milestone(session.document_mut(), id);
            if !session.is_dirty() {
                eprintln!("Error: No milestone #{} in '{}'", id, log);
                std::process::exit(1);
            }
            save_session(&mut session, store);
            println!("✓ Milestone removed: #{}", id);
        }
        MilestoneCommands::Progress {
            log,
            id,
            completed,
            description,
        } => {
            let mut session = open_session(store, &log);
            let result = milestones::add_progress_point(
                session.document_mut(),
                id,
                completed,
                description.unwrap_or_default(),
            );
            match result {
                Ok(()) => {
                    save_session(&mut session, store);
                    println!("✓ Progress point recorded for milestone #{}", id);
                }
                Err(ProgressPointError::DuplicateForToday) => {
                    // Reported condition, not a failure: one point per day.
                    println!(
                        "{}",
                        "Already recorded a progress point today, nothing to do".yellow()
                    );
                }
                Err(e @ ProgressPointError::MilestoneNotFound(_)) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        MilestoneCommands::List { log } => {
            let session = open_session(store, &log);
            ui::render_milestones(session.document());
        }
    }
}

fn run_diary_command(store: &DocumentStore, command: DiaryCommands) {
    match command {
        DiaryCommands::Add { log, title, body } => {
            let mut session = open_session(store, &log);
            let entry = diary::add_diary_entry(
                session.document_mut(),
                title,
                body.unwrap_or_default(),
            );
            save_session(&mut session, store);
            println!("✓ Diary entry added: {}", entry.name);
            println!("  #{} on {}", entry.id, ui::format_day(&entry.date));
        }
        DiaryCommands::List { log } => {
            let session = open_session(store, &log);
            ui::render_diary(session.document());
        }
        DiaryCommands::Dates { log } => {
            let session = open_session(store, &log);
            ui::render_diary_dates(session.document());
        }
    }
}
