use std::io::{self, Write};

use colored::*;

use crate::{
    models::{date::Date, document::LogDocument},
    services::diary,
};

/// Get the terminal width, defaulting to 80 if unavailable
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Format a date as a timestamp, e.g. "2024-03-05 14:30"
pub fn format_timestamp(date: &Date) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        date.year, date.month, date.day, date.hour, date.minute
    )
}

/// Format a date at day granularity, e.g. "2024-03-05"
pub fn format_day(date: &Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
}

/// Render a view header with title and count
pub fn render_view_header(title: &str, count: usize, singular: &str, plural: &str) {
    let noun = if count == 1 { singular } else { plural };
    println!("\n  {} ({} {})\n", title.cyan().bold(), count, noun);
}

/// Render a section header (e.g. "Todos", "Milestones")
pub fn render_section_header(title: &str) {
    println!("\n  ─── {} ───\n", title.bold());
}

fn render_separator() {
    let width = terminal_width().saturating_sub(4).min(60);
    println!("  {}", "─".repeat(width).dimmed());
}

/// Ask a yes/no question on the terminal; anything but y/Y declines.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer == "y" || answer == "Y")
}

/// Full overview of an opened log: counts plus every populated section.
pub fn render_overview(document: &LogDocument) {
    println!("\n  {}", document.name.cyan().bold());
    println!(
        "  {}",
        format!(
            "{} todos • {} milestones • {} diary entries",
            document.todos.len(),
            document.milestones.len(),
            document.diary_entries.len()
        )
        .dimmed()
    );
    render_separator();

    if !document.todos.is_empty() {
        render_section_header("Todos");
        render_todo_lines(document);
    }
    if !document.milestones.is_empty() {
        render_section_header("Milestones");
        render_milestone_lines(document);
    }
    if !document.diary_entries.is_empty() {
        render_section_header("Diary");
        render_diary_lines(document);
    }
    if !document.calendar_events.is_empty() {
        render_section_header("Calendar");
        for event in &document.calendar_events {
            println!("  {} {}", "•".green(), format_timestamp(event));
        }
    }
}

pub fn render_todos(document: &LogDocument) {
    if document.todos.is_empty() {
        println!("Todo list is empty");
        return;
    }
    render_view_header(
        &format!("Todos in '{}'", document.name),
        document.todos.len(),
        "todo",
        "todos",
    );
    render_todo_lines(document);
}

fn render_todo_lines(document: &LogDocument) {
    for todo in &document.todos {
        let glyph = if todo.is_done() {
            "✓".green()
        } else {
            "○".normal()
        };
        println!(
            "  {}  {}  {}",
            format!("#{}", todo.id).dimmed(),
            glyph,
            todo.name.bold()
        );
        if !todo.description.is_empty() {
            println!("      {}", todo.description.dimmed());
        }
        println!(
            "      {}",
            format!("due {}", format_timestamp(&todo.due_date)).dimmed()
        );
    }
}

pub fn render_milestones(document: &LogDocument) {
    if document.milestones.is_empty() {
        println!("Milestones list is empty");
        return;
    }
    render_view_header(
        &format!("Milestones in '{}'", document.name),
        document.milestones.len(),
        "milestone",
        "milestones",
    );
    render_milestone_lines(document);
}

fn render_milestone_lines(document: &LogDocument) {
    for milestone in &document.milestones {
        println!(
            "  {}  {}  {}",
            format!("#{}", milestone.id).dimmed(),
            milestone.name.bold(),
            format!("since {}", format_day(&milestone.start_date)).dimmed()
        );
        if !milestone.description.is_empty() {
            println!("      {}", milestone.description.dimmed());
        }
        for point in &milestone.progress_points {
            let marker = if point.is_completed {
                "[x]".green()
            } else {
                "[ ]".normal()
            };
            println!(
                "      {} {}  {}",
                marker,
                format_day(&point.date).dimmed(),
                point.description
            );
        }
    }
}

pub fn render_diary(document: &LogDocument) {
    if document.diary_entries.is_empty() {
        println!("Diary is empty");
        return;
    }
    render_view_header(
        &format!("Diary in '{}'", document.name),
        document.diary_entries.len(),
        "entry",
        "entries",
    );
    render_diary_lines(document);
}

fn render_diary_lines(document: &LogDocument) {
    for entry in &document.diary_entries {
        println!(
            "  {}  {}  {}",
            format!("#{}", entry.id).dimmed(),
            format_day(&entry.date).blue(),
            entry.name.bold()
        );
        if !entry.body.is_empty() {
            println!("      {}", entry.body);
        }
    }
}

/// Dates with diary activity, most recent first (today included).
pub fn render_diary_dates(document: &LogDocument) {
    let dates = diary::sorted_diary_dates(document);
    render_view_header(
        &format!("Diary dates in '{}'", document.name),
        dates.len(),
        "date",
        "dates",
    );
    let today = Date::today();
    for date in dates {
        if date.same_day(&today) {
            println!("  {} {}", "•".green(), format!("{} (today)", format_day(&date)).bold());
        } else {
            println!("  {} {}", "•".green(), format_day(&date));
        }
    }
}
