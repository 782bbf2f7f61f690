//! Interactive menu loop
//!
//! Reads menu choices and field values line by line, dispatches to the
//! core, and renders each outcome. Numeric-ID parse failures are reported
//! here and never reach the core. The reader is generic so tests can
//! drive the loop from an in-memory buffer.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::analytics;
use crate::domain::TaskId;
use crate::manager;
use crate::store::TaskStore;
use crate::viewer;

use super::output::Output;

const MENU: &str = "\nMain Menu:
1. Add Task
2. List Tasks
3. Toggle Complete
4. Update Task
5. Delete Task
6. Show Stats
7. Exit";

/// Runs the menu loop until the user exits or input ends.
pub fn run_loop(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    if output.is_text() {
        println!("Welcome to In-Memory Todo CLI");
        println!("Warning: All data is lost upon exit.");
    }

    loop {
        if output.is_text() {
            println!("{}", MENU);
        }
        let Some(choice) = prompt(output, input, "\nSelect an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_task(store, output, input)?,
            "2" => list_tasks(store, output),
            "3" => toggle_task(store, output, input)?,
            "4" => update_task(store, output, input)?,
            "5" => delete_task(store, output, input)?,
            "6" => show_stats(store, output),
            "7" => {
                if output.is_text() {
                    println!("Exiting. Goodbye!");
                }
                break;
            }
            _ => {
                output.blank();
                output.error("Invalid option. Please try again.");
            }
        }
    }

    Ok(())
}

/// Reads one line, trimmed. `None` once input is exhausted.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prints a prompt (text mode only) and reads the answer
fn prompt(output: &Output, input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    if output.is_text() {
        print!("{}", text);
        io::stdout().flush()?;
    }
    read_line(input)
}

/// Prompts for a task ID; parse failures are reported and yield `None`
fn read_id(output: &Output, input: &mut impl BufRead, text: &str) -> Result<Option<TaskId>> {
    let Some(line) = prompt(output, input, text)? else {
        return Ok(None);
    };

    match line.parse::<TaskId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            output.blank();
            output.error("ID must be a number");
            Ok(None)
        }
    }
}

fn add_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(title) = prompt(output, input, "Enter Task Title: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(output, input, "Enter Description (optional): ")? else {
        return Ok(());
    };

    output.blank();
    match manager::add_task(store, &title, &description) {
        Ok(reply) => output.reply(&reply),
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn list_tasks(store: &TaskStore, output: &Output) {
    output.blank();
    if output.is_json() {
        output.reply(&viewer::list_tasks(store));
    } else {
        output.block(&viewer::format_list(store));
    }
}

fn toggle_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = read_id(output, input, "Enter Task ID to toggle: ")? else {
        return Ok(());
    };

    output.blank();
    match manager::toggle_task(store, id) {
        Ok(reply) => output.reply(&reply),
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn update_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = read_id(output, input, "Enter Task ID to update: ")? else {
        return Ok(());
    };

    if output.is_text() {
        println!("Leave blank to keep existing value");
    }
    let Some(title) = prompt(output, input, "New Title: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(output, input, "New Description: ")? else {
        return Ok(());
    };

    // Blank input means "keep the existing value", so the core never sees
    // an explicitly empty field from this shell.
    let title = (!title.is_empty()).then_some(title.as_str());
    let description = (!description.is_empty()).then_some(description.as_str());

    output.blank();
    match manager::update_task(store, id, title, description) {
        Ok(reply) => output.reply(&reply),
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn delete_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = read_id(output, input, "Enter Task ID to delete: ")? else {
        return Ok(());
    };

    output.blank();
    match manager::delete_task(store, id) {
        Ok(reply) => output.success(&reply.message),
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn show_stats(store: &TaskStore, output: &Output) {
    let reply = analytics::get_summary(store);

    output.blank();
    if output.is_json() {
        output.reply(&reply);
    } else {
        let s = &reply.data;
        println!(
            "Stats: Total: {}, Completed: {}, Pending: {} ({}%)",
            s.total, s.completed, s.pending, s.percentage
        );
    }
}
