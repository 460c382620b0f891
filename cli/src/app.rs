use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Utc;
use tasklist_core::{Task, TaskRepository, TaskStore};

use crate::prompt::{self, Field};
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl Action {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "add" => Some(Action::Add),
            "print" => Some(Action::Print),
            "edit" => Some(Action::Edit),
            "delete" => Some(Action::Delete),
            "end" => Some(Action::End),
            _ => None,
        }
    }
}

/// The interactive session: one flat dispatch loop, terminated only by
/// `end`, which persists the store before returning.
pub fn run<S, R, W>(repo: &S, store: &mut TaskStore, input: &mut R, out: &mut W) -> Result<()>
where
    S: TaskRepository,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "Input an action (add, print, edit, delete, end):")?;
        match Action::parse(&prompt::read_line(input)?) {
            Some(Action::Add) => add_task(store, input, out)?,
            Some(Action::Print) => {
                print_tasks(store, out)?;
            }
            Some(Action::Edit) => edit_task(store, input, out)?,
            Some(Action::Delete) => delete_task(store, input, out)?,
            Some(Action::End) => {
                repo.save(store.tasks())?;
                writeln!(out, "Tasklist exiting!")?;
                return Ok(());
            }
            None => writeln!(out, "The input action is invalid")?,
        }
    }
}

fn add_task<R: BufRead, W: Write>(store: &mut TaskStore, input: &mut R, out: &mut W) -> Result<()> {
    let priority = prompt::priority(input, out)?;
    let date = prompt::date(input, out)?;
    let time = prompt::time(input, out)?;
    let text = prompt::text(input, out)?;
    if !text.is_empty() {
        store.push(Task::new(text, priority, date, time));
    }
    Ok(())
}

fn print_tasks<W: Write>(store: &TaskStore, out: &mut W) -> Result<bool> {
    if store.is_empty() {
        writeln!(out, "No tasks have been input")?;
        return Ok(false);
    }
    let today = Utc::now().date_naive();
    write!(out, "{}", render::render_table(store.tasks(), today))?;
    Ok(true)
}

fn delete_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if !print_tasks(store, out)? {
        return Ok(());
    }
    let number = prompt::task_number(input, out, store.len())?;
    store.remove(number)?;
    writeln!(out, "The task is deleted")?;
    Ok(())
}

fn edit_task<R: BufRead, W: Write>(
    store: &mut TaskStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if !print_tasks(store, out)? {
        return Ok(());
    }
    let number = prompt::task_number(input, out, store.len())?;
    match prompt::field(input, out)? {
        Field::Priority => {
            store.get_mut(number)?.priority = prompt::priority(input, out)?;
        }
        Field::Date => {
            store.get_mut(number)?.date = prompt::date(input, out)?;
        }
        Field::Time => {
            store.get_mut(number)?.time = prompt::time(input, out)?;
        }
        Field::Task => {
            let text = prompt::text(input, out)?;
            // blank text would break the non-empty invariant; leave the
            // field as it was, without a confirmation
            if text.is_empty() {
                return Ok(());
            }
            store.get_mut(number)?.text = text;
        }
    }
    writeln!(out, "The task is changed")?;
    Ok(())
}
