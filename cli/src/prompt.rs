use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime};
use tasklist_core::{parse_date, parse_priority, parse_time, Priority};

/// Task field selectable in the edit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Priority,
    Date,
    Time,
    Task,
}

pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(buf.trim().to_string())
}

/// Retry until the reply is one of C, H, N, L (case-insensitive). Rejected
/// input re-issues the prompt without an extra message.
pub fn priority<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Priority> {
    loop {
        writeln!(out, "Input the task priority (C, H, N, L):")?;
        if let Ok(priority) = parse_priority(&read_line(input)?) {
            return Ok(priority);
        }
    }
}

pub fn date<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<NaiveDate> {
    loop {
        writeln!(out, "Input the date (yyyy-mm-dd):")?;
        match parse_date(&read_line(input)?) {
            Ok(date) => return Ok(date),
            Err(_) => writeln!(out, "The input date is invalid")?,
        }
    }
}

pub fn time<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<NaiveTime> {
    loop {
        writeln!(out, "Input the time (hh:mm):")?;
        match parse_time(&read_line(input)?) {
            Ok(time) => return Ok(time),
            Err(_) => writeln!(out, "The input time is invalid")?,
        }
    }
}

/// Read body lines until a blank one. A line that trims to empty terminates
/// the input and is not kept. Returns the empty list, after a warning, when
/// no lines were entered; the caller must not commit an empty task.
pub fn text<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<String>> {
    writeln!(out, "Input a new task (enter a blank line to end):")?;
    let mut lines = Vec::new();
    loop {
        let line = read_line(input)?;
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    if lines.is_empty() {
        writeln!(out, "The task is blank")?;
    }
    Ok(lines)
}

/// Retry until a number within 1..=len, the numbering shown in the table.
pub fn task_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, len: usize) -> Result<usize> {
    loop {
        writeln!(out, "Input the task number (1-{}):", len)?;
        match read_line(input)?.parse::<usize>() {
            Ok(number) if (1..=len).contains(&number) => return Ok(number),
            _ => writeln!(out, "Invalid task number")?,
        }
    }
}

pub fn field<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Field> {
    loop {
        writeln!(out, "Input a field to edit (priority, date, time, task):")?;
        match read_line(input)?.as_str() {
            "priority" => return Ok(Field::Priority),
            "date" => return Ok(Field::Date),
            "time" => return Ok(Field::Time),
            "task" => return Ok(Field::Task),
            _ => writeln!(out, "Invalid field")?,
        }
    }
}
