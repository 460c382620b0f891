use chrono::NaiveDate;
use tasklist_core::Task;

const TEXT_WIDTH: usize = 44;

/// One colored cell per tag letter: ANSI bright background around a single
/// space. Priority codes C/H/N/L and urgency codes I/T/O share the table;
/// anything else renders as a plain space.
fn color_cell(code: char) -> &'static str {
    match code {
        'C' | 'O' => "\u{1b}[101m \u{1b}[0m",
        'H' | 'T' => "\u{1b}[103m \u{1b}[0m",
        'N' | 'I' => "\u{1b}[102m \u{1b}[0m",
        'L' => "\u{1b}[104m \u{1b}[0m",
        _ => " ",
    }
}

/// Chunk a body line into 44-character pieces. Counted in characters, and a
/// line whose length is an exact multiple of 44 yields no trailing empty
/// chunk.
fn wrap_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= TEXT_WIDTH {
        return vec![line.to_string()];
    }
    chars
        .chunks(TEXT_WIDTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Format the whole store as the bordered table. `today` drives the urgency
/// column; the caller passes the current UTC date.
pub fn render_table(tasks: &[Task], today: NaiveDate) -> String {
    let border = format!(
        "+----+{}+-------+---+---+{}+\n",
        "-".repeat(12),
        "-".repeat(TEXT_WIDTH)
    );
    let header = format!(
        "| N  |    Date    | Time  | P | D |{}Task{}|\n",
        " ".repeat(19),
        " ".repeat(21)
    );

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&header);
    out.push_str(&border);

    for (i, task) in tasks.iter().enumerate() {
        let meta = format!(
            "| {:<2} | {} | {} | {} | {} |",
            i + 1,
            task.date.format("%Y-%m-%d"),
            task.time.format("%H:%M"),
            color_cell(task.priority.code()),
            color_cell(task.urgency(today).code())
        );

        let mut first = true;
        for line in &task.text {
            for chunk in wrap_line(line) {
                if first {
                    out.push_str(&meta);
                    first = false;
                } else {
                    // continuation row: blank index/date/time/tag cells
                    out.push_str("|    |            |       |   |   |");
                }
                out.push_str(&format!("{:<44}|\n", chunk));
            }
        }
        out.push_str(&border);
    }
    out
}
