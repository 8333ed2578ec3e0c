//! Output formatting utilities

use crate::domain::{Category, JournalEntry, WeekBucket};

/// Format the weekly view for the terminal
pub fn format_weekly_view(weeks: &[WeekBucket]) -> String {
    if weeks.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (i, week) in weeks.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&week.heading());
        output.push('\n');

        for category in Category::ALL {
            let entries = week.entries(category);
            if entries.is_empty() {
                continue;
            }
            output.push_str(&format!("  {}\n", category.title()));
            for entry in entries {
                push_entry(&mut output, entry);
            }
        }
    }
    output
}

/// One-line confirmation after recording an entry
pub fn format_recorded(entry: &JournalEntry) -> String {
    format!(
        "Recorded {} entry #{} for {}",
        entry.kind,
        entry.id,
        entry.date.format("%Y-%m-%d")
    )
}

fn push_entry(output: &mut String, entry: &JournalEntry) {
    let mut lines = entry.text.lines();
    output.push_str(&format!("    - {}\n", lines.next().unwrap_or_default()));
    for line in lines {
        output.push_str(&format!("      {}\n", line));
    }
}
