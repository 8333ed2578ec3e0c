//! HTML rendering of the journal page

use crate::application::EntrySubmission;
use crate::domain::{Category, WeekBucket};
use std::fmt::Write;

/// Everything the page needs besides the weeks
#[derive(Debug, Default)]
pub struct PageContext<'a> {
    /// Shown above the form after a rejected submission
    pub error: Option<String>,
    /// Values to refill the form with
    pub submission: Option<&'a EntrySubmission>,
}

/// Render the full page: entry form followed by the weekly view
pub fn page(weeks: &[WeekBucket], ctx: &PageContext<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Work Journal</title>\n\
         <meta name=\"description\" content=\"Learning and doing\">\n\
         </head>\n<body>\n\
         <h1>Work Journal</h1>\n<p>Learning and doing</p>\n",
    );

    render_form(&mut html, ctx);
    render_weeks(&mut html, weeks);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, ctx: &PageContext<'_>) {
    let date = ctx.submission.and_then(|s| s.date.as_deref()).unwrap_or("");
    let chosen = ctx.submission.and_then(|s| s.category.as_deref()).unwrap_or("");
    let text = ctx.submission.and_then(|s| s.text.as_deref()).unwrap_or("");

    html.push_str("<section class=\"new-entry\">\n");
    if let Some(error) = &ctx.error {
        let _ = writeln!(html, "<p class=\"error\" role=\"alert\">{}</p>", escape(error));
    }
    html.push_str("<form method=\"post\">\n<p>Create a new entry</p>\n");
    let _ = writeln!(
        html,
        "<input type=\"date\" name=\"date\" id=\"date\" value=\"{}\">",
        escape(date)
    );
    for category in Category::ALL {
        let checked = if chosen.eq_ignore_ascii_case(category.label()) {
            " checked"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<label for=\"{label}\"><input id=\"{label}\" type=\"radio\" name=\"title\" value=\"{label}\"{checked}> {title}</label>",
            label = category.label(),
            title = category.title(),
            checked = checked,
        );
    }
    let _ = writeln!(
        html,
        "<textarea name=\"content\" rows=\"10\" placeholder=\"Write your entry here...\">{}</textarea>",
        escape(text)
    );
    html.push_str("<button type=\"submit\">Submit</button>\n</form>\n</section>\n");
}

fn render_weeks(html: &mut String, weeks: &[WeekBucket]) {
    if weeks.is_empty() {
        html.push_str("<p class=\"empty\">No entries yet.</p>\n");
        return;
    }

    for week in weeks {
        let _ = writeln!(
            html,
            "<section class=\"week\" data-week-start=\"{}\">\n<h2>{}</h2>",
            week.week_start.format("%Y-%m-%d"),
            escape(&week.heading())
        );
        for category in Category::ALL {
            let entries = week.entries(category);
            if entries.is_empty() {
                continue;
            }
            let _ = writeln!(
                html,
                "<div class=\"category\">\n<p>{}</p>\n<ul>",
                category.title()
            );
            for entry in entries {
                let _ = writeln!(html, "<li>{}</li>", escape(&entry.text));
            }
            html.push_str("</ul>\n</div>\n");
        }
        html.push_str("</section>\n");
    }
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
