//! Line-oriented markup to HTML formatter for blog content.
//!
//! Each input line maps to exactly one output line. Recognised forms:
//! `# `, `## `, `### ` headings, `- ` list items, `|`-delimited table rows
//! and plain paragraphs. `**text**` is turned into `<strong>` on every line
//! before the line form is decided, so headings may contain bold text.
//!
//! This is deliberately not a markdown parser. List items and table rows
//! are emitted without an enclosing `<ul>` or `<table>`, and nothing is
//! escaped: the page template supplies the wrappers and the content is
//! authored in-house.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

// Bold text never spans a line terminator, including a lone `\r`
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").expect("valid regex")
});

/// HTML produced from trusted, in-house content.
///
/// The renderer performs no escaping. Wrapping the output in its own type
/// keeps it from being mixed up with user-supplied strings; anything that
/// embeds it unescaped has to go through [`TrustedHtml::as_str`] or
/// [`TrustedHtml::into_inner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a whole content block. Lines are split on `\n` and rejoined with
/// `\n`; blank lines and table separators become empty lines.
pub fn render_content(content: &str) -> TrustedHtml {
    let html = content
        .split('\n')
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n");

    TrustedHtml(html)
}

/// Render a single line.
pub fn render_line(line: &str) -> String {
    let line = BOLD.replace_all(line, "<strong>${1}</strong>");

    if let Some(rest) = line.strip_prefix("# ") {
        return format!("<h1>{}</h1>", rest);
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return format!("<h2>{}</h2>", rest);
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return format!("<h3>{}</h3>", rest);
    }

    if let Some(rest) = line.strip_prefix("- ") {
        return format!("<li>{}</li>", rest);
    }

    if line.starts_with('|') {
        return render_table_row(&line);
    }

    if line.trim().is_empty() {
        return String::new();
    }

    format!("<p>{}</p>", line)
}

fn render_table_row(line: &str) -> String {
    // Separator rows such as |---|---| produce nothing
    if line.contains("---") {
        return String::new();
    }

    let cells: String = line
        .split('|')
        .filter(|cell| !cell.is_empty())
        .map(|cell| format!("<td>{}</td>", cell.trim()))
        .collect();

    format!("<tr>{}</tr>", cells)
}
