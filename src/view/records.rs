//! Record card rendering.
//!
//! Each visible record renders as a small card: title, authors,
//! affiliations, journal/date/citations, DOI. Missing fields are simply
//! omitted. An out-of-range page renders an explicit "no results" state
//! rather than a silent blank.

use crate::model::Record;
use crate::state::AppState;
use crate::view::styles::ViewStyles;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthChar;

/// Render the record list for the current page.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let records = state.visible_records();
    if records.is_empty() {
        let message = if state.loading() {
            "Searching..."
        } else {
            "No results on this page."
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, styles.hint()))),
            area,
        );
        return;
    }

    let width = area.width as usize;
    let mut lines = Vec::new();
    for record in records {
        lines.extend(record_lines(record, width, styles));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// The card lines for one record, truncated to `width`.
pub fn record_lines(record: &Record, width: usize, styles: &ViewStyles) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&record.display_title(), width),
        styles.title(),
    ))];

    let authors = format_authors(record);
    if !authors.is_empty() {
        lines.push(detail_line(&authors, width, Style::default()));
    }

    let affiliations = record.affiliation_text();
    if !affiliations.is_empty() {
        lines.push(detail_line(&affiliations, width, styles.detail()));
    }

    let source = format_source(record);
    if !source.is_empty() {
        lines.push(detail_line(&source, width, styles.detail()));
    }

    if let Some(doi) = record.doi() {
        lines.push(detail_line(&format!("DOI: {doi}"), width, styles.doi()));
    }

    lines.push(Line::default());
    lines
}

fn detail_line(text: &str, width: usize, style: Style) -> Line<'static> {
    Line::from(Span::styled(
        truncate_to_width(&format!("  {text}"), width),
        style,
    ))
}

/// Author display names joined with "; ".
pub fn format_authors(record: &Record) -> String {
    record.author_names().join("; ")
}

/// "journal, date, N citations" with absent parts omitted.
pub fn format_source(record: &Record) -> String {
    let mut parts = Vec::new();
    if let Some(journal) = record.journal() {
        parts.push(journal.to_string());
    }
    if let Some(date) = record.display_date() {
        parts.push(date.to_string());
    }
    match record.cited_by() {
        0 => {}
        1 => parts.push("1 citation".to_string()),
        n => parts.push(format!("{n} citations")),
    }
    parts.join(", ")
}

/// Truncate `text` to at most `max` columns, appending "..." when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    const MARKER: &str = "...";
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(MARKER.len());
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(MARKER);
    out
}
