//! Pager bar rendering.
//!
//! Draws the page-window descriptors the core exposes: numbered buttons
//! with the current page highlighted (and inert), ellipsis markers for
//! omitted runs. When the go-to-page input is active its buffer renders at
//! the end of the bar.

use crate::state::{AppState, Focus, PageControl};
use crate::view::styles::ViewStyles;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the pager bar.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let mut line = window_line(&state.page_window(), styles);
    if state.focus == Focus::PageInput {
        line.push_span(Span::styled(
            format!("  go to page: {}_", state.page_input),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(line), area);
}

/// Map a column offset within the pager bar to the control under it.
///
/// Widths mirror [`window_line`]'s formatting; page numbers render as
/// ASCII digits, so byte length equals display width.
pub fn control_at(controls: &[PageControl], column: usize) -> Option<&PageControl> {
    let mut start = 0;
    for control in controls {
        let width = match control {
            PageControl::Page {
                number,
                is_current: true,
            } => format!("[{number}]").len(),
            PageControl::Page { number, .. } => format!(" {number} ").len(),
            PageControl::Ellipsis => " ... ".len(),
        };
        if column < start + width {
            return Some(control);
        }
        start += width;
    }
    None
}

/// The pager controls as one styled line.
pub fn window_line(controls: &[PageControl], styles: &ViewStyles) -> Line<'static> {
    let mut spans = Vec::with_capacity(controls.len());
    for control in controls {
        match control {
            PageControl::Page {
                number,
                is_current: true,
            } => spans.push(Span::styled(format!("[{number}]"), styles.current_page())),
            PageControl::Page { number, .. } => spans.push(Span::raw(format!(" {number} "))),
            PageControl::Ellipsis => spans.push(Span::raw(" ... ")),
        }
    }
    Line::from(spans)
}
