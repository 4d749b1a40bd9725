//! Search input rendering.
//!
//! A bordered input showing the current term, with the active search field
//! in the title. The border brightens while the input has focus, and a
//! cursor marker trails the term.

use crate::state::{AppState, Focus};
use crate::view::styles::ViewStyles;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the search input.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let focused = state.focus == Focus::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border(focused))
        .title(title(state));

    let mut spans = vec![Span::raw(state.query().term().to_string())];
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Block title naming the searched field.
pub fn title(state: &AppState) -> String {
    format!(" Search by {} ", state.query().field().label().to_lowercase())
}
