use super::*;
use crate::state::{Focus, State};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    nav(frame, rows[0], state);

    if state.is_log_visible() {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[1]);
        page(frame, body[0], state);
        log(frame, body[1], state);
    } else {
        page(frame, rows[1], state);
    }

    footer(frame, rows[2], state);

    if *state.current_focus() == Focus::Form {
        form(frame, rows[1], state);
    }
    notices(frame, rows[1], state);
}
