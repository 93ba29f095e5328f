use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let title = if state.is_debug_mode() {
        Span::styled(" Log (DEBUG MODE) ", styling::active_block_title_style())
    } else {
        Span::raw(" Log ")
    };
    let border_style = if state.is_debug_mode() {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = state
        .get_debug_entries()
        .iter()
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                styling::error_text_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(Span::styled(entry.as_str(), style)))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .block(block);

    let mut list_state = ListState::default();
    if !state.get_debug_entries().is_empty() {
        list_state.select(Some(state.get_debug_index()));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}
