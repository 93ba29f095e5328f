use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing::wrap;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const TOAST_WIDTH: u16 = 40;

/// Stack active toasts in the top-right corner of `size`, newest first.
///
pub fn notices(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let width = TOAST_WIDTH.min(size.width);
    let mut y = size.y;
    for toast in state.notices().toasts().iter().rev() {
        let style = styling::notice_style(theme, toast.notice.kind);
        let body = wrap(&toast.notice.detail, width.saturating_sub(2).max(1) as usize);
        let height = body.len() as u16 + 2;
        if y + height > size.y + size.height {
            break;
        }
        let area = Rect::new(size.x + size.width - width, y, width, height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(Span::styled(
                format!(" {} ", toast.notice.title),
                style.add_modifier(ratatui::style::Modifier::BOLD),
            ));
        let lines: Vec<Line> = body
            .into_iter()
            .map(|line| Line::from(Span::styled(line, styling::normal_text_style(theme))))
            .collect();
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
        y += height;
    }
}
