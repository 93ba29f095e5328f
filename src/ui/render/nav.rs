use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Paragraph},
};

/// Build the brand and link spans of the navigation bar.
///
fn nav_line(state: &State) -> Line<'static> {
    let theme = state.get_theme();
    let accent = state.accent();
    let active = state.active_section().map(|id| id.as_str().to_string());
    let page_focused = *state.current_focus() == Focus::Page;

    let mut spans = vec![
        Span::styled(state.content().brand.to_string(), styling::banner_style(accent)),
        Span::raw("   "),
    ];
    for (index, link) in state.links().iter().enumerate() {
        let is_active = active.as_deref() == Some(link.id);
        let mut style = if is_active {
            styling::banner_style(accent)
        } else {
            styling::secondary_text_style(theme)
        };
        if page_focused && index == state.link_cursor() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(
            format!("{} ", index + 1),
            styling::muted_text_style(theme),
        ));
        spans.push(Span::styled(link.label.to_string(), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Render the navigation bar. It gets a heavier border once the page has
/// scrolled past its top.
///
pub fn nav(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (border_type, border_style) = if state.is_nav_elevated() {
        (BorderType::Thick, styling::active_block_border_style(theme))
    } else {
        (BorderType::Plain, styling::normal_block_border_style(theme))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let section = state
        .active_section()
        .map_or_else(|| "top".to_string(), |id| id.to_string());
    let status = Line::from(Span::styled(
        format!(" {} ", section),
        Style::default().fg(state.accent().to_color()),
    ));

    let block = block.title(Title::from(status).alignment(Alignment::Right));
    frame.render_widget(Paragraph::new(nav_line(state)).block(block), size);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_links_are_numbered_in_order() {
        let state = State::default();
        let rendered = text(&nav_line(&state));
        assert!(rendered.starts_with(state.content().brand));
        let about = rendered.find("1 About").unwrap();
        let contact = rendered.find("5 Contact").unwrap();
        assert!(about < contact);
    }

    #[test]
    fn test_cursor_link_is_underlined() {
        let mut state = State::default();
        state.next_link();
        let line = nav_line(&state);
        let underlined: Vec<_> = line
            .spans
            .iter()
            .filter(|span| span.style.add_modifier.contains(Modifier::UNDERLINED))
            .collect();
        assert_eq!(underlined.len(), 1);
        assert_eq!(underlined[0].content, state.links()[1].label);
    }
}
