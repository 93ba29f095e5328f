use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Focus, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Mode label and hotkey help for the current input mode.
///
fn controls(state: &State) -> (&'static str, String) {
    let hotkeys = state.get_hotkeys();
    if state.is_debug_mode() {
        let text = build_footer_text(
            &hotkeys.debug,
            &[
                (
                    HotkeyAction::DebugModeNavigateNext,
                    "navigate logs",
                    Some(HotkeyAction::DebugModeNavigatePrev),
                ),
                (HotkeyAction::DebugModeExit, "exit debug mode", None),
            ],
        );
        return ("DEBUG:", text);
    }
    match state.current_focus() {
        Focus::Form => {
            let text = build_footer_text(
                &hotkeys.form,
                &[
                    (
                        HotkeyAction::NextField,
                        "fields",
                        Some(HotkeyAction::PreviousField),
                    ),
                    (
                        HotkeyAction::PreviousOption,
                        "options",
                        Some(HotkeyAction::NextOption),
                    ),
                    (HotkeyAction::SubmitForm, "submit", None),
                    (HotkeyAction::CloseForm, "close", None),
                ],
            );
            ("FORM:", text)
        }
        Focus::Page => {
            let text = format!(
                " 1-{}: jump,{}",
                state.links().len(),
                build_footer_text(
                    &hotkeys.page,
                    &[
                        (
                            HotkeyAction::ScrollDown,
                            "scroll",
                            Some(HotkeyAction::ScrollUp),
                        ),
                        (
                            HotkeyAction::PreviousLink,
                            "links",
                            Some(HotkeyAction::NextLink),
                        ),
                        (HotkeyAction::FollowLink, "go", None),
                        (HotkeyAction::OpenForm, "inquiry", None),
                        (HotkeyAction::CycleTheme, "theme", None),
                        (HotkeyAction::EnterDebug, "debug", None),
                        (HotkeyAction::Quit, "quit", None),
                    ],
                )
            );
            ("PAGE:", text)
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, text) = controls(state);
    let background = if state.is_debug_mode() {
        theme.footer_debug
    } else if *state.current_focus() == Focus::Form {
        theme.footer_form
    } else {
        theme.footer_page
    };

    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.text.to_color())
                .bg(background.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![
        Span::styled(
            format!("{} ", theme.name),
            Style::default().fg(theme.text_muted.to_color()),
        ),
        Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.secondary.to_color()),
        ),
    ]);
    let right_content_width = u16::try_from(right_content.width()).unwrap_or(0);
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(right_content_width)])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
