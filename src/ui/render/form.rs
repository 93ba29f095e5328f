use super::Frame;
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::inquiry::{InquiryField, InquiryForm, MIN_REQUIREMENTS_CHARS};
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, BorderType, Borders, Clear, Paragraph,
    },
};

const FORM_WIDTH: u16 = 64;
const FIELD_HEIGHT: u16 = 3;
const REQUIREMENTS_HEIGHT: u16 = 7;

/// Center a box of at most `width` x `height` inside `area`.
///
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Text shown inside a single-line field.
///
fn field_text(form: &InquiryForm, field: InquiryField, focused: bool) -> String {
    let select = |label: Option<&'static str>| match label {
        Some(label) if focused => format!("‹ {} ›", label),
        Some(label) => label.to_string(),
        None => "Select…".to_string(),
    };
    match field {
        InquiryField::Name if focused => format!("{}▏", form.name),
        InquiryField::Name => form.name.clone(),
        InquiryField::Email if focused => format!("{}▏", form.email),
        InquiryField::Email => form.email.clone(),
        InquiryField::ProjectType => select(form.project_type.map(|o| o.label())),
        InquiryField::Budget => select(form.budget.map(|o| o.label())),
        InquiryField::Timeline => select(form.timeline.map(|o| o.label())),
        InquiryField::Requirements => form.requirements.clone(),
    }
}

/// Bordered block of a field, carrying its validation message at the bottom.
///
fn field_block(
    theme: &Theme,
    title: String,
    focused: bool,
    error: Option<&str>,
) -> Block<'static> {
    let border_style = if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            title,
            if focused {
                styling::active_block_title_style()
            } else {
                styling::secondary_text_style(theme)
            },
        ));
    if let Some(error) = error {
        block = block.title(
            Title::from(Span::styled(
                format!(" {} ", error),
                styling::error_text_style(theme),
            ))
            .position(Position::Bottom)
            .alignment(Alignment::Right),
        );
    }
    block
}

/// Status row under the fields. The submit hint is dimmed until every field
/// passes validation; the key still works and then lists what is missing.
///
fn status_line(state: &State, theme: &Theme) -> Line<'static> {
    let inquiry = state.inquiry();
    if inquiry.is_submitting() {
        return Line::from(Span::styled(
            format!("{} Sending your inquiry…", spinner::frame(state.get_spinner_index())),
            styling::muted_text_style(theme),
        ));
    }
    let submit_key = state
        .get_hotkeys()
        .form
        .get(&HotkeyAction::SubmitForm)
        .map_or_else(|| "-".to_string(), format_hotkey_display);
    let errors = inquiry.errors().len();
    let mut spans = vec![];
    if errors > 0 {
        spans.push(Span::styled(
            format!("{} field(s) need attention  ", errors),
            styling::error_text_style(theme),
        ));
    }
    if inquiry.is_submittable() {
        spans.push(Span::styled(
            format!("{}: send inquiry", submit_key),
            styling::active_list_item_style(theme),
        ));
    } else {
        spans.push(Span::styled(
            format!("{}: send (complete all fields)", submit_key),
            styling::muted_text_style(theme).add_modifier(Modifier::DIM),
        ));
    }
    Line::from(spans)
}

/// Render the inquiry form as an overlay on top of `size`.
///
pub fn form(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = state.focused_field();
    let inquiry = state.inquiry();
    let form = inquiry.form().clone();

    let height = FIELD_HEIGHT * 5 + REQUIREMENTS_HEIGHT + 3;
    let area = centered(size, FORM_WIDTH, height);
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styling::active_block_border_style(&theme))
        .title(Span::styled(
            " Start a project ",
            styling::banner_style(state.accent()),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); 5];
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let single_line = [
        InquiryField::Name,
        InquiryField::Email,
        InquiryField::ProjectType,
        InquiryField::Budget,
        InquiryField::Timeline,
    ];
    for (row, field) in single_line.iter().enumerate() {
        let is_focused = *field == focused;
        let block = field_block(
            &theme,
            field.label().to_string(),
            is_focused,
            inquiry.error(*field),
        );
        let style = if is_focused {
            styling::current_list_item_style(&theme)
        } else {
            styling::normal_text_style(&theme)
        };
        let paragraph = Paragraph::new(Span::styled(
            field_text(&form, *field, is_focused),
            style,
        ))
        .block(block);
        frame.render_widget(paragraph, rows[row]);
    }

    let status = status_line(state, &theme);
    let chars = form.requirements.trim().chars().count();
    let requirements_block = field_block(
        &theme,
        format!(
            "{} ({}/{})",
            InquiryField::Requirements.label(),
            chars.min(MIN_REQUIREMENTS_CHARS),
            MIN_REQUIREMENTS_CHARS
        ),
        focused == InquiryField::Requirements,
        inquiry.error(InquiryField::Requirements),
    );
    frame.render_widget(Paragraph::new(status), rows[6]);

    let textarea = state.form_editor().requirements_textarea();
    textarea.set_block(requirements_block);
    frame.render_widget(textarea.widget(), rows[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::{Budget, FieldValue, ProjectType, Timeline};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_centered_stays_inside_area() {
        let area = Rect::new(0, 3, 40, 10);
        let rect = centered(area, FORM_WIDTH, 25);
        assert_eq!(rect, area);
        let rect = centered(Rect::new(0, 0, 100, 40), 60, 20);
        assert_eq!(rect, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_select_text() {
        let mut form = InquiryForm::default();
        assert_eq!(field_text(&form, InquiryField::Budget, true), "Select…");
        form.budget = Some(Budget::ALL[0]);
        let label = Budget::ALL[0].label();
        assert_eq!(field_text(&form, InquiryField::Budget, false), label);
        assert_eq!(
            field_text(&form, InquiryField::Budget, true),
            format!("‹ {} ›", label)
        );
    }

    #[test]
    fn test_focused_text_field_shows_caret() {
        let form = InquiryForm {
            name: "Ada".to_string(),
            ..InquiryForm::default()
        };
        assert_eq!(field_text(&form, InquiryField::Name, true), "Ada▏");
        assert_eq!(field_text(&form, InquiryField::Name, false), "Ada");
    }

    #[test]
    fn test_submit_hint_turns_ready_with_last_valid_field() {
        let mut state = State::default();
        let theme = Theme::default();
        for value in [
            FieldValue::Name("Ada Lovelace".to_string()),
            FieldValue::Email("ada@example.com".to_string()),
            FieldValue::ProjectType(Some(ProjectType::Research)),
            FieldValue::Budget(Some(Budget::Over100k)),
            FieldValue::Timeline(Some(Timeline::Asap)),
        ] {
            state.update_inquiry_field(value);
        }
        let pending = text(&status_line(&state, &theme));
        assert!(pending.contains("complete all fields"));
        assert!(!state.inquiry().is_submittable());

        state.update_inquiry_field(FieldValue::Requirements(
            "A haptics-ready surgical training module.".to_string(),
        ));
        let ready = text(&status_line(&state, &theme));
        assert!(state.inquiry().is_submittable());
        assert_eq!(ready, "Ctrl+s: send inquiry");
    }

    #[test]
    fn test_submit_hint_lists_errors_after_rejected_submit() {
        let mut state = State::default();
        state.submit_inquiry();
        let hint = text(&status_line(&state, &Theme::default()));
        assert!(hint.starts_with("6 field(s) need attention"));
        assert!(hint.contains("complete all fields"));
    }
}
