use crate::inquiry::NoticeKind;
use crate::ui::theme::{ColorSpec, Theme};
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for current list items.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    current_list_item_style(theme).fg(theme.primary.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn secondary_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_secondary.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the brand name, tinted with the page accent.
///
pub fn banner_style(accent: ColorSpec) -> Style {
    Style::default()
        .fg(accent.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for section headings.
///
pub fn heading_style(accent: ColorSpec) -> Style {
    banner_style(accent).add_modifier(Modifier::UNDERLINED)
}

pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the colour of a toast by its kind.
///
pub fn notice_style(theme: &Theme, kind: NoticeKind) -> Style {
    let color = match kind {
        NoticeKind::Info => theme.info,
        NoticeKind::Success => theme.success,
        NoticeKind::Error => theme.error,
    };
    Style::default().fg(color.to_color())
}
