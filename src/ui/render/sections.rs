//! Line builders for the sections of the page canvas.
//!
//! Every section is laid out as owned lines at a fixed width so the page can
//! report exact section rows to the tracker before anything is drawn.

use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::inquiry::{InquiryField, InquiryForm};
use crate::site::{ApplicationTab, ShowcaseLayout, PAGE_ORDER};
use crate::state::State;
use crate::ui::theme::{ColorSpec, Theme};
use crate::ui::widgets::{spinner, styling};
use crate::utils::text_processing::{truncate, wrap};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

type Lines = Vec<Line<'static>>;

/// Lay out every page section in display order.
///
pub fn sections(state: &State, width: usize) -> Vec<(&'static str, Lines)> {
    let theme = state.get_theme();
    let accent = state.accent();
    PAGE_ORDER
        .iter()
        .map(|id| {
            let lines = match *id {
                "hero" => hero(state, theme, accent, width),
                "about" => about(state, theme, accent, width),
                "projects" => projects(state, theme, accent, width),
                "technology" => technology(state, theme, accent, width),
                "applications" => applications(state, theme, accent, width),
                "team" => team(state, theme, accent, width),
                _ => contact(state, theme, accent, width),
            };
            (*id, lines)
        })
        .collect()
}

fn heading(text: &str, accent: ColorSpec) -> Line<'static> {
    Line::from(Span::styled(text.to_uppercase(), styling::heading_style(accent)))
}

fn paragraph(text: &str, width: usize, style: Style) -> Lines {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

/// Wrapped text with a marker on the first line and a hanging indent.
fn bullet(marker: &str, text: &str, width: usize, marker_style: Style, style: Style) -> Lines {
    let indent = marker.chars().count() + 1;
    wrap(text, width.saturating_sub(indent).max(1))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 {
                Span::styled(format!("{} ", marker), marker_style)
            } else {
                Span::raw(" ".repeat(indent))
            };
            Line::from(vec![lead, Span::styled(line, style)])
        })
        .collect()
}

/// Display form of the page key bound to `action`.
fn key(state: &State, action: HotkeyAction) -> String {
    state
        .get_hotkeys()
        .page
        .get(&action)
        .map_or_else(|| "-".to_string(), format_hotkey_display)
}

fn hint(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), styling::muted_text_style(theme)))
}

fn hero(state: &State, theme: &Theme, accent: ColorSpec, width: usize) -> Lines {
    let hero = &state.content().hero;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            hero.eyebrow.to_string(),
            styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            hero.title.to_string(),
            styling::banner_style(accent),
        )),
        Line::default(),
    ];
    lines.extend(paragraph(hero.subtitle, width, styling::normal_text_style(theme)));
    lines.push(Line::default());
    let highlights: Vec<Span> = hero
        .highlights
        .iter()
        .flat_map(|highlight| {
            [
                Span::styled("◆ ", Style::default().fg(accent.to_color())),
                Span::styled(format!("{}   ", highlight), styling::secondary_text_style(theme)),
            ]
        })
        .collect();
    lines.push(Line::from(highlights));
    lines.push(Line::default());
    let links = state.content().links.as_slice();
    for (label, target) in &hero.calls_to_action {
        let key = links
            .iter()
            .position(|link| link.id == *target)
            .map_or_else(String::new, |index| format!("[{}] ", index + 1));
        lines.push(Line::from(vec![
            Span::styled(key, styling::active_list_item_style(theme)),
            Span::styled(label.to_string(), styling::current_list_item_style(theme)),
        ]));
    }
    lines
}

fn about(state: &State, theme: &Theme, accent: ColorSpec, width: usize) -> Lines {
    let about = &state.content().about;
    let mut lines = vec![heading(about.heading, accent), Line::default()];
    lines.extend(paragraph(about.story, width, styling::normal_text_style(theme)));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(about.founder_name.to_string(), styling::current_list_item_style(theme)),
        Span::styled(
            format!("  {}", about.founder_title),
            styling::muted_text_style(theme),
        ),
    ]));
    lines.extend(paragraph(about.founder_bio, width, styling::secondary_text_style(theme)));
    lines.push(Line::default());
    let stats: Vec<Span> = about
        .stats
        .iter()
        .flat_map(|stat| {
            [
                Span::styled(stat.value.to_string(), styling::banner_style(accent)),
                Span::styled(format!(" {}    ", stat.label), styling::muted_text_style(theme)),
            ]
        })
        .collect();
    lines.push(Line::from(stats));
    lines
}

fn projects(state: &State, theme: &Theme, accent: ColorSpec, width: usize) -> Lines {
    let showcase = state.showcase();
    let mut lines = vec![
        heading("Projects", accent),
        hint(
            &format!(
                "filter: {} ({})   sort: {} ({})   layout: {} ({})",
                showcase.filter.label(),
                key(state, HotkeyAction::CycleProjectFilter),
                showcase.sort.label(),
                key(state, HotkeyAction::CycleProjectSort),
                match showcase.layout {
                    ShowcaseLayout::Grid => "cards",
                    ShowcaseLayout::List => "list",
                },
                key(state, HotkeyAction::ToggleProjectLayout),
            ),
            theme,
        ),
        Line::default(),
    ];
    let visible = showcase.visible(&state.content().projects);
    if visible.is_empty() {
        lines.push(hint("No projects in this category yet.", theme));
        return lines;
    }
    for project in visible {
        let date = project.date.format("%b %Y").to_string();
        let title = Line::from(vec![
            Span::styled("▸ ", Style::default().fg(accent.to_color())),
            Span::styled(project.title.to_string(), styling::current_list_item_style(theme)),
            Span::styled(
                format!("  [{}] {}", project.category.label(), date),
                styling::muted_text_style(theme),
            ),
        ]);
        lines.push(title);
        if showcase.layout == ShowcaseLayout::Grid {
            lines.extend(paragraph(
                project.description,
                width,
                styling::normal_text_style(theme),
            ));
            for feature in &project.features {
                lines.extend(bullet(
                    "  •",
                    feature,
                    width,
                    styling::muted_text_style(theme),
                    styling::secondary_text_style(theme),
                ));
            }
            lines.push(hint(&format!("  {}", project.stack.join(" · ")), theme));
            lines.push(Line::default());
        }
    }
    lines
}

fn technology(state: &State, theme: &Theme, accent: ColorSpec, width: usize) -> Lines {
    let active = state.technology().active();
    let mut lines = vec![
        heading("Technology", accent),
        hint(
            &format!("highlight a pillar ({})", key(state, HotkeyAction::CyclePillar)),
            theme,
        ),
        Line::default(),
    ];
    for pillar in &state.content().pillars {
        let selected = active == Some(pillar.key);
        let (marker, title_style) = if selected {
            ("●", styling::banner_style(accent))
        } else {
            ("○", styling::current_list_item_style(theme))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), Style::default().fg(accent.to_color())),
            Span::styled(pillar.title.to_string(), title_style),
        ]));
        lines.extend(
            paragraph(pillar.summary, width.saturating_sub(2), styling::normal_text_style(theme))
                .into_iter()
                .map(|line| {
                    let mut spans = vec![Span::raw("  ")];
                    spans.extend(line.spans);
                    Line::from(spans)
                }),
        );
        if selected {
            for detail in &pillar.details {
                lines.extend(bullet(
                    "  -",
                    detail,
                    width,
                    styling::muted_text_style(theme),
                    styling::secondary_text_style(theme),
                ));
            }
            lines.push(hint(&format!("  {}", pillar.capabilities.join(" · ")), theme));
        }
        lines.push(Line::default());
    }
    lines
}

fn applications(state: &State, theme: &Theme, accent: ColorSpec, width: usize) -> Lines {
    let panel = state.applications();
    let content = state.content();
    let tabs: Vec<Span> = [ApplicationTab::Gaming, ApplicationTab::Training]
        .iter()
        .map(|tab| {
            if *tab == panel.tab() {
                Span::styled(format!("[ {} ]  ", tab.label()), styling::banner_style(accent))
            } else {
                Span::styled(format!("  {}    ", tab.label()), styling::muted_text_style(theme))
            }
        })
        .collect();
    let mut lines = vec![
        heading("Applications", accent),
        hint(
            &format!(
                "switch tab ({})   next scenario ({})",
                key(state, HotkeyAction::ToggleApplicationTab),
                key(state, HotkeyAction::NextScenario),
            ),
            theme,
        ),
        Line::default(),
        Line::from(tabs),
        Line::default(),
    ];
    let active = panel.active(content).map(|scenario| scenario.key);
    for scenario in panel.scenarios(content) {
        if active == Some(scenario.key) {
            lines.push(Line::from(vec![
                Span::styled("▶ ", Style::default().fg(accent.to_color())),
                Span::styled(scenario.title.to_string(), styling::active_list_item_style(theme)),
            ]));
            lines.extend(paragraph(
                scenario.description,
                width,
                styling::normal_text_style(theme),
            ));
            let benefits = scenario.benefits.join(" · ");
            lines.push(hint(&format!("  {}", benefits), theme));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {}", scenario.title),
                styling::secondary_text_style(theme),
            )));
        }
    }
    lines
}

fn team(state: &State, theme: &Theme, accent: ColorSpec, width: usize) -> Lines {
    let team = &state.content().team;
    let mut lines = vec![heading(team.headline, accent), Line::default()];
    lines.extend(paragraph(team.subheading, width, styling::secondary_text_style(theme)));
    lines.push(Line::default());
    for member in &team.members {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<20}", member.name), styling::current_list_item_style(theme)),
            Span::styled(member.role.to_string(), styling::muted_text_style(theme)),
        ]));
    }
    lines.push(Line::default());
    for value in &team.values {
        lines.push(Line::from(Span::styled(
            value.title.to_string(),
            styling::active_list_item_style(theme),
        )));
        lines.extend(paragraph(value.description, width, styling::normal_text_style(theme)));
    }
    lines.push(Line::default());

    let active = state.stages().active();
    let stages: Vec<Span> = team
        .stages
        .iter()
        .map(|stage| {
            if stage.key == active {
                Span::styled(format!("[ {} ] ", stage.label), styling::banner_style(accent))
            } else {
                Span::styled(format!("  {}   ", stage.label), styling::muted_text_style(theme))
            }
        })
        .collect();
    lines.push(Line::from(stages));
    lines.push(hint(
        &format!("next stage ({})", key(state, HotkeyAction::NextStage)),
        theme,
    ));
    if let Some(stage) = team.stages.iter().find(|stage| stage.key == active) {
        lines.extend(paragraph(stage.summary, width, styling::normal_text_style(theme)));
        for point in &stage.points {
            lines.extend(bullet(
                "  •",
                point,
                width,
                styling::muted_text_style(theme),
                styling::secondary_text_style(theme),
            ));
        }
    }
    lines
}

/// Value of a form field as shown in the read-only summary.
///
pub fn field_value(form: &InquiryForm, field: InquiryField) -> Option<String> {
    let text = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    match field {
        InquiryField::Name => text(&form.name),
        InquiryField::Email => text(&form.email),
        InquiryField::ProjectType => form.project_type.map(|o| o.label().to_string()),
        InquiryField::Budget => form.budget.map(|o| o.label().to_string()),
        InquiryField::Timeline => form.timeline.map(|o| o.label().to_string()),
        InquiryField::Requirements => text(&form.requirements.replace('\n', " ")),
    }
}

fn contact(state: &State, theme: &Theme, accent: ColorSpec, width: usize) -> Lines {
    let inquiry = state.inquiry();
    let mut lines = vec![
        heading("Start a project", accent),
        Line::default(),
    ];
    for channel in &state.content().contact_channels {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", channel.label), styling::muted_text_style(theme)),
            Span::styled(channel.value.to_string(), styling::normal_text_style(theme)),
        ]));
    }
    lines.push(Line::default());
    for field in InquiryField::ALL {
        let value = field_value(inquiry.form(), field);
        let label = Span::styled(
            format!("{:<14}", field.label()),
            styling::secondary_text_style(theme),
        );
        let value = match value {
            Some(value) => Span::styled(
                truncate(&value, width.saturating_sub(14)),
                styling::normal_text_style(theme),
            ),
            None => Span::styled("—", styling::muted_text_style(theme)),
        };
        lines.push(Line::from(vec![label, value]));
        if let Some(error) = inquiry.error(field) {
            lines.push(Line::from(Span::styled(
                format!("{:<14}{}", "", error),
                styling::error_text_style(theme),
            )));
        }
    }
    lines.push(Line::default());
    let status = if inquiry.is_submitting() {
        Line::from(Span::styled(
            format!("{} Sending…", spinner::frame(state.get_spinner_index())),
            styling::muted_text_style(theme),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!("[{}] ", key(state, HotkeyAction::OpenForm)),
                styling::active_list_item_style(theme),
            ),
            Span::styled(
                "Open the inquiry form",
                styling::current_list_item_style(theme),
            ),
            if inquiry.is_submittable() {
                Span::styled("  ready to send", styling::secondary_text_style(theme))
            } else {
                Span::styled("  incomplete", styling::muted_text_style(theme))
            },
        ])
    };
    lines.push(status);
    lines
}
