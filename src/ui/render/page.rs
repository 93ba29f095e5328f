use super::sections::sections;
use super::Frame;
use crate::state::{SectionSlot, State};
use crate::tracker::SectionId;
use ratatui::{
    layout::{Margin, Rect},
    text::Line,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

const HORIZONTAL_PADDING: u16 = 2;
const SECTION_GAP: usize = 1;

type Sections = Vec<(&'static str, Vec<Line<'static>>)>;

/// Stack the sections into one canvas and record where each one lands.
///
fn stack(sections: Sections) -> (Vec<Line<'static>>, Vec<SectionSlot>) {
    let mut lines = vec![];
    let mut slots = vec![];
    for (index, (id, section)) in sections.into_iter().enumerate() {
        if index > 0 {
            lines.extend(std::iter::repeat(Line::default()).take(SECTION_GAP));
        }
        slots.push(SectionSlot {
            id: SectionId::new(id),
            top: lines.len(),
            height: section.len(),
        });
        lines.extend(section);
    }
    (lines, slots)
}

/// Render the scrollable page and report its layout to the tracker.
///
pub fn page(frame: &mut Frame, size: Rect, state: &mut State) {
    let inner = size.inner(&Margin {
        horizontal: HORIZONTAL_PADDING,
        vertical: 0,
    });
    let (lines, slots) = stack(sections(state, inner.width.max(1) as usize));
    let content_rows = lines.len();
    state.set_page_layout(size.height as usize, slots);

    let offset = state.page().offset();
    let paragraph = Paragraph::new(lines).scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, inner);

    if content_rows > size.height as usize {
        let scrollable = content_rows.saturating_sub(size.height as usize);
        let mut scrollbar_state = ScrollbarState::new(scrollable).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            size,
            &mut scrollbar_state,
        );
    }
}
