//! Scrollable page canvas.
//!
//! The page is laid out in terminal rows. The section tracker reasons in
//! viewport units, so every row counts as [`UNITS_PER_ROW`] units.

use crate::tracker::{Region, SectionId, Viewport};

/// Viewport units covered by one terminal row.
///
pub const UNITS_PER_ROW: f64 = 16.0;

/// Rows of one rendered section.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionSlot {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

/// Scroll position and section layout of the page.
///
#[derive(Debug, Default)]
pub struct PageViewport {
    slots: Vec<SectionSlot>,
    content_rows: usize,
    height_rows: usize,
    offset: usize,
    target: Option<usize>,
}

impl PageViewport {
    /// Replace the section layout, e.g. after the terminal was resized.
    ///
    pub fn set_layout(&mut self, slots: Vec<SectionSlot>) {
        self.content_rows = slots.iter().map(|s| s.top + s.height).max().unwrap_or(0);
        self.slots = slots;
        self.clamp();
    }

    pub fn set_height(&mut self, rows: usize) {
        self.height_rows = rows;
        self.clamp();
    }

    /// Keep the offset and any animation target inside the scrollable range.
    fn clamp(&mut self) {
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self
            .target
            .map(|target| target.min(max))
            .filter(|target| *target != self.offset);
    }

    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    pub fn has_layout(&self) -> bool {
        !self.slots.is_empty()
    }

    /// First visible row.
    ///
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height_rows(&self) -> usize {
        self.height_rows
    }

    pub fn is_scrolling(&self) -> bool {
        self.target.is_some()
    }

    fn max_offset(&self) -> usize {
        self.content_rows.saturating_sub(self.height_rows)
    }

    /// Scroll immediately by the given number of rows, cancelling any
    /// animation in progress.
    ///
    pub fn scroll_by(&mut self, rows: isize) {
        self.target = None;
        let next = if rows < 0 {
            self.offset.saturating_sub(rows.unsigned_abs())
        } else {
            self.offset.saturating_add(rows as usize)
        };
        self.offset = next.min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    /// Advance the smooth scroll animation by one tick. Returns whether the
    /// offset moved.
    ///
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        if distance == 0 {
            self.target = None;
            return false;
        }
        let delta = (distance / 3).max(1);
        if target > self.offset {
            self.offset += delta;
        } else {
            self.offset -= delta;
        }
        if self.offset == target {
            self.target = None;
        }
        true
    }
}

impl Viewport for PageViewport {
    fn resolve(&self, id: &SectionId) -> Option<Region> {
        self.slots.iter().find(|slot| &slot.id == id).map(|slot| {
            Region::new(
                slot.top as f64 * UNITS_PER_ROW,
                slot.height as f64 * UNITS_PER_ROW,
            )
        })
    }

    fn scroll_offset(&self) -> f64 {
        self.offset as f64 * UNITS_PER_ROW
    }

    fn height(&self) -> f64 {
        self.height_rows as f64 * UNITS_PER_ROW
    }

    fn scroll_into_view(&mut self, region: &Region) {
        let row = (region.top / UNITS_PER_ROW).round().max(0.0) as usize;
        self.target = Some(row.min(self.max_offset()));
    }
}
