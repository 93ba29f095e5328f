//! Viewport intersection observation.
//!
//! Interest is registered per section with [`IntersectionObserver::observe`];
//! each [`poll`](IntersectionObserver::poll) yields a batch of visibility
//! events for the sections whose intersection with the central band changed,
//! and [`disconnect`](IntersectionObserver::disconnect) drops every
//! registration.

use super::{Region, SectionId, Viewport};
use serde::{Deserialize, Serialize};

/// Vertical band of the viewport used to judge which section dominates.
///
/// Margins are fractions of the viewport height excluded from the top and
/// the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CentralBand {
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl Default for CentralBand {
    fn default() -> Self {
        CentralBand {
            top_margin: 0.40,
            bottom_margin: 0.55,
        }
    }
}

impl CentralBand {
    /// Return the band's top and bottom in page coordinates.
    ///
    pub fn bounds(&self, scroll: f64, height: f64) -> (f64, f64) {
        let top = scroll + height * self.top_margin;
        let bottom = scroll + height * (1.0 - self.bottom_margin);
        (top, bottom.max(top))
    }

    /// Return whether the region intersects the band and which fraction of
    /// the region lies inside it.
    ///
    pub fn measure(&self, region: &Region, scroll: f64, height: f64) -> (bool, f64) {
        if region.height <= 0.0 {
            return (false, 0.0);
        }
        let (top, bottom) = self.bounds(scroll, height);
        if bottom > top {
            let overlap = bottom.min(region.bottom()) - top.max(region.top);
            if overlap > 0.0 {
                (true, (overlap / region.height).clamp(0.0, 1.0))
            } else {
                (false, 0.0)
            }
        } else {
            // collapsed band: a single line
            (top >= region.top && top < region.bottom(), 0.0)
        }
    }
}

/// Change in a section's intersection with the central band.
///
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEvent {
    pub id: SectionId,
    pub intersecting: bool,
    pub ratio: f64,
}

struct Target {
    id: SectionId,
    last: Option<(bool, f64)>,
}

/// Tracks registered sections and reports their visibility changes.
///
pub struct IntersectionObserver {
    band: CentralBand,
    targets: Vec<Target>,
}

impl IntersectionObserver {
    pub fn new(band: CentralBand) -> Self {
        IntersectionObserver {
            band,
            targets: vec![],
        }
    }

    /// Register interest in a section. Registering the same section twice
    /// has no effect.
    ///
    pub fn observe(&mut self, id: SectionId) {
        if self.targets.iter().any(|t| t.id == id) {
            return;
        }
        self.targets.push(Target { id, last: None });
    }

    /// Drop every registration.
    ///
    pub fn disconnect(&mut self) {
        self.targets.clear();
    }

    pub fn observed(&self) -> impl Iterator<Item = &SectionId> {
        self.targets.iter().map(|t| &t.id)
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Measure every registered section against the band and return events
    /// for those that changed since the previous poll, in registration order.
    /// A section that no longer resolves is reported as not intersecting.
    ///
    pub fn poll<V: Viewport + ?Sized>(&mut self, viewport: &V) -> Vec<VisibilityEvent> {
        let scroll = viewport.scroll_offset();
        let height = viewport.height();
        let band = self.band;
        self.targets
            .iter_mut()
            .filter_map(|target| {
                let current = viewport
                    .resolve(&target.id)
                    .map(|region| band.measure(&region, scroll, height))
                    .unwrap_or((false, 0.0));
                if target.last == Some(current) {
                    return None;
                }
                target.last = Some(current);
                Some(VisibilityEvent {
                    id: target.id.clone(),
                    intersecting: current.0,
                    ratio: current.1,
                })
            })
            .collect()
    }
}
