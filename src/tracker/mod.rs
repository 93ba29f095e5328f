//! Section activity tracking.
//!
//! Decides which page section is most relevant to the current scroll
//! position and whether the navigation bar should look elevated. The page
//! itself is reached only through the [`Viewport`] capability, so the same
//! tracker drives the terminal page and the tests.

mod activity;
mod observer;

pub use activity::{SectionTracker, TrackerConfig};
pub use observer::{CentralBand, IntersectionObserver, VisibilityEvent};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a page section, e.g. `about` or `contact`.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: &str) -> Self {
        SectionId(id.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        SectionId::new(id)
    }
}

/// Ordered, fixed set of sections known to the navigation.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    ids: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new(ids: Vec<SectionId>) -> Self {
        SectionRegistry { ids }
    }

    pub fn ids(&self) -> &[SectionId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for SectionRegistry {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        SectionRegistry::new(iter.into_iter().map(SectionId::new).collect())
    }
}

/// Rendered extent of a section, in viewport units.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Region { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Capability to inspect and scroll the rendered page.
///
pub trait Viewport {
    /// Resolve a section to its rendered region, or `None` if the section is
    /// not part of the current layout.
    fn resolve(&self, id: &SectionId) -> Option<Region>;

    /// Distance scrolled from the top of the page.
    fn scroll_offset(&self) -> f64;

    /// Visible height of the viewport.
    fn height(&self) -> f64;

    /// Smoothly scroll so that the region's start is aligned with the top.
    fn scroll_into_view(&mut self, region: &Region);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    /// Fixed page layout with a movable scroll position.
    #[derive(Default)]
    pub struct FixedViewport {
        pub regions: HashMap<SectionId, Region>,
        pub scroll: f64,
        pub height: f64,
        pub scrolled_to: Vec<Region>,
    }

    impl FixedViewport {
        pub fn new(height: f64, sections: &[(&str, f64, f64)]) -> Self {
            FixedViewport {
                regions: sections
                    .iter()
                    .map(|(id, top, height)| (SectionId::new(id), Region::new(*top, *height)))
                    .collect(),
                height,
                ..Default::default()
            }
        }
    }

    impl Viewport for FixedViewport {
        fn resolve(&self, id: &SectionId) -> Option<Region> {
            self.regions.get(id).copied()
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn scroll_into_view(&mut self, region: &Region) {
            self.scrolled_to.push(*region);
            self.scroll = region.top;
        }
    }
}
