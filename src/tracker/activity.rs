//! Active-section selection and navigation.

use super::{
    CentralBand, IntersectionObserver, SectionId, SectionRegistry, Viewport, VisibilityEvent,
};
use log::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tunables of the section tracker, in viewport units.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Height of the fixed navigation bar, added to the scroll offset by the
    /// fallback rule.
    pub nav_offset: f64,
    /// Scroll distance after which the navigation bar is elevated.
    pub elevation_threshold: f64,
    pub band: CentralBand,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            nav_offset: 120.0,
            elevation_threshold: 4.0,
            band: CentralBand::default(),
        }
    }
}

/// Publishes the section currently most relevant to the viewport.
///
pub struct SectionTracker {
    config: TrackerConfig,
    registry: Option<SectionRegistry>,
    observer: IntersectionObserver,
    entries: HashMap<SectionId, VisibilityEvent>,
    active: Option<SectionId>,
    elevated: bool,
}

impl SectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        SectionTracker {
            config,
            registry: None,
            observer: IntersectionObserver::new(config.band),
            entries: HashMap::new(),
            active: None,
            elevated: false,
        }
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    pub fn is_mounted(&self) -> bool {
        self.registry.is_some()
    }

    /// Sections actually under observation, in registration order.
    ///
    pub fn observed(&self) -> Vec<SectionId> {
        self.observer.observed().cloned().collect()
    }

    /// Attach observation for every section of the registry that resolves in
    /// the current layout and return how many are observed. Mounting an
    /// equal registry again is a no-op.
    ///
    pub fn mount<V: Viewport + ?Sized>(
        &mut self,
        registry: SectionRegistry,
        viewport: &V,
    ) -> usize {
        if self.registry.as_ref() == Some(&registry) {
            return self.observer.observed().count();
        }
        if self.is_mounted() {
            debug!("Section set changed, re-registering observers...");
            self.unmount();
        }
        for id in registry.ids() {
            if viewport.resolve(id).is_some() {
                self.observer.observe(id.clone());
            } else {
                debug!("Section '{}' is not part of the layout, skipping.", id);
            }
        }
        let observed = self.observer.observed().count();
        debug!("Observing {} of {} sections.", observed, registry.len());
        self.registry = Some(registry);
        observed
    }

    /// Detach all observation and forget the active section.
    ///
    pub fn unmount(&mut self) {
        self.observer.disconnect();
        self.entries.clear();
        self.registry = None;
        self.active = None;
        self.elevated = false;
    }

    /// Handle a scroll signal: update elevation, collect visibility changes
    /// and re-pick the active section. Returns whether it changed.
    ///
    pub fn refresh<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.elevated = viewport.scroll_offset() > self.config.elevation_threshold;

        for event in self.observer.poll(viewport) {
            self.entries.insert(event.id.clone(), event);
        }

        let picked = self
            .most_visible()
            .or_else(|| self.fallback(viewport))
            .cloned();
        match picked {
            Some(id) if self.active.as_ref() != Some(&id) => {
                trace!("Active section is now '{}'.", id);
                self.active = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Highest intersection ratio among intersecting sections; the first
    /// registered wins a tie.
    fn most_visible(&self) -> Option<&SectionId> {
        let mut best: Option<&VisibilityEvent> = None;
        for id in self.observer.observed() {
            let Some(entry) = self.entries.get(id).filter(|e| e.intersecting) else {
                continue;
            };
            if best.map_or(true, |b| entry.ratio > b.ratio) {
                best = Some(entry);
            }
        }
        best.map(|entry| &entry.id)
    }

    /// Last section, in registration order, whose top has been scrolled past
    /// the navigation bar.
    fn fallback<V: Viewport + ?Sized>(&self, viewport: &V) -> Option<&SectionId> {
        let position = viewport.scroll_offset() + self.config.nav_offset;
        self.observer
            .observed()
            .filter(|id| {
                viewport
                    .resolve(id)
                    .map_or(false, |region| region.top <= position)
            })
            .last()
    }

    /// Scroll the section into view and report the click to `on_click`.
    /// The active section is left to the scroll tracking. Returns false if
    /// the section is not part of the layout.
    ///
    pub fn navigate<V, F>(&self, id: &SectionId, viewport: &mut V, mut on_click: F) -> bool
    where
        V: Viewport + ?Sized,
        F: FnMut(&SectionId),
    {
        match viewport.resolve(id) {
            Some(region) => {
                debug!("Navigating to section '{}'...", id);
                viewport.scroll_into_view(&region);
                on_click(id);
                true
            }
            None => {
                debug!("Ignoring navigation to unknown section '{}'.", id);
                false
            }
        }
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::testing::FixedViewport;
    use crate::tracker::Region;

    fn three_sections() -> FixedViewport {
        FixedViewport::new(
            1000.0,
            &[("a", 0.0, 800.0), ("b", 800.0, 800.0), ("c", 1600.0, 800.0)],
        )
    }

    fn registry() -> SectionRegistry {
        ["a", "b", "c"].into_iter().collect()
    }

    #[test]
    fn test_mount_skips_unresolved_sections() {
        let viewport = FixedViewport::new(1000.0, &[("a", 0.0, 800.0), ("c", 800.0, 800.0)]);
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        assert_eq!(tracker.mount(registry(), &viewport), 2);
        assert_eq!(tracker.observed(), vec![SectionId::new("a"), SectionId::new("c")]);
        assert!(tracker.is_mounted());
    }

    #[test]
    fn test_mount_same_registry_is_noop() {
        let viewport = three_sections();
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(registry(), &viewport);
        tracker.refresh(&viewport);
        assert_eq!(tracker.mount(registry(), &viewport), 3);
        assert_eq!(tracker.active(), Some(&SectionId::new("a")));

        let other: SectionRegistry = ["b", "c"].into_iter().collect();
        assert_eq!(tracker.mount(other, &viewport), 2);
        assert!(tracker.active().is_none());
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut viewport = three_sections();
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(registry(), &viewport);

        // band is [1300, 1350]: only b intersects
        viewport.scroll = 900.0;
        assert!(tracker.refresh(&viewport));
        assert_eq!(tracker.active(), Some(&SectionId::new("b")));
        assert!(!tracker.refresh(&viewport));
    }

    #[test]
    fn test_smaller_section_straddling_band_wins() {
        let mut viewport = FixedViewport::new(
            1000.0,
            &[("a", 0.0, 1000.0), ("b", 1000.0, 100.0), ("c", 1100.0, 800.0)],
        );
        let mut tracker = SectionTracker::new(TrackerConfig {
            band: CentralBand {
                top_margin: 0.40,
                bottom_margin: 0.50,
            },
            ..TrackerConfig::default()
        });
        tracker.mount(registry(), &viewport);

        // band is [1020, 1120]: b overlaps 80 of 100, c overlaps 20 of 800
        viewport.scroll = 620.0;
        tracker.refresh(&viewport);
        assert_eq!(tracker.active(), Some(&SectionId::new("b")));
    }

    #[test]
    fn test_ties_go_to_first_registered() {
        let mut viewport = FixedViewport::new(
            1000.0,
            &[("a", 0.0, 425.0), ("b", 425.0, 425.0)],
        );
        viewport.scroll = 0.0;
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(["a", "b"].into_iter().collect(), &viewport);
        // band is [400, 450]: both overlap by 25 units
        tracker.refresh(&viewport);
        assert_eq!(tracker.active(), Some(&SectionId::new("a")));
    }

    #[test]
    fn test_fallback_when_nothing_intersects() {
        let mut viewport = three_sections();
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(registry(), &viewport);

        // band is [3400, 3450], past every section; 3000 + 120 >= 1600
        viewport.scroll = 3000.0;
        tracker.refresh(&viewport);
        assert_eq!(tracker.active(), Some(&SectionId::new("c")));
    }

    #[test]
    fn test_fallback_uses_nav_offset() {
        let mut viewport = FixedViewport::new(
            1000.0,
            &[("a", 0.0, 100.0), ("b", 5000.0, 100.0), ("c", 5130.0, 100.0)],
        );
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(registry(), &viewport);

        // band is [5400, 5450]; position 5000 + 120 passes b only
        viewport.scroll = 5000.0;
        tracker.refresh(&viewport);
        assert_eq!(tracker.active(), Some(&SectionId::new("b")));

        viewport.scroll = 5010.0;
        tracker.refresh(&viewport);
        assert_eq!(tracker.active(), Some(&SectionId::new("c")));
    }

    #[test]
    fn test_elevation_threshold() {
        let mut viewport = three_sections();
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(registry(), &viewport);

        viewport.scroll = 4.0;
        tracker.refresh(&viewport);
        assert!(!tracker.is_elevated());

        viewport.scroll = 5.0;
        tracker.refresh(&viewport);
        assert!(tracker.is_elevated());
    }

    #[test]
    fn test_unmount_tears_down() {
        let viewport = three_sections();
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(registry(), &viewport);
        tracker.refresh(&viewport);
        tracker.unmount();
        assert!(!tracker.is_mounted());
        assert!(tracker.observed().is_empty());
        assert!(tracker.active().is_none());
        assert!(!tracker.refresh(&viewport));
    }

    #[test]
    fn test_navigate_scrolls_and_notifies_without_activating() {
        let mut viewport = FixedViewport::new(
            1000.0,
            &[("about", 0.0, 800.0), ("contact", 800.0, 800.0)],
        );
        let mut tracker = SectionTracker::new(TrackerConfig::default());
        tracker.mount(["about", "contact"].into_iter().collect(), &viewport);
        tracker.refresh(&viewport);
        assert_eq!(tracker.active(), Some(&SectionId::new("about")));

        let mut clicked = vec![];
        let moved = tracker.navigate(&SectionId::new("contact"), &mut viewport, |id| {
            clicked.push(id.clone())
        });
        assert!(moved);
        assert_eq!(clicked, vec![SectionId::new("contact")]);
        assert_eq!(viewport.scrolled_to, vec![Region::new(800.0, 800.0)]);
        assert_eq!(tracker.active(), Some(&SectionId::new("about")));
    }

    #[test]
    fn test_navigate_unknown_section_does_nothing() {
        let mut viewport = three_sections();
        let tracker = SectionTracker::new(TrackerConfig::default());
        let mut clicked = 0;
        assert!(!tracker.navigate(&SectionId::new("team"), &mut viewport, |_| clicked += 1));
        assert_eq!(clicked, 0);
        assert!(viewport.scrolled_to.is_empty());
    }
}
