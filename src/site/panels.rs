//! Small interactive panels of the page: application scenarios, technology
//! pillars and process stages.

use super::content::{Pillar, PillarKey, ProcessStage, Scenario, SiteContent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplicationTab {
    #[default]
    Gaming,
    Training,
}

impl ApplicationTab {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationTab::Gaming => "VR Gaming",
            ApplicationTab::Training => "VR Training",
        }
    }

    pub fn other(&self) -> ApplicationTab {
        match self {
            ApplicationTab::Gaming => ApplicationTab::Training,
            ApplicationTab::Training => ApplicationTab::Gaming,
        }
    }
}

/// Selected tab and scenario of the applications section.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationsPanel {
    tab: ApplicationTab,
    scenario: Option<&'static str>,
}

impl ApplicationsPanel {
    pub fn new(content: &SiteContent) -> Self {
        let tab = ApplicationTab::default();
        ApplicationsPanel {
            tab,
            scenario: Self::scenarios_of(content, tab).first().map(|s| s.key),
        }
    }

    pub fn tab(&self) -> ApplicationTab {
        self.tab
    }

    pub fn scenario_key(&self) -> Option<&'static str> {
        self.scenario
    }

    pub fn scenarios<'a>(&self, content: &'a SiteContent) -> &'a [Scenario] {
        Self::scenarios_of(content, self.tab)
    }

    pub fn active<'a>(&self, content: &'a SiteContent) -> Option<&'a Scenario> {
        self.scenarios(content)
            .iter()
            .find(|scenario| Some(scenario.key) == self.scenario)
    }

    /// Switch tabs; the tab's first scenario becomes active.
    ///
    pub fn set_tab(&mut self, content: &SiteContent, tab: ApplicationTab) {
        self.tab = tab;
        self.scenario = Self::scenarios_of(content, tab).first().map(|s| s.key);
    }

    pub fn toggle_tab(&mut self, content: &SiteContent) {
        self.set_tab(content, self.tab.other());
    }

    pub fn next_scenario(&mut self, content: &SiteContent) {
        let scenarios = self.scenarios(content);
        if scenarios.is_empty() {
            return;
        }
        let next = scenarios
            .iter()
            .position(|scenario| Some(scenario.key) == self.scenario)
            .map_or(0, |index| (index + 1) % scenarios.len());
        self.scenario = Some(scenarios[next].key);
    }

    fn scenarios_of(content: &SiteContent, tab: ApplicationTab) -> &[Scenario] {
        match tab {
            ApplicationTab::Gaming => &content.gaming_scenarios,
            ApplicationTab::Training => &content.training_scenarios,
        }
    }
}

/// Pillar currently highlighted in the technology section.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TechnologyPanel {
    active: Option<PillarKey>,
}

impl TechnologyPanel {
    pub fn active(&self) -> Option<PillarKey> {
        self.active
    }

    pub fn focus(&mut self, key: PillarKey) {
        self.active = Some(key);
    }

    /// Clear the highlight, unless another pillar took focus meanwhile.
    ///
    pub fn blur(&mut self, key: PillarKey) {
        if self.active == Some(key) {
            self.active = None;
        }
    }

    /// Move the highlight to the next pillar; past the last one it is
    /// cleared.
    ///
    pub fn cycle(&mut self, pillars: &[Pillar]) {
        let position = self
            .active
            .and_then(|key| pillars.iter().position(|pillar| pillar.key == key));
        match position {
            Some(index) if index + 1 < pillars.len() => self.focus(pillars[index + 1].key),
            Some(index) => self.blur(pillars[index].key),
            None => self.active = pillars.first().map(|pillar| pillar.key),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessStages {
    active: &'static str,
}

impl ProcessStages {
    pub fn new(stages: &[ProcessStage], default: &'static str) -> Self {
        let active = if stages.iter().any(|stage| stage.key == default) {
            default
        } else {
            stages.first().map_or(default, |stage| stage.key)
        };
        ProcessStages { active }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn select(&mut self, stages: &[ProcessStage], key: &str) -> bool {
        match stages.iter().find(|stage| stage.key == key) {
            Some(stage) => {
                self.active = stage.key;
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self, stages: &[ProcessStage]) {
        if stages.is_empty() {
            return;
        }
        let next = stages
            .iter()
            .position(|stage| stage.key == self.active)
            .map_or(0, |index| (index + 1) % stages.len());
        self.select(stages, stages[next].key);
    }
}
