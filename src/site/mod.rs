//! Site content and the view toggles of its sections.

mod content;
mod panels;
mod showcase;

pub use content::{
    About, ContactChannel, CultureValue, Hero, NavLink, Pillar, PillarKey, ProcessStage, Project,
    ProjectCategory, Scenario, SiteContent, Stat, Team, TeamMember,
};
pub use panels::{ApplicationTab, ApplicationsPanel, ProcessStages, TechnologyPanel};
pub use showcase::{ProjectFilter, ProjectShowcase, ProjectSort, ShowcaseLayout};

/// Every page section in display order. `applications` has no navigation
/// link.
pub const PAGE_ORDER: [&str; 7] = [
    "hero",
    "about",
    "projects",
    "technology",
    "applications",
    "team",
    "contact",
];
