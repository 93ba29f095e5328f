use super::content::{Project, ProjectCategory};

/// Category filter of the projects section.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Training,
    Gaming,
    Simulator,
}

impl ProjectFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Training => "Training",
            ProjectFilter::Gaming => "Gaming",
            ProjectFilter::Simulator => "Simulator",
        }
    }

    pub fn next(&self) -> ProjectFilter {
        match self {
            ProjectFilter::All => ProjectFilter::Training,
            ProjectFilter::Training => ProjectFilter::Gaming,
            ProjectFilter::Gaming => ProjectFilter::Simulator,
            ProjectFilter::Simulator => ProjectFilter::All,
        }
    }

    fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Training => category == ProjectCategory::Training,
            ProjectFilter::Gaming => category == ProjectCategory::Gaming,
            ProjectFilter::Simulator => category == ProjectCategory::Simulator,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectSort {
    #[default]
    Recent,
    TitleAsc,
    TitleDesc,
}

impl ProjectSort {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectSort::Recent => "Most recent",
            ProjectSort::TitleAsc => "Title A–Z",
            ProjectSort::TitleDesc => "Title Z–A",
        }
    }

    pub fn next(&self) -> ProjectSort {
        match self {
            ProjectSort::Recent => ProjectSort::TitleAsc,
            ProjectSort::TitleAsc => ProjectSort::TitleDesc,
            ProjectSort::TitleDesc => ProjectSort::Recent,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShowcaseLayout {
    #[default]
    Grid,
    List,
}

impl ShowcaseLayout {
    pub fn toggle(&self) -> ShowcaseLayout {
        match self {
            ShowcaseLayout::Grid => ShowcaseLayout::List,
            ShowcaseLayout::List => ShowcaseLayout::Grid,
        }
    }
}

/// View state of the projects section.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectShowcase {
    pub filter: ProjectFilter,
    pub sort: ProjectSort,
    pub layout: ShowcaseLayout,
}

impl ProjectShowcase {
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggle();
    }

    /// Projects passing the filter, in the selected order.
    ///
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let mut visible: Vec<&Project> = projects
            .iter()
            .filter(|project| self.filter.matches(project.category))
            .collect();
        match self.sort {
            ProjectSort::Recent => visible.sort_by(|a, b| b.date.cmp(&a.date)),
            ProjectSort::TitleAsc => visible.sort_by(|a, b| a.title.cmp(b.title)),
            ProjectSort::TitleDesc => visible.sort_by(|a, b| b.title.cmp(a.title)),
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteContent;

    fn ids(projects: Vec<&Project>) -> Vec<&'static str> {
        projects.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_shows_all_by_recency() {
        let content = SiteContent::default();
        let showcase = ProjectShowcase::default();
        assert_eq!(
            ids(showcase.visible(&content.projects)),
            vec!["skills-platform", "vr-firefighter", "mechanics-lab"]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let content = SiteContent::default();
        let mut showcase = ProjectShowcase::default();
        showcase.cycle_filter();
        assert_eq!(showcase.filter, ProjectFilter::Training);
        assert_eq!(ids(showcase.visible(&content.projects)), vec!["skills-platform"]);

        showcase.cycle_filter();
        assert_eq!(ids(showcase.visible(&content.projects)), vec!["mechanics-lab"]);
    }

    #[test]
    fn test_sort_by_title() {
        let content = SiteContent::default();
        let mut showcase = ProjectShowcase::default();
        showcase.cycle_sort();
        assert_eq!(
            ids(showcase.visible(&content.projects)),
            vec!["mechanics-lab", "skills-platform", "vr-firefighter"]
        );
        showcase.cycle_sort();
        assert_eq!(
            ids(showcase.visible(&content.projects)),
            vec!["vr-firefighter", "skills-platform", "mechanics-lab"]
        );
        showcase.cycle_sort();
        assert_eq!(showcase.sort, ProjectSort::Recent);
    }

    #[test]
    fn test_layout_toggle() {
        let mut showcase = ProjectShowcase::default();
        showcase.toggle_layout();
        assert_eq!(showcase.layout, ShowcaseLayout::List);
        showcase.toggle_layout();
        assert_eq!(showcase.layout, ShowcaseLayout::Grid);
    }
}
