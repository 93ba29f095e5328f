use crate::app::{ConfigSaveSender, NetworkEventSender};
use crate::config::{Config, ModeHotkeys};
use crate::events::network::Event as NetworkEvent;
use crate::inquiry::{
    FieldValue, InquiryController, InquiryField, SubmissionError, SubmitOutcome, SubmitStart,
};
use crate::site::{
    ApplicationsPanel, NavLink, ProcessStages, ProjectShowcase, SiteContent, TechnologyPanel,
};
use crate::tracker::{SectionId, SectionRegistry, SectionTracker, TrackerConfig};
use crate::ui::{ColorSpec, Theme, SPINNER_FRAME_COUNT};
use crossterm::event::KeyEvent;
use log::*;
use std::collections::{BTreeMap, HashMap};

use super::error::StateError;
use super::form::{Cycle, FormEditor};
use super::navigation::{Focus, LinkCursor};
use super::notices::NoticeBoard;
use super::page::{PageViewport, SectionSlot};

/// Keep only the most recent log entries.
///
const MAX_DEBUG_ENTRIES: usize = 500;

/// Fallback accent when the configured one cannot be parsed.
///
const FALLBACK_ACCENT: ColorSpec = ColorSpec::new(0x8b, 0x5c, 0xf6);

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    config_save_sender: Option<ConfigSaveSender>,
    content: SiteContent,
    registry: SectionRegistry,
    tracker: SectionTracker,
    page: PageViewport,
    inquiry: InquiryController,
    form_editor: FormEditor,
    notices: NoticeBoard,
    showcase: ProjectShowcase,
    applications: ApplicationsPanel,
    technology: TechnologyPanel,
    stages: ProcessStages,
    default_accent: ColorSpec,
    accents: HashMap<SectionId, ColorSpec>,
    active_accent: ColorSpec,
    link_cursor: LinkCursor,
    current_focus: Focus,
    spinner_index: usize,
    log_visible: bool,
    debug_mode: bool,
    debug_index: usize,
    debug_entries: Vec<String>,
    theme: Theme,
    hotkeys: ModeHotkeys,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State::with_content(SiteContent::default(), TrackerConfig::default())
    }
}

impl State {
    /// Return a new instance wired to the worker and config saver channels,
    /// tuned by the loaded configuration.
    ///
    pub fn new(
        net_sender: NetworkEventSender,
        config_save_sender: ConfigSaveSender,
        config: &Config,
    ) -> Self {
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to the default.",
                config.theme_name
            );
            Theme::default()
        });
        let default_accent = ColorSpec::from_hex(&config.accent).unwrap_or_else(|| {
            warn!(
                "{}",
                StateError::InvalidAccent {
                    section: "default".to_string(),
                    value: config.accent.clone(),
                }
            );
            FALLBACK_ACCENT
        });
        let mut state = State::with_content(SiteContent::default(), config.tracker);
        state.net_sender = Some(net_sender);
        state.config_save_sender = Some(config_save_sender);
        state.notices = NoticeBoard::new(config.notice_ttl());
        state.default_accent = default_accent;
        state.active_accent = default_accent;
        state.accents = parse_accents(&config.accents);
        state.theme = theme;
        state.hotkeys = config.hotkeys.clone();
        state
    }

    /// Return an instance without worker channels for the given content.
    ///
    pub fn with_content(content: SiteContent, tracker: TrackerConfig) -> Self {
        let registry: SectionRegistry = content.link_ids().collect();
        let applications = ApplicationsPanel::new(&content);
        let stages = ProcessStages::new(&content.team.stages, content.team.default_stage);
        State {
            net_sender: None,
            config_save_sender: None,
            registry,
            tracker: SectionTracker::new(tracker),
            page: PageViewport::default(),
            inquiry: InquiryController::new(),
            form_editor: FormEditor::default(),
            notices: NoticeBoard::default(),
            showcase: ProjectShowcase::default(),
            applications,
            technology: TechnologyPanel::default(),
            stages,
            default_accent: FALLBACK_ACCENT,
            accents: HashMap::new(),
            active_accent: FALLBACK_ACCENT,
            link_cursor: LinkCursor::default(),
            current_focus: Focus::Page,
            spinner_index: 0,
            log_visible: false,
            debug_mode: false,
            debug_index: 0,
            debug_entries: vec![],
            theme: Theme::default(),
            hotkeys: ModeHotkeys::default(),
            content,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &ModeHotkeys {
        &self.hotkeys
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Advance everything that moves on its own: the scroll animation, the
    /// spinner and expiring notices.
    ///
    pub fn tick(&mut self) -> &mut Self {
        if self.page.step() {
            self.tracker.refresh(&self.page);
        }
        if self.inquiry.is_submitting() {
            self.advance_spinner_index();
        }
        self.notices.prune(chrono::Utc::now());
        self
    }

    // Page

    pub fn page(&self) -> &PageViewport {
        &self.page
    }

    /// Install the rendered section layout and the visible height of the
    /// page canvas, then (re-)attach the tracker.
    ///
    pub fn set_page_layout(&mut self, height_rows: usize, slots: Vec<SectionSlot>) -> &mut Self {
        self.page.set_height(height_rows);
        let changed = self.page.slots() != slots.as_slice();
        if changed {
            self.page.set_layout(slots);
        }
        if !self.tracker.is_mounted() && self.page.has_layout() {
            self.tracker.mount(self.registry.clone(), &self.page);
        }
        self.tracker.refresh(&self.page);
        self
    }

    /// Scroll the page by rows, positive is down.
    ///
    pub fn scroll_page(&mut self, rows: isize) -> &mut Self {
        self.page.scroll_by(rows);
        self.tracker.refresh(&self.page);
        self
    }

    pub fn page_down(&mut self) -> &mut Self {
        let rows = self.page.height_rows().saturating_sub(1).max(1) as isize;
        self.scroll_page(rows)
    }

    pub fn page_up(&mut self) -> &mut Self {
        let rows = self.page.height_rows().saturating_sub(1).max(1) as isize;
        self.scroll_page(-rows)
    }

    pub fn scroll_to_top(&mut self) -> &mut Self {
        self.page.scroll_to_top();
        self.tracker.refresh(&self.page);
        self
    }

    pub fn scroll_to_bottom(&mut self) -> &mut Self {
        self.page.scroll_to_bottom();
        self.tracker.refresh(&self.page);
        self
    }

    // Navigation

    pub fn links(&self) -> &[NavLink] {
        &self.content.links
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.tracker.active()
    }

    pub fn is_nav_elevated(&self) -> bool {
        self.tracker.is_elevated()
    }

    pub fn accent(&self) -> ColorSpec {
        self.active_accent
    }

    pub fn link_cursor(&self) -> usize {
        self.link_cursor.index()
    }

    pub fn next_link(&mut self) -> &mut Self {
        self.link_cursor.next(self.content.links.len());
        self
    }

    pub fn previous_link(&mut self) -> &mut Self {
        self.link_cursor.previous(self.content.links.len());
        self
    }

    /// Navigate to the link under the cursor.
    ///
    pub fn follow_selected_link(&mut self) -> Result<bool, StateError> {
        self.navigate_to(self.link_cursor.index())
    }

    /// Scroll to the section of the link at `index` and take on its accent.
    /// Returns false when the section is not laid out yet.
    ///
    pub fn navigate_to(&mut self, index: usize) -> Result<bool, StateError> {
        let link = self
            .content
            .links
            .get(index)
            .ok_or_else(|| StateError::UnknownSection {
                id: format!("#{}", index + 1),
            })?;
        let id = SectionId::new(link.id);
        self.link_cursor.select(index, self.content.links.len());

        let accents = &self.accents;
        let default_accent = self.default_accent;
        let active_accent = &mut self.active_accent;
        let navigated = self.tracker.navigate(&id, &mut self.page, |id| {
            info!("Navigated to '{}'.", id);
            *active_accent = accents.get(id).copied().unwrap_or(default_accent);
        });
        Ok(navigated)
    }

    // Page panels

    pub fn showcase(&self) -> &ProjectShowcase {
        &self.showcase
    }

    pub fn cycle_project_filter(&mut self) -> &mut Self {
        self.showcase.cycle_filter();
        debug!("Project filter is now '{}'.", self.showcase.filter.label());
        self
    }

    pub fn cycle_project_sort(&mut self) -> &mut Self {
        self.showcase.cycle_sort();
        debug!("Project sort is now '{}'.", self.showcase.sort.label());
        self
    }

    pub fn toggle_project_layout(&mut self) -> &mut Self {
        self.showcase.toggle_layout();
        self
    }

    pub fn applications(&self) -> &ApplicationsPanel {
        &self.applications
    }

    pub fn toggle_application_tab(&mut self) -> &mut Self {
        self.applications.toggle_tab(&self.content);
        self
    }

    pub fn next_scenario(&mut self) -> &mut Self {
        self.applications.next_scenario(&self.content);
        self
    }

    pub fn technology(&self) -> &TechnologyPanel {
        &self.technology
    }

    pub fn cycle_pillar(&mut self) -> &mut Self {
        self.technology.cycle(&self.content.pillars);
        self
    }

    pub fn stages(&self) -> &ProcessStages {
        &self.stages
    }

    pub fn next_stage(&mut self) -> &mut Self {
        self.stages.next(&self.content.team.stages);
        self
    }

    // Focus

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Open the inquiry form overlay.
    ///
    pub fn open_form(&mut self) -> &mut Self {
        self.current_focus = Focus::Form;
        self
    }

    pub fn close_form(&mut self) -> &mut Self {
        self.current_focus = Focus::Page;
        self
    }

    // Inquiry form

    pub fn inquiry(&self) -> &InquiryController {
        &self.inquiry
    }

    pub fn form_editor(&mut self) -> &mut FormEditor {
        &mut self.form_editor
    }

    pub fn focused_field(&self) -> InquiryField {
        self.form_editor.focus()
    }

    pub fn next_form_field(&mut self) -> &mut Self {
        self.form_editor.next_field();
        self
    }

    pub fn previous_form_field(&mut self) -> &mut Self {
        self.form_editor.previous_field();
        self
    }

    pub fn add_form_char(&mut self, c: char) -> &mut Self {
        self.form_editor.insert_char(&mut self.inquiry, c);
        self
    }

    pub fn remove_form_char(&mut self) -> &mut Self {
        self.form_editor.backspace(&mut self.inquiry);
        self
    }

    /// Forward a raw key to the requirements editor. Returns false when the
    /// requirements field is not focused.
    ///
    pub fn edit_requirements(&mut self, key: KeyEvent) -> bool {
        self.form_editor.edit_requirements(&mut self.inquiry, key)
    }

    pub fn cycle_form_option(&mut self, cycle: Cycle) -> &mut Self {
        self.form_editor.cycle_option(&mut self.inquiry, cycle);
        self
    }

    pub fn update_inquiry_field(&mut self, value: FieldValue) -> &mut Self {
        self.inquiry.update_field(value);
        self
    }

    /// Validate the form and hand a valid snapshot to the worker.
    ///
    pub fn submit_inquiry(&mut self) -> &mut Self {
        match self.inquiry.begin_submit(&mut self.notices) {
            SubmitStart::Busy | SubmitStart::Rejected(_) => (),
            SubmitStart::Ready(snapshot) => {
                info!("Submitting inquiry from '{}'...", snapshot.email);
                if let Err(e) = self.dispatch(NetworkEvent::SubmitInquiry(snapshot)) {
                    self.complete_inquiry(Err(SubmissionError::Other(e.to_string())));
                }
            }
        }
        self
    }

    /// Apply the worker's verdict for the in-flight inquiry.
    ///
    pub fn complete_inquiry(&mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        let outcome = self.inquiry.finish_submit(result, &mut self.notices);
        if matches!(outcome, SubmitOutcome::Sent) {
            self.form_editor.clear();
        }
        self.spinner_index = 0;
        outcome
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn dismiss_notices(&mut self) -> &mut Self {
        self.notices.dismiss_all();
        self
    }

    // Theme

    /// Switch to the next theme and request a config save.
    ///
    pub fn next_theme(&mut self) -> &mut Self {
        self.theme = self.theme.next();
        info!("Switched to theme '{}'.", self.theme.name);
        if let Some(sender) = &self.config_save_sender {
            if let Err(e) = sender.send(self.theme.name.clone()) {
                error!("Failed to request config save: {}", e);
            }
        }
        self
    }

    // Log pane

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Enter debug mode for navigating logs. The log pane is shown while in
    /// debug mode.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        self.log_visible = true;
        self.debug_index = self.debug_entries.len().saturating_sub(1);
        self
    }

    /// Exit debug mode.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self.log_visible = false;
        self
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Navigate to next log entry.
    ///
    pub fn next_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            self.debug_index = (self.debug_index + 1) % self.debug_entries.len();
        }
        self
    }

    /// Navigate to previous log entry.
    ///
    pub fn previous_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            if self.debug_index == 0 {
                self.debug_index = self.debug_entries.len() - 1;
            } else {
                self.debug_index -= 1;
            }
        }
        self
    }

    /// Add a log entry to the debug buffer.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.debug_entries.push(entry);
        if self.debug_entries.len() > MAX_DEBUG_ENTRIES {
            self.debug_entries.remove(0);
        }
        // Follow the newest entry unless the user is reading older ones.
        if !self.debug_mode {
            self.debug_index = self.debug_entries.len() - 1;
        } else {
            self.debug_index = self.debug_index.min(self.debug_entries.len() - 1);
        }
    }

    pub fn get_debug_entries(&self) -> &[String] {
        &self.debug_entries
    }

    /// Dispatches an asynchronous network event.
    ///
    pub fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::WorkerUnavailable)?;
        sender.send(event).map_err(|err| {
            error!("Received error from network dispatch: {}", err);
            StateError::WorkerUnavailable
        })
    }
}

/// Parse the configured accents, skipping any that are not `#rrggbb`.
///
fn parse_accents(accents: &BTreeMap<String, String>) -> HashMap<SectionId, ColorSpec> {
    accents
        .iter()
        .filter_map(|(section, value)| match ColorSpec::from_hex(value) {
            Some(color) => Some((SectionId::new(section), color)),
            None => {
                warn!(
                    "{}",
                    StateError::InvalidAccent {
                        section: section.clone(),
                        value: value.clone(),
                    }
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::{Notice, NoticeKind};
    use crate::tracker::Viewport;
    use fake::{faker::name::en::Name, Fake};
    use std::sync::mpsc;

    fn slots() -> Vec<SectionSlot> {
        ["hero", "about", "projects", "technology", "applications", "team", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| SectionSlot {
                id: SectionId::new(id),
                top: i * 50,
                height: 50,
            })
            .collect()
    }

    fn laid_out() -> State {
        let mut state = State::default();
        state.set_page_layout(20, slots());
        state
    }

    fn wired() -> (State, mpsc::Receiver<NetworkEvent>, mpsc::Receiver<String>) {
        let (net_tx, net_rx) = mpsc::channel();
        let (save_tx, save_rx) = mpsc::channel();
        let mut config = Config::new();
        config.accents.insert("contact".to_string(), "#22d3ee".to_string());
        config.accents.insert("team".to_string(), "teal".to_string());
        (State::new(net_tx, save_tx, &config), net_rx, save_rx)
    }

    fn fill_form(state: &mut State) {
        let name: String = Name().fake();
        for c in name.chars() {
            state.add_form_char(c);
        }
        state.next_form_field();
        for c in "ada@example.com".chars() {
            state.add_form_char(c);
        }
        for _ in 0..3 {
            state.next_form_field();
            state.cycle_form_option(Cycle::Next);
        }
        state.next_form_field();
        for c in "A VR onboarding course for warehouse staff.".chars() {
            state.add_form_char(c);
        }
    }

    #[test]
    fn test_layout_mounts_tracker() {
        let state = laid_out();
        assert!(state.tracker.is_mounted());
        assert_eq!(state.tracker.observed().len(), 5);
        assert!(!state.is_nav_elevated());
    }

    #[test]
    fn test_scrolling_updates_active_section() {
        let mut state = laid_out();
        state.scroll_page(100);
        assert_eq!(state.active_section(), Some(&SectionId::new("projects")));
        assert!(state.is_nav_elevated());
        state.scroll_to_top();
        assert!(!state.is_nav_elevated());
    }

    #[test]
    fn test_navigate_scrolls_and_sets_accent() {
        let (mut state, _net_rx, _save_rx) = wired();
        state.set_page_layout(20, slots());
        assert_eq!(state.navigate_to(4).unwrap(), true);
        assert_eq!(state.link_cursor(), 4);
        assert_eq!(state.accent(), ColorSpec::new(0x22, 0xd3, 0xee));
        assert!(state.page().is_scrolling());

        while state.page().is_scrolling() {
            state.tick();
        }
        assert_eq!(state.page().offset(), 300);
        assert_eq!(
            state.page().scroll_offset(),
            state.page().resolve(&SectionId::new("contact")).unwrap().top
        );
        assert_eq!(state.active_section(), Some(&SectionId::new("contact")));
    }

    #[test]
    fn test_invalid_accent_falls_back_to_default() {
        let (mut state, _net_rx, _save_rx) = wired();
        state.set_page_layout(20, slots());
        state.navigate_to(3).unwrap();
        assert_eq!(state.accent(), FALLBACK_ACCENT);
    }

    #[test]
    fn test_navigate_before_layout_is_ignored() {
        let mut state = State::default();
        assert_eq!(state.navigate_to(0).unwrap(), false);
        assert!(matches!(
            state.navigate_to(9),
            Err(StateError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_submit_with_errors_raises_notice() {
        let (mut state, net_rx, _save_rx) = wired();
        state.submit_inquiry();
        assert!(net_rx.try_recv().is_err());
        assert_eq!(state.inquiry().errors().len(), 6);
        assert_eq!(state.notices().toasts()[0].notice, Notice::review_needed());
    }

    #[test]
    fn test_submit_dispatches_snapshot_once() {
        let (mut state, net_rx, _save_rx) = wired();
        fill_form(&mut state);
        assert!(state.inquiry().is_submittable());

        state.submit_inquiry();
        state.submit_inquiry();
        let NetworkEvent::SubmitInquiry(snapshot) = net_rx.try_recv().unwrap();
        assert_eq!(&snapshot, state.inquiry().form());
        assert!(net_rx.try_recv().is_err());
        assert!(state.inquiry().is_submitting());

        assert!(matches!(state.complete_inquiry(Ok(())), SubmitOutcome::Sent));
        assert_eq!(state.inquiry().form().name, "");
        assert_eq!(state.form_editor().requirements(), "");
        assert_eq!(state.focused_field(), InquiryField::Name);
    }

    #[test]
    fn test_failed_submission_keeps_form() {
        let (mut state, _net_rx, _save_rx) = wired();
        fill_form(&mut state);
        let entered = state.inquiry().form().clone();
        state.submit_inquiry();
        state.complete_inquiry(Err(SubmissionError::Other("offline".to_string())));
        assert_eq!(state.inquiry().form(), &entered);
        assert!(!state.inquiry().is_submitting());
        let last = state.notices().toasts().last().unwrap();
        assert_eq!(last.notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_submit_without_worker_fails_gracefully() {
        let mut state = State::default();
        fill_form(&mut state);
        state.submit_inquiry();
        assert!(!state.inquiry().is_submitting());
        assert_eq!(
            state.notices().toasts().last().map(|t| &t.notice),
            Some(&Notice::failed())
        );
    }

    #[test]
    fn test_theme_cycle_requests_save() {
        let (mut state, _net_rx, save_rx) = wired();
        state.next_theme();
        assert_eq!(save_rx.try_recv().unwrap(), "rose-pine");
        assert_eq!(state.get_theme().name, "rose-pine");
    }

    #[test]
    fn test_log_buffer_is_capped() {
        let mut state = State::default();
        for i in 0..(MAX_DEBUG_ENTRIES + 10) {
            state.add_log_entry(format!("entry {}", i));
        }
        assert_eq!(state.get_debug_entries().len(), MAX_DEBUG_ENTRIES);
        assert_eq!(state.get_debug_entries()[0], "entry 10");
        assert_eq!(state.get_debug_index(), MAX_DEBUG_ENTRIES - 1);

        state.enter_debug_mode();
        assert!(state.is_log_visible());
        state.next_debug();
        assert_eq!(state.get_debug_index(), 0);
        state.previous_debug();
        assert_eq!(state.get_debug_index(), MAX_DEBUG_ENTRIES - 1);
        state.exit_debug_mode();
        assert!(!state.is_log_visible());
    }

    #[test]
    fn test_panel_toggles() {
        let mut state = State::default();
        let first = state.applications().scenario_key();
        state.next_scenario();
        assert_ne!(state.applications().scenario_key(), first);
        state.toggle_application_tab();
        assert_eq!(
            state.applications().scenario_key(),
            state.applications().scenarios(state.content()).first().map(|s| s.key)
        );
        state.cycle_pillar();
        assert!(state.technology().active().is_some());
        let stage = state.stages().active();
        state.next_stage();
        assert_ne!(state.stages().active(), stage);
    }
}
