use crate::config::hotkeys::action_for_event;
use crate::config::{HotkeyAction, HotkeyMode};
use crate::state::{Cycle, Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(&key, state)),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

/// Route a key press to the handler of the current input mode. Returns false
/// if exit was requested.
///
pub fn handle_key(key: &KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    if state.is_debug_mode() {
        handle_debug_key(key, state);
        return true;
    }
    match state.current_focus() {
        Focus::Page => handle_page_key(key, state),
        Focus::Form => {
            handle_form_key(key, state);
            true
        }
    }
}

fn handle_page_key(key: &KeyEvent, state: &mut State) -> bool {
    // Number keys jump straight to a navigation link.
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            let index = c as usize - '1' as usize;
            if let Err(e) = state.navigate_to(index) {
                debug!("{}", e);
            }
            return true;
        }
    }

    let Some(action) = action_for_event(key, HotkeyMode::Page, state.get_hotkeys()) else {
        return true;
    };
    match action {
        HotkeyAction::ScrollDown => {
            state.scroll_page(1);
        }
        HotkeyAction::ScrollUp => {
            state.scroll_page(-1);
        }
        HotkeyAction::PageDown => {
            state.page_down();
        }
        HotkeyAction::PageUp => {
            state.page_up();
        }
        HotkeyAction::ScrollTop => {
            state.scroll_to_top();
        }
        HotkeyAction::ScrollBottom => {
            state.scroll_to_bottom();
        }
        HotkeyAction::NextLink => {
            state.next_link();
        }
        HotkeyAction::PreviousLink => {
            state.previous_link();
        }
        HotkeyAction::FollowLink => {
            if let Err(e) = state.follow_selected_link() {
                debug!("{}", e);
            }
        }
        HotkeyAction::CycleProjectFilter => {
            state.cycle_project_filter();
        }
        HotkeyAction::CycleProjectSort => {
            state.cycle_project_sort();
        }
        HotkeyAction::ToggleProjectLayout => {
            state.toggle_project_layout();
        }
        HotkeyAction::ToggleApplicationTab => {
            state.toggle_application_tab();
        }
        HotkeyAction::NextScenario => {
            state.next_scenario();
        }
        HotkeyAction::CyclePillar => {
            state.cycle_pillar();
        }
        HotkeyAction::NextStage => {
            state.next_stage();
        }
        HotkeyAction::OpenForm => {
            state.open_form();
        }
        HotkeyAction::DismissNotices => {
            state.dismiss_notices();
        }
        HotkeyAction::CycleTheme => {
            state.next_theme();
        }
        HotkeyAction::EnterDebug => {
            state.enter_debug_mode();
        }
        HotkeyAction::Quit => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        _ => (),
    }
    true
}

fn handle_form_key(key: &KeyEvent, state: &mut State) {
    let action = action_for_event(key, HotkeyMode::Form, state.get_hotkeys());
    let on_select = state.focused_field().is_select();
    match action {
        Some(HotkeyAction::NextField) => {
            state.next_form_field();
        }
        Some(HotkeyAction::PreviousField) => {
            state.previous_form_field();
        }
        Some(HotkeyAction::NextOption) if on_select => {
            state.cycle_form_option(Cycle::Next);
        }
        Some(HotkeyAction::PreviousOption) if on_select => {
            state.cycle_form_option(Cycle::Prev);
        }
        Some(HotkeyAction::SubmitForm) => {
            state.submit_inquiry();
        }
        Some(HotkeyAction::CloseForm) => {
            state.close_form();
        }
        _ => edit_form_field(key, state),
    }
}

fn edit_form_field(key: &KeyEvent, state: &mut State) {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(c) if plain => {
            state.add_form_char(c);
        }
        KeyCode::Backspace => {
            state.remove_form_char();
        }
        _ => {
            state.edit_requirements(*key);
        }
    }
}

fn handle_debug_key(key: &KeyEvent, state: &mut State) {
    match action_for_event(key, HotkeyMode::Debug, state.get_hotkeys()) {
        Some(HotkeyAction::DebugModeNavigateNext) => {
            state.next_debug();
        }
        Some(HotkeyAction::DebugModeNavigatePrev) => {
            state.previous_debug();
        }
        Some(HotkeyAction::DebugModeExit) => {
            state.exit_debug_mode();
        }
        _ => (),
    }
}
