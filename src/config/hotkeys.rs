//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Page actions
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollTop,
    ScrollBottom,
    NextLink,
    PreviousLink,
    FollowLink,
    CycleProjectFilter,
    CycleProjectSort,
    ToggleProjectLayout,
    ToggleApplicationTab,
    NextScenario,
    CyclePillar,
    NextStage,
    OpenForm,
    DismissNotices,
    CycleTheme,
    EnterDebug,
    Quit,

    // Form actions
    NextField,
    PreviousField,
    NextOption,
    PreviousOption,
    SubmitForm,
    CloseForm,

    // Debug mode actions
    DebugModeNavigateNext,
    DebugModeNavigatePrev,
    DebugModeExit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Hotkey { code, modifiers }
    }

    /// A bare character key.
    pub fn char(c: char) -> Self {
        Hotkey::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    pub fn ctrl(c: char) -> Self {
        Hotkey::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn code(code: KeyCode) -> Self {
        Hotkey::new(code, KeyModifiers::empty())
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
            KeyCodeSerde::PageUp => KeyCode::PageUp,
            KeyCodeSerde::PageDown => KeyCode::PageDown,
            KeyCodeSerde::Home => KeyCode::Home,
            KeyCodeSerde::End => KeyCode::End,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::BackTab => KeyCodeSerde::BackTab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            KeyCode::PageUp => KeyCodeSerde::PageUp,
            KeyCode::PageDown => KeyCodeSerde::PageDown,
            KeyCode::Home => KeyCodeSerde::Home,
            KeyCode::End => KeyCodeSerde::End,
            _ => KeyCodeSerde::Esc, // Unsupported keys fall back to Esc
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Input modes that have their own hotkey configurations.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyMode {
    Page,
    Form,
    Debug,
}

/// Maps hotkey actions to their key bindings for each input mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeHotkeys {
    pub page: HashMap<HotkeyAction, Hotkey>,
    pub form: HashMap<HotkeyAction, Hotkey>,
    pub debug: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ModeHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ModeHotkeys {
    pub fn for_mode(&self, mode: HotkeyMode) -> &HashMap<HotkeyAction, Hotkey> {
        match mode {
            HotkeyMode::Page => &self.page,
            HotkeyMode::Form => &self.form,
            HotkeyMode::Debug => &self.debug,
        }
    }
}

/// Returns default hotkey mappings for all modes.
///
pub fn default_hotkeys() -> ModeHotkeys {
    let page = HashMap::from([
        (HotkeyAction::ScrollDown, Hotkey::char('j')),
        (HotkeyAction::ScrollUp, Hotkey::char('k')),
        (HotkeyAction::PageDown, Hotkey::code(KeyCode::PageDown)),
        (HotkeyAction::PageUp, Hotkey::code(KeyCode::PageUp)),
        (HotkeyAction::ScrollTop, Hotkey::char('g')),
        (HotkeyAction::ScrollBottom, Hotkey::char('G')),
        (HotkeyAction::NextLink, Hotkey::char('l')),
        (HotkeyAction::PreviousLink, Hotkey::char('h')),
        (HotkeyAction::FollowLink, Hotkey::code(KeyCode::Enter)),
        (HotkeyAction::CycleProjectFilter, Hotkey::char('f')),
        (HotkeyAction::CycleProjectSort, Hotkey::char('s')),
        (HotkeyAction::ToggleProjectLayout, Hotkey::char('v')),
        (HotkeyAction::ToggleApplicationTab, Hotkey::char('t')),
        (HotkeyAction::NextScenario, Hotkey::char('a')),
        (HotkeyAction::CyclePillar, Hotkey::char('p')),
        (HotkeyAction::NextStage, Hotkey::char('n')),
        (HotkeyAction::OpenForm, Hotkey::char('i')),
        (HotkeyAction::DismissNotices, Hotkey::code(KeyCode::Esc)),
        (HotkeyAction::CycleTheme, Hotkey::char('T')),
        (HotkeyAction::EnterDebug, Hotkey::char('d')),
        (HotkeyAction::Quit, Hotkey::char('q')),
    ]);

    let form = HashMap::from([
        (HotkeyAction::NextField, Hotkey::code(KeyCode::Tab)),
        (HotkeyAction::PreviousField, Hotkey::code(KeyCode::BackTab)),
        (HotkeyAction::NextOption, Hotkey::code(KeyCode::Right)),
        (HotkeyAction::PreviousOption, Hotkey::code(KeyCode::Left)),
        (HotkeyAction::SubmitForm, Hotkey::ctrl('s')),
        (HotkeyAction::CloseForm, Hotkey::code(KeyCode::Esc)),
    ]);

    let debug = HashMap::from([
        (HotkeyAction::DebugModeNavigateNext, Hotkey::char('j')),
        (HotkeyAction::DebugModeNavigatePrev, Hotkey::char('k')),
        (HotkeyAction::DebugModeExit, Hotkey::code(KeyCode::Esc)),
    ]);

    ModeHotkeys { page, form, debug }
}

/// Checks if a KeyEvent matches a Hotkey. Shift is ignored for character
/// keys and BackTab, where it is already part of the key code.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    let significant = |code: &KeyCode, modifiers: KeyModifiers| match code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    };
    event.code == hotkey.code
        && significant(&event.code, event.modifiers) == significant(&hotkey.code, hotkey.modifiers)
}

/// Gets the action for a KeyEvent in a specific mode.
///
pub fn action_for_event(
    event: &KeyEvent,
    mode: HotkeyMode,
    hotkeys: &ModeHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_mode(mode)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let keys = match paired_action.and_then(|paired| hotkeys.get(&paired)) {
                Some(paired_hotkey) => format!(
                    "{}/{}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey)
                ),
                None => format_hotkey_display(hotkey),
            };
            Some(format!(" {}: {}", keys, description))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::char('j');
        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches_hotkey(&event, &hotkey));

        let event = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert!(!matches_hotkey(&event, &hotkey));

        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert!(!matches_hotkey(&event, &hotkey));
    }

    #[test]
    fn test_shift_is_ignored_for_chars() {
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(
            action_for_event(&event, HotkeyMode::Page, &default_hotkeys()),
            Some(HotkeyAction::ScrollBottom)
        );
    }

    #[test]
    fn test_action_depends_on_mode() {
        let hotkeys = default_hotkeys();
        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(
            action_for_event(&event, HotkeyMode::Page, &hotkeys),
            Some(HotkeyAction::ScrollDown)
        );
        assert_eq!(
            action_for_event(&event, HotkeyMode::Debug, &hotkeys),
            Some(HotkeyAction::DebugModeNavigateNext)
        );
        assert_eq!(action_for_event(&event, HotkeyMode::Form, &hotkeys), None);

        let submit = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            action_for_event(&submit, HotkeyMode::Form, &hotkeys),
            Some(HotkeyAction::SubmitForm)
        );
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(
            &hotkeys.page,
            &[
                (HotkeyAction::ScrollDown, "scroll", Some(HotkeyAction::ScrollUp)),
                (HotkeyAction::OpenForm, "inquiry", None),
            ],
        );
        assert_eq!(text, " j/k: scroll, i: inquiry");
        assert_eq!(format_hotkey_display(&hotkeys.form[&HotkeyAction::SubmitForm]), "Ctrl+s");
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey::ctrl('s');
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("control: true"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);

        let tab: Hotkey = serde_yaml::from_str("code: Tab").unwrap();
        assert_eq!(tab, Hotkey::code(KeyCode::Tab));
        assert!(serde_yaml::from_str::<Hotkey>("code: Char").is_err());
    }

    #[test]
    fn test_mode_hotkeys_round_trip_through_yaml() {
        let hotkeys = default_hotkeys();
        let yaml = serde_yaml::to_string(&hotkeys).unwrap();
        let parsed: ModeHotkeys = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, hotkeys);
    }
}
