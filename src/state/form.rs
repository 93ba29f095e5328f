//! Inquiry form editing state.
//!
//! Key presses are turned into [`FieldValue`] updates for the controller.
//! The requirements field is edited through a multi-line `TextArea`; all
//! other text fields are plain strings owned by the controller.

use crate::inquiry::{Budget, FieldValue, InquiryController, InquiryField, ProjectType, Timeline};
use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

/// Direction in which a select field cycles its options.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cycle {
    Next,
    Prev,
}

/// Specify struct for the focused field and the requirements editor.
///
pub struct FormEditor {
    focus: InquiryField,
    requirements: TextArea<'static>,
}

impl Default for FormEditor {
    fn default() -> Self {
        FormEditor {
            focus: InquiryField::Name,
            requirements: TextArea::default(),
        }
    }
}

impl FormEditor {
    pub fn focus(&self) -> InquiryField {
        self.focus
    }

    pub fn set_focus(&mut self, field: InquiryField) {
        self.focus = field;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn requirements_textarea(&mut self) -> &mut TextArea<'static> {
        &mut self.requirements
    }

    /// Current requirements text, lines joined by newlines.
    ///
    pub fn requirements(&self) -> String {
        self.requirements.lines().join("\n")
    }

    /// Forget the requirements text and return to the first field.
    ///
    pub fn clear(&mut self) {
        self.requirements = TextArea::default();
        self.focus = InquiryField::Name;
    }

    /// Append a character to the focused text field.
    ///
    pub fn insert_char(&mut self, controller: &mut InquiryController, c: char) {
        let form = controller.form();
        let value = match self.focus {
            InquiryField::Name => FieldValue::Name(format!("{}{}", form.name, c)),
            InquiryField::Email => FieldValue::Email(format!("{}{}", form.email, c)),
            InquiryField::Requirements => {
                self.requirements.insert_char(c);
                FieldValue::Requirements(self.requirements())
            }
            _ => return,
        };
        controller.update_field(value);
    }

    /// Remove the last character of the focused text field.
    ///
    pub fn backspace(&mut self, controller: &mut InquiryController) {
        let form = controller.form();
        let value = match self.focus {
            InquiryField::Name => {
                let mut name = form.name.clone();
                name.pop();
                FieldValue::Name(name)
            }
            InquiryField::Email => {
                let mut email = form.email.clone();
                email.pop();
                FieldValue::Email(email)
            }
            InquiryField::Requirements => {
                self.requirements.delete_char();
                FieldValue::Requirements(self.requirements())
            }
            _ => return,
        };
        controller.update_field(value);
    }

    /// Forward a raw key to the requirements editor, e.g. Enter or arrows.
    /// Returns false if the requirements field is not focused.
    ///
    pub fn edit_requirements(
        &mut self,
        controller: &mut InquiryController,
        key: KeyEvent,
    ) -> bool {
        if self.focus != InquiryField::Requirements {
            return false;
        }
        if self.requirements.input(key) {
            controller.update_field(FieldValue::Requirements(self.requirements()));
        }
        true
    }

    /// Step the focused select field through its options. An unset select
    /// starts at its first (or last) option.
    ///
    pub fn cycle_option(&mut self, controller: &mut InquiryController, cycle: Cycle) {
        let form = controller.form();
        let value = match self.focus {
            InquiryField::ProjectType => FieldValue::ProjectType(Some(match form.project_type {
                Some(current) if cycle == Cycle::Next => current.next(),
                Some(current) => current.prev(),
                None => edge(ProjectType::ALL, cycle),
            })),
            InquiryField::Budget => FieldValue::Budget(Some(match form.budget {
                Some(current) if cycle == Cycle::Next => current.next(),
                Some(current) => current.prev(),
                None => edge(Budget::ALL, cycle),
            })),
            InquiryField::Timeline => FieldValue::Timeline(Some(match form.timeline {
                Some(current) if cycle == Cycle::Next => current.next(),
                Some(current) => current.prev(),
                None => edge(Timeline::ALL, cycle),
            })),
            _ => return,
        };
        controller.update_field(value);
    }
}

fn edge<T: Copy>(options: &[T], cycle: Cycle) -> T {
    match cycle {
        Cycle::Next => options[0],
        Cycle::Prev => options[options.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_typing_updates_controller() {
        let mut controller = InquiryController::new();
        let mut editor = FormEditor::default();
        for c in "Ada".chars() {
            editor.insert_char(&mut controller, c);
        }
        assert_eq!(controller.form().name, "Ada");
        editor.backspace(&mut controller);
        assert_eq!(controller.form().name, "Ad");

        editor.next_field();
        editor.insert_char(&mut controller, 'a');
        assert_eq!(controller.form().email, "a");
        assert_eq!(
            controller.error(InquiryField::Email),
            Some("Enter a valid email address.")
        );
    }

    #[test]
    fn test_requirements_use_textarea() {
        let mut controller = InquiryController::new();
        let mut editor = FormEditor::default();
        editor.set_focus(InquiryField::Requirements);
        editor.insert_char(&mut controller, 'a');
        assert!(editor.edit_requirements(
            &mut controller,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
        ));
        editor.insert_char(&mut controller, 'b');
        assert_eq!(controller.form().requirements, "a\nb");

        editor.clear();
        assert_eq!(editor.requirements(), "");
        assert_eq!(editor.focus(), InquiryField::Name);
    }

    #[test]
    fn test_cycle_option_starts_at_edges() {
        let mut controller = InquiryController::new();
        let mut editor = FormEditor::default();
        editor.set_focus(InquiryField::Budget);
        editor.cycle_option(&mut controller, Cycle::Prev);
        assert_eq!(controller.form().budget, Some(Budget::Over100k));
        editor.cycle_option(&mut controller, Cycle::Next);
        assert_eq!(controller.form().budget, Some(Budget::Under10k));
        assert!(controller.error(InquiryField::Budget).is_none());

        editor.set_focus(InquiryField::Name);
        editor.cycle_option(&mut controller, Cycle::Next);
        assert_eq!(controller.form().budget, Some(Budget::Under10k));
    }

    #[test]
    fn test_raw_keys_ignored_outside_requirements() {
        let mut controller = InquiryController::new();
        let mut editor = FormEditor::default();
        assert!(!editor.edit_requirements(
            &mut controller,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
        ));
    }
}
