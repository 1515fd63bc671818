//! Draft state of the create/edit form.
//!
//! The form is in edit mode exactly when `editing` holds a target item.

use crate::types::{TodoInput, TodoItem};
use crate::validate::{check_length, Field, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    title: String,
    description: String,
    editing: Option<TodoItem>,
}

impl FormState {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn editing(&self) -> Option<&TodoItem> {
        self.editing.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Replace the title. Text over the length cap is refused and the
    /// current value is kept.
    pub fn set_title(&mut self, text: &str) -> Result<(), ValidationError> {
        check_length(Field::Title, text)?;
        self.title = text.to_string();
        Ok(())
    }

    pub fn set_description(&mut self, text: &str) -> Result<(), ValidationError> {
        check_length(Field::Description, text)?;
        self.description = text.to_string();
        Ok(())
    }

    /// Enter edit mode for `item`, copying its fields into the draft. The
    /// copy bypasses the length check; submit validates again.
    pub fn start_edit(&mut self, item: TodoItem) {
        self.title = item.title.clone();
        self.description = item.description.clone();
        self.editing = Some(item);
    }

    /// Back to the create-mode default.
    pub fn clear(&mut self) {
        *self = FormState::default();
    }

    /// Empty both fields. The edit target, if any, is kept.
    pub fn clear_fields(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// The request body for the current draft, validated.
    pub fn to_input(&self) -> Result<TodoInput, ValidationError> {
        let input = TodoInput::new(self.title.as_str(), self.description.as_str());
        input.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::types::TodoId;

    fn item() -> TodoItem {
        TodoItem {
            id: TodoId::from("1"),
            title: "Walk dog".to_string(),
            description: "Around the block".to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()),
        }
    }

    #[test]
    fn starts_empty_in_create_mode() {
        let form = FormState::default();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.title(), "");
        assert_eq!(form.description(), "");
    }

    #[test]
    fn start_edit_copies_fields() {
        let mut form = FormState::default();
        form.start_edit(item());
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.title(), "Walk dog");
        assert_eq!(form.description(), "Around the block");
        assert_eq!(form.editing().map(|t| t.id.as_str()), Some("1"));
    }

    #[test]
    fn overlong_input_keeps_previous_value() {
        let mut form = FormState::default();
        form.set_title("short").unwrap();
        assert!(form.set_title(&"x".repeat(51)).is_err());
        assert_eq!(form.title(), "short");
        form.set_description(&"y".repeat(50)).unwrap();
        assert_eq!(form.description().len(), 50);
    }

    #[test]
    fn clear_leaves_edit_mode() {
        let mut form = FormState::default();
        form.start_edit(item());
        form.clear();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn clear_fields_keeps_edit_target() {
        let mut form = FormState::default();
        form.start_edit(item());
        form.clear_fields();
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!((form.title(), form.description()), ("", ""));
    }

    #[test]
    fn to_input_requires_both_fields() {
        let mut form = FormState::default();
        form.set_title("t").unwrap();
        assert!(form.to_input().is_err());
        form.set_description("d").unwrap();
        assert_eq!(form.to_input().unwrap(), TodoInput::new("t", "d"));
    }
}
