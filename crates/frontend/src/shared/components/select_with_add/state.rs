//! State machine of the select with an inline "Add new" form

use std::collections::BTreeMap;

use crate::masters::SelectOption;

/// Field values of the inline form, keyed by field name
pub type FormValues = BTreeMap<String, String>;

/// Shown when a failed create carries no message of its own
pub const GENERIC_CREATE_ERROR: &str = "Could not create the record. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    TextArea,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Text | FieldKind::TextArea => "text",
        }
    }
}

/// One input of the inline creation form
#[derive(Debug, Clone, PartialEq)]
pub struct AddField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl AddField {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            placeholder: "",
            kind: FieldKind::Text,
        }
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(name, label)
        }
    }

    pub fn area(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::TextArea,
            ..Self::text(name, label)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddSelectState {
    /// Dropdown hidden
    Closed,
    /// Dropdown visible
    Open,
    /// Inline form visible; `error` is shown above the buttons
    AddFormOpen {
        values: FormValues,
        error: Option<String>,
    },
    /// Create call in flight; the form is read-only
    Submitting { values: FormValues },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddSelectEvent {
    Toggle,
    OutsideClick,
    Select(String),
    ChooseAddNew,
    FieldChanged { name: String, value: String },
    Submit,
    SubmitSucceeded(SelectOption),
    SubmitFailed(String),
    Cancel,
}

/// Side effect the component must run after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    /// Report a selected value to the owner
    Emit(String),
    /// Call the create callback with the form values
    Create(FormValues),
}

/// Labels of required fields left blank, in form order
pub fn missing_required<'a>(fields: &'a [AddField], values: &FormValues) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|f| f.required)
        .filter(|f| values.get(f.name).map_or(true, |v| v.trim().is_empty()))
        .map(|f| f.label)
        .collect()
}

pub fn validation_message(missing: &[&str]) -> String {
    format!("Required: {}", missing.join(", "))
}

impl AddSelectState {
    pub fn is_open(&self) -> bool {
        matches!(self, AddSelectState::Open)
    }

    pub fn is_form_visible(&self) -> bool {
        matches!(
            self,
            AddSelectState::AddFormOpen { .. } | AddSelectState::Submitting { .. }
        )
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, AddSelectState::Submitting { .. })
    }

    pub fn values(&self) -> Option<&FormValues> {
        match self {
            AddSelectState::AddFormOpen { values, .. } | AddSelectState::Submitting { values } => {
                Some(values)
            }
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AddSelectState::AddFormOpen { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Apply `event`; events that do not apply to the current state leave it unchanged
    pub fn transition(self, event: AddSelectEvent, fields: &[AddField]) -> (Self, Command) {
        use AddSelectEvent as E;
        use AddSelectState as S;

        match (self, event) {
            (S::Closed, E::Toggle) => (S::Open, Command::None),
            (S::Open, E::Toggle) | (S::Open, E::OutsideClick) => (S::Closed, Command::None),
            (S::Open, E::Select(id)) => (S::Closed, Command::Emit(id)),
            (S::Open, E::ChooseAddNew) => (
                S::AddFormOpen {
                    values: FormValues::new(),
                    error: None,
                },
                Command::None,
            ),

            (S::AddFormOpen { mut values, error }, E::FieldChanged { name, value }) => {
                values.insert(name, value);
                (S::AddFormOpen { values, error }, Command::None)
            }
            (S::AddFormOpen { values, .. }, E::Submit) => {
                let missing = missing_required(fields, &values);
                if missing.is_empty() {
                    (
                        S::Submitting {
                            values: values.clone(),
                        },
                        Command::Create(values),
                    )
                } else {
                    let error = Some(validation_message(&missing));
                    (S::AddFormOpen { values, error }, Command::None)
                }
            }
            (S::AddFormOpen { .. }, E::Cancel) => (S::Closed, Command::None),

            (S::Submitting { .. }, E::SubmitSucceeded(option)) => {
                (S::Closed, Command::Emit(option.id))
            }
            (S::Submitting { values }, E::SubmitFailed(message)) => {
                let message = if message.trim().is_empty() {
                    GENERIC_CREATE_ERROR.to_string()
                } else {
                    message
                };
                (
                    S::AddFormOpen {
                        values,
                        error: Some(message),
                    },
                    Command::None,
                )
            }

            (state, _) => (state, Command::None),
        }
    }
}

/// Caller options plus options created here that the caller has not seen yet
pub fn merge_options(options: &[SelectOption], created: &[SelectOption]) -> Vec<SelectOption> {
    let mut merged = options.to_vec();
    for option in created {
        if !merged.iter().any(|o| o.id == option.id) {
            merged.push(option.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<AddField> {
        vec![
            AddField::text("name", "Name").required(),
            AddField::text("code", "Code").required(),
            AddField::area("description", "Description"),
        ]
    }

    fn open_form() -> AddSelectState {
        let f = fields();
        let (s, _) = AddSelectState::Closed.transition(AddSelectEvent::Toggle, &f);
        let (s, _) = s.transition(AddSelectEvent::ChooseAddNew, &f);
        s
    }

    fn fill(state: AddSelectState, name: &str, value: &str) -> AddSelectState {
        state
            .transition(
                AddSelectEvent::FieldChanged {
                    name: name.into(),
                    value: value.into(),
                },
                &fields(),
            )
            .0
    }

    #[test]
    fn test_select_existing_closes_and_emits() {
        let f = fields();
        let (s, _) = AddSelectState::Closed.transition(AddSelectEvent::Toggle, &f);
        assert!(s.is_open());
        let (s, cmd) = s.transition(AddSelectEvent::Select("u1".into()), &f);
        assert_eq!(s, AddSelectState::Closed);
        assert_eq!(cmd, Command::Emit("u1".into()));
    }

    #[test]
    fn test_outside_click_only_closes_dropdown() {
        let f = fields();
        let (s, cmd) = AddSelectState::Open.transition(AddSelectEvent::OutsideClick, &f);
        assert_eq!((s, cmd), (AddSelectState::Closed, Command::None));

        let form = fill(open_form(), "name", "Syrup");
        let (s, _) = form.clone().transition(AddSelectEvent::OutsideClick, &f);
        assert_eq!(s, form);
    }

    #[test]
    fn test_round_trip_creates_once_and_selects() {
        let f = fields();
        let s = fill(fill(open_form(), "name", "Syrup"), "code", "SYR");

        let (s, cmd) = s.transition(AddSelectEvent::Submit, &f);
        assert!(s.is_submitting());
        let values = match cmd {
            Command::Create(v) => v,
            other => panic!("expected create, got {:?}", other),
        };
        assert_eq!(values.get("code").map(String::as_str), Some("SYR"));

        // A second submit while in flight does nothing
        let (s, cmd) = s.transition(AddSelectEvent::Submit, &f);
        assert_eq!(cmd, Command::None);

        let created = SelectOption::new("SYR", "Syrup");
        let (s, cmd) = s.transition(AddSelectEvent::SubmitSucceeded(created), &f);
        assert_eq!(s, AddSelectState::Closed);
        assert_eq!(cmd, Command::Emit("SYR".into()));
    }

    #[test]
    fn test_validation_names_missing_fields() {
        let f = fields();
        let (s, cmd) = open_form().transition(AddSelectEvent::Submit, &f);
        assert_eq!(cmd, Command::None);
        assert_eq!(s.error(), Some("Required: Name, Code"));

        let s = fill(s, "name", "Syrup");
        let (s, cmd) = s.transition(AddSelectEvent::Submit, &f);
        assert_eq!(cmd, Command::None);
        assert_eq!(s.error(), Some("Required: Code"));
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required() {
        let s = fill(fill(open_form(), "name", "   "), "code", "X");
        let (s, _) = s.transition(AddSelectEvent::Submit, &fields());
        assert_eq!(s.error(), Some("Required: Name"));
    }

    #[test]
    fn test_failure_returns_to_form_with_values() {
        let f = fields();
        let s = fill(fill(open_form(), "name", "Syrup"), "code", "SYR");
        let (s, _) = s.transition(AddSelectEvent::Submit, &f);
        let (s, _) = s.transition(AddSelectEvent::SubmitFailed("Code already exists".into()), &f);
        assert!(s.is_form_visible());
        assert_eq!(s.error(), Some("Code already exists"));
        assert_eq!(s.values().and_then(|v| v.get("name")).map(String::as_str), Some("Syrup"));

        let (s, _) = s.transition(AddSelectEvent::Submit, &f);
        let (s, _) = s.transition(AddSelectEvent::SubmitFailed(String::new()), &f);
        assert_eq!(s.error(), Some(GENERIC_CREATE_ERROR));

        let (s, _) = s.transition(AddSelectEvent::Cancel, &f);
        assert_eq!(s, AddSelectState::Closed);
    }

    #[test]
    fn test_choose_add_new_clears_form() {
        let f = fields();
        let s = fill(open_form(), "name", "Old");
        let (s, _) = s.transition(AddSelectEvent::Cancel, &f);
        let (s, _) = s.transition(AddSelectEvent::Toggle, &f);
        let (s, _) = s.transition(AddSelectEvent::ChooseAddNew, &f);
        assert_eq!(s.values().map(|v| v.is_empty()), Some(true));
    }

    #[test]
    fn test_merge_options_dedups_by_id() {
        let options = vec![SelectOption::new("a", "A")];
        let created = vec![SelectOption::new("a", "A"), SelectOption::new("b", "B")];
        let merged = merge_options(&options, &created);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].id, "b");
    }
}
