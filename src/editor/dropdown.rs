//! Single-choice dropdown state
//!
//! Options are fixed per field. The state itself is transient and never
//! saved with the profile.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::editor::profile::RelationshipStatus;

/// Fields edited through a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropdownField {
    Relationship,
}

impl DropdownField {
    pub fn token(self) -> &'static str {
        match self {
            DropdownField::Relationship => "relationship",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DropdownField::Relationship => "Relationship Status",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            DropdownField::Relationship => &RelationshipStatus::LABELS,
        }
    }

    pub fn accepts(self, option: &str) -> bool {
        self.options().contains(&option)
    }
}

impl fmt::Display for DropdownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DropdownField {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "relationship" => Ok(DropdownField::Relationship),
            other => Err(anyhow!("Unknown dropdown field '{other}'")),
        }
    }
}

/// `Closed` or open on exactly one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open(DropdownField),
}

impl DropdownState {
    /// Open `field`, replacing whatever was open
    pub fn open(&mut self, field: DropdownField) {
        *self = DropdownState::Open(field);
    }

    pub fn dismiss(&mut self) {
        *self = DropdownState::Closed;
    }

    /// Accept `option` for `field` if that field is open and the option is
    /// in its set; closes the dropdown on success.
    pub fn select<'a>(&mut self, field: DropdownField, option: &'a str) -> Option<&'a str> {
        if *self != DropdownState::Open(field) || !field.accepts(option) {
            return None;
        }
        *self = DropdownState::Closed;
        Some(option)
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, DropdownState::Open(_))
    }

    pub fn active(&self) -> Option<DropdownField> {
        match self {
            DropdownState::Open(field) => Some(*field),
            DropdownState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let field: DropdownField = "relationship".parse().unwrap();
        assert_eq!(field, DropdownField::Relationship);
        assert_eq!(field.token(), "relationship");
        assert!("hobbies".parse::<DropdownField>().is_err());
    }

    #[test]
    fn test_relationship_options() {
        let options = DropdownField::Relationship.options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[1], "In a Relationship");
        assert_eq!(options[5], "Prefer not to say");
    }

    #[test]
    fn test_open_then_select_closes() {
        let mut state = DropdownState::default();
        state.open(DropdownField::Relationship);
        assert!(state.is_visible());

        let picked = state.select(DropdownField::Relationship, "Married");
        assert_eq!(picked, Some("Married"));
        assert_eq!(state, DropdownState::Closed);
    }

    #[test]
    fn test_select_while_closed_is_noop() {
        let mut state = DropdownState::default();
        assert_eq!(state.select(DropdownField::Relationship, "Married"), None);
        assert_eq!(state, DropdownState::Closed);
    }

    #[test]
    fn test_select_unknown_option_keeps_open() {
        let mut state = DropdownState::default();
        state.open(DropdownField::Relationship);
        assert_eq!(state.select(DropdownField::Relationship, "Complicated"), None);
        assert_eq!(state.active(), Some(DropdownField::Relationship));
    }

    #[test]
    fn test_dismiss() {
        let mut state = DropdownState::default();
        state.open(DropdownField::Relationship);
        state.open(DropdownField::Relationship);
        state.dismiss();
        assert!(!state.is_visible());
        assert_eq!(state.active(), None);
    }
}
