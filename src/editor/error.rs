use thiserror::Error;

use crate::editor::section::EditSection;

/// Edit calls the editor refused; nothing was mutated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{field} is read-only until '{section}' is opened for editing")]
    SectionLocked {
        field: &'static str,
        section: EditSection,
    },
    #[error("index {index} is out of bounds for {len} entries")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("editor is closed")]
    Closed,
}
