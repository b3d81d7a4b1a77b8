//! Profile editor core
//!
//! - **profile**: the record and its field identifiers
//! - **validation**: per-field rules and the save gate
//! - **list_field**: positional edits for social links and the gallery
//! - **dropdown** / **section**: transient UI state machines
//! - **media** / **store**: collaborator seams (image picker, persistence)
//! - **profile_editor**: `ProfileEditor`, which ties the above together

pub mod dropdown;
pub mod error;
pub mod list_field;
pub mod media;
pub mod profile;
pub mod profile_editor;
pub mod section;
pub mod store;
pub mod validation;

pub use dropdown::{DropdownField, DropdownState};
pub use error::EditError;
pub use list_field::{EntryBuffer, ListField};
pub use media::{FileDialogPicker, ImageRequest, ImageSelection, ImageSlot, MediaBridge, MediaPicker};
pub use profile::{ArrayField, PhotoEntry, Profile, ProfileField, RelationshipStatus};
pub use profile_editor::{ProfileEditor, SaveOutcome, StatusKind, StatusMessage};
pub use section::{EditSection, SectionEditState};
pub use store::{MemoryStore, ProfileStore};
pub use validation::{FieldError, ValidatedField, ValidationErrors};
