//! Profile editor core
//!
//! Owns the profile and its validation errors for the lifetime of the screen.
//! Errors clear when their field is touched and are only recomputed when a
//! save is requested.

use std::fmt;
use tracing::{debug, info, warn};

use crate::constants::{social, status};
use crate::editor::dropdown::{DropdownField, DropdownState};
use crate::editor::error::EditError;
use crate::editor::list_field::EntryBuffer;
use crate::editor::media::{ImageRequest, ImageSlot, MediaPicker};
use crate::editor::profile::{ArrayField, PhotoEntry, Profile, ProfileField, RelationshipStatus};
use crate::editor::section::{EditSection, SectionEditState};
use crate::editor::store::ProfileStore;
use crate::editor::validation::{validate_all, ValidatedField, ValidationErrors};

/// Result of a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Validation passed and the store accepted the profile
    Saved,
    /// At least one field failed validation; nothing was stored
    Blocked,
    /// Validation passed but the store refused
    Failed(String),
    /// The editor was closed; nothing was validated or stored
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
}

/// User-visible outcome of the last save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct ProfileEditor {
    profile: Profile,
    errors: ValidationErrors,
    sections: SectionEditState,
    dropdown: DropdownState,
    new_social_link: EntryBuffer,
    array_draft: Option<(ArrayField, String)>,
    status: Option<StatusMessage>,
    store: Box<dyn ProfileStore>,
    pending_images: Vec<ImageRequest>,
    next_request_id: u64,
    closed: bool,
}

impl ProfileEditor {
    /// Mount the editor on `seed`
    pub fn mount(seed: Profile, store: impl ProfileStore + 'static) -> Self {
        info!(display_name = %seed.display_name, "Mounting profile editor");
        Self {
            profile: seed,
            errors: ValidationErrors::default(),
            sections: SectionEditState::default(),
            dropdown: DropdownState::default(),
            new_social_link: EntryBuffer::default(),
            array_draft: None,
            status: None,
            store: Box::new(store),
            pending_images: Vec::new(),
            next_request_id: 1,
            closed: false,
        }
    }

    /// Tear down; later edits fail and late image completions are ignored
    pub fn close(&mut self) {
        if !self.closed {
            info!(pending = self.pending_images.len(), "Closing profile editor");
        }
        self.closed = true;
        self.pending_images.clear();
        self.array_draft = None;
        self.dropdown.dismiss();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_message(&self, field: ValidatedField) -> Option<String> {
        self.errors.message(field)
    }

    /// Save gate, derived from the current error mapping
    pub fn can_save(&self) -> bool {
        self.errors.can_save()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    // ---------------------------------------------------------------------
    // Sections
    // ---------------------------------------------------------------------

    /// Open `section` (closing any other) or close it if already open.
    /// Once the editor is closed the current state is returned unchanged.
    pub fn toggle_section(&mut self, section: EditSection) -> Option<EditSection> {
        if self.closed {
            return self.sections.current();
        }
        self.array_draft = None;
        let open = self.sections.toggle(section);
        debug!(section = %section, open = ?open, "Toggled edit section");
        open
    }

    pub fn open_section(&self) -> Option<EditSection> {
        self.sections.current()
    }

    pub fn is_section_editable(&self, section: EditSection) -> bool {
        self.sections.is_editable(section)
    }

    pub fn is_field_editable(&self, field: ProfileField) -> bool {
        self.sections.is_editable(field.section())
    }

    fn ensure_editable(&self, field: &'static str, section: EditSection) -> Result<(), EditError> {
        if self.closed {
            return Err(EditError::Closed);
        }
        if !self.sections.is_editable(section) {
            return Err(EditError::SectionLocked { field, section });
        }
        Ok(())
    }

    fn ensure_mounted(&self) -> Result<(), EditError> {
        if self.closed {
            return Err(EditError::Closed);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Scalar and array fields
    // ---------------------------------------------------------------------

    /// Replace a scalar field and clear its error without revalidating
    pub fn update_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        self.ensure_editable(field.label(), field.section())?;
        *self.profile.text_mut(field) = value.into();
        if let Some(key) = field.validated() {
            self.errors.clear(key);
        }
        Ok(())
    }

    /// Replace a sequence field from comma-separated text.
    /// Segments are trimmed; empty segments are kept. The raw text stays as
    /// the field's draft until `finish_array_edit` or a section toggle.
    pub fn update_array_field(&mut self, field: ArrayField, text: &str) -> Result<(), EditError> {
        self.ensure_editable(field.label(), field.section())?;
        self.array_draft = Some((field, text.to_string()));
        let values = text
            .split(social::VALUE_SEPARATOR)
            .map(|segment| segment.trim().to_string())
            .collect();
        match field {
            ArrayField::CoreValues => self.profile.core_values = values,
        }
        self.errors.clear(field.validated());
        Ok(())
    }

    /// Text surface for an array field: the draft being typed, otherwise
    /// the values joined with `", "`
    pub fn array_field_text(&self, field: ArrayField) -> String {
        if let Some((draft_field, draft)) = &self.array_draft {
            if *draft_field == field {
                return draft.clone();
            }
        }
        match field {
            ArrayField::CoreValues => self.profile.core_values.join(social::VALUE_JOINER),
        }
    }

    /// Drop the draft so the text surface is re-derived from the values
    pub fn finish_array_edit(&mut self) {
        self.array_draft = None;
    }

    // ---------------------------------------------------------------------
    // Social links
    // ---------------------------------------------------------------------

    pub fn update_social_link(&mut self, index: usize, value: impl Into<String>) -> Result<(), EditError> {
        self.ensure_editable("Social links", EditSection::SocialLinks)?;
        self.profile.social_links.update_at(index, value.into())?;
        self.errors.clear(ValidatedField::SocialLinks);
        Ok(())
    }

    pub fn remove_social_link(&mut self, index: usize) -> Result<String, EditError> {
        self.ensure_editable("Social links", EditSection::SocialLinks)?;
        let removed = self.profile.social_links.remove_at(index)?;
        self.errors.clear(ValidatedField::SocialLinks);
        debug!(index, link = %removed, "Removed social link");
        Ok(removed)
    }

    pub fn new_social_link(&self) -> &str {
        self.new_social_link.text()
    }

    pub fn set_new_social_link(&mut self, text: impl Into<String>) {
        if self.closed {
            return;
        }
        self.new_social_link.set(text);
    }

    /// Append the pending entry if it is non-blank; returns whether it was added
    pub fn commit_new_social_link(&mut self) -> Result<bool, EditError> {
        self.ensure_editable("Social links", EditSection::SocialLinks)?;
        let added = self.new_social_link.commit(&mut self.profile.social_links);
        if added {
            self.errors.clear(ValidatedField::SocialLinks);
            debug!(count = self.profile.social_links.len(), "Added social link");
        }
        Ok(added)
    }

    // ---------------------------------------------------------------------
    // Photo gallery and image slots
    // ---------------------------------------------------------------------

    pub fn remove_gallery_photo(&mut self, index: usize) -> Result<PhotoEntry, EditError> {
        self.ensure_mounted()?;
        let removed = self.profile.photo_gallery.remove_at(index)?;
        debug!(index, uri = %removed.uri, "Removed gallery photo");
        Ok(removed)
    }

    /// Issue a ticket for an image pick; `None` once the editor is closed
    pub fn begin_image_request(&mut self, slot: ImageSlot) -> Option<ImageRequest> {
        if self.closed {
            return None;
        }
        let request = ImageRequest {
            id: self.next_request_id,
            slot,
        };
        self.next_request_id += 1;
        self.pending_images.push(request);
        debug!(id = request.id, slot = %slot, "Image pick requested");
        Some(request)
    }

    pub fn pending_image_requests(&self) -> usize {
        self.pending_images.len()
    }

    /// Apply a finished pick. Cancelled or blank results, unknown tickets and
    /// completions after close change nothing.
    pub fn complete_image_request(&mut self, request: ImageRequest, uri: Option<String>) -> bool {
        let Some(position) = self.pending_images.iter().position(|pending| *pending == request) else {
            debug!(id = request.id, closed = self.closed, "Ignoring stale image completion");
            return false;
        };
        self.pending_images.remove(position);

        let Some(uri) = uri.filter(|uri| !uri.trim().is_empty()) else {
            debug!(id = request.id, slot = %request.slot, "Image pick cancelled");
            return false;
        };

        match request.slot {
            ImageSlot::Cover => self.profile.cover_image = uri,
            ImageSlot::Primary => self.profile.profile_image = uri,
            ImageSlot::Gallery => self.profile.photo_gallery.append(PhotoEntry::new(uri)),
        }
        info!(id = request.id, slot = %request.slot, "Image applied");
        true
    }

    /// Run one pick to completion inline. Picks issued this way are
    /// sequential; use a `MediaBridge` for overlapping picks.
    pub async fn pick_image(&mut self, picker: &dyn MediaPicker, slot: ImageSlot) -> bool {
        let Some(request) = self.begin_image_request(slot) else {
            return false;
        };
        let uri = picker.request_image(slot).await;
        self.complete_image_request(request, uri)
    }

    // ---------------------------------------------------------------------
    // Dropdown
    // ---------------------------------------------------------------------

    pub fn dropdown(&self) -> DropdownState {
        self.dropdown
    }

    pub fn open_dropdown(&mut self, field: DropdownField) {
        if self.closed {
            return;
        }
        self.dropdown.open(field);
    }

    pub fn dismiss_dropdown(&mut self) {
        if self.closed {
            return;
        }
        self.dropdown.dismiss();
    }

    pub fn dropdown_options(&self, field: DropdownField) -> &'static [&'static str] {
        field.options()
    }

    pub fn dropdown_value(&self, field: DropdownField) -> &'static str {
        match field {
            DropdownField::Relationship => self.profile.relationship_status.label(),
        }
    }

    /// Apply `option` if `field` is the open dropdown; otherwise a no-op
    pub fn select_dropdown_option(&mut self, field: DropdownField, option: &str) -> bool {
        if self.closed {
            return false;
        }
        let Some(option) = self.dropdown.select(field, option) else {
            debug!(field = %field, option, "Ignoring dropdown selection");
            return false;
        };
        match field {
            DropdownField::Relationship => {
                if let Some(status) = RelationshipStatus::from_label(option) {
                    self.profile.relationship_status = status;
                }
            }
        }
        true
    }

    // ---------------------------------------------------------------------
    // Save
    // ---------------------------------------------------------------------

    /// Validate everything and hand the profile to the store if it passes
    pub fn request_save(&mut self) -> SaveOutcome {
        if self.closed {
            debug!("Ignoring save request on closed editor");
            return SaveOutcome::Closed;
        }

        self.errors = validate_all(&self.profile);

        if !self.errors.can_save() {
            info!(errors = self.errors.len(), "Save blocked by validation errors");
            self.status = Some(StatusMessage {
                text: status::BLOCKED.to_string(),
                kind: StatusKind::Warning,
            });
            return SaveOutcome::Blocked;
        }

        match self.store.save(&self.profile) {
            Ok(()) => {
                info!(display_name = %self.profile.display_name, "Profile saved");
                self.status = Some(StatusMessage {
                    text: status::SAVED.to_string(),
                    kind: StatusKind::Success,
                });
                SaveOutcome::Saved
            }
            Err(err) => {
                warn!(error = %err, "Failed to save profile");
                let text = format!("Failed to save profile: {err:#}");
                self.status = Some(StatusMessage {
                    text: text.clone(),
                    kind: StatusKind::Error,
                });
                SaveOutcome::Failed(text)
            }
        }
    }
}

impl fmt::Debug for ProfileEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileEditor")
            .field("profile", &self.profile)
            .field("errors", &self.errors)
            .field("sections", &self.sections)
            .field("dropdown", &self.dropdown)
            .field("pending_images", &self.pending_images)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::list_field::ListField;
    use crate::editor::media::ScriptedPicker;
    use crate::editor::store::MemoryStore;
    use crate::editor::validation::FieldError;

    fn editor_with(profile: Profile) -> (ProfileEditor, MemoryStore) {
        let store = MemoryStore::new();
        (ProfileEditor::mount(profile, store.clone()), store)
    }

    fn uris(editor: &ProfileEditor) -> Vec<&str> {
        editor
            .profile()
            .photo_gallery
            .as_slice()
            .iter()
            .map(|photo| photo.uri.as_str())
            .collect()
    }

    #[test]
    fn test_save_blocked_on_underage() {
        let mut profile = Profile::seed();
        profile.display_name = "Al".to_string();
        profile.age = "17".to_string();
        let (mut editor, store) = editor_with(profile);

        assert_eq!(editor.request_save(), SaveOutcome::Blocked);
        assert_eq!(editor.errors().get(ValidatedField::DisplayName), None);
        assert_eq!(
            editor.errors().get(ValidatedField::Age),
            Some(FieldError::AgeOutOfRange)
        );
        assert!(!editor.can_save());
        assert_eq!(store.save_count(), 0);
        assert_eq!(editor.status().unwrap().kind, StatusKind::Warning);
    }

    #[test]
    fn test_save_valid_profile() {
        let (mut editor, store) = editor_with(Profile::seed());

        assert_eq!(editor.request_save(), SaveOutcome::Saved);
        assert_eq!(store.saved(), Some(Profile::seed()));
        assert_eq!(editor.status().unwrap().text, "Profile saved!");
    }

    #[test]
    fn test_store_failure_keeps_profile() {
        let (mut editor, store) = editor_with(Profile::seed());
        store.set_failure(Some("backend offline"));

        let outcome = editor.request_save();
        assert_eq!(
            outcome,
            SaveOutcome::Failed("Failed to save profile: backend offline".to_string())
        );
        assert_eq!(editor.profile(), &Profile::seed());
        assert_eq!(editor.status().unwrap().kind, StatusKind::Error);
        assert!(editor.can_save());
    }

    #[test]
    fn test_edit_clears_error_without_revalidating() {
        let mut profile = Profile::seed();
        profile.age = "17".to_string();
        profile.location = String::new();
        let (mut editor, _store) = editor_with(profile);
        editor.request_save();
        assert_eq!(editor.errors().len(), 2);

        editor.toggle_section(EditSection::EditProfile);
        editor.update_field(ProfileField::Age, "still bad").unwrap();

        // Cleared even though the new value is invalid
        assert_eq!(editor.errors().get(ValidatedField::Age), None);
        assert!(!editor.can_save());

        editor.update_field(ProfileField::Location, "Lisbon").unwrap();
        assert!(editor.can_save());

        // Full pass on submit catches the invalid age again
        assert_eq!(editor.request_save(), SaveOutcome::Blocked);
        assert_eq!(
            editor.errors().get(ValidatedField::Age),
            Some(FieldError::AgeNotANumber)
        );
    }

    #[test]
    fn test_closed_section_rejects_edits() {
        let (mut editor, _store) = editor_with(Profile::seed());

        let err = editor.update_field(ProfileField::DisplayName, "Nope").unwrap_err();
        assert_eq!(
            err,
            EditError::SectionLocked {
                field: "Display Name",
                section: EditSection::EditProfile,
            }
        );
        assert_eq!(editor.profile().display_name, "Jessica Parker");

        editor.toggle_section(EditSection::AboutMe);
        assert!(editor.update_field(ProfileField::Location, "Rome").is_err());
        assert!(editor.update_field(ProfileField::AboutMe, "Hello").is_ok());
        assert!(editor.is_field_editable(ProfileField::AboutMe));
        assert!(!editor.is_field_editable(ProfileField::Location));
    }

    #[test]
    fn test_core_values_from_text() {
        let (mut editor, _store) = editor_with(Profile::seed());
        editor.toggle_section(EditSection::ValuesBeliefs);

        editor
            .update_array_field(ArrayField::CoreValues, "kindness, honesty, kindness")
            .unwrap();
        assert_eq!(
            editor.profile().core_values,
            vec!["kindness", "honesty", "kindness"]
        );
        assert_eq!(
            editor.array_field_text(ArrayField::CoreValues),
            "kindness, honesty, kindness"
        );
    }

    #[test]
    fn test_core_values_keep_empty_segments() {
        let (mut editor, _store) = editor_with(Profile::seed());
        editor.toggle_section(EditSection::ValuesBeliefs);

        editor.update_array_field(ArrayField::CoreValues, "grit,").unwrap();
        assert_eq!(editor.profile().core_values, vec!["grit", ""]);
        assert_eq!(editor.array_field_text(ArrayField::CoreValues), "grit,");

        editor.finish_array_edit();
        assert_eq!(editor.array_field_text(ArrayField::CoreValues), "grit, ");
    }

    #[test]
    fn test_core_values_typed_one_char_at_a_time() {
        let (mut editor, _store) = editor_with(Profile::seed());
        editor.toggle_section(EditSection::ValuesBeliefs);
        editor.update_array_field(ArrayField::CoreValues, "").unwrap();

        for ch in "kindness, work ethic".chars() {
            let mut text = editor.array_field_text(ArrayField::CoreValues);
            text.push(ch);
            editor.update_array_field(ArrayField::CoreValues, &text).unwrap();
        }

        assert_eq!(
            editor.array_field_text(ArrayField::CoreValues),
            "kindness, work ethic"
        );
        assert_eq!(editor.profile().core_values, vec!["kindness", "work ethic"]);

        editor.toggle_section(EditSection::ValuesBeliefs);
        assert_eq!(
            editor.array_field_text(ArrayField::CoreValues),
            "kindness, work ethic"
        );
    }

    #[test]
    fn test_too_many_core_values_cleared_on_edit() {
        let (mut editor, _store) = editor_with(Profile::seed());
        editor.toggle_section(EditSection::ValuesBeliefs);
        editor
            .update_array_field(ArrayField::CoreValues, "a,b,c,d,e,f,g,h,i,j,k")
            .unwrap();

        assert_eq!(editor.request_save(), SaveOutcome::Blocked);
        assert_eq!(
            editor.error_message(ValidatedField::CoreValues).as_deref(),
            Some("Maximum 10 core values allowed")
        );

        editor.update_array_field(ArrayField::CoreValues, "a,b").unwrap();
        assert!(editor.can_save());
        assert_eq!(editor.request_save(), SaveOutcome::Saved);
    }

    #[test]
    fn test_social_links_lifecycle() {
        let mut profile = Profile::seed();
        profile.social_links = vec!["@a".to_string(), "b".to_string()].into();
        let (mut editor, _store) = editor_with(profile);

        assert_eq!(editor.request_save(), SaveOutcome::Blocked);
        assert!(editor.error_message(ValidatedField::SocialLinks).is_some());

        assert!(editor.update_social_link(1, "@b").is_err());
        editor.toggle_section(EditSection::SocialLinks);
        editor.update_social_link(1, "@b").unwrap();
        assert!(editor.can_save());

        editor.set_new_social_link("   ");
        assert_eq!(editor.commit_new_social_link(), Ok(false));
        assert_eq!(editor.new_social_link(), "   ");

        editor.set_new_social_link(" @c ");
        assert_eq!(editor.commit_new_social_link(), Ok(true));
        assert_eq!(editor.new_social_link(), "");

        assert_eq!(editor.remove_social_link(0).unwrap(), "@a");
        assert_eq!(
            editor.profile().social_links.as_slice(),
            &["@b".to_string(), "@c".to_string()]
        );
        assert_eq!(
            editor.remove_social_link(5),
            Err(EditError::IndexOutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_dropdown_select_updates_relationship() {
        let (mut editor, _store) = editor_with(Profile::seed());

        assert!(!editor.select_dropdown_option(DropdownField::Relationship, "Married"));
        assert_eq!(editor.dropdown(), DropdownState::Closed);
        assert_eq!(editor.profile().relationship_status, RelationshipStatus::Single);

        editor.open_dropdown(DropdownField::Relationship);
        assert!(editor.select_dropdown_option(DropdownField::Relationship, "Married"));
        assert_eq!(editor.dropdown(), DropdownState::Closed);
        assert_eq!(editor.dropdown_value(DropdownField::Relationship), "Married");
    }

    #[test]
    fn test_dropdown_dismiss_keeps_value() {
        let (mut editor, _store) = editor_with(Profile::seed());
        editor.open_dropdown(DropdownField::Relationship);
        editor.dismiss_dropdown();

        assert!(!editor.dropdown().is_visible());
        assert_eq!(editor.profile().relationship_status, RelationshipStatus::Single);
        assert_eq!(editor.dropdown_options(DropdownField::Relationship).len(), 6);
    }

    #[tokio::test]
    async fn test_gallery_appends_in_request_order() {
        let mut profile = Profile::seed();
        profile.photo_gallery = ListField::default();
        let (mut editor, _store) = editor_with(profile);
        let picker = ScriptedPicker::new([Some("file:///first.jpg"), Some("file:///second.jpg")]);

        assert!(editor.pick_image(&picker, ImageSlot::Gallery).await);
        assert!(editor.pick_image(&picker, ImageSlot::Gallery).await);
        assert_eq!(uris(&editor), vec!["file:///first.jpg", "file:///second.jpg"]);

        editor.remove_gallery_photo(0).unwrap();
        assert_eq!(uris(&editor), vec!["file:///second.jpg"]);
    }

    #[tokio::test]
    async fn test_cancelled_pick_changes_nothing() {
        let (mut editor, _store) = editor_with(Profile::seed());
        let picker = ScriptedPicker::new([None]);

        assert!(!editor.pick_image(&picker, ImageSlot::Gallery).await);
        assert_eq!(editor.profile().photo_gallery.len(), 3);
        assert_eq!(editor.pending_image_requests(), 0);
    }

    #[test]
    fn test_overlapping_requests_resolve_independently() {
        let (mut editor, _store) = editor_with(Profile::seed());
        let cover = editor.begin_image_request(ImageSlot::Cover).unwrap();
        let primary = editor.begin_image_request(ImageSlot::Primary).unwrap();
        assert_eq!(editor.pending_image_requests(), 2);

        assert!(editor.complete_image_request(primary, Some("file:///me.png".to_string())));
        assert!(editor.complete_image_request(cover, Some("file:///sky.png".to_string())));
        assert_eq!(editor.profile().profile_image, "file:///me.png");
        assert_eq!(editor.profile().cover_image, "file:///sky.png");

        // Same ticket twice
        assert!(!editor.complete_image_request(cover, Some("file:///again.png".to_string())));
        assert_eq!(editor.profile().cover_image, "file:///sky.png");
    }

    #[test]
    fn test_blank_uri_is_cancellation() {
        let (mut editor, _store) = editor_with(Profile::seed());
        let request = editor.begin_image_request(ImageSlot::Gallery).unwrap();

        assert!(!editor.complete_image_request(request, Some("  ".to_string())));
        assert_eq!(editor.profile().photo_gallery.len(), 3);
    }

    #[test]
    fn test_completion_after_close_is_ignored() {
        let (mut editor, _store) = editor_with(Profile::seed());
        let request = editor.begin_image_request(ImageSlot::Gallery).unwrap();
        editor.close();

        assert!(!editor.complete_image_request(request, Some("file:///late.png".to_string())));
        assert_eq!(editor.profile().photo_gallery.len(), 3);
        assert!(editor.begin_image_request(ImageSlot::Cover).is_none());
        assert_eq!(editor.remove_gallery_photo(0), Err(EditError::Closed));

        editor.toggle_section(EditSection::EditProfile);
        assert_eq!(
            editor.update_field(ProfileField::DisplayName, "Late"),
            Err(EditError::Closed)
        );
    }

    #[test]
    fn test_closed_editor_ignores_save_and_transitions() {
        let (mut editor, store) = editor_with(Profile::seed());
        editor.toggle_section(EditSection::EditProfile);
        editor.close();

        assert_eq!(editor.request_save(), SaveOutcome::Closed);
        assert_eq!(store.save_count(), 0);
        assert!(editor.status().is_none());

        assert_eq!(
            editor.toggle_section(EditSection::AboutMe),
            Some(EditSection::EditProfile)
        );
        assert_eq!(editor.open_section(), Some(EditSection::EditProfile));

        editor.open_dropdown(DropdownField::Relationship);
        assert_eq!(editor.dropdown(), DropdownState::Closed);

        editor.set_new_social_link("@late");
        assert_eq!(editor.new_social_link(), "");
    }
}
