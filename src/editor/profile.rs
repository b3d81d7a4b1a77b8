//! Profile record edited by the screen
//!
//! The record is plain data. Every mutation goes through
//! [`ProfileEditor`](crate::editor::ProfileEditor) so validation errors and
//! section locks stay consistent with it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::editor::list_field::ListField;
use crate::editor::section::EditSection;
use crate::editor::validation::ValidatedField;

/// One photo in the gallery, identified by its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    pub uri: String,
}

impl PhotoEntry {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Closed option set for the relationship dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RelationshipStatus {
    #[default]
    Single,
    #[serde(rename = "In a Relationship")]
    InARelationship,
    Married,
    Divorced,
    Widowed,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl RelationshipStatus {
    pub const ALL: [RelationshipStatus; 6] = [
        RelationshipStatus::Single,
        RelationshipStatus::InARelationship,
        RelationshipStatus::Married,
        RelationshipStatus::Divorced,
        RelationshipStatus::Widowed,
        RelationshipStatus::PreferNotToSay,
    ];

    /// Display labels, in dropdown order
    pub const LABELS: [&'static str; 6] = [
        "Single",
        "In a Relationship",
        "Married",
        "Divorced",
        "Widowed",
        "Prefer not to say",
    ];

    pub fn label(self) -> &'static str {
        match self {
            RelationshipStatus::Single => "Single",
            RelationshipStatus::InARelationship => "In a Relationship",
            RelationshipStatus::Married => "Married",
            RelationshipStatus::Divorced => "Divorced",
            RelationshipStatus::Widowed => "Widowed",
            RelationshipStatus::PreferNotToSay => "Prefer not to say",
        }
    }

    /// Exact-match lookup by label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user profile
///
/// `age` stays textual because the input surface is text; it is only parsed
/// during validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub display_name: String,
    pub age: String,
    pub location: String,
    pub relationship_status: RelationshipStatus,
    pub about_me: String,
    pub personality_type: String,
    pub strength: String,
    pub growth_areas: String,
    pub core_values: Vec<String>,
    pub life_principle: String,
    pub decision_making: String,
    pub achievements: String,
    pub bucket_list: String,
    pub favourite_books: String,
    pub favourite_anecdotes: String,
    pub photo_gallery: ListField<PhotoEntry>,
    pub social_links: ListField<String>,
    pub cover_image: String,
    pub profile_image: String,
}

impl Profile {
    /// Record the screen mounts with when no other seed is configured
    pub fn seed() -> Self {
        Self {
            display_name: "Jessica Parker".to_string(),
            age: "28".to_string(),
            location: "San Francisco, CA".to_string(),
            relationship_status: RelationshipStatus::Single,
            photo_gallery: ListField::new(vec![
                PhotoEntry::new("https://randomuser.me/api/portraits/women/1.jpg"),
                PhotoEntry::new("https://randomuser.me/api/portraits/women/2.jpg"),
                PhotoEntry::new("https://randomuser.me/api/portraits/women/3.jpg"),
            ]),
            social_links: ListField::new(vec!["@Jessica.parker".to_string(); 3]),
            cover_image: "https://images.unsplash.com/photo-1506744038136-46273834b3fb".to_string(),
            profile_image: "https://randomuser.me/api/portraits/women/44.jpg".to_string(),
            ..Self::default()
        }
    }

    /// Current value of a scalar text field
    pub fn text(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::DisplayName => &self.display_name,
            ProfileField::Age => &self.age,
            ProfileField::Location => &self.location,
            ProfileField::AboutMe => &self.about_me,
            ProfileField::PersonalityType => &self.personality_type,
            ProfileField::Strength => &self.strength,
            ProfileField::GrowthAreas => &self.growth_areas,
            ProfileField::LifePrinciple => &self.life_principle,
            ProfileField::DecisionMaking => &self.decision_making,
            ProfileField::Achievements => &self.achievements,
            ProfileField::BucketList => &self.bucket_list,
            ProfileField::FavouriteBooks => &self.favourite_books,
            ProfileField::FavouriteAnecdotes => &self.favourite_anecdotes,
        }
    }

    pub(crate) fn text_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::DisplayName => &mut self.display_name,
            ProfileField::Age => &mut self.age,
            ProfileField::Location => &mut self.location,
            ProfileField::AboutMe => &mut self.about_me,
            ProfileField::PersonalityType => &mut self.personality_type,
            ProfileField::Strength => &mut self.strength,
            ProfileField::GrowthAreas => &mut self.growth_areas,
            ProfileField::LifePrinciple => &mut self.life_principle,
            ProfileField::DecisionMaking => &mut self.decision_making,
            ProfileField::Achievements => &mut self.achievements,
            ProfileField::BucketList => &mut self.bucket_list,
            ProfileField::FavouriteBooks => &mut self.favourite_books,
            ProfileField::FavouriteAnecdotes => &mut self.favourite_anecdotes,
        }
    }
}

/// Scalar text fields of the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    DisplayName,
    Age,
    Location,
    AboutMe,
    PersonalityType,
    Strength,
    GrowthAreas,
    LifePrinciple,
    DecisionMaking,
    Achievements,
    BucketList,
    FavouriteBooks,
    FavouriteAnecdotes,
}

impl ProfileField {
    pub const ALL: [ProfileField; 13] = [
        ProfileField::DisplayName,
        ProfileField::Age,
        ProfileField::Location,
        ProfileField::AboutMe,
        ProfileField::PersonalityType,
        ProfileField::Strength,
        ProfileField::GrowthAreas,
        ProfileField::LifePrinciple,
        ProfileField::DecisionMaking,
        ProfileField::Achievements,
        ProfileField::BucketList,
        ProfileField::FavouriteBooks,
        ProfileField::FavouriteAnecdotes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::DisplayName => "Display Name",
            ProfileField::Age => "Age",
            ProfileField::Location => "Location",
            ProfileField::AboutMe => "About Me",
            ProfileField::PersonalityType => "Personality Type",
            ProfileField::Strength => "Strength",
            ProfileField::GrowthAreas => "Growth Areas",
            ProfileField::LifePrinciple => "Life Principle",
            ProfileField::DecisionMaking => "Decision Making",
            ProfileField::Achievements => "Achievements",
            ProfileField::BucketList => "Bucket List & Life Goals",
            ProfileField::FavouriteBooks => "Favourite Books",
            ProfileField::FavouriteAnecdotes => "Favourite Anecdotes",
        }
    }

    /// Section whose edit toggle unlocks this field
    pub fn section(self) -> EditSection {
        match self {
            ProfileField::DisplayName | ProfileField::Age | ProfileField::Location => {
                EditSection::EditProfile
            }
            ProfileField::AboutMe => EditSection::AboutMe,
            ProfileField::PersonalityType | ProfileField::Strength | ProfileField::GrowthAreas => {
                EditSection::CorePersonality
            }
            ProfileField::LifePrinciple | ProfileField::DecisionMaking => EditSection::ValuesBeliefs,
            ProfileField::Achievements => EditSection::Achievements,
            ProfileField::BucketList => EditSection::BucketList,
            ProfileField::FavouriteBooks | ProfileField::FavouriteAnecdotes => {
                EditSection::FavouriteBooks
            }
        }
    }

    /// Error key cleared when this field is edited, if it is validated
    pub fn validated(self) -> Option<ValidatedField> {
        match self {
            ProfileField::DisplayName => Some(ValidatedField::DisplayName),
            ProfileField::Age => Some(ValidatedField::Age),
            ProfileField::Location => Some(ValidatedField::Location),
            ProfileField::AboutMe => Some(ValidatedField::AboutMe),
            _ => None,
        }
    }

    /// Rendered as a multi-line text box
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            ProfileField::AboutMe | ProfileField::Achievements | ProfileField::BucketList
        )
    }

    /// Fields belonging to `section`, in display order
    pub fn in_section(section: EditSection) -> impl Iterator<Item = ProfileField> {
        Self::ALL.into_iter().filter(move |field| field.section() == section)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sequence fields edited through a comma-separated text surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayField {
    CoreValues,
}

impl ArrayField {
    pub fn label(self) -> &'static str {
        match self {
            ArrayField::CoreValues => "Core Values",
        }
    }

    pub fn section(self) -> EditSection {
        match self {
            ArrayField::CoreValues => EditSection::ValuesBeliefs,
        }
    }

    pub fn validated(self) -> ValidatedField {
        match self {
            ArrayField::CoreValues => ValidatedField::CoreValues,
        }
    }
}

impl fmt::Display for ArrayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_labels_match_variants() {
        for (status, label) in RelationshipStatus::ALL.iter().zip(RelationshipStatus::LABELS) {
            assert_eq!(status.label(), label);
            assert_eq!(RelationshipStatus::from_label(label), Some(*status));
        }
        assert_eq!(RelationshipStatus::from_label("single"), None);
    }

    #[test]
    fn test_profile_json_uses_camel_case_and_labels() {
        let mut profile = Profile::default();
        profile.display_name = "Sam".to_string();
        profile.relationship_status = RelationshipStatus::InARelationship;

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["displayName"], "Sam");
        assert_eq!(json["relationshipStatus"], "In a Relationship");
        assert!(json["photoGallery"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_profile_deserialize_fills_missing_keys() {
        let profile: Profile =
            serde_json::from_str(r#"{"displayName": "Ana", "socialLinks": ["@ana"]}"#).unwrap();
        assert_eq!(profile.display_name, "Ana");
        assert_eq!(profile.social_links.as_slice(), &["@ana".to_string()]);
        assert_eq!(profile.relationship_status, RelationshipStatus::Single);
        assert!(profile.age.is_empty());
    }

    #[test]
    fn test_text_accessors_cover_every_field() {
        let mut profile = Profile::default();
        for field in ProfileField::ALL {
            *profile.text_mut(field) = field.label().to_string();
        }
        for field in ProfileField::ALL {
            assert_eq!(profile.text(field), field.label());
        }
    }

    #[test]
    fn test_every_section_with_text_fields_is_reachable() {
        let fields: Vec<_> = ProfileField::in_section(EditSection::EditProfile).collect();
        assert_eq!(
            fields,
            vec![ProfileField::DisplayName, ProfileField::Age, ProfileField::Location]
        );
        assert_eq!(ProfileField::in_section(EditSection::SocialLinks).count(), 0);
    }

    #[test]
    fn test_seed_profile() {
        let seed = Profile::seed();
        assert_eq!(seed.display_name, "Jessica Parker");
        assert_eq!(seed.photo_gallery.len(), 3);
        assert!(seed.social_links.as_slice().iter().all(|link| link.starts_with('@')));
    }
}
