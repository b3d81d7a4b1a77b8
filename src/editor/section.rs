//! Exclusive per-section edit mode

use std::fmt;

/// Profile sections that own an edit toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditSection {
    EditProfile,
    AboutMe,
    CorePersonality,
    ValuesBeliefs,
    Achievements,
    BucketList,
    FavouriteBooks,
    SocialLinks,
}

impl EditSection {
    pub fn title(self) -> &'static str {
        match self {
            EditSection::EditProfile => "Edit Profile",
            EditSection::AboutMe => "About me",
            EditSection::CorePersonality => "Core Personality",
            EditSection::ValuesBeliefs => "Values & Beliefs",
            EditSection::Achievements => "Achievements & Milestone",
            EditSection::BucketList => "Unfiltered & Authentic",
            EditSection::FavouriteBooks => "Favourite Books & Anecdotes",
            EditSection::SocialLinks => "Social Media Links",
        }
    }
}

impl fmt::Display for EditSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Which section, if any, is open for editing
///
/// Holding a single `Option` makes "two sections open" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionEditState {
    open: Option<EditSection>,
}

impl SectionEditState {
    /// Close `section` if it is open, otherwise open it in place of any other
    pub fn toggle(&mut self, section: EditSection) -> Option<EditSection> {
        self.open = if self.open == Some(section) {
            None
        } else {
            Some(section)
        };
        self.open
    }

    pub fn current(&self) -> Option<EditSection> {
        self.open
    }

    pub fn is_editable(&self, section: EditSection) -> bool {
        self.open == Some(section)
    }
}
