//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Field validation limits
pub mod limits {
    /// Minimum display name length (characters)
    pub const DISPLAY_NAME_MIN: usize = 2;

    /// Maximum display name length (characters)
    pub const DISPLAY_NAME_MAX: usize = 50;

    /// Youngest accepted age
    pub const AGE_MIN: i64 = 18;

    /// Oldest accepted age
    pub const AGE_MAX: i64 = 100;

    /// Maximum "About Me" length (characters)
    pub const ABOUT_ME_MAX: usize = 500;

    /// Maximum number of core values
    pub const CORE_VALUES_MAX: usize = 10;
}

/// Social handle conventions
pub mod social {
    /// Every non-empty social link starts with this prefix
    pub const HANDLE_PREFIX: char = '@';

    /// Separator for the comma-separated core values text surface
    pub const VALUE_SEPARATOR: char = ',';

    /// Joiner used when rendering core values back into text
    pub const VALUE_JOINER: &str = ", ";
}

/// Image picker constants
pub mod media {
    /// Extensions offered by the native image picker
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

    /// Scheme prefixed to local file selections
    pub const FILE_URI_SCHEME: &str = "file://";
}

/// Configuration file location
pub mod config {
    /// Directory under the user's config dir
    pub const APP_DIR: &str = "profile-editor";

    /// Config filename
    pub const FILENAME: &str = "config.json";

    /// Environment variable consulted for the log level
    pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
}

/// Status messages shown after a save attempt
pub mod status {
    pub const SAVED: &str = "Profile saved!";
    pub const BLOCKED: &str = "Please fix the validation errors before saving.";
}
