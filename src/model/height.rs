//! Height classes and the estimated-height lookup table.
//!
//! Heights are coarse visual estimates in pixels. The layout only relies on them
//! being a monotonic cost, so every entry in [`HeightTable`] is overridable.

use serde::{Deserialize, Serialize};
use std::fmt;

// Label constants
const LABEL_FEATURED: &str = "featured";
const LABEL_WITH_MEDIA: &str = "with-media";
const LABEL_TEXT_ONLY: &str = "text-only";

/// Default estimate for a featured (hero) card.
pub const DEFAULT_FEATURED_HEIGHT: u32 = 350;
/// Default estimate for a card with an image.
pub const DEFAULT_WITH_MEDIA_HEIGHT: u32 = 280;
/// Default estimate for a text-only card; also the fallback for unknown classes.
pub const DEFAULT_TEXT_ONLY_HEIGHT: u32 = 180;

/// Coarse category used to estimate an item's rendered height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeightClass {
    /// Hero card with a large image and headline.
    Featured,
    /// Standard card with a thumbnail.
    WithMedia,
    /// Headline and standfirst only.
    TextOnly,
}

impl HeightClass {
    /// All classes, in descending default height.
    pub const ALL: [HeightClass; 3] = [
        HeightClass::Featured,
        HeightClass::WithMedia,
        HeightClass::TextOnly,
    ];

    /// Parse a class label.
    ///
    /// Accepts the kebab-case labels and their snake_case spellings,
    /// case-insensitively. Returns `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use newsgrid::model::HeightClass;
    /// assert_eq!(HeightClass::parse("featured"), Some(HeightClass::Featured));
    /// assert_eq!(HeightClass::parse("With_Media"), Some(HeightClass::WithMedia));
    /// assert_eq!(HeightClass::parse("breaking"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            LABEL_FEATURED => Some(HeightClass::Featured),
            LABEL_WITH_MEDIA => Some(HeightClass::WithMedia),
            LABEL_TEXT_ONLY => Some(HeightClass::TextOnly),
            _ => None,
        }
    }

    /// Canonical kebab-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            HeightClass::Featured => LABEL_FEATURED,
            HeightClass::WithMedia => LABEL_WITH_MEDIA,
            HeightClass::TextOnly => LABEL_TEXT_ONLY,
        }
    }
}

impl fmt::Display for HeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated pixel height per [`HeightClass`].
///
/// `text_only` doubles as the fallback for unrecognised labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightTable {
    /// Height of a [`HeightClass::Featured`] card.
    pub featured: u32,
    /// Height of a [`HeightClass::WithMedia`] card.
    pub with_media: u32,
    /// Height of a [`HeightClass::TextOnly`] card.
    pub text_only: u32,
}

impl Default for HeightTable {
    fn default() -> Self {
        Self {
            featured: DEFAULT_FEATURED_HEIGHT,
            with_media: DEFAULT_WITH_MEDIA_HEIGHT,
            text_only: DEFAULT_TEXT_ONLY_HEIGHT,
        }
    }
}

impl HeightTable {
    /// Estimated height for a class.
    pub fn height_of(&self, class: HeightClass) -> u32 {
        match class {
            HeightClass::Featured => self.featured,
            HeightClass::WithMedia => self.with_media,
            HeightClass::TextOnly => self.text_only,
        }
    }

    /// Returns a copy with one class overridden.
    #[must_use]
    pub fn with_height(mut self, class: HeightClass, height: u32) -> Self {
        match class {
            HeightClass::Featured => self.featured = height,
            HeightClass::WithMedia => self.with_media = height,
            HeightClass::TextOnly => self.text_only = height,
        }
        self
    }
}
