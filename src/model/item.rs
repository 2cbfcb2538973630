//! Feed content items as seen by the layout.
//!
//! The layout only needs enough metadata to estimate a height. Everything else a
//! feed carries (summary, author, timestamps) is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A single card in the news feed.
///
/// All fields are optional; an item with nothing set is a text-only card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Caller-supplied stable key (slug, id) used when rendering.
    #[serde(default, alias = "id", alias = "slug")]
    pub key: Option<String>,

    /// Headline, carried through to the text preview.
    #[serde(default)]
    pub title: Option<String>,

    /// Height class label ("featured", "with-media", "text-only").
    #[serde(default, alias = "variant")]
    pub height_class: Option<String>,

    /// Precomputed height estimate in pixels; wins over the class.
    #[serde(default)]
    pub height: Option<u32>,

    /// Media asset URL; its presence implies a media card when no class is set.
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

impl ContentItem {
    /// An empty item: text-only, no key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the headline.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the height class label. Unknown labels are kept as given.
    #[must_use]
    pub fn with_class(mut self, label: impl Into<String>) -> Self {
        self.height_class = Some(label.into());
        self
    }

    /// Set an explicit height estimate.
    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the media URL.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// True when the item carries a non-empty media URL.
    pub fn has_media(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_and_aliases() {
        let json = r#"{"slug":"lagos-floods","title":"Floods","variant":"featured","imageUrl":"https://img/x.jpg","author":"ignored"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.key.as_deref(), Some("lagos-floods"));
        assert_eq!(item.height_class.as_deref(), Some("featured"));
        assert!(item.has_media());
        assert_eq!(item.height, None);
    }

    #[test]
    fn empty_object_is_a_bare_item() {
        let item: ContentItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item, ContentItem::new());
        assert!(!item.has_media());
    }

    #[test]
    fn blank_image_url_is_not_media() {
        assert!(!ContentItem::new().with_image("  ").has_media());
    }

    #[test]
    fn builder_sets_fields() {
        let item = ContentItem::new()
            .with_key("k")
            .with_title("t")
            .with_class("with-media")
            .with_height(42);

        assert_eq!(item.key.as_deref(), Some("k"));
        assert_eq!(item.title.as_deref(), Some("t"));
        assert_eq!(item.height_class.as_deref(), Some("with-media"));
        assert_eq!(item.height, Some(42));
    }
}
