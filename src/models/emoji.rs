use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One entry of a remote `/api/v1/custom_emojis` response, as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub shortcode: String,
    // Empty and null categories both mean "uncategorized"
    #[serde(default, deserialize_with = "non_empty_category")]
    pub category: Option<String>,
    pub url: String,
    pub static_url: String,
    #[serde(default)]
    pub visible_in_picker: Option<bool>,
}

impl EmojiRecord {
    /// Absent visibility counts as visible
    pub fn is_visible(&self) -> bool {
        self.visible_in_picker.unwrap_or(true)
    }

    pub fn image_url(&self, show_animated: bool) -> &str {
        if show_animated {
            &self.url
        } else {
            &self.static_url
        }
    }
}

fn non_empty_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let category = Option::<String>::deserialize(deserializer)?;
    Ok(category.filter(|c| !c.is_empty()))
}

/// What the renderer sees for a single emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emoji {
    shortcode: String,
    url: String,
}

impl Emoji {
    pub fn new(shortcode: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            url: url.into(),
        }
    }

    pub fn from_record(record: &EmojiRecord, show_animated: bool) -> Self {
        Self::new(record.shortcode.clone(), record.image_url(show_animated))
    }

    pub fn shortcode(&self) -> &str {
        &self.shortcode
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}:", self.shortcode)
    }
}
