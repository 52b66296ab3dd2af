use serde::Serialize;
use std::fmt;

use super::Emoji;

/// Group key for an emoji. `Uncategorized` never compares equal to a named
/// category, even one literally called "Uncategorized".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CategoryKey {
    Uncategorized,
    Named(String),
}

impl CategoryKey {
    pub fn from_category(category: Option<&str>) -> Self {
        match category {
            Some(name) if !name.is_empty() => CategoryKey::Named(name.to_string()),
            _ => CategoryKey::Uncategorized,
        }
    }

    /// Anchor id for the category's section on the listing page
    pub fn slug(&self) -> String {
        match self {
            CategoryKey::Uncategorized => "uncategorized".to_string(),
            CategoryKey::Named(name) => format!("category-{}", name.to_lowercase().replace(' ', "-")),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKey::Uncategorized => write!(f, "Uncategorized"),
            CategoryKey::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub key: CategoryKey,
    pub emojis: Vec<Emoji>,
}

/// Ordered mapping from category to emoji. Categories iterate in the order
/// they were first pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryGroups {
    groups: Vec<CategoryGroup>,
}

impl CategoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: CategoryKey, emoji: Emoji) {
        // Input is usually sorted by category, so the last group is the hot path
        if let Some(last) = self.groups.last_mut() {
            if last.key == key {
                last.emojis.push(emoji);
                return;
            }
        }

        match self.groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.emojis.push(emoji),
            None => self.groups.push(CategoryGroup {
                key,
                emojis: vec![emoji],
            }),
        }
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&[Emoji]> {
        self.groups
            .iter()
            .find(|group| &group.key == key)
            .map(|group| group.emojis.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.groups.iter().map(|group| &group.key)
    }

    /// All emoji in group order, then in-group order
    pub fn flatten(&self) -> impl Iterator<Item = &Emoji> {
        self.groups.iter().flat_map(|group| group.emojis.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn emoji_count(&self) -> usize {
        self.groups.iter().map(|group| group.emojis.len()).sum()
    }
}
