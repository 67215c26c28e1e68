//! Inline style tags and style sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Name of a style or block type outside the built-in set.
///
/// Only produced by parsing, so it never spells a built-in tag and a tag
/// always maps to exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomTag(String);

impl CustomTag {
    pub(crate) fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Character-range formatting attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    Custom(CustomTag),
}

impl InlineStyle {
    /// Return the wire tag for this style (`BOLD`, `ITALIC`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bold => "BOLD",
            Self::Italic => "ITALIC",
            Self::Underline => "UNDERLINE",
            Self::Code => "CODE",
            Self::Strikethrough => "STRIKETHROUGH",
            Self::Custom(tag) => tag.as_str(),
        }
    }

    /// Return `true` for a style with an empty name; such styles are never
    /// stored in a [`StyleSet`].
    pub fn is_blank(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Parse a wire tag; unknown tags become [`InlineStyle::Custom`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "BOLD" => Self::Bold,
            "ITALIC" => Self::Italic,
            "UNDERLINE" => Self::Underline,
            "CODE" => Self::Code,
            "STRIKETHROUGH" => Self::Strikethrough,
            other => Self::Custom(CustomTag::new(other)),
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for InlineStyle {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<&str> for InlineStyle {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<InlineStyle> for String {
    fn from(value: InlineStyle) -> Self {
        match value {
            InlineStyle::Custom(tag) => tag.0,
            other => other.as_str().to_string(),
        }
    }
}

/// Ordered, immutable-by-convention set of inline styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleSet(BTreeSet<InlineStyle>);

impl StyleSet {
    /// Empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, style: &InlineStyle) -> bool {
        self.0.contains(style)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InlineStyle> {
        self.0.iter()
    }

    /// Copy of this set including `style`; blank styles are not added.
    pub fn with(&self, style: InlineStyle) -> Self {
        let mut next = self.0.clone();
        if !style.is_blank() {
            next.insert(style);
        }
        Self(next)
    }

    /// Copy of this set excluding `style`.
    pub fn without(&self, style: &InlineStyle) -> Self {
        let mut next = self.0.clone();
        next.remove(style);
        Self(next)
    }

    /// Copy of this set with membership of `style` flipped.
    pub fn toggled(&self, style: &InlineStyle) -> Self {
        if self.has(style) {
            self.without(style)
        } else {
            self.with(style.clone())
        }
    }
}

impl FromIterator<InlineStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|style| !style.is_blank()).collect())
    }
}
