//! Chapter content components

use super::Chapter;
use serde::{Deserialize, Serialize};

/// One piece of chapter content
///
/// Components are exclusively owned by their chapter; the tree has no
/// sharing and no cycles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Component {
    /// A run of prose belonging to the chapter itself
    Text(String),

    /// A nested subchapter
    Subchapter(Chapter),
}

impl Component {
    /// Create a text component
    pub fn text(s: impl Into<String>) -> Self {
        Component::Text(s.into())
    }

    /// Create a nested-chapter component
    pub fn subchapter(chapter: Chapter) -> Self {
        Component::Subchapter(chapter)
    }
}
