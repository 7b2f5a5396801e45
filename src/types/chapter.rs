//! Chapter type representing a node in the book's table-of-contents tree

use super::Component;
use serde::{Deserialize, Serialize};

/// A single chapter of a book
///
/// A chapter owns an ordered list of components, so prose and subchapters
/// can interleave in document order. The flatter "text plus subchapters"
/// shape is the degenerate case of one leading text component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Chapter title (empty string when the source has no heading)
    pub title: String,

    /// The content components, in document order
    pub components: Vec<Component>,
}

impl Chapter {
    /// Create a new chapter with a title and no content
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            components: Vec::new(),
        }
    }

    /// Set the content components
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Append a single component
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// The chapter's own prose: all text components joined by newlines,
    /// excluding nested chapters
    pub fn text(&self) -> String {
        let segments: Vec<&str> = self
            .components
            .iter()
            .filter_map(|component| match component {
                Component::Text(text) => Some(text.as_str()),
                Component::Subchapter(_) => None,
            })
            .collect();
        segments.join("\n")
    }

    /// Iterator over directly nested chapters, in document order
    pub fn subchapters(&self) -> impl Iterator<Item = &Chapter> {
        self.components.iter().filter_map(|component| match component {
            Component::Subchapter(chapter) => Some(chapter),
            Component::Text(_) => None,
        })
    }
}
