//! The main Book type - the root of the parsed document model

use super::{Chapter, Component};
use serde::{Deserialize, Serialize};

/// The complete parsed book
///
/// Produced by a single normalization pass and immutable in practice: there
/// is no mutation API beyond plain field access, and every value owns its
/// whole subtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Book title, copied verbatim from the package metadata
    pub title: String,

    /// Primary author; `None` when the archive carries no creator metadata
    pub author: Option<String>,

    /// Front-matter text appearing before the first chapter (may be empty)
    pub preface_content: String,

    /// Ordered list of top-level chapters, in document order
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Create a book with no author, preface, or chapters
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            preface_content: String::new(),
            chapters: Vec::new(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Add a top-level chapter
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Maximum depth of chapter nesting reachable from this book
    ///
    /// 0 if `chapters` is empty, 1 if no chapter contains subchapters,
    /// otherwise `1 + max(child depths)`. Derived on every call so it always
    /// reflects the current chapter tree, and computed with an explicit
    /// work list so arbitrarily deep trees cannot overflow the call stack.
    pub fn nesting_depth(&self) -> usize {
        let mut max_depth = 0;
        let mut work: Vec<(&Chapter, usize)> =
            self.chapters.iter().map(|chapter| (chapter, 1)).collect();
        while let Some((chapter, depth)) = work.pop() {
            max_depth = max_depth.max(depth);
            for component in &chapter.components {
                if let Component::Subchapter(sub) = component {
                    work.push((sub, depth + 1));
                }
            }
        }
        max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let mut book = Book::new("Test Book").with_author("Nobody");
        assert_eq!(book.title, "Test Book");
        assert_eq!(book.author.as_deref(), Some("Nobody"));
        assert!(book.chapters.is_empty());

        let mut chapter = Chapter::new("Chapter 1");
        chapter.add_component(Component::text("Hello, world!"));
        book.add_chapter(chapter);

        assert_eq!(book.chapters.len(), 1);
        assert_eq!(book.chapters[0].title, "Chapter 1");
    }

    #[test]
    fn test_book_serialization() {
        let mut book = Book::new("Serialization Test").with_author("Nobody");
        book.add_chapter(Chapter::new("One").with_components(vec![
            Component::text("text"),
            Component::subchapter(Chapter::new("One point one")),
        ]));

        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }

    #[test]
    fn nesting_depth_of_empty_book_is_zero() {
        assert_eq!(Book::new("Empty").nesting_depth(), 0);
    }

    #[test]
    fn nesting_depth_of_flat_book_is_one() {
        let mut book = Book::new("Flat");
        book.add_chapter(Chapter::new("A"));
        book.add_chapter(Chapter::new("B"));
        assert_eq!(book.nesting_depth(), 1);
    }

    #[test]
    fn nesting_depth_follows_deepest_branch() {
        let mut book = Book::new("Nested");
        book.add_chapter(Chapter::new("A"));
        book.add_chapter(Chapter::new("B").with_components(vec![Component::subchapter(
            Chapter::new("B.1").with_components(vec![Component::subchapter(Chapter::new(
                "B.1.1",
            ))]),
        )]));
        assert_eq!(book.nesting_depth(), 3);
    }
}
