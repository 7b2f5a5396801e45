//! The raw-parse boundary
//!
//! The archive and markup parsers are external collaborators (the `zip`,
//! `epub`, and `scraper` crates). This module gives their loosely structured
//! output a concrete shape, `RawBook`/`RawChapter`, instead of letting
//! schema-less data flow into the normalizer, and translates their failure
//! signals into [`ParseError`](crate::ParseError). Exactly one of success or
//! failure is observable per call.
//!
//! The decoder performs no semantic validation beyond what it needs to build
//! the raw tree; chapter titles pass through unvalidated. The tree mirrors a
//! document's linear table of contents and is acyclic by construction.

mod epub;

pub use self::epub::read_epub;

/// Raw parse result for a whole archive, before normalization
#[derive(Debug, Clone, PartialEq)]
pub struct RawBook {
    /// Document title from the package metadata
    pub title: String,

    /// Creator metadata, absent when the package declares none
    pub author: Option<String>,

    /// Text of spine documents appearing before the first chapter
    pub preface_content: String,

    /// Ordered top-level raw chapter nodes, in document order
    pub chapters: Vec<RawChapter>,
}

/// One raw table-of-contents node: flat text plus nested children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawChapter {
    /// Label of the node (may be empty)
    pub title: String,

    /// Text content belonging to this node itself
    pub text: String,

    /// Ordered raw subchapter nodes
    pub subchapters: Vec<RawChapter>,
}
