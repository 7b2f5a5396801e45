//! Normalization of the raw parse tree into the public book model
//!
//! The raw tree is well-formed and acyclic by contract with the decoder, so
//! normalization is total: pure data reshaping with no error path, no I/O,
//! and no external calls. All failure handling lives at the decoder boundary.

use tracing::debug;

use crate::decoder::{RawBook, RawChapter};
use crate::types::{Book, Chapter, Component};

/// Convert a raw parse tree into the canonical [`Book`] value.
///
/// Titles, author, and preface are copied verbatim (an absent author stays
/// absent). Each raw chapter becomes a chapter whose components are one
/// leading text component, if the raw text is non-empty, followed by one
/// subchapter component per raw child, in document order. Deterministic: the
/// same raw tree always yields a structurally equal book.
pub fn normalize(raw: RawBook) -> Book {
    debug!(chapters = raw.chapters.len(), "normalizing raw parse tree");
    Book {
        title: raw.title,
        author: raw.author,
        preface_content: raw.preface_content,
        chapters: raw.chapters.into_iter().map(build_chapter).collect(),
    }
}

/// One in-progress chapter during the iterative traversal
struct Frame {
    title: String,
    pending: std::vec::IntoIter<RawChapter>,
    components: Vec<Component>,
}

impl Frame {
    fn open(raw: RawChapter) -> Self {
        let mut components = Vec::new();
        if !raw.text.is_empty() {
            components.push(Component::Text(raw.text));
        }
        Self {
            title: raw.title,
            pending: raw.subchapters.into_iter(),
            components,
        }
    }

    fn close(self) -> Chapter {
        Chapter {
            title: self.title,
            components: self.components,
        }
    }
}

/// Build one chapter subtree with an explicit frame stack.
///
/// Raw trees mirror a document's table of contents and can be hundreds of
/// levels deep, so the traversal must not grow the call stack with input
/// depth.
fn build_chapter(raw: RawChapter) -> Chapter {
    let mut stack = vec![Frame::open(raw)];
    loop {
        match stack.last_mut().and_then(|frame| frame.pending.next()) {
            Some(child) => stack.push(Frame::open(child)),
            None => match stack.pop() {
                Some(done) => {
                    let chapter = done.close();
                    match stack.last_mut() {
                        Some(parent) => parent.components.push(Component::Subchapter(chapter)),
                        None => return chapter,
                    }
                }
                None => unreachable!("frame stack only drains through the root return"),
            },
        }
    }
}
