//! EPUB decoder built on the external `epub`, `zip`, and `scraper` crates

use std::io::Cursor;
use std::path::Path;

use epub::doc::{EpubDoc, NavPoint};
use scraper::{Html, Selector};
use tracing::debug;
use zip::ZipArchive;

use super::{RawBook, RawChapter};
use crate::error::{ParseError, Result};

/// Read a complete EPUB archive into the raw parse tree.
///
/// Attempts parsing exactly once: a malformed archive is not self-correcting,
/// so there are no retries. The only side effect is reading the input slice.
pub fn read_epub(bytes: &[u8]) -> Result<RawBook> {
    // Probe the container first so a corrupt or non-ZIP buffer is reported
    // as an archive failure rather than a package one.
    ZipArchive::new(Cursor::new(bytes))?;

    let mut epub = EpubDoc::from_reader(Cursor::new(bytes.to_vec()))
        .map_err(|e| ParseError::InvalidPackage(e.to_string()))?;

    let title = epub
        .mdata("title")
        .map(|item| item.value.clone())
        .ok_or(ParseError::MissingMetadata("title"))?;
    let author = epub.mdata("creator").map(|item| item.value.clone());

    let (mut slots, roots) = flatten_toc(&epub.toc);
    let spine = epub.spine.clone();
    debug!(
        toc_entries = slots.len(),
        spine_items = spine.len(),
        "read epub package"
    );

    // Walk the spine in reading order and attach each document's text to the
    // table-of-contents node that references it. Documents before the first
    // referenced one form the preface; unreferenced documents after that are
    // continuation pages of the most recently matched node.
    let mut preface: Vec<String> = Vec::new();
    let mut last_matched: Option<usize> = None;
    for item in &spine {
        let Some((content, _mime)) = epub.get_resource_str(&item.idref) else {
            continue;
        };
        let text = html_to_text(&content);
        if text.is_empty() {
            continue;
        }

        let matches: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot_matches(&slot.href, &item.idref))
            .map(|(idx, _)| idx)
            .collect();
        match (matches.first(), matches.last()) {
            (Some(&first), Some(&last)) => {
                slots[first].text.push(text);
                last_matched = Some(last);
            }
            _ => match last_matched {
                Some(idx) => slots[idx].text.push(text),
                None => preface.push(text),
            },
        }
    }

    Ok(RawBook {
        title,
        author,
        preface_content: preface.join("\n"),
        chapters: assemble_chapters(slots, roots),
    })
}

/// One table-of-contents node, flattened into an arena so spine text can be
/// attached without re-borrowing a nested tree.
#[derive(Default)]
struct TocSlot {
    title: String,
    href: String,
    children: Vec<usize>,
    text: Vec<String>,
}

/// Flatten the navigation tree into pre-order arena slots plus root indices.
fn flatten_toc(toc: &[NavPoint]) -> (Vec<TocSlot>, Vec<usize>) {
    let mut slots: Vec<TocSlot> = Vec::new();
    let mut roots: Vec<usize> = Vec::new();
    let mut work: Vec<(&NavPoint, Option<usize>)> =
        toc.iter().rev().map(|nav| (nav, None)).collect();
    while let Some((nav, parent)) = work.pop() {
        let idx = slots.len();
        slots.push(TocSlot {
            title: nav.label.clone(),
            href: strip_fragment(&nav.content.to_string_lossy()),
            children: Vec::new(),
            text: Vec::new(),
        });
        match parent {
            Some(parent) => slots[parent].children.push(idx),
            None => roots.push(idx),
        }
        for child in nav.children.iter().rev() {
            work.push((child, Some(idx)));
        }
    }
    (slots, roots)
}

/// Rebuild the nested raw chapter tree from the arena.
///
/// Slots are in pre-order, so every child index is greater than its parent's
/// and a single reverse pass builds each subtree before it is needed.
fn assemble_chapters(mut slots: Vec<TocSlot>, roots: Vec<usize>) -> Vec<RawChapter> {
    let mut built: Vec<Option<RawChapter>> = (0..slots.len()).map(|_| None).collect();
    for idx in (0..slots.len()).rev() {
        let slot = std::mem::take(&mut slots[idx]);
        let subchapters = slot
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[idx] = Some(RawChapter {
            title: slot.title,
            text: slot.text.join("\n"),
            subchapters,
        });
    }
    roots
        .into_iter()
        .filter_map(|root| built[root].take())
        .collect()
}

/// Does a table-of-contents href refer to the spine item with this id?
///
/// Matches by exact filename stem first, falling back to an href suffix
/// match for packages whose ids embed a path.
fn slot_matches(href: &str, idref: &str) -> bool {
    Path::new(href)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem == idref)
        .unwrap_or(false)
        || href.ends_with(idref)
}

/// Drop the `#anchor` suffix a navigation src may carry.
fn strip_fragment(src: &str) -> String {
    match src.split_once('#') {
        Some((path, _fragment)) => path.to_string(),
        None => src.to_string(),
    }
}

/// Extract readable text from an XHTML document: all text segments under
/// `<body>`, trimmed and joined by single spaces.
fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse("body").unwrap();
    let segments: Vec<&str> = match document.select(&body_selector).next() {
        Some(body) => body
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
        None => document
            .root_element()
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
    };
    segments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_to_text_joins_trimmed_segments() {
        let html = r#"
            <html><body>
                <h1>Chapter 1</h1>
                <p>First <em>paragraph</em>.</p>
                <p>Second paragraph.</p>
            </body></html>
        "#;
        assert_eq!(
            html_to_text(html),
            "Chapter 1 First paragraph . Second paragraph."
        );
    }

    #[test]
    fn html_to_text_of_empty_body_is_empty() {
        assert_eq!(html_to_text("<html><body></body></html>"), "");
    }

    #[test]
    fn slot_matching_uses_file_stem() {
        assert!(slot_matches("OEBPS/chapter_1.xhtml", "chapter_1"));
        assert!(!slot_matches("OEBPS/chapter_1_1.xhtml", "chapter_1"));
        assert!(slot_matches("OEBPS/Text/ch2.xhtml", "Text/ch2.xhtml"));
    }

    #[test]
    fn fragments_are_stripped_from_srcs() {
        assert_eq!(strip_fragment("OEBPS/ch1.xhtml#sec2"), "OEBPS/ch1.xhtml");
        assert_eq!(strip_fragment("OEBPS/ch1.xhtml"), "OEBPS/ch1.xhtml");
    }

    #[test]
    fn assemble_rebuilds_nested_order() {
        // Pre-order arena for: A(A.1, A.2), B
        let slots = vec![
            TocSlot {
                title: "A".into(),
                href: "a.xhtml".into(),
                children: vec![1, 2],
                text: vec!["a text".into()],
            },
            TocSlot {
                title: "A.1".into(),
                href: "a1.xhtml".into(),
                children: Vec::new(),
                text: Vec::new(),
            },
            TocSlot {
                title: "A.2".into(),
                href: "a2.xhtml".into(),
                children: Vec::new(),
                text: vec!["a2 first".into(), "a2 second".into()],
            },
            TocSlot {
                title: "B".into(),
                href: "b.xhtml".into(),
                children: Vec::new(),
                text: Vec::new(),
            },
        ];
        let chapters = assemble_chapters(slots, vec![0, 3]);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "A");
        assert_eq!(chapters[0].text, "a text");
        assert_eq!(chapters[0].subchapters[0].title, "A.1");
        assert_eq!(chapters[0].subchapters[1].title, "A.2");
        assert_eq!(chapters[0].subchapters[1].text, "a2 first\na2 second");
        assert_eq!(chapters[1].title, "B");
    }
}
