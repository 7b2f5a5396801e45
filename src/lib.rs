//! chapterize
//!
//! Parse EPUB archives into a strongly-typed, recursively nested document
//! model. The archive container and package markup are handled by external
//! crates behind the [`decoder`] boundary; the [`normalize`] pass reshapes
//! the decoder's raw tree into the public [`Book`]/[`Chapter`] model and is
//! total (it cannot fail).
//!
//! ```no_run
//! let bytes = std::fs::read("book.epub").unwrap();
//! match chapterize::parse_book(&bytes) {
//!     Ok(book) => println!("{} chapters", book.chapters.len()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod decoder;
pub mod error;
pub mod normalize;
pub mod types;

pub use decoder::{RawBook, RawChapter};
pub use error::{ParseError, Result};
pub use types::{Book, Chapter, Component};

/// Parse a complete EPUB archive into a [`Book`].
///
/// Reads the decoder's raw tree once and normalizes it; on a decoder failure
/// the error is returned unchanged and normalization never runs. Calls on
/// independent buffers share no state and may run concurrently.
pub fn parse_book(bytes: &[u8]) -> Result<Book> {
    let raw = decoder::read_epub(bytes)?;
    Ok(normalize::normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Test Book");
        assert_eq!(book.title, "Test Book");
        assert_eq!(book.nesting_depth(), 0);
    }
}
