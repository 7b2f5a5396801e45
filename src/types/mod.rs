//! Core types for the parsed book model

mod book;
mod chapter;
mod component;

pub use book::Book;
pub use chapter::Chapter;
pub use component::Component;
