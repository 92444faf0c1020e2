//! Coverform page: host-page document model and effect application.
mod apply;
mod document;
pub mod elements;
mod markup;

pub use apply::{apply, Applied};
pub use document::{DisplayMode, Document, DocumentError, Element};
pub use markup::{collection_value, new_collection_page, read_selection};
