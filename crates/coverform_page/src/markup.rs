//! Builds the document structure the new-collection markup provides, and
//! the host-side readers the event handlers use.

use coverform_core::SourceSelection;

use crate::document::{DisplayMode, Document, DocumentError};
use crate::elements::{
    COLLECTION, ERROR_MESSAGE, FRM_CONTACT, F_NAME, IF_LOCAL, IF_URL, LOCAL_SOURCE, NO_COVER,
    URL_SOURCE,
};

/// The host page as the new-collection markup defines it: the cover-source
/// radio group, both chooser panels (hidden until a selection is made), and
/// the contact form with its name field, container and message element.
pub fn new_collection_page() -> Document {
    let mut doc = Document::new();
    doc.register_radio(LOCAL_SOURCE);
    doc.register_radio(URL_SOURCE);
    doc.register_radio(NO_COVER);
    doc.register_element(IF_LOCAL, DisplayMode::Hidden);
    doc.register_element(IF_URL, DisplayMode::Hidden);
    doc.register_element(F_NAME, DisplayMode::Visible);
    doc.register_element(ERROR_MESSAGE, DisplayMode::Visible);
    doc.register_field(FRM_CONTACT, COLLECTION);
    doc
}

/// Snapshot of the cover-source radio group, as the change handler reads it.
pub fn read_selection(doc: &Document) -> Result<SourceSelection, DocumentError> {
    Ok(SourceSelection {
        local: doc.is_checked(LOCAL_SOURCE)?,
        url: doc.is_checked(URL_SOURCE)?,
        no_cover: doc.is_checked(NO_COVER)?,
    })
}

/// Current collection-name value; `None` when the field has never been set.
pub fn collection_value(doc: &Document) -> Result<Option<String>, DocumentError> {
    Ok(doc
        .field_value(FRM_CONTACT, COLLECTION)?
        .map(ToOwned::to_owned))
}
