use crate::{CoverSource, ValidationOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    /// Resolved cover source, or `None` before any selection.
    pub source: Option<CoverSource>,
    /// Mirrored collection-name field value; `None` until first edit.
    pub collection_name: Option<String>,
    /// Outcome of the most recent submit attempt.
    pub validation: Option<ValidationOutcome>,
    pub dirty: bool,
}
