use crate::view_model::PageViewModel;
use crate::{SourceSelection, ValidationOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    selection: SourceSelection,
    collection_name: Option<String>,
    last_validation: Option<ValidationOutcome>,
    dirty: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            source: self.selection.resolved(),
            collection_name: self.collection_name.clone(),
            validation: self.last_validation,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. The shell calls this to decide
    /// whether a render is due.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_selection(&mut self, selection: SourceSelection) {
        if self.selection != selection {
            self.selection = selection;
            self.dirty = true;
        }
    }

    pub(crate) fn set_collection_name(&mut self, name: String) {
        if self.collection_name.as_deref() != Some(name.as_str()) {
            self.collection_name = Some(name);
            self.dirty = true;
        }
    }

    /// `None` until the field has been edited at least once.
    pub(crate) fn collection_name(&self) -> Option<&str> {
        self.collection_name.as_deref()
    }

    pub(crate) fn record_validation(&mut self, outcome: ValidationOutcome) {
        self.last_validation = Some(outcome);
        self.dirty = true;
    }
}
