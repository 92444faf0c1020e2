use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("no element with id {0:?}")]
    UnknownElement(String),
    #[error("no radio control with id {0:?}")]
    UnknownRadio(String),
    #[error("no form named {0:?}")]
    UnknownForm(String),
    #[error("no field named {1:?} in form {0:?}")]
    UnknownField(String, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayMode {
    Visible,
    Hidden,
}

/// A displayable page element: visibility, class set, text and text color.
/// Classes are a set of tokens, so toggling one on or off repeatedly can
/// never accumulate duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub display: DisplayMode,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub color: Option<String>,
}

impl Element {
    fn new(display: DisplayMode) -> Self {
        Self {
            display,
            classes: BTreeSet::new(),
            text: String::new(),
            color: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// In-memory stand-in for the host page. The markup layer registers every
/// element, radio and field up front; referencing an unregistered identifier
/// afterwards is an integration error surfaced as [`DocumentError`].
///
/// All registered radios form a single mutually exclusive group, matching
/// the one radio group the page carries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    radios: BTreeMap<String, bool>,
    forms: BTreeMap<String, BTreeMap<String, Option<String>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_element(&mut self, id: &str, display: DisplayMode) {
        self.elements.insert(id.to_string(), Element::new(display));
    }

    pub fn register_radio(&mut self, id: &str) {
        self.radios.insert(id.to_string(), false);
    }

    /// Registers `field` under `form`, creating the form on first use.
    /// The field starts out absent, distinct from holding an empty string.
    pub fn register_field(&mut self, form: &str, field: &str) {
        self.forms
            .entry(form.to_string())
            .or_default()
            .insert(field.to_string(), None);
    }

    pub fn element(&self, id: &str) -> Result<&Element, DocumentError> {
        self.elements
            .get(id)
            .ok_or_else(|| DocumentError::UnknownElement(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, DocumentError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DocumentError::UnknownElement(id.to_string()))
    }

    pub fn set_display(&mut self, id: &str, display: DisplayMode) -> Result<(), DocumentError> {
        self.element_mut(id)?.display = display;
        Ok(())
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> Result<(), DocumentError> {
        self.element_mut(id)?.classes.insert(class.to_string());
        Ok(())
    }

    /// Removing a class the element does not carry is fine; the set is
    /// simply left unchanged.
    pub fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DocumentError> {
        self.element_mut(id)?.classes.remove(class);
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> Result<(), DocumentError> {
        self.element_mut(id)?.text = text.to_string();
        Ok(())
    }

    /// `None` resets the element to its inherited color.
    pub fn set_text_color(
        &mut self,
        id: &str,
        color: Option<&str>,
    ) -> Result<(), DocumentError> {
        self.element_mut(id)?.color = color.map(ToOwned::to_owned);
        Ok(())
    }

    /// Checks `id` and unchecks every other radio in the group.
    pub fn check_radio(&mut self, id: &str) -> Result<(), DocumentError> {
        if !self.radios.contains_key(id) {
            return Err(DocumentError::UnknownRadio(id.to_string()));
        }
        for (radio_id, checked) in &mut self.radios {
            *checked = radio_id == id;
        }
        Ok(())
    }

    pub fn is_checked(&self, id: &str) -> Result<bool, DocumentError> {
        self.radios
            .get(id)
            .copied()
            .ok_or_else(|| DocumentError::UnknownRadio(id.to_string()))
    }

    pub fn set_field(&mut self, form: &str, field: &str, value: &str) -> Result<(), DocumentError> {
        let fields = self
            .forms
            .get_mut(form)
            .ok_or_else(|| DocumentError::UnknownForm(form.to_string()))?;
        let slot = fields
            .get_mut(field)
            .ok_or_else(|| DocumentError::UnknownField(form.to_string(), field.to_string()))?;
        *slot = Some(value.to_string());
        Ok(())
    }

    /// `Ok(None)` when the field is registered but was never set.
    pub fn field_value(&self, form: &str, field: &str) -> Result<Option<&str>, DocumentError> {
        let fields = self
            .forms
            .get(form)
            .ok_or_else(|| DocumentError::UnknownForm(form.to_string()))?;
        let slot = fields
            .get(field)
            .ok_or_else(|| DocumentError::UnknownField(form.to_string(), field.to_string()))?;
        Ok(slot.as_deref())
    }
}
