use coverform_core::{CoverSource, PageViewModel, ValidationOutcome};
use coverform_page::{elements, DisplayMode, Document, DocumentError};

/// Renders the page as text: the radio group, both panels, the name field
/// with its container classes, the message element, and a status line
/// mirroring the view model.
pub fn page(doc: &Document, view: &PageViewModel) -> Result<String, DocumentError> {
    let mut out = String::new();
    out.push_str("--- New Collection ---\n");

    out.push_str(&format!(
        "Cover source: [{}] local  [{}] url  [{}] none\n",
        mark(doc.is_checked(elements::LOCAL_SOURCE)?),
        mark(doc.is_checked(elements::URL_SOURCE)?),
        mark(doc.is_checked(elements::NO_COVER)?),
    ));

    out.push_str(&format!(
        "Local file panel: {}\n",
        display_label(doc.element(elements::IF_LOCAL)?.display)
    ));
    out.push_str(&format!(
        "URL panel: {}\n",
        display_label(doc.element(elements::IF_URL)?.display)
    ));

    let container = doc.element(elements::F_NAME)?;
    let classes: Vec<&str> = container.classes.iter().map(String::as_str).collect();
    let name = doc
        .field_value(elements::FRM_CONTACT, elements::COLLECTION)?
        .unwrap_or("<unset>");
    out.push_str(&format!(
        "Name field [class: {}]: {}\n",
        if classes.is_empty() {
            "-".to_string()
        } else {
            classes.join(" ")
        },
        name
    ));

    let message = doc.element(elements::ERROR_MESSAGE)?;
    if !message.text.is_empty() {
        match &message.color {
            Some(color) => out.push_str(&format!("Message ({}): {}\n", color, message.text)),
            None => out.push_str(&format!("Message: {}\n", message.text)),
        }
    }

    out.push_str(&format!(
        "Status: source={} | submit: {}",
        source_label(view.source),
        validation_label(view.validation)
    ));

    Ok(out)
}

fn mark(checked: bool) -> char {
    if checked {
        'x'
    } else {
        ' '
    }
}

fn display_label(display: DisplayMode) -> &'static str {
    match display {
        DisplayMode::Visible => "visible",
        DisplayMode::Hidden => "hidden",
    }
}

fn source_label(source: Option<CoverSource>) -> &'static str {
    match source {
        Some(CoverSource::Local) => "local file",
        Some(CoverSource::Url) => "url",
        Some(CoverSource::NoCover) => "no cover",
        None => "not selected",
    }
}

fn validation_label(validation: Option<ValidationOutcome>) -> &'static str {
    match validation {
        Some(ValidationOutcome::Valid) => "allowed",
        Some(ValidationOutcome::MissingName) => "blocked",
        None => "not attempted",
    }
}
