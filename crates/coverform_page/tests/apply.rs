use coverform_core::{
    source_effects, validation_effects, Effect, SourceSelection, Target, ValidationOutcome,
};
use coverform_page::{apply, elements, new_collection_page, DisplayMode, Document, DocumentError};
use pretty_assertions::assert_eq;

fn local_selection() -> SourceSelection {
    SourceSelection {
        local: true,
        ..SourceSelection::default()
    }
}

#[test]
fn panels_start_hidden() {
    let doc = new_collection_page();
    assert_eq!(
        doc.element(elements::IF_LOCAL).unwrap().display,
        DisplayMode::Hidden
    );
    assert_eq!(
        doc.element(elements::IF_URL).unwrap().display,
        DisplayMode::Hidden
    );
}

#[test]
fn selecting_local_shows_only_the_local_panel() {
    let mut doc = new_collection_page();

    let applied = apply(&mut doc, &source_effects(local_selection())).unwrap();

    assert!(!applied.submit);
    assert_eq!(
        doc.element(elements::IF_LOCAL).unwrap().display,
        DisplayMode::Visible
    );
    assert_eq!(
        doc.element(elements::IF_URL).unwrap().display,
        DisplayMode::Hidden
    );
}

#[test]
fn switching_to_url_flips_the_panels() {
    let mut doc = new_collection_page();
    apply(&mut doc, &source_effects(local_selection())).unwrap();

    let url = SourceSelection {
        url: true,
        ..SourceSelection::default()
    };
    apply(&mut doc, &source_effects(url)).unwrap();

    assert_eq!(
        doc.element(elements::IF_LOCAL).unwrap().display,
        DisplayMode::Hidden
    );
    assert_eq!(
        doc.element(elements::IF_URL).unwrap().display,
        DisplayMode::Visible
    );
}

#[test]
fn no_cover_hides_both_panels() {
    let mut doc = new_collection_page();
    apply(&mut doc, &source_effects(local_selection())).unwrap();

    let none = SourceSelection {
        no_cover: true,
        ..SourceSelection::default()
    };
    apply(&mut doc, &source_effects(none)).unwrap();

    assert_eq!(
        doc.element(elements::IF_LOCAL).unwrap().display,
        DisplayMode::Hidden
    );
    assert_eq!(
        doc.element(elements::IF_URL).unwrap().display,
        DisplayMode::Hidden
    );
}

#[test]
fn failed_validation_marks_container_and_sets_message() {
    let mut doc = new_collection_page();

    let applied = apply(
        &mut doc,
        &validation_effects(ValidationOutcome::MissingName),
    )
    .unwrap();

    assert!(!applied.submit);
    let container = doc.element(elements::F_NAME).unwrap();
    assert!(container.has_class(elements::ERROR_CLASS));
    let message = doc.element(elements::ERROR_MESSAGE).unwrap();
    assert_eq!(message.text, "Please input a collection name!");
    assert_eq!(message.color.as_deref(), Some(elements::ALERT_COLOR));
}

#[test]
fn repeated_failures_never_duplicate_the_error_class() {
    let mut doc = new_collection_page();
    let effects = validation_effects(ValidationOutcome::MissingName);

    apply(&mut doc, &effects).unwrap();
    apply(&mut doc, &effects).unwrap();
    apply(&mut doc, &effects).unwrap();

    let container = doc.element(elements::F_NAME).unwrap();
    assert_eq!(container.classes.len(), 1);
    assert!(container.has_class(elements::ERROR_CLASS));
}

#[test]
fn successful_validation_clears_the_error_state() {
    let mut doc = new_collection_page();
    apply(
        &mut doc,
        &validation_effects(ValidationOutcome::MissingName),
    )
    .unwrap();

    let mut effects = validation_effects(ValidationOutcome::Valid);
    effects.push(Effect::SubmitForm);
    let applied = apply(&mut doc, &effects).unwrap();

    assert!(applied.submit);
    let container = doc.element(elements::F_NAME).unwrap();
    assert!(!container.has_class(elements::ERROR_CLASS));
    assert_eq!(doc.element(elements::ERROR_MESSAGE).unwrap().text, "");
}

#[test]
fn removing_an_absent_error_class_is_harmless() {
    let mut doc = new_collection_page();

    // Success path on a pristine page: nothing to remove, nothing to clear.
    apply(&mut doc, &validation_effects(ValidationOutcome::Valid)).unwrap();
    apply(&mut doc, &validation_effects(ValidationOutcome::Valid)).unwrap();

    let container = doc.element(elements::F_NAME).unwrap();
    assert!(container.classes.is_empty());
}

#[test]
fn applying_to_a_page_missing_the_contract_fails() {
    // A document without the required elements is an integration error.
    let mut doc = Document::new();

    let err = apply(&mut doc, &[Effect::Show(Target::LocalPanel)]).unwrap_err();
    assert!(matches!(err, DocumentError::UnknownElement(id) if id == elements::IF_LOCAL));
}
