use std::sync::Once;

use coverform_core::{
    update, validate_collection_name, ClassToken, Effect, Msg, PageState, Target, TextColor,
    ValidationOutcome, MISSING_NAME_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn submit_with_name(state: PageState, name: &str) -> (PageState, Vec<Effect>) {
    let (state, _) = update(state, Msg::NameChanged(name.to_string()));
    update(state, Msg::SubmitRequested)
}

fn failure_effects() -> Vec<Effect> {
    vec![
        Effect::AddClass {
            target: Target::NameContainer,
            class: ClassToken::Error,
        },
        Effect::SetTextColor {
            target: Target::ErrorMessage,
            color: TextColor::Alert,
        },
        Effect::SetText {
            target: Target::ErrorMessage,
            text: MISSING_NAME_MESSAGE.to_string(),
        },
    ]
}

#[test]
fn absent_name_blocks_submission() {
    init_logging();
    // The field was never edited, so the mirror is still absent.
    let (state, effects) = update(PageState::new(), Msg::SubmitRequested);

    assert_eq!(effects, failure_effects());
    assert_eq!(state.view().validation, Some(ValidationOutcome::MissingName));
}

#[test]
fn empty_name_blocks_submission_with_exact_message() {
    init_logging();
    let (state, effects) = submit_with_name(PageState::new(), "");

    assert_eq!(effects, failure_effects());
    assert!(!effects.contains(&Effect::SubmitForm));
    assert_eq!(MISSING_NAME_MESSAGE, "Please input a collection name!");
    assert_eq!(state.view().validation, Some(ValidationOutcome::MissingName));
}

#[test]
fn non_empty_name_passes_and_emits_submit() {
    init_logging();
    let (state, effects) = submit_with_name(PageState::new(), "My Movies");

    assert_eq!(
        effects,
        vec![
            Effect::RemoveClass {
                target: Target::NameContainer,
                class: ClassToken::Error,
            },
            Effect::SetText {
                target: Target::ErrorMessage,
                text: String::new(),
            },
            Effect::SubmitForm,
        ]
    );
    assert_eq!(state.view().validation, Some(ValidationOutcome::Valid));
    assert_eq!(state.view().collection_name.as_deref(), Some("My Movies"));
}

#[test]
fn repeated_submission_yields_identical_effects() {
    init_logging();
    let (state, first) = submit_with_name(PageState::new(), "My Movies");
    let (_state, second) = update(state, Msg::SubmitRequested);

    assert_eq!(first, second);
}

#[test]
fn failed_then_fixed_submission_recovers() {
    init_logging();
    let (state, effects) = submit_with_name(PageState::new(), "");
    assert!(!effects.contains(&Effect::SubmitForm));

    let (state, effects) = submit_with_name(state, "Soundtracks");
    assert!(effects.contains(&Effect::SubmitForm));
    assert_eq!(state.view().validation, Some(ValidationOutcome::Valid));
}

#[test]
fn gate_treats_absent_and_empty_alike() {
    init_logging();
    assert_eq!(
        validate_collection_name(None),
        ValidationOutcome::MissingName
    );
    assert_eq!(
        validate_collection_name(Some("")),
        ValidationOutcome::MissingName
    );
    assert_eq!(
        validate_collection_name(Some("x")),
        ValidationOutcome::Valid
    );
    // No trimming: whitespace counts as a value as far as the gate goes.
    assert_eq!(
        validate_collection_name(Some("  ")),
        ValidationOutcome::Valid
    );
}
