use crate::{source_effects, validate_collection_name, validation_effects, Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::SourceChanged(selection) => {
            state.set_selection(selection);
            source_effects(selection)
        }
        Msg::NameChanged(text) => {
            state.set_collection_name(text);
            Vec::new()
        }
        Msg::SubmitRequested => {
            // The gate reads the mirrored field value; the host reported it
            // via NameChanged, so an untouched field validates as absent.
            let outcome = validate_collection_name(state.collection_name());
            state.record_validation(outcome);
            let mut effects = validation_effects(outcome);
            if outcome.passed() {
                effects.push(Effect::SubmitForm);
            }
            effects
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
