use coverform_core::{update, Msg, PageState};

#[test]
fn tick_and_noop_change_nothing() {
    let state = PageState::new();

    let (next, effects) = update(state.clone(), Msg::Tick);
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (next, effects) = update(state.clone(), Msg::NoOp);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
