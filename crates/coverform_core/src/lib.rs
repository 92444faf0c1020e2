//! Coverform core: pure state machine for the new-collection page.
mod effect;
mod msg;
mod select;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::{ClassToken, Effect, Target, TextColor};
pub use msg::Msg;
pub use select::{source_effects, CoverSource, SourceSelection};
pub use state::PageState;
pub use update::update;
pub use validate::{
    validate_collection_name, validation_effects, ValidationOutcome, MISSING_NAME_MESSAGE,
};
pub use view_model::PageViewModel;
