use coverform_core::{ClassToken, Effect, Target, TextColor};
use page_logging::page_debug;

use crate::document::{DisplayMode, Document, DocumentError};
use crate::elements;

/// Outcome of applying a batch of effects to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Applied {
    /// True when the batch carried the submit instruction; presentation
    /// effects never set this.
    pub submit: bool,
}

/// Applies a batch of core effects to the document in order. Abstract
/// targets are mapped to the concrete element ids of the markup contract;
/// an unregistered id surfaces as [`DocumentError`].
pub fn apply(doc: &mut Document, effects: &[Effect]) -> Result<Applied, DocumentError> {
    let mut applied = Applied::default();
    for effect in effects {
        page_debug!("apply event_seq={} {:?}", page_logging::get_event_seq(), effect);
        match effect {
            Effect::Show(target) => {
                doc.set_display(target_id(*target), DisplayMode::Visible)?;
            }
            Effect::Hide(target) => {
                doc.set_display(target_id(*target), DisplayMode::Hidden)?;
            }
            Effect::AddClass { target, class } => {
                doc.add_class(target_id(*target), class_name(*class))?;
            }
            Effect::RemoveClass { target, class } => {
                doc.remove_class(target_id(*target), class_name(*class))?;
            }
            Effect::SetText { target, text } => {
                doc.set_text(target_id(*target), text)?;
            }
            Effect::SetTextColor { target, color } => {
                doc.set_text_color(target_id(*target), color_value(*color))?;
            }
            Effect::SubmitForm => {
                applied.submit = true;
            }
        }
    }
    Ok(applied)
}

fn target_id(target: Target) -> &'static str {
    match target {
        Target::LocalPanel => elements::IF_LOCAL,
        Target::UrlPanel => elements::IF_URL,
        Target::NameContainer => elements::F_NAME,
        Target::ErrorMessage => elements::ERROR_MESSAGE,
    }
}

fn class_name(class: ClassToken) -> &'static str {
    match class {
        ClassToken::Error => elements::ERROR_CLASS,
    }
}

fn color_value(color: TextColor) -> Option<&'static str> {
    match color {
        TextColor::Alert => Some(elements::ALERT_COLOR),
        TextColor::Default => None,
    }
}
