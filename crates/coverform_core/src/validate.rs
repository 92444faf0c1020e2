use crate::{ClassToken, Effect, Target, TextColor};

/// Shown on the message element when the name is missing.
pub const MISSING_NAME_MESSAGE: &str = "Please input a collection name!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    MissingName,
}

impl ValidationOutcome {
    pub fn passed(self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Gate for the collection-name field. Absent and empty both fail; any
/// other string passes. No trimming is applied.
pub fn validate_collection_name(value: Option<&str>) -> ValidationOutcome {
    match value {
        Some(name) if !name.is_empty() => ValidationOutcome::Valid,
        _ => ValidationOutcome::MissingName,
    }
}

/// Presentation instructions for an outcome. The error class is toggled by
/// token, so repeated failures never accumulate duplicates.
pub fn validation_effects(outcome: ValidationOutcome) -> Vec<Effect> {
    match outcome {
        ValidationOutcome::MissingName => vec![
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
        ],
        ValidationOutcome::Valid => vec![
            Effect::RemoveClass {
                target: Target::NameContainer,
                class: ClassToken::Error,
            },
            Effect::SetText {
                target: Target::ErrorMessage,
                text: String::new(),
            },
        ],
    }
}
