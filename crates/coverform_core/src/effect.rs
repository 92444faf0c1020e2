/// Abstract identifiers for the host-page elements the core may target.
/// The page layer maps these onto concrete element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Chooser panel for a locally uploaded cover file.
    LocalPanel,
    /// Chooser panel for a cover fetched by URL.
    UrlPanel,
    /// Container wrapping the collection-name field.
    NameContainer,
    /// Element carrying the validation message.
    ErrorMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Show(Target),
    Hide(Target),
    AddClass { target: Target, class: ClassToken },
    RemoveClass { target: Target, class: ClassToken },
    SetText { target: Target, text: String },
    SetTextColor { target: Target, color: TextColor },
    /// Validation gate passed; the host may proceed with submission.
    SubmitForm,
}

/// Class tokens are semantic here; the page layer owns the CSS names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassToken {
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Alert,
    Default,
}
