#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Cover-source radio group changed; carries the checked state of all
    /// three controls as read from the host page at event time.
    SourceChanged(crate::SourceSelection),
    /// User edited the collection-name field.
    NameChanged(String),
    /// User attempted to submit the form.
    SubmitRequested,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
