use crate::{Effect, Target};

/// Checked state of the cover-source radio group, read from the host page.
/// The group is mutually exclusive in the markup, but the core does not
/// rely on that; resolution is first-match-wins regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSelection {
    pub local: bool,
    pub url: bool,
    pub no_cover: bool,
}

/// The selection collapsed to a single source kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSource {
    Local,
    Url,
    NoCover,
}

impl SourceSelection {
    /// First match wins, in the fixed order local, url, no_cover.
    /// `None` means nothing is checked yet (initial render).
    pub fn resolved(self) -> Option<CoverSource> {
        if self.local {
            Some(CoverSource::Local)
        } else if self.url {
            Some(CoverSource::Url)
        } else if self.no_cover {
            Some(CoverSource::NoCover)
        } else {
            None
        }
    }
}

/// Panel instructions for a selection. With nothing checked the panels are
/// left untouched; whatever the markup chose stays in place.
pub fn source_effects(selection: SourceSelection) -> Vec<Effect> {
    match selection.resolved() {
        Some(CoverSource::Local) => vec![
            Effect::Show(Target::LocalPanel),
            Effect::Hide(Target::UrlPanel),
        ],
        Some(CoverSource::Url) => vec![
            Effect::Show(Target::UrlPanel),
            Effect::Hide(Target::LocalPanel),
        ],
        Some(CoverSource::NoCover) => vec![
            Effect::Hide(Target::LocalPanel),
            Effect::Hide(Target::UrlPanel),
        ],
        None => Vec::new(),
    }
}
