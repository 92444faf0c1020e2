use anyhow::Context;
use chrono::Local;
use coverform_core::{Effect, PageViewModel};
use coverform_page::{apply, Document};
use page_logging::page_info;

/// Applies a batch of core effects to the document and performs the
/// submission step when the gate passed.
pub fn run(doc: &mut Document, view: &PageViewModel, effects: Vec<Effect>) -> anyhow::Result<()> {
    if effects.is_empty() {
        return Ok(());
    }
    page_info!(
        "event_seq={} applying {} effect(s)",
        page_logging::get_event_seq(),
        effects.len()
    );
    let applied = apply(doc, &effects).context("apply effects to page")?;
    if applied.submit {
        submit(view);
    }
    Ok(())
}

/// Submission is outside this program's scope; the shell stands in for the
/// server with a timestamped confirmation flash.
fn submit(view: &PageViewModel) {
    let name = view.collection_name.as_deref().unwrap_or_default();
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("[{stamp}] New collection {name:?} submitted.");
    page_info!("submit collection={:?}", name);
}
