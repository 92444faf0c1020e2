use std::io::{self, BufRead, Write};

use anyhow::Context;
use coverform_core::{update, Msg, PageState};
use coverform_page::{collection_value, elements, new_collection_page, read_selection};
use page_logging::set_event_seq;

use super::commands::Command;
use super::effects;
use super::logging::{self, LogDestination};
use super::render;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let mut doc = new_collection_page();
    let mut state = PageState::new();

    println!("{}", render::page(&doc, &state.view())?);
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut event_seq = 0u64;

    loop {
        print!("> ");
        stdout.flush().context("flush prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read command")? == 0 {
            break;
        }
        let Some(command) = Command::parse(&line) else {
            println!("Unrecognized command; type `help` for the list.");
            continue;
        };

        event_seq += 1;
        set_event_seq(event_seq);

        // Host side first: mutate the controls, then build the message from
        // what the page actually holds.
        let msg = match command {
            Command::SelectLocal => {
                doc.check_radio(elements::LOCAL_SOURCE)?;
                Msg::SourceChanged(read_selection(&doc)?)
            }
            Command::SelectUrl => {
                doc.check_radio(elements::URL_SOURCE)?;
                Msg::SourceChanged(read_selection(&doc)?)
            }
            Command::SelectNoCover => {
                doc.check_radio(elements::NO_COVER)?;
                Msg::SourceChanged(read_selection(&doc)?)
            }
            Command::Name(text) => {
                doc.set_field(elements::FRM_CONTACT, elements::COLLECTION, &text)?;
                Msg::NameChanged(collection_value(&doc)?.unwrap_or_default())
            }
            Command::Submit => Msg::SubmitRequested,
            Command::Page => {
                println!("{}", render::page(&doc, &state.view())?);
                continue;
            }
            Command::Dump => {
                let json = serde_json::to_string_pretty(&doc).context("serialize page")?;
                println!("{json}");
                continue;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
        };

        let (next, effect_batch) = update(state, msg);
        state = next;
        effects::run(&mut doc, &state.view(), effect_batch)?;

        if state.consume_dirty() {
            println!("{}", render::page(&doc, &state.view())?);
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands: local | url | none | name <text> | submit | page | dump | help | quit");
}
