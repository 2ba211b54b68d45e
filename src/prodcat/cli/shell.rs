//! Line-oriented event shell.
//!
//! Each input line is either an [`Event`] (see [`prodcat::event`] for the
//! syntax) or one of the shell's own words:
//!
//! - `list` prints the table
//! - `users` / `chips` print the user tabs / category chips
//! - `quit` or `exit` stops reading
//!
//! Events are applied in input order. A line that does not parse is reported
//! and skipped; it never changes the state.

use super::print::{print_chips, print_messages, print_table};
use prodcat::api::{CatalogApi, CmdMessage};
use prodcat::error::Result;
use prodcat::event::Event;
use prodcat::state::TableView;
use prodcat::store::DataStore;
use std::io::{BufRead, IsTerminal, Write};

pub(super) fn run<S: DataStore, R: BufRead>(api: &mut CatalogApi<S>, input: R) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();

    prompt(interactive)?;
    for line in input.lines() {
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "list" => print_result_table(api)?,
            "users" => print_chips(&api.users()?.chips),
            "chips" => print_chips(&api.categories()?.chips),
            _ => match line.trim_start().parse::<Event>() {
                Ok(event) => {
                    api.apply(&[event])?;
                }
                Err(e) => print_messages(&[CmdMessage::error(e)]),
            },
        }
        prompt(interactive)?;
    }
    Ok(())
}

fn print_result_table<S: DataStore>(api: &CatalogApi<S>) -> Result<()> {
    let result = api.list()?;
    if let Some(TableView::Rows(rows)) = &result.table {
        print_table(rows);
    }
    print_messages(&result.messages);
    Ok(())
}

fn prompt(interactive: bool) -> Result<()> {
    if interactive {
        print!("> ");
        std::io::stdout().flush()?;
    }
    Ok(())
}
