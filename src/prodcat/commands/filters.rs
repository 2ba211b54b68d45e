use crate::commands::CmdResult;
use crate::error::Result;
use crate::event::Event;
use crate::state::ViewState;

use super::list;

/// Applies `events` in order, then lists what is visible.
pub fn apply(state: &mut ViewState, events: &[Event]) -> Result<CmdResult> {
    for event in events {
        tracing::trace!(%event, "apply");
        event.apply(state);
    }
    list::run(state)
}
