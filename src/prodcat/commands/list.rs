use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::{TableView, ViewState};

pub const NO_MATCHES: &str = "No products matching selected criteria";

pub fn run(state: &ViewState) -> Result<CmdResult> {
    let table = state.table();
    let mut result = CmdResult::default();
    if table == TableView::NoMatches {
        result.add_message(CmdMessage::info(NO_MATCHES));
    }
    Ok(result.with_table(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilterMode;
    use crate::join::join_store;
    use crate::store::memory::fixtures;

    fn state() -> ViewState {
        let (items, _) = join_store(&fixtures::market());
        ViewState::new(items.into(), CategoryFilterMode::Inert)
    }

    #[test]
    fn lists_visible_rows() {
        let result = run(&state()).unwrap();
        assert_eq!(result.table.unwrap().rows().len(), 6);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_result_is_reported_as_no_matches() {
        let mut state = state();
        state.set_search_query("nothing like this");

        let result = run(&state).unwrap();
        assert_eq!(result.table, Some(TableView::NoMatches));
        assert_eq!(result.messages, vec![CmdMessage::info(NO_MATCHES)]);
    }
}
