use crate::commands::{Chip, CmdResult};
use crate::error::Result;
use crate::filter::ALL_USERS;
use crate::state::ViewState;
use crate::store::DataStore;

/// The user tabs: "All" followed by every user, in store order.
pub fn run<S: DataStore>(store: &S, state: &ViewState) -> Result<CmdResult> {
    let mut chips = vec![Chip {
        key: None,
        label: ALL_USERS.to_string(),
        active: state.active_user().is_all(),
    }];

    chips.extend(store.users().iter().map(|user| Chip {
        key: Some(user.name.clone()),
        label: user.name.clone(),
        active: state.is_user_active(&user.name),
    }));

    Ok(CmdResult::default().with_chips(chips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilterMode;
    use crate::join::join_store;
    use crate::store::memory::fixtures;

    #[test]
    fn marks_the_active_tab() {
        let store = fixtures::market();
        let (items, _) = join_store(&store);
        let mut state = ViewState::new(items.into(), CategoryFilterMode::Inert);

        let chips = run(&store, &state).unwrap().chips;
        let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["All", "Max", "Anna"]);
        assert!(chips[0].active);

        state.select_user("Anna");
        let chips = run(&store, &state).unwrap().chips;
        let active: Vec<_> = chips.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key.as_deref(), Some("Anna"));
    }
}
