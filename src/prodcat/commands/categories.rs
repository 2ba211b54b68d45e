use crate::commands::{Chip, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{CategoryFilterMode, CategorySelection};
use crate::state::ViewState;
use crate::store::DataStore;

/// The category chips: "All" followed by every category, in store order.
pub fn run<S: DataStore>(store: &S, state: &ViewState) -> Result<CmdResult> {
    let mut chips = vec![Chip {
        key: None,
        label: "All".to_string(),
        active: *state.categories() == CategorySelection::All,
    }];

    chips.extend(store.categories().iter().map(|category| Chip {
        key: Some(category.id.to_string()),
        label: category.label(),
        active: state.is_category_selected(category.id),
    }));

    let mut result = CmdResult::default().with_chips(chips);
    if state.category_mode() == CategoryFilterMode::Inert {
        result.add_message(CmdMessage::info(
            "Category filtering is off (set category-filter to membership to enable it)",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::join_store;
    use crate::store::memory::fixtures;

    fn state(mode: CategoryFilterMode) -> (crate::store::memory::InMemoryStore, ViewState) {
        let store = fixtures::market();
        let (items, _) = join_store(&store);
        (store, ViewState::new(items.into(), mode))
    }

    #[test]
    fn lists_categories_with_labels() {
        let (store, state) = state(CategoryFilterMode::Membership);
        let result = run(&store, &state).unwrap();

        let labels: Vec<_> = result.chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["All", "🍎 - Fruits", "🍺 - Drinks", "❓ - Orphans"]);
        assert!(result.chips[0].active);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn selected_chips_are_active() {
        let (store, mut state) = state(CategoryFilterMode::Membership);
        state.toggle_category(20);

        let chips = run(&store, &state).unwrap().chips;
        let active: Vec<_> = chips
            .iter()
            .filter(|c| c.active)
            .map(|c| c.key.as_deref())
            .collect();
        assert_eq!(active, [Some("20")]);
    }

    #[test]
    fn inert_mode_is_called_out() {
        let (store, state) = state(CategoryFilterMode::Inert);
        let result = run(&store, &state).unwrap();
        assert_eq!(result.messages.len(), 1);
    }
}
