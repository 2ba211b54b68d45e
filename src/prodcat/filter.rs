//! # Filter Pipeline
//!
//! Narrows a joined catalog down to the rows that should be visible. Every
//! filter dimension is an [`ItemPredicate`]; a row is visible when all of them
//! accept it. Filtering never reorders rows.
//!
//! ## Dimensions
//!
//! - **User**: exact, case-sensitive match on the resolved owner's name.
//!   Unlike the other two, it is applied when the user is *selected*: the
//!   controller rebuilds [`FilterState::base_list`] with [`by_user`] and the
//!   read path does not look at the user again.
//! - **Search**: case-insensitive substring match on the product name. The
//!   query is trimmed; an empty query accepts everything.
//! - **Category**: set membership on the category id, or nothing at all,
//!   depending on [`CategoryFilterMode`].

use crate::model::JoinedItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Label used for the "no user selected" tab.
pub const ALL_USERS: &str = "All";

/// A pure row test. Implementations must not depend on anything but `item`
/// and their own fields.
pub trait ItemPredicate {
    fn matches(&self, item: &JoinedItem) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserSelector {
    #[default]
    All,
    Named(String),
}

impl UserSelector {
    pub fn is_all(&self) -> bool {
        matches!(self, UserSelector::All)
    }
}

impl fmt::Display for UserSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSelector::All => write!(f, "{}", ALL_USERS),
            UserSelector::Named(name) => write!(f, "{}", name),
        }
    }
}

impl ItemPredicate for UserSelector {
    fn matches(&self, item: &JoinedItem) -> bool {
        match self {
            UserSelector::All => true,
            UserSelector::Named(name) => item.user_name() == Some(name.as_str()),
        }
    }
}

/// Case-insensitive substring search over product names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase().trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl ItemPredicate for SearchFilter {
    fn matches(&self, item: &JoinedItem) -> bool {
        self.is_empty() || item.product.name.to_lowercase().contains(&self.needle)
    }
}

/// How the category chips take part in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilterMode {
    /// Chips can be selected but never hide a row.
    #[default]
    Inert,
    /// A row is visible only if its category is among the selected ones.
    Membership,
}

impl fmt::Display for CategoryFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilterMode::Inert => write!(f, "inert"),
            CategoryFilterMode::Membership => write!(f, "membership"),
        }
    }
}

impl FromStr for CategoryFilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inert" => Ok(CategoryFilterMode::Inert),
            "membership" => Ok(CategoryFilterMode::Membership),
            other => Err(format!(
                "Invalid category filter mode: {} (expected inert or membership)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(BTreeSet<u32>),
}

impl CategorySelection {
    pub fn contains(&self, id: u32) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(ids) => ids.contains(&id),
        }
    }

    /// Adds `id` if absent, removes it otherwise. An emptied set becomes `All`.
    pub fn toggle(&mut self, id: u32) {
        match self {
            CategorySelection::All => {
                *self = CategorySelection::Only(BTreeSet::from([id]));
            }
            CategorySelection::Only(ids) => {
                if !ids.remove(&id) {
                    ids.insert(id);
                }
                if ids.is_empty() {
                    *self = CategorySelection::All;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryFilter<'a> {
    pub mode: CategoryFilterMode,
    pub selection: &'a CategorySelection,
}

impl ItemPredicate for CategoryFilter<'_> {
    fn matches(&self, item: &JoinedItem) -> bool {
        match (self.mode, self.selection) {
            (CategoryFilterMode::Inert, _) | (_, CategorySelection::All) => true,
            (CategoryFilterMode::Membership, selection) => item
                .category_id()
                .is_some_and(|id| selection.contains(id)),
        }
    }
}

/// Everything the read path needs to compute the visible rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub active_user: UserSelector,
    pub search_query: String,
    /// Rows left after the user filter; search and category run over these.
    pub base_list: Vec<JoinedItem>,
    pub categories: CategorySelection,
    pub category_mode: CategoryFilterMode,
}

/// Keeps the items every predicate accepts, in their original order.
pub fn apply(items: &[JoinedItem], predicates: &[&dyn ItemPredicate]) -> Vec<JoinedItem> {
    items
        .iter()
        .filter(|item| predicates.iter().all(|p| p.matches(item)))
        .cloned()
        .collect()
}

pub fn by_user(items: &[JoinedItem], selector: &UserSelector) -> Vec<JoinedItem> {
    apply(items, &[selector])
}

pub fn search(items: &[JoinedItem], query: &str) -> Vec<JoinedItem> {
    apply(items, &[&SearchFilter::new(query)])
}

/// The rows currently visible for `state`.
pub fn visible(state: &FilterState) -> Vec<JoinedItem> {
    let search = SearchFilter::new(&state.search_query);
    let category = CategoryFilter {
        mode: state.category_mode,
        selection: &state.categories,
    };
    apply(&state.base_list, &[&search, &category])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::join_store;
    use crate::store::memory::fixtures;

    fn market() -> Vec<JoinedItem> {
        join_store(&fixtures::market()).0
    }

    fn names(items: &[JoinedItem]) -> Vec<&str> {
        items.iter().map(|i| i.product.name.as_str()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let items = market();
        assert_eq!(search(&items, ""), items);
        assert_eq!(search(&items, "   "), items);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = market();
        assert_eq!(names(&search(&items, "il")), ["Milk"]);
        assert_eq!(names(&search(&items, "MILK")), ["Milk"]);
        assert!(search(&items, "xyz").is_empty());
    }

    #[test]
    fn search_trims_query_but_not_inner_spaces() {
        let items = market();
        assert_eq!(names(&search(&items, "  apple ")), ["Apple Juice", "Pineapple"]);
        assert_eq!(names(&search(&items, "apple j")), ["Apple Juice"]);
    }

    #[test]
    fn user_filter_is_exact_and_case_sensitive() {
        let items = market();
        let max = UserSelector::Named("Max".into());
        assert_eq!(names(&by_user(&items, &max)), ["Banana", "Pineapple"]);

        let lower = UserSelector::Named("max".into());
        assert!(by_user(&items, &lower).is_empty());
    }

    #[test]
    fn rows_without_owner_never_match_a_named_user() {
        let items = market();
        let anyone = by_user(&items, &UserSelector::Named(String::new()));
        assert!(anyone.is_empty());
    }

    #[test]
    fn all_users_keeps_everything() {
        let items = market();
        assert_eq!(by_user(&items, &UserSelector::All), items);
    }

    #[test]
    fn user_and_search_commute() {
        let items = market();
        let anna = UserSelector::Named("Anna".into());

        let user_first = search(&by_user(&items, &anna), "juice");
        let search_first = by_user(&search(&items, "juice"), &anna);
        assert_eq!(user_first, search_first);
        assert_eq!(names(&user_first), ["Apple Juice"]);
    }

    #[test]
    fn inert_category_filter_passes_everything() {
        let items = market();
        let selection = CategorySelection::Only(BTreeSet::from([10]));
        let filter = CategoryFilter {
            mode: CategoryFilterMode::Inert,
            selection: &selection,
        };
        assert_eq!(apply(&items, &[&filter]), items);
    }

    #[test]
    fn membership_category_filter_keeps_selected_ids() {
        let items = market();
        let selection = CategorySelection::Only(BTreeSet::from([10, 30]));
        let filter = CategoryFilter {
            mode: CategoryFilterMode::Membership,
            selection: &selection,
        };
        assert_eq!(
            names(&apply(&items, &[&filter])),
            ["Banana", "Pineapple", "Lost Sock"]
        );
    }

    #[test]
    fn membership_with_all_selected_passes_rows_without_category() {
        let items = market();
        let filter = CategoryFilter {
            mode: CategoryFilterMode::Membership,
            selection: &CategorySelection::All,
        };
        assert_eq!(apply(&items, &[&filter]).len(), items.len());
    }

    #[test]
    fn toggling_last_category_returns_to_all() {
        let mut selection = CategorySelection::All;
        selection.toggle(10);
        selection.toggle(20);
        assert!(selection.contains(10) && selection.contains(20));
        assert!(!selection.contains(30));

        selection.toggle(10);
        selection.toggle(20);
        assert_eq!(selection, CategorySelection::All);
    }

    #[test]
    fn visible_combines_search_and_category() {
        let state = FilterState {
            search_query: "a".into(),
            base_list: market(),
            categories: CategorySelection::Only(BTreeSet::from([20])),
            category_mode: CategoryFilterMode::Membership,
            ..FilterState::default()
        };
        assert_eq!(names(&visible(&state)), ["Apple Juice"]);
    }

    #[test]
    fn empty_base_list_yields_empty_result() {
        let state = FilterState::default();
        assert!(visible(&state).is_empty());
    }

    #[test]
    fn mode_parses_from_config_strings() {
        assert_eq!(
            "membership".parse::<CategoryFilterMode>(),
            Ok(CategoryFilterMode::Membership)
        );
        assert!("sometimes".parse::<CategoryFilterMode>().is_err());
        assert_eq!(CategoryFilterMode::Inert.to_string(), "inert");
    }
}
