//! # View State Controller
//!
//! [`ViewState`] is the only mutable piece of the catalog. It owns a
//! [`FilterState`] and exposes one method per user interaction; each method is
//! total and takes effect immediately. Reads go through [`ViewState::table`]
//! or [`ViewState::visible_items`], which run the filter pipeline on demand.
//!
//! The joined catalog is handed in once as an `Arc<[JoinedItem]>` and never
//! modified. Selecting "All" or resetting copies it back into the base list,
//! so no transition can drift from what the join produced.

use crate::filter::{self, CategoryFilterMode, CategorySelection, FilterState, UserSelector};
use crate::model::JoinedItem;
use std::sync::Arc;

/// What the presentation layer should draw in the table area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Rows(Vec<JoinedItem>),
    /// Filters are valid but nothing matched them.
    NoMatches,
}

impl TableView {
    pub fn rows(&self) -> &[JoinedItem] {
        match self {
            TableView::Rows(rows) => rows,
            TableView::NoMatches => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    joined: Arc<[JoinedItem]>,
    filters: FilterState,
}

impl ViewState {
    pub fn new(joined: Arc<[JoinedItem]>, category_mode: CategoryFilterMode) -> Self {
        let filters = FilterState {
            base_list: joined.to_vec(),
            category_mode,
            ..FilterState::default()
        };
        Self { joined, filters }
    }

    pub fn select_all_users(&mut self) {
        tracing::debug!("select all users");
        self.filters.active_user = UserSelector::All;
        self.filters.base_list = self.joined.to_vec();
    }

    pub fn select_user(&mut self, name: &str) {
        let selector = UserSelector::Named(name.to_string());
        self.filters.base_list = filter::by_user(&self.joined, &selector);
        tracing::debug!(user = name, rows = self.filters.base_list.len(), "select user");
        self.filters.active_user = selector;
    }

    pub fn set_search_query(&mut self, text: &str) {
        tracing::debug!(query = text, "set search query");
        self.filters.search_query = text.to_string();
    }

    pub fn clear_search_query(&mut self) {
        self.filters.search_query.clear();
    }

    pub fn select_all_categories(&mut self) {
        self.filters.categories = CategorySelection::All;
    }

    pub fn toggle_category(&mut self, id: u32) {
        self.filters.categories.toggle(id);
        tracing::debug!(category = id, selection = ?self.filters.categories, "toggle category");
    }

    /// Clears every filter dimension at once.
    pub fn reset_all(&mut self) {
        tracing::debug!("reset all filters");
        let category_mode = self.filters.category_mode;
        self.filters = FilterState {
            base_list: self.joined.to_vec(),
            category_mode,
            ..FilterState::default()
        };
    }

    pub fn visible_items(&self) -> Vec<JoinedItem> {
        filter::visible(&self.filters)
    }

    pub fn table(&self) -> TableView {
        let rows = self.visible_items();
        if rows.is_empty() {
            TableView::NoMatches
        } else {
            TableView::Rows(rows)
        }
    }

    pub fn active_user(&self) -> &UserSelector {
        &self.filters.active_user
    }

    pub fn is_user_active(&self, name: &str) -> bool {
        matches!(&self.filters.active_user, UserSelector::Named(n) if n == name)
    }

    pub fn search_query(&self) -> &str {
        &self.filters.search_query
    }

    /// The clear button shows for any non-empty raw query, whitespace included.
    pub fn shows_clear_button(&self) -> bool {
        !self.filters.search_query.is_empty()
    }

    pub fn categories(&self) -> &CategorySelection {
        &self.filters.categories
    }

    pub fn is_category_selected(&self, id: u32) -> bool {
        matches!(&self.filters.categories, CategorySelection::Only(ids) if ids.contains(&id))
    }

    pub fn category_mode(&self) -> CategoryFilterMode {
        self.filters.category_mode
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn joined(&self) -> &Arc<[JoinedItem]> {
        &self.joined
    }
}
