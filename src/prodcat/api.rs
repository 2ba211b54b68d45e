//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for UI clients. It owns the
//! reference store, joins it once at construction, keeps the joined catalog
//! cached and hands it to the [`ViewState`] it drives.
//!
//! Like the command layer beneath it, the facade never prints and never
//! exits: every method returns a [`CmdResult`] for the caller to render.
//!
//! ## Generic Over DataStore
//!
//! - Production: `CatalogApi<FileStore>` or `CatalogApi<&InMemoryStore>` for the
//!   built-in sample
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands;
use crate::config::Scope;
use crate::error::Result;
use crate::event::Event;
use crate::filter::CategoryFilterMode;
use crate::join::{self, JoinReport};
use crate::model::JoinedItem;
use crate::state::ViewState;
use crate::store::DataStore;
use std::sync::Arc;

pub struct CatalogApi<S: DataStore> {
    store: S,
    joined: Arc<[JoinedItem]>,
    report: JoinReport,
    state: ViewState,
    paths: commands::CatalogPaths,
}

impl<S: DataStore> CatalogApi<S> {
    pub fn new(store: S, category_mode: CategoryFilterMode, paths: commands::CatalogPaths) -> Self {
        let (items, report) = join::join_store(&store);
        let joined: Arc<[JoinedItem]> = items.into();
        let state = ViewState::new(Arc::clone(&joined), category_mode);
        Self {
            store,
            joined,
            report,
            state,
            paths,
        }
    }

    pub fn select_all_users(&mut self) -> Result<CmdResult> {
        self.apply(&[Event::SelectAllUsers])
    }

    pub fn select_user(&mut self, name: &str) -> Result<CmdResult> {
        self.apply(&[Event::SelectUser(name.to_string())])
    }

    pub fn set_search_query(&mut self, text: &str) -> Result<CmdResult> {
        self.apply(&[Event::SetSearchQuery(text.to_string())])
    }

    pub fn clear_search_query(&mut self) -> Result<CmdResult> {
        self.apply(&[Event::ClearSearchQuery])
    }

    pub fn reset_all(&mut self) -> Result<CmdResult> {
        self.apply(&[Event::ResetAll])
    }

    pub fn select_all_categories(&mut self) -> Result<CmdResult> {
        self.apply(&[Event::SelectAllCategories])
    }

    pub fn toggle_category(&mut self, id: u32) -> Result<CmdResult> {
        self.apply(&[Event::ToggleCategory(id)])
    }

    /// Applies several events in order and returns the resulting table.
    pub fn apply(&mut self, events: &[Event]) -> Result<CmdResult> {
        commands::filters::apply(&mut self.state, events)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.state)
    }

    pub fn users(&self) -> Result<CmdResult> {
        commands::users::run(&self.store, &self.state)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::categories::run(&self.store, &self.state)
    }

    pub fn check(&self) -> Result<CmdResult> {
        commands::check::run(&self.report)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn joined(&self) -> &Arc<[JoinedItem]> {
        &self.joined
    }

    pub fn paths(&self) -> &commands::CatalogPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CatalogPaths, Chip, CmdMessage, CmdResult, MessageLevel};
