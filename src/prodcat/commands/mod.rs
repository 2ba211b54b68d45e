use crate::config::{CatalogConfig, Scope};
use crate::error::{CatalogError, Result};
use crate::join::JoinReport;
use crate::state::TableView;
use std::path::PathBuf;

pub mod categories;
pub mod check;
pub mod config;
pub mod filters;
pub mod list;
pub mod users;

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl CatalogPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| CatalogError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A selectable filter control (user tab or category chip).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// The value to pass back when selecting this chip; `None` for "All".
    pub key: Option<String>,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub table: Option<TableView>,
    pub chips: Vec<Chip>,
    pub report: Option<JoinReport>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_table(mut self, table: TableView) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_chips(mut self, chips: Vec<Chip>) -> Self {
        self.chips = chips;
        self
    }

    pub fn with_report(mut self, report: JoinReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
