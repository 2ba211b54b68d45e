//! # Prodcat Architecture
//!
//! Prodcat joins a product catalog (products, their categories, and the users
//! who own those categories) into one table and filters it by owner, by
//! category and by free-text search. It is a **library first**; the `prodcat`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the event shell, renders tables   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the cached join and the view state       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - join.rs: products ⟕ categories ⟕ users                   │
//! │  - filter.rs: predicates over joined rows                   │
//! │  - state.rs: the view state and its transitions             │
//! │  - store/: where the reference data comes from              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! The store is joined **once** when the API is built. The result is kept in an
//! `Arc<[JoinedItem]>` that nothing mutates. Every interaction is an
//! [`event::Event`] applied to [`state::ViewState`]; the visible rows are
//! recomputed from the state on each read.
//!
//! Missing relations are not errors. A product whose category cannot be found
//! is still listed, with no category and no owner.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`join`]: The join engine
//! - [`filter`]: Predicates and the filter pipeline
//! - [`state`]: The view state controller
//! - [`event`]: Interaction events and their text form
//! - [`store`]: Reference data sources
//! - [`model`]: `User`, `Category`, `Product`, `JoinedItem`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod join;
pub mod model;
pub mod state;
pub mod store;
