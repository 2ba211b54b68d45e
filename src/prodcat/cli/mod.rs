//! # CLI Behavior
//!
//! This is **one possible UI client** for prodcat, not the application itself.
//! It maps the catalog's interactions onto shell arguments and stdin lines.
//!
//! ### Naked Execution (`prodcat`)
//!
//! Running `prodcat` with no arguments defaults to `prodcat list` with no
//! filters: the full joined table.
//!
//! ### One-shot filtering (`prodcat list`)
//!
//! `--user`, `--search` and `--category` become events, applied in that order
//! to a fresh view state. The table (or the "no matches" message) is printed
//! once.
//!
//! ### Event shell (`prodcat shell`)
//!
//! Reads one event per line and keeps the state between lines, the way the
//! filter panel does between clicks.
//!
//! ### Data source
//!
//! `--data-dir` wins over the `data-dir` config key. With neither, the built-in
//! sample catalog is used.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `print`: Output formatting (tables, chips, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: The line-oriented event loop

mod commands;
mod print;
pub mod setup;
mod shell;

pub use commands::run;
