//! # Prodcat CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination. Every command
//! except `config` goes through [`prodcat::api::CatalogApi`]; `config` calls
//! [`prodcat::commands::config::run`] directly so it works before a catalog
//! can be loaded.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
