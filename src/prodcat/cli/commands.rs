//! # CLI Layer
//!
//! This module is **one possible UI client** for prodcat. It is the only place
//! that knows about stdout, stderr and argument parsing.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves config and data source, builds the API
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{print_chips, print_json, print_messages, print_table};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use directories::ProjectDirs;
use prodcat::api::{CatalogApi, CatalogPaths, ConfigAction};
use prodcat::commands;
use prodcat::config::{CatalogConfig, ConfigKey, Scope};
use prodcat::error::{CatalogError, Result};
use prodcat::event::Event;
use prodcat::state::TableView;
use prodcat::store::fs::FileStore;
use prodcat::store::{sample, DataStore};
use std::path::PathBuf;

struct AppContext {
    api: CatalogApi<Box<dyn DataStore>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let (paths, scope) = init_paths(&cli)?;

    // Config works without the catalog, so a broken data-dir can still be fixed
    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&paths, scope, key, value),
        Some(Commands::List {
            user,
            search,
            categories,
            json,
        }) => {
            let mut ctx = init_context(cli.data_dir, paths, scope)?;
            handle_list(&mut ctx, user, search, categories, json)
        }
        Some(Commands::Users) => handle_users(&init_context(cli.data_dir, paths, scope)?),
        Some(Commands::Categories) => {
            handle_categories(&init_context(cli.data_dir, paths, scope)?)
        }
        Some(Commands::Shell) => handle_shell(&mut init_context(cli.data_dir, paths, scope)?),
        Some(Commands::Check) => handle_check(&init_context(cli.data_dir, paths, scope)?),
        None => {
            let mut ctx = init_context(cli.data_dir, paths, scope)?;
            handle_list(&mut ctx, None, None, Vec::new(), false)
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("prodcat=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_paths(cli: &Cli) -> Result<(CatalogPaths, Scope)> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".prodcat");

    let global_dir = std::env::var_os("PRODCAT_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "prodcat", "prodcat").map(|d| d.data_dir().to_path_buf())
        })
        .ok_or_else(|| CatalogError::Store("Could not determine config dir".to_string()))?;

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let paths = CatalogPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    Ok((paths, scope))
}

fn init_context(
    data_dir: Option<PathBuf>,
    paths: CatalogPaths,
    scope: Scope,
) -> Result<AppContext> {
    let config = CatalogConfig::load(paths.scope_dir(scope)?)?;

    let data_dir = data_dir.or(config.data_dir);
    let store: Box<dyn DataStore> = match data_dir {
        Some(dir) => Box::new(FileStore::open(dir)?),
        None => {
            tracing::debug!("no data dir configured, using the sample catalog");
            Box::new(sample::store())
        }
    };

    let api = CatalogApi::new(store, config.category_filter, paths);

    Ok(AppContext { api })
}

fn handle_list(
    ctx: &mut AppContext,
    user: Option<String>,
    search: Option<String>,
    categories: Vec<u32>,
    json: bool,
) -> Result<()> {
    let mut events = Vec::new();
    if let Some(name) = user {
        events.push(Event::SelectUser(name));
    }
    if let Some(text) = search {
        events.push(Event::SetSearchQuery(text));
    }
    events.extend(categories.into_iter().map(Event::ToggleCategory));

    let result = ctx.api.apply(&events)?;
    let rows = result
        .table
        .as_ref()
        .map(TableView::rows)
        .unwrap_or_default();

    if json {
        return print_json(rows);
    }

    if !rows.is_empty() {
        print_table(rows);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_users(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.users()?;
    print_chips(&result.chips);
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_chips(&result.chips);
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    shell::run(&mut ctx.api, stdin.lock())
}

fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.check()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    paths: &CatalogPaths,
    scope: Scope,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key.parse::<ConfigKey>()?),
        (Some(key), Some(value)) => ConfigAction::Set(key.parse::<ConfigKey>()?, value),
    };

    let result = commands::config::run(paths, scope, action)?;
    print_messages(&result.messages);
    Ok(())
}
