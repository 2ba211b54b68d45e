use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "prodcat", bin_name = "prodcat", version = get_version())]
#[command(about = "Browse a product catalog by owner, category and name", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global configuration instead of the project's .prodcat/
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory with users.json, categories.json and products.json
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the product table
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only products whose category is owned by this user
        #[arg(short, long)]
        user: Option<String>,

        /// Only products whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Select a category chip (repeatable)
        #[arg(short, long = "category", value_name = "ID")]
        categories: Vec<u32>,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the user tabs
    #[command(display_order = 2)]
    Users,

    /// List the category chips
    #[command(display_order = 3)]
    Categories,

    /// Read filter events from stdin, one per line
    #[command(display_order = 4)]
    Shell,

    /// Report references that do not resolve
    #[command(display_order = 5)]
    Check,

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Configuration key (data-dir or category-filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
