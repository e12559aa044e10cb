use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "tablefilter",
    bin_name = "tablefilter",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Search and filter dashboard list data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use the user-wide config instead of ./.tablefilter
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Never emit ANSI styling
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a screen's records narrowed by a search and filters
    Filter {
        /// JSON file with the records, or - for stdin
        location: String,

        /// Screen whose facets and defaults apply
        #[arg(short, long, default_value = "orders")]
        screen: String,

        /// Case-insensitive text matched against every field
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Exact facet selection, e.g. --filter order_status=completed
        #[arg(short, long = "filter", value_parser = parse_key_value)]
        filters: Vec<(String, String)>,

        /// Print the matching records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Replay filter bar actions (search/filter/clear lines) against a screen
    Session {
        /// JSON file with the records
        location: String,

        /// Screen whose facets and defaults apply
        #[arg(short, long, default_value = "orders")]
        screen: String,

        /// File with one action per line; stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,

        /// Print the matching records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Count records per normalized status
    Counts {
        /// JSON file with the records, or - for stdin
        location: String,

        /// Screen whose status mapping applies
        #[arg(short, long, default_value = "orders")]
        screen: String,
    },

    /// List screens with their facets and defaults
    Screens {
        /// Show only this screen
        name: Option<String>,
    },

    /// Get or set configuration values
    Config {
        /// Config key (bar-visibility, cell-width)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// Write a default config file
    Init,
}

/// Parses `key=value` for `--filter`. The value is kept exactly as given.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}
