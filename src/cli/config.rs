use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "locator-recorder",
    version,
    about = "Click-to-locator recorder for browser automation scripts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: locator-recorder.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive locators for a single element of a page fixture
    Derive {
        /// Path to a page fixture JSON file
        #[arg(long)]
        fixture: String,

        /// Element id attribute to look up
        #[arg(long)]
        id: Option<String>,

        /// Document-order element index, for elements without an id
        #[arg(long)]
        index: Option<usize>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Replay a YAML interaction script against a fixture and capture a session
    Replay {
        /// Path to a page fixture JSON file
        #[arg(long)]
        fixture: String,

        /// Path to a YAML interaction script
        #[arg(long)]
        script: String,

        /// Output format: json, console, html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSONL capture trace to this path
        #[arg(long)]
        trace: Option<String>,

        /// Persist the toggle flag and finished session to this JSON store
        #[arg(long)]
        store: Option<String>,
    },

    /// Render a previously captured session
    Report {
        /// Path to a session JSON file (array of locator records)
        #[arg(long)]
        session: String,

        /// Output format: console or html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `locator-recorder.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub replay: ReplayConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    #[serde(default = "default_json")]
    pub format: String,

    pub output: Option<String>,

    pub trace: Option<String>,

    pub store: Option<String>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            output: None,
            trace: None,
            store: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
        }
    }
}

// Serde default helpers
fn default_json() -> String {
    "json".to_string()
}
fn default_console() -> String {
    "console".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("locator-recorder.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
