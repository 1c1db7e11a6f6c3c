use crate::types::{LogLevel, OutputFormat, PageArg, ViewModeArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a personal portfolio from the terminal", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Content directory or base URL holding the JSON documents
    #[arg(long, global = true)]
    pub content: Option<String>,

    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive portfolio
    Browse {
        /// Page to start on
        #[arg(long, default_value = "home")]
        page: PageArg,
    },

    /// List projects, optionally narrowed to one category
    Projects {
        /// all, web, mobile or other
        #[arg(long, default_value = "all")]
        category: String,

        #[arg(long, default_value = "standard")]
        mode: ViewModeArg,
    },

    /// Show one project with its media selection
    Project {
        id: String,

        #[arg(long, default_value = "standard")]
        mode: ViewModeArg,
    },

    /// List skills with proficiency levels
    Skills {
        /// all, languages, frontend, backend, databases or tools
        #[arg(long, default_value = "all")]
        category: String,

        #[arg(long, default_value = "standard")]
        mode: ViewModeArg,
    },

    /// Show the work experience timeline
    Experience {
        #[arg(long, default_value = "standard")]
        mode: ViewModeArg,
    },

    /// Show the profile summary
    About,

    /// Send a message through the contact form endpoint
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Override the configured form endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Load every content document and report problems
    Check,
}
