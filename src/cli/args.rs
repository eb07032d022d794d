// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Note generator base URL, overrides the config file
    #[arg(long, value_name = "URL", env = "NOTEGEN_SERVER", global = true)]
    pub server: Option<String>,

    /// Directory for history and preferences, overrides the config file
    #[arg(long, value_name = "DIR", env = "NOTEGEN_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate study notes for a topic
    Generate {
        /// Topic to generate notes for (at least 3 characters)
        #[arg(value_name = "TOPIC")]
        topic: String,

        /// Subject area, defaults to the saved preference
        #[arg(short, long, value_name = "SUBJECT")]
        subject: Option<String>,

        /// Note type (summary, detailed, quick, ...), defaults to the saved preference
        #[arg(short = 't', long, value_name = "NOTE_TYPE")]
        note_type: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Open the print dialog when the page loads (html only)
        #[arg(long)]
        print: bool,

        /// Write the html page to FILE instead of opening the browser
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also save a plain-text copy as <topic>_notes.txt in DIR
        #[arg(long, value_name = "DIR")]
        download: Option<PathBuf>,
    },

    /// Show or clear recently generated topics
    History {
        /// Remove all history entries
        #[arg(long)]
        clear: bool,
    },

    /// Show or update the saved subject and note type
    Prefs {
        /// Subject to save
        #[arg(short, long, value_name = "SUBJECT")]
        subject: Option<String>,

        /// Note type to save
        #[arg(short = 't', long, value_name = "NOTE_TYPE")]
        note_type: Option<String>,
    },

    /// List subjects known to the server
    Subjects,

    /// List topics the server knows for a subject
    Topics {
        #[arg(value_name = "SUBJECT")]
        subject: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Render a page and open it in the browser
    Html,
    /// Print the plain-text export to stdout
    Text,
    /// Print the raw response as JSON
    Json,
}
