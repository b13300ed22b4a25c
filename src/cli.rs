use clap::{Parser, Subcommand};

use crate::clipboard::ClipboardBackend;

#[derive(Parser, Debug)]
#[command(name = "copybtn")]
#[command(version, about = "A copy-to-clipboard button for the terminal", long_about = None)]
pub struct Cli {
    /// Surface to mount the demo on ("root" or "inline")
    #[arg(short, long, global = true)]
    pub mount: Option<String>,

    /// Clipboard backend, overriding the config file
    #[arg(short, long, global = true, value_enum)]
    pub clipboard: Option<ClipboardBackend>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy text to the clipboard without opening the UI
    Copy {
        /// Text to copy (defaults to the demo snippet)
        text: Option<String>,
    },
    /// Print the demo view as plain text
    Show,
}
