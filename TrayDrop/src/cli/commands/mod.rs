use clap::Subcommand;
use dropcore::shortcut::Platform;
use std::path::PathBuf;

pub mod glyph;
pub mod recent;
pub mod upload;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulated upload session, printing host events as JSON lines
    Upload {
        /// Files to queue, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Cancel the session this many milliseconds after it starts
        #[arg(long)]
        cancel_after: Option<u64>,
    },

    /// Render a shortcut combination (e.g. "mod+shift+v") as menu glyphs
    Glyph {
        /// Combination, tokens joined by '+'
        combo: String,

        /// Platform to render for (mac, other); defaults to the configured one
        #[arg(long)]
        platform: Option<Platform>,
    },

    /// List recently completed uploads
    Recent {
        /// Forget all recent uploads
        #[arg(long)]
        clear: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Upload {
                files,
                cancel_after,
            } => upload::execute(files, *cancel_after),
            Commands::Glyph { combo, platform } => glyph::execute(combo, *platform),
            Commands::Recent { clear } => recent::execute(*clear),
        }
    }
}
