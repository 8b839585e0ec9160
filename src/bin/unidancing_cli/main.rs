// ABOUTME: UniDancing CLI - command-line tool for exercise catalogs and Spotify playlists
// ABOUTME: Lists and filters exercises, inspects media, formats labels, and shows playlists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors
//!
//! Usage:
//! ```bash
//! # List pair exercises for beginners
//! unidancing-cli exercises list --file exercises.json --personal pair --difficulty beginner
//!
//! # List all songs referenced by the catalog
//! unidancing-cli exercises media --file exercises.json --kind song
//!
//! # Render a participation mode with its label
//! unidancing-cli format personal group --text
//!
//! # Show a Spotify playlist (requires SPOTIFY_ACCESS_TOKEN)
//! unidancing-cli playlist show 37i9dQZF1DXcBWIGoYBM5M
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use tracing::debug;
use unidancing::constants::service_names;
use unidancing::logging::LoggingConfig;
use unidancing::models::{Difficulty, Locomotion, MediaKind, Personal};

use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = service_names::UNIDANCING_CLI,
    about = "UniDancing training content CLI",
    long_about = "Inspect exercise catalogs exported from the CMS, render exercise labels, and look up Spotify playlists."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Exercise catalog commands
    Exercises {
        #[command(subcommand)]
        action: ExercisesCommand,
    },

    /// Render exercise attributes
    Format {
        #[command(subcommand)]
        action: FormatCommand,
    },

    /// Spotify playlist commands
    Playlist {
        #[command(subcommand)]
        action: PlaylistCommand,
    },
}

#[derive(Subcommand)]
enum ExercisesCommand {
    /// List exercises, optionally filtered
    List {
        /// Catalog file (JSON array of exercises)
        #[arg(long)]
        file: PathBuf,

        /// Participation mode (individual, pair, group)
        #[arg(long)]
        personal: Option<Personal>,

        /// Difficulty (beginner, intermediate, advanced)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Locomotion (unicycle, pedes)
        #[arg(long)]
        locomotion: Option<Locomotion>,
    },

    /// List media attached to exercises and their instructions
    Media {
        /// Catalog file (JSON array of exercises)
        #[arg(long)]
        file: PathBuf,

        /// Only media of this kind (dancemix, loop, song, material)
        #[arg(long)]
        kind: Option<MediaKind>,
    },
}

#[derive(Subcommand)]
enum FormatCommand {
    /// Render a participation mode
    Personal {
        /// Participation mode (individual, pair, group)
        value: Personal,

        /// Omit the icon
        #[arg(long)]
        no_icon: bool,

        /// Include the label
        #[arg(long)]
        text: bool,
    },
}

#[derive(Subcommand)]
enum PlaylistCommand {
    /// Fetch a playlist and list its tracks
    Show {
        /// Spotify playlist id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;
    debug!("{} {}", service_names::UNIDANCING_CLI, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Exercises { action } => match action {
            ExercisesCommand::List {
                file,
                personal,
                difficulty,
                locomotion,
            } => commands::exercises::list(&file, personal, difficulty, locomotion)?,
            ExercisesCommand::Media { file, kind } => commands::exercises::media(&file, kind)?,
        },
        Command::Format { action } => match action {
            FormatCommand::Personal {
                value,
                no_icon,
                text,
            } => commands::format::personal(value, !no_icon, text),
        },
        Command::Playlist { action } => match action {
            PlaylistCommand::Show { id } => commands::playlist::show(&id).await?,
        },
    }

    Ok(())
}
