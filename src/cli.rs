//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for shoebox using the `clap`
//! crate. The CLI is the "collaborator" surface of the core: every
//! invocation loads the library snapshot, applies one operation through
//! the model's public API, and saves the snapshot back.
//!
//! # Commands
//!
//! - **user**: Manage users (add, remove, list)
//! - **album**: Manage a user's albums (create, rename, delete, list)
//! - **photo**: Manage pictures (import, copy, move, remove, caption,
//!   tag, untag, list)
//! - **search**: Query a user's pictures by tags or by date range,
//!   optionally saving the results as a new album

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A personal photo organizer
#[derive(Parser, Debug)]
#[command(name = "shoebox", version, about)]
pub struct Cli {
    /// Override the library snapshot path
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage a user's albums
    Album {
        #[command(subcommand)]
        command: AlbumCommands,
    },
    /// Manage pictures
    Photo {
        #[command(subcommand)]
        command: PhotoCommands,
    },
    /// Search a user's pictures
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },
}

/// User management subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a new user
    Add { username: String },
    /// Remove a user and everything it owns
    Remove { username: String },
    /// List all users
    List,
}

/// Album management subcommands
#[derive(Subcommand, Debug)]
pub enum AlbumCommands {
    /// Create a new, empty album
    Create {
        /// Owning user
        #[arg(short, long)]
        user: String,
        /// Album name
        name: String,
    },
    /// Rename an album
    Rename {
        #[arg(short, long)]
        user: String,
        /// Current album name
        old: String,
        /// New album name
        new: String,
    },
    /// Delete an album (pictures shared into other albums survive)
    Delete {
        #[arg(short, long)]
        user: String,
        name: String,
    },
    /// List a user's albums with photo counts and date ranges
    List {
        #[arg(short, long)]
        user: String,
    },
}

/// Picture management subcommands
#[derive(Subcommand, Debug)]
pub enum PhotoCommands {
    /// Import an image file into an album
    Import {
        #[arg(short, long)]
        user: String,
        /// Target album
        #[arg(short, long)]
        album: String,
        /// Path of the image file
        path: PathBuf,
    },
    /// Link a picture into a second album without copying it
    Copy {
        #[arg(short, long)]
        user: String,
        /// Source album
        from: String,
        /// Destination album
        to: String,
        /// Picture id as shown by `photo list`
        id: u64,
    },
    /// Move a picture between albums
    Move {
        #[arg(short, long)]
        user: String,
        from: String,
        to: String,
        id: u64,
    },
    /// Remove a picture from one album
    Remove {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        album: String,
        id: u64,
    },
    /// Replace a picture's caption
    Caption {
        #[arg(short, long)]
        user: String,
        id: u64,
        /// New caption text (at most 250 characters)
        text: String,
    },
    /// Attach a tag to a picture
    Tag {
        #[arg(short, long)]
        user: String,
        id: u64,
        /// Tag name, 1-20 alphanumeric characters
        name: String,
        /// Tag value, 1-20 alphanumeric characters
        value: String,
    },
    /// Detach a tag from a picture
    Untag {
        #[arg(short, long)]
        user: String,
        id: u64,
        name: String,
        value: String,
    },
    /// List the pictures in an album
    List {
        #[arg(short, long)]
        user: String,
        #[arg(short, long)]
        album: String,
    },
}

/// Search subcommands
#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Search by tag query: `Name=Value`, optionally joined by AND/OR
    Tags {
        #[arg(short, long)]
        user: String,
        /// The query string, e.g. "Color=Red AND Size=Large"
        query: String,
        /// Save the results as a new album with this name
        #[arg(long)]
        save_as: Option<String>,
    },
    /// Search by capture date range, inclusive at both ends
    Date {
        #[arg(short, long)]
        user: String,
        /// Start date (YYYY-MM-DD)
        start: NaiveDate,
        /// End date (YYYY-MM-DD)
        end: NaiveDate,
        /// Save the results as a new album with this name
        #[arg(long)]
        save_as: Option<String>,
    },
}
