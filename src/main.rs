//! Shoebox CLI application entry point
//!
//! Each invocation follows the library's lifecycle contract: load the
//! snapshot (or start empty on first run), seed the stock user if
//! missing, apply exactly one operation through the model's public API,
//! and flush the whole graph back to the snapshot.
//!
//! # Usage
//!
//! ```bash
//! # Register a user and create an album
//! shoebox user add alice
//! shoebox album create -u alice Trip
//!
//! # Import and tag a picture
//! shoebox photo import -u alice -a Trip beach.jpg
//! shoebox photo tag -u alice 0 Color Red
//!
//! # Search, optionally saving the results as a new album
//! shoebox search tags -u alice "Color=Red AND Size=Large"
//! shoebox search date -u alice 2024-01-01 2024-01-20 --save-as January
//! ```
//!
//! The snapshot lives at the path in `~/.config/shoebox/config.toml`
//! (default `<data dir>/shoebox/library.bin`); `--library` overrides it
//! for one invocation.

use shoebox::{
    ShoeboxError,
    cli::{AlbumCommands, Cli, Commands, PhotoCommands, SearchCommands, UserCommands},
    config::ShoeboxConfig,
    model::{Directory, PictureId, Tag, User},
    query,
    snapshot::SnapshotStore,
    stock,
};

type Result<T> = std::result::Result<T, ShoeboxError>;

fn handle_user_command(directory: &mut Directory, command: &UserCommands) -> Result<()> {
    match command {
        UserCommands::Add { username } => {
            directory.add_user(username)?;
            println!("Added user '{username}'");
        }
        UserCommands::Remove { username } => {
            directory.remove_user(username)?;
            println!("Removed user '{username}'");
        }
        UserCommands::List => {
            if directory.users().is_empty() {
                println!("No users in the library.");
            } else {
                for user in directory.users() {
                    println!(
                        "{} ({} album(s), id {})",
                        user.username(),
                        user.albums().len(),
                        user.id()
                    );
                }
            }
        }
    }
    Ok(())
}

fn handle_album_command(directory: &mut Directory, command: &AlbumCommands) -> Result<()> {
    match command {
        AlbumCommands::Create { user, name } => {
            directory.user_mut(user)?.create_album(name)?;
            println!("Created album '{name}' for {user}");
        }
        AlbumCommands::Rename { user, old, new } => {
            directory.user_mut(user)?.rename_album(old, new)?;
            println!("Renamed album '{old}' to '{new}'");
        }
        AlbumCommands::Delete { user, name } => {
            directory.user_mut(user)?.delete_album(name)?;
            println!("Deleted album '{name}'");
        }
        AlbumCommands::List { user } => {
            let user = lookup_user(directory, user)?;
            if user.albums().is_empty() {
                println!("No albums for {}.", user.username());
            } else {
                for album in user.albums() {
                    let range = album.date_range(user.pictures());
                    if range.is_empty() {
                        println!("{} ({} photo(s))", album.name(), album.photo_count());
                    } else {
                        println!(
                            "{} ({} photo(s), {range})",
                            album.name(),
                            album.photo_count()
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

fn handle_photo_command(directory: &mut Directory, command: &PhotoCommands) -> Result<()> {
    match command {
        PhotoCommands::Import { user, album, path } => {
            let id = directory.user_mut(user)?.import_picture(album, path)?;
            println!("Imported {} into '{album}' as {id}", path.display());
        }
        PhotoCommands::Copy { user, from, to, id } => {
            let id = PictureId::new(*id);
            directory.user_mut(user)?.copy_picture(from, to, id)?;
            println!("Linked {id} from '{from}' into '{to}'");
        }
        PhotoCommands::Move { user, from, to, id } => {
            let id = PictureId::new(*id);
            directory.user_mut(user)?.move_picture(from, to, id)?;
            println!("Moved {id} from '{from}' to '{to}'");
        }
        PhotoCommands::Remove { user, album, id } => {
            let id = PictureId::new(*id);
            directory.user_mut(user)?.remove_picture(album, id)?;
            println!("Removed {id} from '{album}'");
        }
        PhotoCommands::Caption { user, id, text } => {
            let id = PictureId::new(*id);
            directory.user_mut(user)?.picture_mut(id)?.set_caption(text)?;
            println!("Captioned {id}");
        }
        PhotoCommands::Tag { user, id, name, value } => {
            let id = PictureId::new(*id);
            let tag = Tag::new(name, value)?;
            directory.user_mut(user)?.picture_mut(id)?.add_tag(tag)?;
            println!("Tagged {id} with {name}={value}");
        }
        PhotoCommands::Untag { user, id, name, value } => {
            let id = PictureId::new(*id);
            let tag = Tag::new(name, value)?;
            if directory.user_mut(user)?.picture_mut(id)?.remove_tag(&tag) {
                println!("Removed {name}={value} from {id}");
            } else {
                println!("{id} has no tag {name}={value}");
            }
        }
        PhotoCommands::List { user, album } => {
            let user = lookup_user(directory, user)?;
            let album = user
                .album(album)
                .ok_or_else(|| ShoeboxError::InvalidInput(format!("unknown album '{album}'")))?;
            if album.members().is_empty() {
                println!("Album '{}' is empty.", album.name());
            } else {
                for &id in album.members() {
                    if let Some(picture) = user.picture(id) {
                        print_picture(id, picture);
                    }
                }
            }
        }
    }
    Ok(())
}

fn handle_search_command(directory: &mut Directory, command: &SearchCommands) -> Result<()> {
    let (user, results, save_as) = match command {
        SearchCommands::Tags { user, query, save_as } => {
            let found = query::search_by_tags(lookup_user(directory, user)?, query)?;
            (user, found, save_as)
        }
        SearchCommands::Date { user, start, end, save_as } => {
            let found = query::search_by_date(lookup_user(directory, user)?, *start, *end)?;
            (user, found, save_as)
        }
    };

    if results.is_empty() {
        println!("No photos matching search.");
    } else {
        let owner = lookup_user(directory, user)?;
        for &id in &results {
            if let Some(picture) = owner.picture(id) {
                print_picture(id, picture);
            }
        }
    }

    if let Some(album_name) = save_as {
        directory.user_mut(user)?.create_album_from(album_name, &results)?;
        println!(
            "Saved {} result(s) as album '{album_name}'",
            results.len()
        );
    }
    Ok(())
}

fn lookup_user<'a>(directory: &'a Directory, username: &str) -> Result<&'a User> {
    directory
        .login(username)
        .ok_or_else(|| ShoeboxError::InvalidInput(format!("unknown user '{username}'")))
}

fn print_picture(id: PictureId, picture: &shoebox::model::Picture) {
    let tags: Vec<String> = picture.tags().iter().map(ToString::to_string).collect();
    if tags.is_empty() {
        println!(
            "{} {} \"{}\" ({})",
            id.raw(),
            picture.name(),
            picture.caption(),
            picture.formatted_datetime()
        );
    } else {
        println!(
            "{} {} \"{}\" ({}) [{}]",
            id.raw(),
            picture.name(),
            picture.caption(),
            picture.formatted_datetime(),
            tags.join(", ")
        );
    }
}

/// Main entry point for the shoebox application
///
/// # Errors
///
/// Returns `ShoeboxError` if configuration loading, snapshot I/O, or
/// any command handler fails.
fn main() -> Result<()> {
    shoebox::logging::init();

    let cli = Cli::parse_args();
    let config = ShoeboxConfig::load()?;

    let library_path = cli.library.unwrap_or(config.library_path);
    let store = SnapshotStore::new(&library_path);

    let mut directory = store.load()?;
    stock::seed_stock_user(&mut directory, &config.stock_dir)?;

    match &cli.command {
        Commands::User { command } => handle_user_command(&mut directory, command)?,
        Commands::Album { command } => handle_album_command(&mut directory, command)?,
        Commands::Photo { command } => handle_photo_command(&mut directory, command)?,
        Commands::Search { command } => handle_search_command(&mut directory, command)?,
    }

    store.save(&directory)?;
    Ok(())
}
