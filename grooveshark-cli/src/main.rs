use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use grooveshark_api::{ClientConfig, Credentials, GroovesharkClient, Transport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grooveshark", version, about = "Grooveshark public API CLI")]
struct Cli {
    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    timeout: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save API credentials
    Configure {
        /// Public API key (`wsKey`)
        #[arg(required_unless_present = "check")]
        key: Option<String>,
        /// Secret API key
        #[arg(required_unless_present = "check")]
        secret: Option<String>,
        /// Check which credentials would be used
        #[arg(long)]
        check: bool,
    },
    /// Remove saved credentials
    Unconfigure,
    /// Ping the service
    Ping,
    /// Start a session and print its id
    Session,
    /// Log in and show the user profile
    Login {
        /// Username or email
        login: String,
        /// Password
        password: String,
    },
    /// Show playlist details
    Playlist {
        /// Playlist ID
        playlist_id: String,
        /// Max songs to list
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Create a playlist
    CreatePlaylist {
        /// Playlist name
        name: String,
        /// Song IDs to add
        song_ids: Vec<u64>,
        #[command(flatten)]
        user: UserArgs,
    },
    /// Delete a playlist
    DeletePlaylist {
        /// Playlist ID
        playlist_id: u64,
        #[command(flatten)]
        user: UserArgs,
    },
    /// Add a song to favorites
    Favorite {
        /// Song ID
        song_id: u64,
        #[command(flatten)]
        user: UserArgs,
    },
}

/// Sessions never outlive the process, so user-scoped commands log in first.
#[derive(Args)]
struct UserArgs {
    /// Username or email
    #[arg(short, long)]
    user: String,
    /// Password
    #[arg(short, long)]
    password: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout);
    match cli.command {
        Command::Configure { key, secret, check } => cmd_configure(key, secret, check),
        Command::Unconfigure => cmd_unconfigure(),
        Command::Ping => cmd_ping(timeout),
        Command::Session => cmd_session(timeout),
        Command::Login { login, password } => cmd_login(timeout, &login, &password),
        Command::Playlist { playlist_id, limit } => cmd_playlist(timeout, &playlist_id, limit),
        Command::CreatePlaylist {
            name,
            song_ids,
            user,
        } => cmd_create_playlist(timeout, &name, &song_ids, &user),
        Command::DeletePlaylist { playlist_id, user } => {
            cmd_delete_playlist(timeout, playlist_id, &user)
        }
        Command::Favorite { song_id, user } => cmd_favorite(timeout, song_id, &user),
    }
}

fn client(timeout: Duration) -> Result<GroovesharkClient> {
    let credentials = Credentials::resolve()
        .context("set GROOVESHARK_KEY/GROOVESHARK_SECRET or run `grooveshark configure`")?;
    let config = ClientConfig::default().timeout(timeout);
    Ok(GroovesharkClient::with_config(credentials, config)?)
}

fn as_user<R>(
    timeout: Duration,
    user: &UserArgs,
    op: impl FnOnce(&mut GroovesharkClient) -> grooveshark_api::Result<R>,
) -> Result<R> {
    run_as_user(client(timeout)?, user, op)
}

/// Log in, run `op`, then log out whether or not `op` succeeded.
///
/// A failed logout is only a warning; the command's outcome is `op`'s.
fn run_as_user<T: Transport, R>(
    mut client: GroovesharkClient<T>,
    user: &UserArgs,
    op: impl FnOnce(&mut GroovesharkClient<T>) -> grooveshark_api::Result<R>,
) -> Result<R> {
    client
        .authenticate(&user.user, &user.password)
        .context("login failed")?;
    let result = op(&mut client);
    if let Err(e) = client.logout() {
        eprintln!("warning: logout failed: {e}");
    }
    Ok(result?)
}

// ── configure ──

fn cmd_configure(key: Option<String>, secret: Option<String>, check: bool) -> Result<()> {
    if check {
        match Credentials::resolve() {
            Ok(creds) => println!("Using public key: {}", creds.public_key()),
            Err(e) => println!("Not configured: {e}"),
        }
        return Ok(());
    }

    let key = key.context("public key required")?;
    let secret = secret.context("secret key required")?;
    let path = Credentials::new(key, secret).save()?;
    println!("Credentials saved to {}.", path.display());
    Ok(())
}

fn cmd_unconfigure() -> Result<()> {
    Credentials::clear()?;
    println!("Credentials cleared.");
    Ok(())
}

// ── session ──

fn cmd_ping(timeout: Duration) -> Result<()> {
    let msg = client(timeout)?.ping_service()?;
    println!("{msg}");
    Ok(())
}

fn cmd_session(timeout: Duration) -> Result<()> {
    let id = client(timeout)?.start_session()?;
    println!("Session: {id}");
    Ok(())
}

fn cmd_login(timeout: Duration, login: &str, password: &str) -> Result<()> {
    let mut client = client(timeout)?;
    let user = client.authenticate(login, password)?;
    println!("User:    {} {} (id={})", user.first_name, user.last_name, user.user_id);
    println!("Email:   {}", user.email);
    println!(
        "Plan:    plus={} anywhere={} premium={}",
        user.is_plus, user.is_anywhere, user.is_premium
    );
    if let Err(e) = client.logout() {
        eprintln!("warning: logout failed: {e}");
    }
    Ok(())
}

// ── playlists ──

fn cmd_playlist(timeout: Duration, playlist_id: &str, limit: Option<u32>) -> Result<()> {
    let p = client(timeout)?.get_playlist(playlist_id, limit)?;
    println!("Playlist: {}", p.name);
    println!("Owner:    {}", p.user_id);
    if !p.description.is_empty() {
        println!("Desc:     {}", p.description);
    }
    println!("Songs:    {}", p.songs.len());
    println!();
    for s in &p.songs {
        println!("  [{}] {} - {} ({})", s.song_id, s.artist_name, s.song_name, s.album_name);
    }
    Ok(())
}

fn cmd_create_playlist(timeout: Duration, name: &str, song_ids: &[u64], user: &UserArgs) -> Result<()> {
    let created = as_user(timeout, user, |client| client.create_playlist(name, song_ids))?;
    println!("Created playlist {} ({} songs)", created.playlist_id, song_ids.len());
    Ok(())
}

fn cmd_delete_playlist(timeout: Duration, playlist_id: u64, user: &UserArgs) -> Result<()> {
    as_user(timeout, user, |client| client.delete_playlist(playlist_id))?;
    println!("Deleted playlist {playlist_id}");
    Ok(())
}

// ── favorites ──

fn cmd_favorite(timeout: Duration, song_id: u64, user: &UserArgs) -> Result<()> {
    as_user(timeout, user, |client| client.add_user_favorite_song(song_id))?;
    println!("Added {song_id} to favorites");
    Ok(())
}
