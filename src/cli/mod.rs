//! Command-line surface. Each backend screen maps to a subcommand group.

pub mod auth;
pub mod game;
pub mod movies;
pub mod rooms;

use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::config::Config;
use crate::session::{Session, SessionStore};

#[derive(Debug, Parser)]
#[command(
    name = "reelparty",
    version,
    about = "Terminal client for the Reelparty movie-scene guessing party game"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, register, sign out, show the current account
    #[command(subcommand)]
    Auth(auth::AuthCommand),
    /// List, create, join and leave rooms
    #[command(subcommand)]
    Rooms(rooms::RoomsCommand),
    /// Submit movies for a room
    #[command(subcommand)]
    Movies(movies::MoviesCommand),
    /// Upload, delete and reorder scene images
    #[command(subcommand)]
    Scenes(movies::ScenesCommand),
    /// Play: show state, act, or watch the live game
    #[command(subcommand)]
    Game(game::GameCommand),
}

/// Shared handler context: the gateway plus the session store.
pub struct Ctx {
    pub client: ApiClient,
    pub store: SessionStore,
}

/// Dispatch a parsed command.
///
/// Every command except `auth login`/`auth register` restores the persisted
/// session first; a rejected token clears the session and asks the user to
/// sign in again.
pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let store = SessionStore::new(config.session_file.clone());
    let client = ApiClient::new(config);
    let mut ctx = Ctx { client, store };

    match cli.command {
        Command::Auth(cmd) => auth::handle(cmd, &mut ctx).await,
        Command::Rooms(cmd) => {
            let session = signed_in(&mut ctx).await?;
            rooms::handle(cmd, &ctx, &session).await
        }
        Command::Movies(cmd) => {
            let session = signed_in(&mut ctx).await?;
            movies::handle_movies(cmd, &ctx, &session).await
        }
        Command::Scenes(cmd) => {
            let session = signed_in(&mut ctx).await?;
            movies::handle_scenes(cmd, &ctx, &session).await
        }
        Command::Game(cmd) => {
            let session = signed_in(&mut ctx).await?;
            game::handle(cmd, &ctx, &session).await
        }
    }
}

/// Restore the stored session or fail with a sign-in hint.
async fn signed_in(ctx: &mut Ctx) -> anyhow::Result<Session> {
    let restored = {
        let Ctx { client, store } = ctx;
        store.restore(client).await
    };
    restored.ok_or_else(|| {
        anyhow::anyhow!("you are not signed in (run `reelparty auth login` first)")
    })
}

/// Ask the user to confirm a destructive action. `assume_yes` skips the
/// prompt for scripted use.
pub fn confirm(prompt: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
