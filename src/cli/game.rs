//! Live game commands: one-shot actions plus the polling watch loop.
//!
//! Actions re-fetch the game state immediately on success instead of
//! waiting for the next poll tick.

use clap::Subcommand;

use super::{Ctx, confirm};
use crate::error::ApiError;
use crate::models::{
    AssignPointData, GameState, Room, RoomType, SessionStatus, SubmitGuessData,
};
use crate::poll::GameStatePoller;
use crate::session::Session;
use crate::ui;
use crate::utils::room::is_owner;

#[derive(Debug, Subcommand)]
pub enum GameCommand {
    /// Show the current game state once
    Show { room_id: i64 },
    /// Start the game (room owner only)
    Start { room_id: i64 },
    /// Submit a guess for the current scene
    Guess {
        room_id: i64,
        /// The movie title you are guessing
        title: String,
    },
    /// Skip the current scene
    Skip { room_id: i64 },
    /// Award a point to a player (in-person rooms, owner only)
    Point { room_id: i64, player_id: i64 },
    /// Advance to the next scene (room owner only)
    Next { room_id: i64 },
    /// End the game (room owner only)
    End {
        room_id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Follow the game live, re-rendering on every poll
    Watch { room_id: i64 },
}

pub async fn handle(cmd: GameCommand, ctx: &Ctx, session: &Session) -> anyhow::Result<()> {
    match cmd {
        GameCommand::Show { room_id } => show(ctx, session, room_id).await,
        GameCommand::Start { room_id } => start(ctx, session, room_id).await,
        GameCommand::Guess { room_id, title } => guess(ctx, session, room_id, &title, false).await,
        GameCommand::Skip { room_id } => guess(ctx, session, room_id, "", true).await,
        GameCommand::Point { room_id, player_id } => point(ctx, session, room_id, player_id).await,
        GameCommand::Next { room_id } => next(ctx, session, room_id).await,
        GameCommand::End { room_id, yes } => end(ctx, session, room_id, yes).await,
        GameCommand::Watch { room_id } => watch(ctx, session, room_id).await,
    }
}

async fn fetch_room(ctx: &Ctx, room_id: i64) -> anyhow::Result<Room> {
    match ctx.client.room_details(room_id).await {
        Ok(room) => Ok(room),
        Err(ApiError::NotFound(_)) => anyhow::bail!("room {room_id} not found"),
        Err(err) => Err(err.into()),
    }
}

async fn fetch_state(ctx: &Ctx, room_id: i64) -> anyhow::Result<Option<GameState>> {
    match ctx.client.game_state(room_id).await {
        Ok(state) => Ok(Some(state)),
        Err(ApiError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Fetch and render once; used by `show` and after every successful action.
async fn render_current(ctx: &Ctx, session: &Session, room: &Room) -> anyhow::Result<()> {
    let state = fetch_state(ctx, room.id).await?;
    print!("{}", ui::game::render(room, state.as_ref(), session.player.id));
    Ok(())
}

async fn show(ctx: &Ctx, session: &Session, room_id: i64) -> anyhow::Result<()> {
    let room = fetch_room(ctx, room_id).await?;
    render_current(ctx, session, &room).await
}

async fn start(ctx: &Ctx, session: &Session, room_id: i64) -> anyhow::Result<()> {
    let room = fetch_room(ctx, room_id).await?;
    if !ui::game::can_start_game(&room, session.player.id) {
        anyhow::bail!("only the room owner can start the game, and only while it is waiting");
    }
    match ctx.client.start_game(room_id).await {
        Ok(()) => {}
        Err(ApiError::BadRequest(msg)) => anyhow::bail!("could not start the game: {msg}"),
        Err(err) => return Err(err.into()),
    }
    println!("Game started.");
    render_current(ctx, session, &room).await
}

async fn guess(
    ctx: &Ctx,
    session: &Session,
    room_id: i64,
    title: &str,
    is_skip: bool,
) -> anyhow::Result<()> {
    if !is_skip && title.trim().is_empty() {
        anyhow::bail!("the guess cannot be empty");
    }

    let room = fetch_room(ctx, room_id).await?;
    let Some(state) = fetch_state(ctx, room_id).await? else {
        anyhow::bail!("no game is running in room {room_id}");
    };
    if state.session.status != SessionStatus::Playing {
        anyhow::bail!("the game is not in progress");
    }
    if state.has_guessed_current_scene {
        anyhow::bail!("you already guessed this scene; wait for the next one");
    }
    if !state.can_guess {
        anyhow::bail!("it is not your turn to guess");
    }
    let Some(movie) = &state.current_movie else {
        anyhow::bail!("no scene is currently shown");
    };

    let data = SubmitGuessData {
        game_session_id: state.session.id,
        movie_id: movie.id,
        scene_index: state.session.current_scene_index,
        guess: title.trim().to_string(),
        is_skip,
    };
    ctx.client.submit_guess(&data).await?;
    println!("{}", if is_skip { "Scene skipped." } else { "Guess submitted." });
    render_current(ctx, session, &room).await
}

async fn point(ctx: &Ctx, session: &Session, room_id: i64, player_id: i64) -> anyhow::Result<()> {
    let room = fetch_room(ctx, room_id).await?;
    if room.room_type != RoomType::Offline {
        anyhow::bail!("points are assigned manually only in in-person rooms");
    }
    if !is_owner(&room, session.player.id) {
        anyhow::bail!("only the room owner assigns points");
    }
    let Some(state) = fetch_state(ctx, room_id).await? else {
        anyhow::bail!("no game is running in room {room_id}");
    };
    let Some(movie) = &state.current_movie else {
        anyhow::bail!("no scene is currently shown");
    };

    let data = AssignPointData {
        game_session_id: state.session.id,
        player_id,
        movie_id: movie.id,
        points: 1,
    };
    match ctx.client.assign_point(&data).await {
        Ok(()) => {}
        Err(ApiError::BadRequest(msg)) => anyhow::bail!("could not assign the point: {msg}"),
        Err(err) => return Err(err.into()),
    }
    println!("Point assigned to player {player_id}.");
    render_current(ctx, session, &room).await
}

async fn next(ctx: &Ctx, session: &Session, room_id: i64) -> anyhow::Result<()> {
    let room = fetch_room(ctx, room_id).await?;
    if !is_owner(&room, session.player.id) {
        anyhow::bail!("only the room owner advances scenes");
    }
    ctx.client.next_scene(room_id).await?;
    println!("Advanced to the next scene.");
    render_current(ctx, session, &room).await
}

async fn end(ctx: &Ctx, session: &Session, room_id: i64, yes: bool) -> anyhow::Result<()> {
    let room = fetch_room(ctx, room_id).await?;
    if !is_owner(&room, session.player.id) {
        anyhow::bail!("only the room owner can end the game");
    }
    if !confirm("End the game for everyone?", yes)? {
        println!("Cancelled.");
        return Ok(());
    }
    ctx.client.end_game(room_id).await?;
    println!("Game ended.");
    render_current(ctx, session, &room).await
}

/// Poll the game state on the configured interval and re-render every
/// snapshot until the game finishes or Ctrl+C.
async fn watch(ctx: &Ctx, session: &Session, room_id: i64) -> anyhow::Result<()> {
    let room = fetch_room(ctx, room_id).await?;
    let interval = ctx.client.config().poll_interval;
    let poller = GameStatePoller::spawn(ctx.client.clone(), room_id, interval);
    let mut rx = poller.subscribe();

    println!(
        "Watching \"{}\" (every {}s, Ctrl+C to stop)\n",
        room.name,
        interval.as_secs()
    );

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                print!("{}", ui::game::render(&room, state.as_ref(), session.player.id));
                println!("---");
                if state
                    .as_ref()
                    .is_some_and(|s| s.session.status == SessionStatus::Finished)
                {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("Stopped watching.");
                break;
            }
        }
    }

    poller.stop();
    Ok(())
}
