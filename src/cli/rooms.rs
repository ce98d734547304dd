//! Room commands: list, create, show, join (by id or code), leave.
//!
//! Every mutation re-fetches the room list afterwards; consistency comes
//! from full reload, never from patching local state.

use clap::Subcommand;

use super::{Ctx, confirm};
use crate::error::ApiError;
use crate::models::CreateRoomData;
use crate::session::Session;
use crate::ui::dashboard;
use crate::validate;

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List your rooms with summary statistics
    List,
    /// Create a new room
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = 4)]
        max_players: i32,
        #[arg(long, default_value_t = 4)]
        movies_per_player: i32,
        #[arg(long, default_value_t = 10)]
        scenes_per_movie: i32,
        /// Make the room joinable only with its access code
        #[arg(long)]
        private: bool,
    },
    /// Show one room in full
    Show { room_id: i64 },
    /// Join a room by id
    Join { room_id: i64 },
    /// Join a room by its 6-character access code
    JoinCode { code: String },
    /// Leave a room
    Leave {
        room_id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn handle(cmd: RoomsCommand, ctx: &Ctx, session: &Session) -> anyhow::Result<()> {
    match cmd {
        RoomsCommand::List => list(ctx).await,
        RoomsCommand::Create {
            name,
            description,
            max_players,
            movies_per_player,
            scenes_per_movie,
            private,
        } => {
            let data = CreateRoomData {
                name,
                description,
                max_players,
                movies_per_player,
                scenes_per_movie,
                is_private: private,
            };
            create(ctx, &data).await
        }
        RoomsCommand::Show { room_id } => show(ctx, room_id).await,
        RoomsCommand::Join { room_id } => join(ctx, room_id, None).await,
        RoomsCommand::JoinCode { code } => join_by_code(ctx, &code).await,
        RoomsCommand::Leave { room_id, yes } => leave(ctx, session, room_id, yes).await,
    }
}

async fn list(ctx: &Ctx) -> anyhow::Result<()> {
    let rooms = ctx.client.my_rooms().await?;
    print!("{}", dashboard::render(&rooms));
    Ok(())
}

async fn create(ctx: &Ctx, data: &CreateRoomData) -> anyhow::Result<()> {
    validate::validate_create_room(data)?;
    let room = ctx.client.create_room(data).await?;
    println!("Created room #{} ({}).", room.id, room.room_code);
    list(ctx).await
}

async fn show(ctx: &Ctx, room_id: i64) -> anyhow::Result<()> {
    let room = match ctx.client.room_details(room_id).await {
        Ok(room) => room,
        Err(ApiError::NotFound(_)) => anyhow::bail!("room {room_id} not found"),
        Err(err) => return Err(err.into()),
    };
    print!("{}", dashboard::render_details(&room));
    Ok(())
}

async fn join(ctx: &Ctx, room_id: i64, room_code: Option<&str>) -> anyhow::Result<()> {
    match ctx.client.join_room(room_id, room_code).await {
        Ok(()) => {}
        Err(ApiError::NotFound(_)) => anyhow::bail!("room {room_id} not found"),
        Err(ApiError::BadRequest(_)) => {
            anyhow::bail!("could not join room {room_id}: it may be full or already started")
        }
        Err(ApiError::Forbidden(_)) => {
            anyhow::bail!("room {room_id} is private; join it with its access code")
        }
        Err(err) => return Err(err.into()),
    }
    println!("Joined room {room_id}.");
    list(ctx).await
}

async fn join_by_code(ctx: &Ctx, code: &str) -> anyhow::Result<()> {
    let code = validate::normalize_join_code(code)?;
    let Some(room) = ctx.client.find_room_by_code(&code).await? else {
        anyhow::bail!("no room found with code {code}");
    };
    join(ctx, room.id, Some(&code)).await
}

async fn leave(ctx: &Ctx, session: &Session, room_id: i64, yes: bool) -> anyhow::Result<()> {
    let room = ctx.client.room_details(room_id).await?;
    if !crate::utils::room::is_participant(&room, session.player.id) {
        anyhow::bail!("you are not in room {room_id}");
    }
    if !confirm(&format!("Leave room \"{}\"?", room.name), yes)? {
        println!("Cancelled.");
        return Ok(());
    }
    ctx.client.leave_room(room_id).await?;
    println!("Left room {room_id}.");
    list(ctx).await
}
