//! Movie and scene management commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::{Ctx, confirm};
use crate::error::ApiError;
use crate::models::{CreateMovieData, Movie, ReorderScenesData, SceneOrder};
use crate::session::Session;
use crate::ui;
use crate::validate;

#[derive(Debug, Subcommand)]
pub enum MoviesCommand {
    /// List your movies for a room
    List { room_id: i64 },
    /// Submit a movie to a room
    Submit {
        room_id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        genre: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ScenesCommand {
    /// Upload a scene image for one of your movies
    Upload {
        room_id: i64,
        movie_id: i64,
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        description: String,
    },
    /// Delete a scene
    Delete {
        scene_id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Reorder a movie's scenes; pass every scene id in the new order
    Reorder {
        room_id: i64,
        movie_id: i64,
        /// Scene ids in their new order, comma separated (e.g. 12,45,33)
        #[arg(long, value_delimiter = ',')]
        order: Vec<i64>,
    },
}

pub async fn handle_movies(
    cmd: MoviesCommand,
    ctx: &Ctx,
    _session: &Session,
) -> anyhow::Result<()> {
    match cmd {
        MoviesCommand::List { room_id } => list(ctx, room_id).await,
        MoviesCommand::Submit {
            room_id,
            title,
            year,
            genre,
        } => {
            let data = CreateMovieData { title, year, genre };
            submit(ctx, room_id, &data).await
        }
    }
}

pub async fn handle_scenes(
    cmd: ScenesCommand,
    ctx: &Ctx,
    _session: &Session,
) -> anyhow::Result<()> {
    match cmd {
        ScenesCommand::Upload {
            room_id,
            movie_id,
            image,
            description,
        } => upload(ctx, room_id, movie_id, &image, &description).await,
        ScenesCommand::Delete { scene_id, yes } => delete(ctx, scene_id, yes).await,
        ScenesCommand::Reorder {
            room_id,
            movie_id,
            order,
        } => reorder(ctx, room_id, movie_id, &order).await,
    }
}

async fn list(ctx: &Ctx, room_id: i64) -> anyhow::Result<()> {
    let room = ctx.client.room_details(room_id).await?;
    let response = ctx.client.my_movies(room_id).await?;
    print!("{}", ui::movies::render(&response, room.scenes_per_movie));
    Ok(())
}

async fn submit(ctx: &Ctx, room_id: i64, data: &CreateMovieData) -> anyhow::Result<()> {
    validate::validate_movie(data)?;

    let room = ctx.client.room_details(room_id).await?;
    let current = ctx.client.my_movies(room_id).await?;
    if validate::movie_quota_reached(&current.movies, room.movies_per_player) {
        anyhow::bail!(
            "you already submitted {} of {} movies for this room",
            current.movies.len(),
            room.movies_per_player
        );
    }

    let movie = match ctx.client.submit_movie(room_id, data).await {
        Ok(movie) => movie,
        Err(ApiError::BadRequest(msg)) => anyhow::bail!("movie rejected: {msg}"),
        Err(err) => return Err(err.into()),
    };
    println!("Submitted \"{}\" (#{}).", movie.title, movie.id);
    list(ctx, room_id).await
}

async fn upload(
    ctx: &Ctx,
    room_id: i64,
    movie_id: i64,
    image: &Path,
    description: &str,
) -> anyhow::Result<()> {
    let movie = find_my_movie(ctx, room_id, movie_id).await?;

    let metadata = std::fs::metadata(image)
        .map_err(|err| anyhow::anyhow!("cannot read {}: {err}", image.display()))?;
    let mime = validate::validate_scene_upload(image, metadata.len(), description)?;

    // Optimistic position hint; the server-confirmed order on the next
    // re-fetch is authoritative.
    let next_order = i32::try_from(movie.scenes.len()).unwrap_or(i32::MAX - 1) + 1;

    ctx.client
        .upload_scene(movie_id, next_order, description.trim(), image, mime)
        .await?;
    println!("Uploaded scene {next_order} for \"{}\".", movie.title);
    list(ctx, room_id).await
}

async fn delete(ctx: &Ctx, scene_id: i64, yes: bool) -> anyhow::Result<()> {
    if !confirm(&format!("Delete scene {scene_id}?"), yes)? {
        println!("Cancelled.");
        return Ok(());
    }
    match ctx.client.delete_scene(scene_id).await {
        Ok(()) => {
            println!("Deleted scene {scene_id}.");
            Ok(())
        }
        Err(ApiError::NotFound(_)) => anyhow::bail!("scene {scene_id} not found"),
        Err(err) => Err(err.into()),
    }
}

async fn reorder(ctx: &Ctx, room_id: i64, movie_id: i64, order: &[i64]) -> anyhow::Result<()> {
    let movie = find_my_movie(ctx, room_id, movie_id).await?;
    if order.len() != movie.scenes.len() {
        anyhow::bail!(
            "expected all {} scene ids of \"{}\", got {}",
            movie.scenes.len(),
            movie.title,
            order.len()
        );
    }
    for scene in &movie.scenes {
        if !order.contains(&scene.id) {
            anyhow::bail!("scene {} of \"{}\" is missing from the order", scene.id, movie.title);
        }
    }

    // Staged order; discarded in favor of whatever the re-fetch reports.
    let scene_orders = order
        .iter()
        .enumerate()
        .map(|(index, scene_id)| SceneOrder {
            scene_id: *scene_id,
            new_order: i32::try_from(index).unwrap_or(i32::MAX - 1) + 1,
        })
        .collect();

    ctx.client
        .reorder_scenes(&ReorderScenesData {
            movie_id,
            scene_orders,
        })
        .await?;
    println!("Reordered scenes of \"{}\".", movie.title);
    list(ctx, room_id).await
}

async fn find_my_movie(ctx: &Ctx, room_id: i64, movie_id: i64) -> anyhow::Result<Movie> {
    let response = ctx.client.my_movies(room_id).await?;
    response
        .movies
        .into_iter()
        .find(|m| m.id == movie_id)
        .ok_or_else(|| anyhow::anyhow!("movie {movie_id} is not one of yours in room {room_id}"))
}
