//! Movie management view: the user's submissions for a room, with scene
//! progress.

use crate::models::{Movie, MyMoviesResponse};

/// Render the my-movies screen for a room.
#[must_use]
pub fn render(response: &MyMoviesResponse, scenes_per_movie: i32) -> String {
    let mut out = String::new();
    if !response.message.is_empty() {
        out.push_str(&format!("{}\n", response.message));
    }
    if !response.instruction.is_empty() {
        out.push_str(&format!("{}\n", response.instruction));
    }
    if !out.is_empty() {
        out.push('\n');
    }

    if response.movies.is_empty() {
        out.push_str("No movies submitted yet.\n");
        return out;
    }

    for movie in &response.movies {
        out.push_str(&render_movie(movie, scenes_per_movie));
    }
    out
}

fn render_movie(movie: &Movie, scenes_per_movie: i32) -> String {
    let complete = if movie.has_all_scenes {
        " - complete"
    } else {
        ""
    };
    let mut out = format!(
        "#{} {} ({}) [{}] - {}/{} scenes{}\n",
        movie.id,
        movie.title,
        movie.year,
        movie.genre,
        movie.scenes.len(),
        scenes_per_movie,
        complete,
    );
    for scene in &movie.scenes {
        out.push_str(&format!(
            "  {}. scene #{} - {}\n",
            scene.order, scene.id, scene.description
        ));
    }
    out
}
