//! Terminal screen renderers.
//!
//! Each view is a pure function from fetched snapshots to screen text, so
//! re-rendering the same snapshot always yields identical output.

pub mod dashboard;
pub mod game;
pub mod movies;
