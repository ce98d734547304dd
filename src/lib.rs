//! Reelparty client - terminal client for the movie-scene guessing party game
//!
//! This crate provides the player-facing client for Reelparty, enabling:
//! - Account sign-in and session persistence
//! - Room creation, joining and management
//! - Movie submission and scene image uploads
//! - Live game participation driven by server-state polling
//!
//! All authoritative game logic lives on the backend; this crate validates
//! input, issues HTTP requests, and renders server-provided snapshots.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod poll;
pub mod session;
pub mod ui;
pub mod utils;
pub mod validate;
