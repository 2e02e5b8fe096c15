//! # showbook common library
//!
//! Shared code for the showbook booking directory:
//! - Database schema, migrations and row models
//! - Venue / Artist / Show queries and transactional mutations
//! - Directory views (grouped listings, search, detail pages)
//! - Past/upcoming show partition and start time handling
//! - Configuration loading

pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod partition;
pub mod time;

pub use error::{Error, Result};
