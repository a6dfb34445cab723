//! CLI command implementations.

pub mod favorite;
pub mod health;
pub mod menu;
pub mod profile;
pub mod survey;
pub mod tasting;
pub mod version;
pub mod wine;
