pub mod assets;
pub mod compute;
pub mod config;
pub mod cooldown;
pub mod effects;
pub mod entities;
pub mod error;
pub mod score;
