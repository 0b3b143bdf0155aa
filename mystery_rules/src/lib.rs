//! # Mystery Rules
//!
//! The "Rulebook" crate - clues, personalities, characters, rooms and the
//! authored scenario data they are built from.
//! This crate owns no session state and makes no deduction decisions.

pub mod config;
pub mod data;
pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use config::*;
pub use data::*;
pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
