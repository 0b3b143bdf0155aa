//! # Mystery Core
//!
//! The deduction engine of the murder mystery. This crate builds on
//! `mystery_rules`, picks who killed whom, and decides what each suspect is
//! willing to say when questioned.
//!
//! ## Core Components
//!
//! - **roles**: Picks the victim, the killer and their motive for a session
//! - **dialogue**: Resolves a question about a clue into a line of speech
//! - **session**: Owns the cast, clues, rooms, player and the seeded RNG
//!
//! ## Design Philosophy
//!
//! - **Explicit context**: Resolution reads everything it needs from its arguments
//! - **Reproducible**: All randomness comes from an injected, seedable RNG
//! - **Typed outcomes**: Every failure is a `CoreError`, never a panic or a hang

pub mod dialogue;
pub mod error;
pub mod roles;
pub mod session;

pub use dialogue::*;
pub use error::*;
pub use roles::*;
pub use session::*;
