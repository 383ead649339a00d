//! lq-core: Core progression engine for LifeQuest
//!
//! This crate contains all game rules with no I/O dependencies.
//! It is designed to be pure and testable: the only external input is
//! the random source injected into task resolution.

pub mod achievement;
pub mod catalog;
pub mod player;
pub mod quest;
pub mod shop;
pub mod task;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::GameError;
pub use rng::{FixedRoll, GameRng, RngSource};
