//! Game-state engine for two-player naval combat.
//!
//! [`Board`] owns one side's ships and attack history, [`Match`] sequences
//! turns between two boards and detects the winner. Presentation and input
//! live outside this crate and talk to it through result values.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
