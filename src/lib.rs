//! Zombie infection cellular automaton.
//!
//! A [`SimulationGrid`] holds empty, zombie, survivor and wall cells. Each
//! generation survivors next to a zombie turn, then zombies and survivors take
//! one random step into an empty neighbour.

pub mod cell;
pub mod config;
pub mod constants;
pub mod error;
pub mod random;
pub mod simulation;

pub use cell::CellState;
pub use config::{Palette, SimulationConfig, WallConfig};
pub use error::GridError;
pub use random::{RandomSource, ScriptedRandom, SimRng};
pub use simulation::{Census, SimulationGrid};
