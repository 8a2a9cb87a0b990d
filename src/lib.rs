// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod config;
pub mod fs;
pub mod level;
pub mod map_formatter;
pub mod moves;
pub mod solution_formatter;
pub mod solver;

mod data;
mod map;
mod parser;
mod state;
mod vec2d;

pub use crate::data::{Block, BlockType, Dir, Pos};
pub use crate::map::{Map, Targets};
pub use crate::parser::ParserErr;
pub use crate::state::State;

use crate::config::{Bounds, HashKind};
use crate::fs::LoadErr;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self, bounds: &Bounds) -> Result<Level, LoadErr>;
}

pub trait Solve {
    fn solve(&self, hash: HashKind, print_status: bool) -> Result<SolverOk, SolverErr>;
}
