mod algorithm;
mod cell;
mod color;
mod command;
mod grid;
mod patterns;
pub mod rules;
pub mod tile;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use color::TileColor;
pub use command::Command;
pub use grid::{Grid, NEIGHBOR_OFFSETS};
pub use patterns::{CopycatPattern, Shape, presets};
pub use tile::{Tile, TileKind};
