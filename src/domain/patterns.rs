use std::str::FromStr;

use crate::error::ParseError;

/// A multi-cell shape that `setShape` stamps onto the grid.
/// Only the listed cells are written; everything else in the bounding box is
/// left as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Shape {
    /// Create a new shape from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Absolute positions of the alive cells when the shape's top-left corner is
    /// at (row, col), wrapping around a rows x cols torus
    pub fn positions(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .map(move |(dr, dc)| ((row + dr) % rows, (col + dc) % cols))
    }
}

impl FromStr for Shape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        presets::all_shapes()
            .into_iter()
            .find(|shape| shape.name == s)
            .ok_or_else(|| ParseError::UnknownShape(s.to_owned()))
    }
}

/// Shape library understood by `setShape`
pub mod presets {
    use super::*;

    /// Oscillator - a row of three, flips between horizontal and vertical
    pub fn oscillator() -> Shape {
        Shape::new(
            "oscillator",
            "Blinker (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Shape {
        Shape::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Get all available shapes
    pub fn all_shapes() -> Vec<Shape> {
        vec![oscillator(), glider()]
    }
}

/// How `setCopycats` lays copycat cells over the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopycatPattern {
    /// Right half mirrors the left half across the vertical center line
    Mirror,
}

impl CopycatPattern {
    pub const fn name(self) -> &'static str {
        match self {
            CopycatPattern::Mirror => "mirror",
        }
    }

    /// (follower, leader) position pairs for a rows x cols grid.
    /// Leaders always lie outside the follower set, so no copycat follows another.
    pub fn links(self, rows: usize, cols: usize) -> Vec<((usize, usize), (usize, usize))> {
        match self {
            CopycatPattern::Mirror => (0..rows)
                .flat_map(|row| {
                    ((cols + 1) / 2..cols).map(move |col| ((row, col), (row, cols - 1 - col)))
                })
                .collect(),
        }
    }
}

impl FromStr for CopycatPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mirror" => Ok(CopycatPattern::Mirror),
            other => Err(ParseError::UnknownCopycatPattern(other.to_owned())),
        }
    }
}
