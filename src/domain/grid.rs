use super::{Cell, Tile};
use crate::error::{EngineError, Result};
use rayon::prelude::*;

/// Row/column offsets of the 8 neighbors, in the order every neighbor array uses:
/// NW, N, NE, W, E, SW, S, SE.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid owns the rows x cols toroidal array of cells.
/// Evolution never writes in place: each generation is computed from `&self`
/// into a fresh grid, so no cell can observe a neighbor's next state.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell a dormant constant tile
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = match rows.checked_mul(cols) {
            Some(len) if len > 0 => len,
            _ => return Err(EngineError::InvalidDimensions { rows, cols }),
        };
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); len],
        })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(self.get_index(row, col))
        } else {
            Err(EngineError::OutOfBounds {
                row: row as i64,
                col: col as i64,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Raw cell at a position; copycats are returned unresolved
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Replace the cell at a position.
    ///
    /// A copycat's leader must be inside the grid, must own its tile and must
    /// not be the copycat's own position. A cell other copycats follow cannot
    /// become a copycat.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        if let Cell::Copycat { leader_row, leader_col } = cell {
            let self_led = (leader_row, leader_col) == (row, col);
            if self_led || self.get(leader_row, leader_col)?.is_copycat() {
                return Err(EngineError::CopycatChain { row: leader_row, col: leader_col });
            }
            if self.followers(row, col).next().is_some() {
                return Err(EngineError::CopycatChain { row, col });
            }
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// Positions of the copycats whose leader is (row, col)
    pub fn followers(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            (cell.leader() == Some((row, col))).then(|| (idx / cols, idx % cols))
        })
    }

    /// Replace every cell with the same tile
    pub fn fill(&mut self, tile: Tile) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Tile(tile));
    }

    /// Tile whose state the cell at this position shows, following a copycat
    /// to its leader.
    pub fn tile(&self, row: usize, col: usize) -> Result<Tile> {
        match self.get(row, col)? {
            Cell::Tile(tile) => Ok(tile),
            Cell::Copycat { leader_row, leader_col } => self
                .get(leader_row, leader_col)?
                .tile()
                .ok_or(EngineError::CopycatChain { row: leader_row, col: leader_col }),
        }
    }

    /// Positions of the 8 neighbors with toroidal wrapping, in `NEIGHBOR_OFFSETS` order
    pub fn neighbor_positions(&self, row: usize, col: usize) -> [(usize, usize); 8] {
        let rows = self.rows as i64;
        let cols = self.cols as i64;
        NEIGHBOR_OFFSETS.map(|(dr, dc)| {
            let nr = ((row as i64 + dr) % rows + rows) % rows;
            let nc = ((col as i64 + dc) % cols + cols) % cols;
            (nr as usize, nc as usize)
        })
    }

    /// The 8 neighbor tiles, copycats resolved to their leaders
    pub fn neighbors(&self, row: usize, col: usize) -> Result<[Tile; 8]> {
        self.checked_index(row, col)?;
        let positions = self.neighbor_positions(row, col);
        let mut tiles = [Tile::default(); 8];
        for (slot, (nr, nc)) in tiles.iter_mut().zip(positions) {
            *slot = self.tile(nr, nc)?;
        }
        Ok(tiles)
    }

    /// Next-generation cell at a position, read only from this generation.
    /// A copycat stays a copycat: its leader computes its own next tile at its
    /// own position, and the copycat keeps forwarding to it.
    fn next_cell(&self, row: usize, col: usize) -> Result<Cell> {
        match self.get(row, col)? {
            Cell::Tile(tile) => Ok(Cell::Tile(tile.updated(&self.neighbors(row, col)?)?)),
            copycat @ Cell::Copycat { .. } => {
                self.tile(row, col)?;
                Ok(copycat)
            }
        }
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn evolve(&self) -> Result<Self> {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Parallel evolution using rayon, identical in result to [`Grid::evolve`]
    pub fn evolve_parallel(&self) -> Result<Self> {
        let cols = self.cols;
        let cells = (0..self.rows * cols)
            .into_par_iter()
            .map(|idx| self.next_cell(idx / cols, idx % cols))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / self.cols, idx % self.cols, *cell))
    }
}
