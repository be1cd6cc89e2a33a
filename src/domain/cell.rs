use super::Tile;

/// Cell is one grid slot.
/// It either owns a tile outright or mirrors the tile at a leader position;
/// a copycat has no state of its own and every query forwards to its leader.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Tile(Tile),
    Copycat { leader_row: usize, leader_col: usize },
}

impl Cell {
    pub const fn copycat(leader_row: usize, leader_col: usize) -> Self {
        Cell::Copycat { leader_row, leader_col }
    }

    /// The owned tile, or `None` for a copycat
    pub const fn tile(&self) -> Option<Tile> {
        match self {
            Cell::Tile(tile) => Some(*tile),
            Cell::Copycat { .. } => None,
        }
    }

    pub const fn leader(&self) -> Option<(usize, usize)> {
        match self {
            Cell::Tile(_) => None,
            Cell::Copycat { leader_row, leader_col } => Some((*leader_row, *leader_col)),
        }
    }

    pub const fn is_copycat(&self) -> bool {
        matches!(self, Cell::Copycat { .. })
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Tile(Tile::default())
    }
}

impl From<Tile> for Cell {
    fn from(tile: Tile) -> Self {
        Cell::Tile(tile)
    }
}
