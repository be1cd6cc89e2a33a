use super::{Tile, TileColor};
use crate::error::{EngineError, Result};

/// Number of neighbors with a positive age.
/// Liveness is decided by age alone; colors are never consulted.
pub fn count_active_neighbors(neighbors: &[Tile; 8]) -> usize {
    neighbors.iter().filter(|tile| tile.is_active()).count()
}

/// Life-tile age transition (B3/S23):
/// 1. Dormant tile with exactly 3 active neighbors is born at age 1
/// 2. Alive tile with 2-3 active neighbors survives one generation older
/// 3. Everything else is dormant
pub fn next_life_age(age: u64, active_neighbors: usize) -> Result<u64> {
    match (age, active_neighbors) {
        (0, 3) => Ok(1),
        (0, _) => Ok(0),
        (_, 2 | 3) => older(age),
        _ => Ok(0),
    }
}

/// One generation past `age`
pub fn older(age: u64) -> Result<u64> {
    age.checked_add(1).ok_or(EngineError::AgeOverflow { age })
}

/// Pick the color a newborn multi-color life-tile takes.
///
/// Each active neighbor whose color appears in `palette` casts one vote for it.
/// The entry with the strictly highest count wins, earlier palette entries winning
/// ties. When the highest count is exactly 1 every voter picked a different color,
/// so the single palette color nobody voted for is chosen instead; if that color
/// is not unique the vote is unresolvable and fails.
pub fn majority_color(palette: &[TileColor], neighbors: &[Tile; 8]) -> Result<TileColor> {
    let votes: Vec<u8> = palette
        .iter()
        .map(|candidate| {
            neighbors
                .iter()
                .filter(|tile| tile.is_active() && tile.color() == *candidate)
                .count() as u8
        })
        .collect();

    let (winner, highest) = votes
        .iter()
        .enumerate()
        .fold((0, 0), |(best, best_votes), (idx, &v)| {
            if v > best_votes { (idx, v) } else { (best, best_votes) }
        });

    if highest != 1 {
        return Ok(palette[winner]);
    }

    let mut unrepresented = votes.iter().enumerate().filter(|(_, v)| **v == 0);
    match (unrepresented.next(), unrepresented.next()) {
        (Some((idx, _)), None) => Ok(palette[idx]),
        _ => Err(EngineError::UnresolvedTie { votes }),
    }
}
