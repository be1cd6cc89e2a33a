use std::fmt;
use std::str::FromStr;

use super::rules::{count_active_neighbors, majority_color, next_life_age, older};
use super::TileColor;
use crate::error::{ParseError, Result};

/// Hue cycle walked by rainbow tiles, one step per generation
pub const RAINBOW_CYCLE: [TileColor; 6] = [
    TileColor::Red,
    TileColor::Orange,
    TileColor::Yellow,
    TileColor::Green,
    TileColor::Blue,
    TileColor::Magenta,
];

/// Colors an immigration tile can be born with, in vote order
pub const IMMIGRATION_PALETTE: [TileColor; 2] = [TileColor::Blue, TileColor::Green];

/// Colors of immigration tiles created directly at a positive age, by age
pub const IMMIGRATION_CONSTRUCTION: [TileColor; 2] = [TileColor::Green, TileColor::Blue];

/// Colors a quad tile can be born with, in vote order
pub const QUAD_PALETTE: [TileColor; 4] = [
    TileColor::Blue,
    TileColor::Green,
    TileColor::Red,
    TileColor::Yellow,
];

const MONO_ALIVE: TileColor = TileColor::White;

/// The constructible tile kinds, named as they appear in commands
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileKind {
    Constant,
    Rainbow,
    Mono,
    Immigration,
    Quad,
}

impl TileKind {
    pub fn all() -> Vec<TileKind> {
        vec![
            TileKind::Constant,
            TileKind::Rainbow,
            TileKind::Mono,
            TileKind::Immigration,
            TileKind::Quad,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Constant => "constant",
            TileKind::Rainbow => "rainbow",
            TileKind::Mono => "mono",
            TileKind::Immigration => "immigration",
            TileKind::Quad => "quad",
        }
    }

    /// Whether the kind follows birth/survive/death rules
    pub const fn is_life(self) -> bool {
        matches!(self, TileKind::Mono | TileKind::Immigration | TileKind::Quad)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileKind {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TileKind::all()
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseError::UnknownTileType(s.to_owned()))
    }
}

/// A tile is an immutable value describing one cell's state and how it ages.
///
/// Colors of constant, rainbow and mono tiles are derived from their age.
/// Immigration and quad tiles pick their color when born and keep it while
/// they survive, so it is stored alongside the age.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Constant { age: u64 },
    Rainbow { age: u64 },
    Mono { age: u64 },
    Immigration { age: u64, color: TileColor },
    Quad { age: u64, color: TileColor },
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Constant { age: 0 }
    }
}

impl Tile {
    /// Build a fresh tile of the given kind, as the `set` and `fill` commands do.
    /// Multi-color tiles created directly at a positive age cycle through
    /// their construction colors by age.
    pub fn new(kind: TileKind, age: u64) -> Self {
        match kind {
            TileKind::Constant => Tile::Constant { age },
            TileKind::Rainbow => Tile::Rainbow { age },
            TileKind::Mono => Tile::Mono { age },
            TileKind::Immigration => Tile::Immigration {
                age,
                color: constructed_color(&IMMIGRATION_CONSTRUCTION, age),
            },
            TileKind::Quad => Tile::Quad {
                age,
                color: constructed_color(&QUAD_PALETTE, age),
            },
        }
    }

    pub const fn kind(&self) -> TileKind {
        match self {
            Tile::Constant { .. } => TileKind::Constant,
            Tile::Rainbow { .. } => TileKind::Rainbow,
            Tile::Mono { .. } => TileKind::Mono,
            Tile::Immigration { .. } => TileKind::Immigration,
            Tile::Quad { .. } => TileKind::Quad,
        }
    }

    pub const fn age(&self) -> u64 {
        match *self {
            Tile::Constant { age }
            | Tile::Rainbow { age }
            | Tile::Mono { age }
            | Tile::Immigration { age, .. }
            | Tile::Quad { age, .. } => age,
        }
    }

    pub const fn color(&self) -> TileColor {
        match *self {
            Tile::Constant { age: 0 } => TileColor::DarkGray,
            Tile::Constant { .. } => TileColor::LightGray,
            Tile::Rainbow { age } => RAINBOW_CYCLE[(age % RAINBOW_CYCLE.len() as u64) as usize],
            Tile::Mono { age: 0 } => TileColor::OFF,
            Tile::Mono { .. } => MONO_ALIVE,
            Tile::Immigration { color, .. } | Tile::Quad { color, .. } => color,
        }
    }

    /// A tile counts as an active neighbor when its age is positive
    pub const fn is_active(&self) -> bool {
        self.age() > 0
    }

    /// Compute this tile's state for the next generation from its 8 neighbors.
    ///
    /// Pure: neither the receiver nor the neighbors are touched. Fails when a
    /// multi-color birth vote cannot be resolved or an age would overflow.
    pub fn updated(&self, neighbors: &[Tile; 8]) -> Result<Tile> {
        let next = match *self {
            Tile::Constant { age } => Tile::Constant { age },
            Tile::Rainbow { age } => Tile::Rainbow { age: older(age)? },
            Tile::Mono { age } => Tile::Mono {
                age: next_life_age(age, count_active_neighbors(neighbors))?,
            },
            Tile::Immigration { age, color } => {
                let (age, color) = next_colored(age, color, &IMMIGRATION_PALETTE, neighbors)?;
                Tile::Immigration { age, color }
            }
            Tile::Quad { age, color } => {
                let (age, color) = next_colored(age, color, &QUAD_PALETTE, neighbors)?;
                Tile::Quad { age, color }
            }
        };
        Ok(next)
    }
}

fn constructed_color(cycle: &[TileColor], age: u64) -> TileColor {
    match age {
        0 => TileColor::OFF,
        _ => cycle[((age - 1) % cycle.len() as u64) as usize],
    }
}

/// Shared update for life-tiles whose color is chosen at birth
fn next_colored(
    age: u64,
    color: TileColor,
    palette: &[TileColor],
    neighbors: &[Tile; 8],
) -> Result<(u64, TileColor)> {
    let next_age = next_life_age(age, count_active_neighbors(neighbors))?;
    let next_color = match next_age {
        0 => TileColor::OFF,
        1 => majority_color(palette, neighbors)?,
        _ => color,
    };
    Ok((next_age, next_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn ring(active: usize, tile: Tile) -> [Tile; 8] {
        let mut out = [Tile::Constant { age: 0 }; 8];
        out[..active].iter_mut().for_each(|slot| *slot = tile);
        out
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in TileKind::all() {
            assert_eq!(kind.name().parse::<TileKind>(), Ok(kind));
        }
        assert_eq!(
            "Mono".parse::<TileKind>(),
            Err(ParseError::UnknownTileType("Mono".into()))
        );
        assert!("copycat".parse::<TileKind>().is_err());
    }

    #[test]
    fn test_constant_never_changes() {
        let tile = Tile::new(TileKind::Constant, 4);
        let next = tile.updated(&ring(3, Tile::Mono { age: 1 })).unwrap();
        assert_eq!(next, tile);
        assert_eq!(next.color(), TileColor::LightGray);
        assert_eq!(Tile::default().color(), TileColor::DarkGray);
    }

    #[test]
    fn test_rainbow_ages_and_cycles() {
        let tile = Tile::new(TileKind::Rainbow, 5);
        assert_eq!(tile.color(), TileColor::Magenta);
        let next = tile.updated(&ring(0, Tile::default())).unwrap();
        assert_eq!(next.age(), 6);
        assert_eq!(next.color(), TileColor::Red);
    }

    #[test]
    fn test_oldest_tiles_refuse_to_age() {
        let quiet = ring(0, Tile::default());
        assert_eq!(
            Tile::Rainbow { age: u64::MAX }.updated(&quiet),
            Err(EngineError::AgeOverflow { age: u64::MAX })
        );
        let pair = ring(2, Tile::Mono { age: 1 });
        assert_eq!(
            Tile::Mono { age: u64::MAX }.updated(&pair),
            Err(EngineError::AgeOverflow { age: u64::MAX })
        );
        assert_eq!(
            Tile::new(TileKind::Quad, u64::MAX).updated(&pair),
            Err(EngineError::AgeOverflow { age: u64::MAX })
        );
        // A constant tile never ages, so the largest age is fine
        assert_eq!(
            Tile::Constant { age: u64::MAX }.updated(&pair),
            Ok(Tile::Constant { age: u64::MAX })
        );
    }

    #[test]
    fn test_constructed_colors() {
        assert_eq!(Tile::new(TileKind::Immigration, 0).color(), TileColor::Black);
        assert_eq!(Tile::new(TileKind::Immigration, 1).color(), TileColor::Green);
        assert_eq!(Tile::new(TileKind::Immigration, 2).color(), TileColor::Blue);
        assert_eq!(Tile::new(TileKind::Quad, 1).color(), TileColor::Blue);
        assert_eq!(Tile::new(TileKind::Quad, 3).color(), TileColor::Red);
        assert_eq!(Tile::new(TileKind::Quad, 4).color(), TileColor::Yellow);
        assert_eq!(Tile::new(TileKind::Mono, 1).color(), TileColor::White);
    }

    #[test]
    fn test_mono_birth_and_death() {
        let dormant = Tile::new(TileKind::Mono, 0);
        let born = dormant.updated(&ring(3, Tile::Mono { age: 1 })).unwrap();
        assert_eq!(born, Tile::Mono { age: 1 });
        assert_eq!(born.color(), TileColor::White);

        let crowded = born.updated(&ring(4, Tile::Mono { age: 1 })).unwrap();
        assert_eq!(crowded.age(), 0);
        assert_eq!(crowded.color(), TileColor::Black);
    }

    #[test]
    fn test_colored_survivor_keeps_color() {
        let tile = Tile::Immigration { age: 3, color: TileColor::Blue };
        let next = tile
            .updated(&ring(2, Tile::Immigration { age: 1, color: TileColor::Green }))
            .unwrap();
        assert_eq!(next, Tile::Immigration { age: 4, color: TileColor::Blue });
    }

    #[test]
    fn test_colored_birth_votes() {
        let tile = Tile::new(TileKind::Immigration, 0);
        let mut n = ring(2, Tile::Immigration { age: 1, color: TileColor::Green });
        n[7] = Tile::Immigration { age: 2, color: TileColor::Blue };
        let next = tile.updated(&n).unwrap();
        assert_eq!(next, Tile::Immigration { age: 1, color: TileColor::Green });
    }

    #[test]
    fn test_colored_death_goes_off() {
        let tile = Tile::Quad { age: 9, color: TileColor::Red };
        let next = tile.updated(&ring(1, Tile::Mono { age: 1 })).unwrap();
        assert_eq!(next, Tile::Quad { age: 0, color: TileColor::Black });
    }
}
