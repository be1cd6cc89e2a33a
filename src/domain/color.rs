/// The named colors a tile can display.
/// Kept independent of any drawing backend; the renderer maps them to RGB.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TileColor {
    Black,
    White,
    DarkGray,
    LightGray,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Magenta,
}

impl TileColor {
    /// Color of every dormant or dead life-tile
    pub const OFF: TileColor = TileColor::Black;

    /// 8-bit RGB components
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            TileColor::Black => (0, 0, 0),
            TileColor::White => (255, 255, 255),
            TileColor::DarkGray => (64, 64, 64),
            TileColor::LightGray => (192, 192, 192),
            TileColor::Red => (255, 0, 0),
            TileColor::Orange => (255, 200, 0),
            TileColor::Yellow => (255, 255, 0),
            TileColor::Green => (0, 255, 0),
            TileColor::Blue => (0, 0, 255),
            TileColor::Magenta => (255, 0, 255),
        }
    }

    /// One-character abbreviation used by text illustrations.
    /// Black is drawn as a blank so dormant regions read as empty space.
    pub const fn abbreviation(self) -> char {
        match self {
            TileColor::Black => ' ',
            TileColor::White => 'W',
            TileColor::DarkGray => 'D',
            TileColor::LightGray => 'L',
            TileColor::Red => 'R',
            TileColor::Orange => 'O',
            TileColor::Yellow => 'Y',
            TileColor::Green => 'G',
            TileColor::Blue => 'B',
            TileColor::Magenta => 'M',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations_are_unique() {
        let all = [
            TileColor::Black,
            TileColor::White,
            TileColor::DarkGray,
            TileColor::LightGray,
            TileColor::Red,
            TileColor::Orange,
            TileColor::Yellow,
            TileColor::Green,
            TileColor::Blue,
            TileColor::Magenta,
        ];
        let mut chars: Vec<_> = all.iter().map(|c| c.abbreviation()).collect();
        chars.sort();
        chars.dedup();
        assert_eq!(chars.len(), all.len());
    }

    #[test]
    fn test_off_is_black() {
        assert_eq!(TileColor::OFF.rgb(), (0, 0, 0));
    }
}
