use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Heading of a snake segment. North is towards row 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// `(row, col)` displacement of a single step.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            North => (-1, 0),
            East => (0, 1),
            South => (1, 0),
            West => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// True for a quarter turn, false for the same heading or a reversal.
    pub const fn is_perpendicular(self, other: Direction) -> bool {
        self.is_vertical() != other.is_vertical()
    }

    /// Next cell in this direction, or `None` when it would leave a board of size `bounds`.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        apply_delta(coords, self.delta(), bounds)
    }

    pub const fn symbol(self) -> char {
        use Direction::*;
        match self {
            North => 'N',
            East => 'E',
            South => 'S',
            West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GameError;

    fn try_from(value: char) -> Result<Self> {
        use Direction::*;
        match value.to_ascii_uppercase() {
            'N' => Ok(North),
            'E' => Ok(East),
            'S' => Ok(South),
            'W' => Ok(West),
            _ => Err(GameError::InvalidDirection(value)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Direction::*;
        match self {
            North => write!(f, "north"),
            East => write!(f, "east"),
            South => write!(f, "south"),
            West => write!(f, "west"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_excludes_same_and_opposite() {
        for dir in Direction::ALL {
            assert!(!dir.is_perpendicular(dir));
            assert!(!dir.is_perpendicular(dir.opposite()));
        }
        assert!(Direction::North.is_perpendicular(Direction::East));
        assert!(Direction::West.is_perpendicular(Direction::South));
    }

    #[test]
    fn step_follows_row_col_convention() {
        let bounds = (9, 9);

        assert_eq!(Direction::North.step((4, 4), bounds), Some((3, 4)));
        assert_eq!(Direction::South.step((4, 4), bounds), Some((5, 4)));
        assert_eq!(Direction::East.step((4, 4), bounds), Some((4, 5)));
        assert_eq!(Direction::West.step((4, 4), bounds), Some((4, 3)));
        assert_eq!(Direction::North.step((0, 4), bounds), None);
        assert_eq!(Direction::East.step((4, 8), bounds), None);
    }

    #[test]
    fn parses_symbols_and_rejects_unknown() {
        assert_eq!(Direction::try_from('n'), Ok(Direction::North));
        assert_eq!(Direction::try_from('W'), Ok(Direction::West));
        assert_eq!(
            Direction::try_from('x'),
            Err(GameError::InvalidDirection('x'))
        );
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from(dir.symbol()), Ok(dir));
        }
    }
}
