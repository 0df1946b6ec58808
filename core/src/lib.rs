#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use chain::*;
pub use direction::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod chain;
mod direction;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and the seed used for point placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    /// Fixed seed for reproducible point placement, a fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Smallest accepted number of rows or columns.
    pub const MIN_SIDE: Coord = 3;

    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size, seed: None }
    }

    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        Self::new_unchecked((rows, cols)).validate()
    }

    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Checks a config that did not go through [`GameConfig::new`], e.g. one loaded with serde.
    pub fn validate(self) -> Result<Self> {
        let (rows, cols) = self.size;
        if rows < Self::MIN_SIDE || cols < Self::MIN_SIDE {
            return Err(GameError::InvalidSize);
        }
        Ok(self)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Starting cell of the snake, exact for odd dimensions.
    pub const fn center(&self) -> Coord2 {
        (self.size.0 / 2, self.size.1 / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_boards_smaller_than_three_by_three() {
        assert_eq!(GameConfig::new(2, 9), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(9, 0), Err(GameError::InvalidSize));
        assert!(GameConfig::new(3, 3).is_ok());
    }

    #[test]
    fn center_of_odd_board() {
        let config = GameConfig::new(9, 7).unwrap();

        assert_eq!(config.center(), (4, 3));
        assert_eq!(config.total_cells(), 63);
    }

    #[test]
    fn deserialized_config_defaults_seed_and_still_validates() {
        let config: GameConfig = serde_json::from_str(r#"{"size":[5,5]}"#).unwrap();
        assert_eq!(config, GameConfig::new(5, 5).unwrap());

        let seeded: GameConfig = serde_json::from_str(r#"{"size":[5,7],"seed":42}"#).unwrap();
        assert_eq!(seeded.seed, Some(42));

        let too_small: GameConfig = serde_json::from_str(r#"{"size":[1,5]}"#).unwrap();
        assert_eq!(too_small.validate(), Err(GameError::InvalidSize));
    }
}
