use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Body,
    Head,
    Point,
}

impl CellKind {
    pub const fn is_snake(self) -> bool {
        matches!(self, Self::Body | Self::Head)
    }

    pub const fn symbol(self) -> char {
        use CellKind::*;
        match self {
            Empty => ' ',
            Body => 'B',
            Head => 'H',
            Point => 'P',
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

impl TryFrom<char> for CellKind {
    type Error = GameError;

    fn try_from(value: char) -> Result<Self> {
        use CellKind::*;
        match value {
            ' ' => Ok(Empty),
            'B' => Ok(Body),
            'H' => Ok(Head),
            'P' => Ok(Point),
            _ => Err(GameError::InvalidCellKind(value)),
        }
    }
}

/// One board slot. Snake cells also remember the heading they were entered with, so a
/// renderer can tell straight pieces from corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    kind: CellKind,
    facing: Option<Direction>,
    previous_facing: Option<Direction>,
}

impl Cell {
    pub const fn empty(coords: Coord2) -> Self {
        Self {
            coords,
            kind: CellKind::Empty,
            facing: None,
            previous_facing: None,
        }
    }

    pub const fn point(coords: Coord2) -> Self {
        Self {
            kind: CellKind::Point,
            ..Self::empty(coords)
        }
    }

    pub(crate) const fn head(coords: Coord2, facing: Direction) -> Self {
        Self {
            coords,
            kind: CellKind::Head,
            facing: Some(facing),
            previous_facing: Some(facing),
        }
    }

    pub fn new(coords: Coord2, kind: CellKind, facing: Option<Direction>) -> Result<Self> {
        match (kind.is_snake(), facing) {
            (true, Some(facing)) => Ok(Self {
                kind,
                ..Self::head(coords, facing)
            }),
            (false, None) => Ok(Self {
                kind,
                ..Self::empty(coords)
            }),
            _ => Err(GameError::InvalidFacing),
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn facing(&self) -> Option<Direction> {
        self.facing
    }

    pub const fn previous_facing(&self) -> Option<Direction> {
        self.previous_facing
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, CellKind::Empty)
    }

    pub const fn is_point(&self) -> bool {
        matches!(self.kind, CellKind::Point)
    }

    pub const fn is_snake(&self) -> bool {
        self.kind.is_snake()
    }

    /// Turns a snake cell, keeping the old heading as `previous_facing`.
    pub fn turn(&mut self, facing: Direction) -> Result<()> {
        if !self.is_snake() {
            return Err(GameError::InvalidFacing);
        }
        self.previous_facing = self.facing;
        self.facing = Some(facing);
        Ok(())
    }

    pub(crate) fn demote(&mut self) {
        if matches!(self.kind, CellKind::Head) {
            self.kind = CellKind::Body;
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::empty(self.coords);
    }
}
