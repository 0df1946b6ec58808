use crate::*;
pub use random::*;

mod random;

/// Chooses where the next point appears.
pub trait PointGenerator {
    /// Picks one of `candidates`, which are the currently empty cells in row-major order
    /// and never empty themselves.
    fn choose(&mut self, candidates: &[Coord2]) -> Option<Coord2>;
}

impl<G: PointGenerator + ?Sized> PointGenerator for &mut G {
    fn choose(&mut self, candidates: &[Coord2]) -> Option<Coord2> {
        (**self).choose(candidates)
    }
}
