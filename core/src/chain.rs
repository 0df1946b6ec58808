use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Handle to a segment stored in a [`SegmentChain`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentId(CellCount);

impl SegmentId {
    const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    coords: Coord2,
    facing: Direction,
    next: Option<SegmentId>,
}

impl Segment {
    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn facing(&self) -> Direction {
        self.facing
    }

    /// Segment one step closer to the head, `None` for the head itself.
    pub const fn next(&self) -> Option<SegmentId> {
        self.next
    }
}

/// Snake body from tail to head.
///
/// Segments live in an arena and link forward only: each one knows its successor and
/// the chain caches the head handle. A new segment is only ever linked after the current
/// head, so the chain cannot form a cycle. Freed slots are reused by later pushes.
///
/// The chain always holds at least one segment and keeps the board in step with itself:
/// pushing a head demotes the previous head cell to body, popping the tail clears its cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentChain {
    slots: Vec<Option<Segment>>,
    free: Vec<SegmentId>,
    tail: SegmentId,
    head: SegmentId,
    len: CellCount,
}

impl SegmentChain {
    /// Starts a one-segment chain and places its head on `board`.
    pub(crate) fn new(board: &mut Board, coords: Coord2, facing: Direction) -> Result<Self> {
        board.put(Cell::head(coords, facing))?;
        let id = SegmentId(0);
        Ok(Self {
            slots: alloc::vec![Some(Segment {
                coords,
                facing,
                next: None,
            })],
            free: Vec::new(),
            tail: id,
            head: id,
            len: 1,
        })
    }

    pub fn len(&self) -> CellCount {
        self.len
    }

    pub fn tail(&self) -> SegmentId {
        self.tail
    }

    pub fn head(&self) -> SegmentId {
        self.head
    }

    /// Looks up a segment, `None` once it has been popped.
    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn head_segment(&self) -> &Segment {
        self.live(self.head)
    }

    pub fn tail_segment(&self) -> &Segment {
        self.live(self.tail)
    }

    /// Walks the chain from tail to head.
    pub fn iter(&self) -> SegmentIter<'_> {
        SegmentIter {
            chain: self,
            cursor: Some(self.tail),
        }
    }

    /// Links a new head at `coords` and demotes the previous head cell to body.
    pub(crate) fn push_head(
        &mut self,
        board: &mut Board,
        coords: Coord2,
        facing: Direction,
    ) -> Result<SegmentId> {
        let previous = self.head_segment().coords;
        board.put(Cell::head(coords, facing))?;
        board.cell_mut(previous)?.demote();

        let segment = Segment {
            coords,
            facing,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(segment);
                id
            }
            None => {
                let id = SegmentId(self.slots.len() as CellCount);
                self.slots.push(Some(segment));
                id
            }
        };

        self.live_mut(self.head).next = Some(id);
        self.head = id;
        self.len += 1;
        Ok(id)
    }

    /// Unlinks the tail and clears its cell. The last remaining segment is never popped.
    pub(crate) fn pop_tail(&mut self, board: &mut Board) -> Result<Option<Coord2>> {
        let tail = *self.tail_segment();
        let Some(next) = tail.next else {
            return Ok(None);
        };

        board.cell_mut(tail.coords)?.clear();
        self.slots[self.tail.index()] = None;
        self.free.push(self.tail);
        self.tail = next;
        self.len -= 1;
        Ok(Some(tail.coords))
    }

    /// Turns the head segment and its board cell.
    pub(crate) fn turn_head(&mut self, board: &mut Board, facing: Direction) -> Result<()> {
        let coords = self.head_segment().coords;
        board.cell_mut(coords)?.turn(facing)?;
        self.live_mut(self.head).facing = facing;
        Ok(())
    }

    fn live(&self, id: SegmentId) -> &Segment {
        self.get(id).expect("linked segment should be live")
    }

    fn live_mut(&mut self, id: SegmentId) -> &mut Segment {
        self.slots[id.index()]
            .as_mut()
            .expect("linked segment should be live")
    }
}

#[derive(Debug)]
pub struct SegmentIter<'a> {
    chain: &'a SegmentChain,
    cursor: Option<SegmentId>,
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = (SegmentId, &'a Segment);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let segment = self.chain.get(id)?;
        self.cursor = segment.next;
        Some((id, segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_on(board: &mut Board, coords: &[Coord2]) -> SegmentChain {
        let mut chain = SegmentChain::new(board, coords[0], Direction::East).unwrap();
        for &pos in &coords[1..] {
            chain.push_head(board, pos, Direction::East).unwrap();
        }
        chain
    }

    fn walk(chain: &SegmentChain) -> Vec<Coord2> {
        chain.iter().map(|(_, segment)| segment.coords()).collect()
    }

    #[test]
    fn push_head_demotes_previous_head() {
        let mut board = Board::new((3, 3));
        let chain = chain_on(&mut board, &[(1, 0), (1, 1)]);

        assert_eq!(board[(1, 0)].kind(), CellKind::Body);
        assert_eq!(board[(1, 0)].facing(), Some(Direction::East));
        assert_eq!(board[(1, 1)].kind(), CellKind::Head);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.head_segment().coords(), (1, 1));
        assert_eq!(chain.tail_segment().coords(), (1, 0));
    }

    #[test]
    fn pop_tail_clears_cell_and_advances() {
        let mut board = Board::new((3, 3));
        let mut chain = chain_on(&mut board, &[(1, 0), (1, 1), (1, 2)]);
        let old_tail = chain.tail();

        assert_eq!(chain.pop_tail(&mut board), Ok(Some((1, 0))));

        assert!(board[(1, 0)].is_empty());
        assert!(chain.get(old_tail).is_none());
        assert_eq!(walk(&chain), [(1, 1), (1, 2)]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn last_segment_is_never_popped() {
        let mut board = Board::new((3, 3));
        let mut chain = chain_on(&mut board, &[(1, 1)]);

        assert_eq!(chain.pop_tail(&mut board), Ok(None));
        assert_eq!(chain.len(), 1);
        assert_eq!(board[(1, 1)].kind(), CellKind::Head);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut board = Board::new((3, 3));
        let mut chain = chain_on(&mut board, &[(0, 0), (0, 1)]);

        chain.pop_tail(&mut board).unwrap();
        chain.push_head(&mut board, (0, 2), Direction::East).unwrap();

        assert_eq!(chain.slots.len(), 2);
        assert_eq!(walk(&chain), [(0, 1), (0, 2)]);
    }

    #[test]
    fn turn_head_updates_segment_and_cell() {
        let mut board = Board::new((3, 3));
        let mut chain = chain_on(&mut board, &[(1, 1)]);

        chain.turn_head(&mut board, Direction::South).unwrap();

        assert_eq!(chain.head_segment().facing(), Direction::South);
        assert_eq!(board[(1, 1)].facing(), Some(Direction::South));
        assert_eq!(board[(1, 1)].previous_facing(), Some(Direction::East));
    }
}
