use super::grid::{GridCell, GridSpace};

/// Body segments trailing the head, neck first and tail last.
///
/// The head cell itself is not part of the chain. The chain performs no
/// collision policy of its own; callers validate a move before advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentChain {
    cells: Vec<GridCell>,
}

impl SegmentChain {
    pub(crate) fn from_cells(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// Segment directly behind the head
    pub fn front(&self) -> Option<GridCell> {
        self.cells.first().copied()
    }

    pub fn tail(&self) -> Option<GridCell> {
        self.cells.last().copied()
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    /// Whether moving the head onto `cell` would hit the body, given that the
    /// tail leaves its cell on the same tick.
    pub fn collides_on_advance(&self, cell: GridCell) -> bool {
        match self.cells.split_last() {
            Some((_, rest)) => rest.contains(&cell),
            None => false,
        }
    }

    /// Pushes `new_front` in front of the neck and drops the tail.
    pub fn advance(&mut self, new_front: GridCell) {
        self.cells.insert(0, new_front);
        self.cells.pop();
    }

    /// Appends one segment past the tail, continuing the tail's trailing
    /// direction. With a single segment the direction runs from `head` to
    /// that segment.
    ///
    /// If the extension would leave the grid the new segment is stacked on
    /// the current tail instead; it separates again on the next advance.
    /// An empty chain has no trailing direction and is left untouched.
    pub fn grow(&mut self, head: GridCell, grid: &GridSpace) -> Option<GridCell> {
        let last = self.tail()?;

        let before_last = match self.cells.len() {
            1 => head,
            n => self.cells[n - 2],
        };

        let (dx, dy) = (last.x - before_last.x, last.y - before_last.y);
        let mut new_tail = last.moved_by(dx, dy);
        if !grid.is_in_bounds(new_tail) {
            new_tail = last;
        }

        self.cells.push(new_tail);
        Some(new_tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpace {
        GridSpace::new(32, 18, 1.0).unwrap()
    }

    fn chain(cells: &[(i32, i32)]) -> SegmentChain {
        SegmentChain::from_cells(cells.iter().map(|&(x, y)| GridCell::new(x, y)).collect())
    }

    #[test]
    fn test_advance_shifts_in_lockstep() {
        let mut body = chain(&[(15, 9), (14, 9), (13, 9)]);
        body.advance(GridCell::new(16, 9));

        assert_eq!(body, chain(&[(16, 9), (15, 9), (14, 9)]));
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_contains() {
        let body = chain(&[(15, 9), (14, 9)]);
        assert!(body.contains(GridCell::new(15, 9)));
        assert!(body.contains(GridCell::new(14, 9)));
        assert!(!body.contains(GridCell::new(16, 9)));
    }

    #[test]
    fn test_collision_ignores_vacating_tail() {
        let body = chain(&[(1, 0), (0, 0), (0, 1)]);
        assert!(body.collides_on_advance(GridCell::new(1, 0)));
        assert!(body.collides_on_advance(GridCell::new(0, 0)));
        assert!(!body.collides_on_advance(GridCell::new(0, 1)));
    }

    #[test]
    fn test_grow_extends_trailing_direction() {
        let mut body = chain(&[(15, 9), (14, 9)]);
        let added = body.grow(GridCell::new(16, 9), &grid());

        assert_eq!(added, Some(GridCell::new(13, 9)));
        assert_eq!(body, chain(&[(15, 9), (14, 9), (13, 9)]));
    }

    #[test]
    fn test_grow_single_segment_uses_head() {
        let mut body = chain(&[(14, 9)]);
        let added = body.grow(GridCell::new(15, 9), &grid());

        assert_eq!(added, Some(GridCell::new(13, 9)));
        assert_eq!(body, chain(&[(14, 9), (13, 9)]));
    }

    #[test]
    fn test_grow_around_corner() {
        // Tail segment turned the corner: trailing direction is downwards
        let mut body = chain(&[(5, 5), (5, 4), (5, 3)]);
        body.grow(GridCell::new(6, 5), &grid());
        assert_eq!(body.tail(), Some(GridCell::new(5, 2)));
    }

    #[test]
    fn test_grow_out_of_bounds_stacks_on_tail() {
        let mut body = chain(&[(1, 9), (0, 9)]);
        let added = body.grow(GridCell::new(2, 9), &grid());

        assert_eq!(added, Some(GridCell::new(0, 9)));
        assert_eq!(body.len(), 3);
        assert_eq!(body.cells()[1], body.cells()[2]);
    }

    #[test]
    fn test_grow_empty_chain_is_noop() {
        let mut body = chain(&[]);
        assert_eq!(body.grow(GridCell::new(3, 3), &grid()), None);
        assert!(body.is_empty());
    }

    #[test]
    fn test_stacked_tail_separates_after_advance() {
        let mut body = chain(&[(1, 9), (0, 9), (0, 9)]);
        body.advance(GridCell::new(2, 9));
        assert_eq!(body, chain(&[(2, 9), (1, 9), (0, 9)]));
    }
}
