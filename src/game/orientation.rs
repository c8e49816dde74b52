use super::direction::Direction;
use super::grid::GridCell;

/// Visual shape of a body segment, derived from its neighbours.
///
/// Corner names list the two cell edges the segment connects, with `Top`
/// meaning the `Up` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentShape {
    Horizontal,
    Vertical,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Tail cap pointing away from the body
    Tail(Direction),
}

impl SegmentShape {
    /// Shape of an inner segment given the direction travelled into it from
    /// the segment behind and the direction on to the segment ahead.
    pub fn between(from_behind: Option<Direction>, to_ahead: Option<Direction>) -> Self {
        use Direction::*;

        match (from_behind, to_ahead) {
            (Some(Left | Right), Some(Left | Right)) | (None, Some(Left | Right)) => {
                SegmentShape::Horizontal
            }
            (Some(Up | Down), Some(Up | Down)) | (None, Some(Up | Down)) => SegmentShape::Vertical,
            (Some(Right), Some(Up)) | (Some(Down), Some(Left)) => SegmentShape::TopLeft,
            (Some(Left), Some(Up)) | (Some(Down), Some(Right)) => SegmentShape::TopRight,
            (Some(Right), Some(Down)) | (Some(Up), Some(Left)) => SegmentShape::BottomLeft,
            (Some(Left), Some(Down)) | (Some(Up), Some(Right)) => SegmentShape::BottomRight,
            (_, None) => SegmentShape::Horizontal,
        }
    }

    /// Tail cap for the last segment; it points opposite to the segment ahead.
    pub fn tail(to_ahead: Option<Direction>) -> Self {
        SegmentShape::Tail(to_ahead.map_or(Direction::Left, |d| d.opposite()))
    }
}

/// A body segment as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentView {
    pub cell: GridCell,
    pub shape: SegmentShape,
}

/// Derives a shape for every body segment from `head` and the chain cells.
pub fn segment_views(head: GridCell, chain: &[GridCell]) -> Vec<SegmentView> {
    chain
        .iter()
        .enumerate()
        .map(|(i, &cell)| {
            let ahead = if i == 0 { head } else { chain[i - 1] };
            let to_ahead = cell.direction_to(ahead);

            let shape = match chain.get(i + 1) {
                None => SegmentShape::tail(to_ahead),
                Some(&behind) => SegmentShape::between(behind.direction_to(cell), to_ahead),
            };

            SegmentView { cell, shape }
        })
        .collect()
}
