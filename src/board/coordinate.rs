//! Board cells and bounding rectangles.

use serde::{Deserialize, Serialize};

/// A board cell. `y` grows upwards, so "top" is the largest `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The orthogonal neighbours that exist on the `i32` grid.
    ///
    /// A cell on the edge of the grid has fewer than four.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        [(0, 1), (1, 0), (0, -1), (-1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                Some(Coordinate::new(
                    self.x.checked_add(dx)?,
                    self.y.checked_add(dy)?,
                ))
            })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bounding rectangle of the placed tiles, inclusive on every side.
///
/// An empty board reports the degenerate rectangle at the origin
/// (`Boundaries::default()`), so growing it by one cell always covers the
/// opening move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boundaries {
    /// Largest occupied `y`.
    pub top: i32,
    /// Largest occupied `x`.
    pub right: i32,
    /// Smallest occupied `y`.
    pub bottom: i32,
    /// Smallest occupied `x`.
    pub left: i32,
}

impl Boundaries {
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Rectangle covering exactly one cell.
    #[must_use]
    pub const fn around(cell: Coordinate) -> Self {
        Self::new(cell.y, cell.x, cell.y, cell.x)
    }

    /// Smallest rectangle covering both `self` and `cell`.
    #[must_use]
    pub fn including(self, cell: Coordinate) -> Self {
        Self {
            top: self.top.max(cell.y),
            right: self.right.max(cell.x),
            bottom: self.bottom.min(cell.y),
            left: self.left.min(cell.x),
        }
    }

    /// This rectangle grown by `margin` cells on every side, clamped to the
    /// `i32` grid.
    #[must_use]
    pub const fn grown(self, margin: i32) -> Self {
        Self::new(
            self.top.saturating_add(margin),
            self.right.saturating_add(margin),
            self.bottom.saturating_sub(margin),
            self.left.saturating_sub(margin),
        )
    }

    #[must_use]
    pub const fn contains(self, cell: Coordinate) -> bool {
        cell.x >= self.left && cell.x <= self.right && cell.y >= self.bottom && cell.y <= self.top
    }

    #[must_use]
    pub const fn width(self) -> usize {
        (self.right.abs_diff(self.left) as usize).saturating_add(1)
    }

    #[must_use]
    pub const fn height(self) -> usize {
        (self.top.abs_diff(self.bottom) as usize).saturating_add(1)
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(self) -> usize {
        self.width().saturating_mul(self.height())
    }

    /// Every cell of the rectangle, column by column from the left,
    /// bottom to top within a column.
    pub fn cells(self) -> impl Iterator<Item = Coordinate> {
        (self.left..=self.right)
            .flat_map(move |x| (self.bottom..=self.top).map(move |y| Coordinate::new(x, y)))
    }

    /// As the `(top, right, bottom, left)` tuple used in debug output.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32, i32) {
        (self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let n: Vec<_> = Coordinate::new(2, 3).neighbours().collect();
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Coordinate::new(2, 4)));
        assert!(n.contains(&Coordinate::new(3, 3)));
        assert!(n.contains(&Coordinate::new(2, 2)));
        assert!(n.contains(&Coordinate::new(1, 3)));
    }

    #[test]
    fn test_neighbours_stop_at_grid_edge() {
        let corner: Vec<_> = Coordinate::new(i32::MAX, i32::MIN).neighbours().collect();
        assert_eq!(
            corner,
            vec![
                Coordinate::new(i32::MAX, i32::MIN + 1),
                Coordinate::new(i32::MAX - 1, i32::MIN),
            ]
        );
    }

    #[test]
    fn test_grown_clamps_at_grid_edge() {
        let edge = Boundaries::around(Coordinate::new(i32::MAX, 0)).grown(1);
        assert_eq!(edge, Boundaries::new(1, i32::MAX, -1, i32::MAX - 1));
        assert_eq!(edge.area(), 6);
        assert_eq!(edge.cells().count(), 6);

        let low = Boundaries::around(Coordinate::new(0, i32::MIN)).grown(3);
        assert_eq!(low.bottom, i32::MIN);
        assert_eq!(low.height(), 4);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_extents_across_whole_grid() {
        let wide = Boundaries::around(Coordinate::new(-5, 0)).including(Coordinate::new(i32::MAX - 1, 0));
        assert_eq!(wide.width(), i32::MAX as usize + 5);
        assert_eq!(wide.height(), 1);
        assert_eq!(wide.area(), wide.width());

        let full = Boundaries::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN);
        assert_eq!(full.width(), 1usize << 32);
        assert_eq!(full.area(), usize::MAX);
    }

    #[test]
    fn test_including_grows_rectangle() {
        let b = Boundaries::around(Coordinate::ORIGIN)
            .including(Coordinate::new(3, -2))
            .including(Coordinate::new(-1, 1));
        assert_eq!(b, Boundaries::new(1, 3, -2, -1));
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 4);
    }

    #[test]
    fn test_grown_default_covers_origin_ring() {
        let area = Boundaries::default().grown(1);
        assert_eq!(area, Boundaries::new(1, 1, -1, -1));
        assert_eq!(area.area(), 9);

        let cells: Vec<_> = area.cells().collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&Coordinate::ORIGIN));
        assert_eq!(cells[0], Coordinate::new(-1, -1));
        assert_eq!(cells[8], Coordinate::new(1, 1));
    }

    #[test]
    fn test_contains() {
        let b = Boundaries::new(2, 2, 0, 0);
        assert!(b.contains(Coordinate::new(1, 1)));
        assert!(!b.contains(Coordinate::new(3, 1)));
        assert!(!b.contains(Coordinate::new(1, -1)));
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(-3, 4).to_string(), "(-3, 4)");
    }
}
