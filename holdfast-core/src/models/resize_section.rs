use super::{Geometry, Point};
use serde::{Deserialize, Serialize};

/// The edges of a window a resize moves.
///
/// Picked once when a resize starts, from where the pointer sits in a 3x3 grid laid over
/// the window. The pointer can wander off the original cell without changing the edges.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeSection {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl ResizeSection {
    pub const BOTTOM_RIGHT: Self = Self {
        left: false,
        top: false,
        right: true,
        bottom: true,
    };

    pub fn from_point(point: Point, window: &Geometry) -> Self {
        let (rel_x, rel_y) = window.relative(point);

        let section = Self {
            left: rel_x < 1.0 / 3.0,
            top: rel_y < 1.0 / 3.0,
            right: rel_x > 2.0 / 3.0,
            bottom: rel_y > 2.0 / 3.0,
        };

        // The center cell resizes from the bottom right.
        if section.is_empty() {
            return Self::BOTTOM_RIGHT;
        }
        section
    }

    const fn is_empty(&self) -> bool {
        !(self.left || self.top || self.right || self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Geometry {
        Geometry::new(100.0, 100.0, 300.0, 300.0)
    }

    fn at(rel_x: f64, rel_y: f64) -> Point {
        let w = window();
        Point::new(w.x + w.w * rel_x, w.y + w.h * rel_y)
    }

    #[test]
    fn top_left_cell_moves_left_and_top() {
        let section = ResizeSection::from_point(at(0.1, 0.1), &window());
        assert_eq!(
            section,
            ResizeSection {
                left: true,
                top: true,
                right: false,
                bottom: false,
            }
        );
    }

    #[test]
    fn center_cell_defaults_to_bottom_right() {
        let section = ResizeSection::from_point(at(0.5, 0.5), &window());
        assert_eq!(section, ResizeSection::BOTTOM_RIGHT);
    }

    #[test]
    fn bottom_right_cell_moves_right_and_bottom() {
        let section = ResizeSection::from_point(at(0.9, 0.9), &window());
        assert_eq!(section, ResizeSection::BOTTOM_RIGHT);
    }

    #[test]
    fn edge_cells_move_a_single_edge() {
        let left = ResizeSection::from_point(at(0.1, 0.5), &window());
        assert_eq!(
            left,
            ResizeSection {
                left: true,
                top: false,
                right: false,
                bottom: false,
            }
        );
        let top = ResizeSection::from_point(at(0.5, 0.2), &window());
        assert_eq!(
            top,
            ResizeSection {
                left: false,
                top: true,
                right: false,
                bottom: false,
            }
        );
    }

    #[test]
    fn top_right_cell_moves_right_and_top() {
        let section = ResizeSection::from_point(at(0.8, 0.1), &window());
        assert_eq!(
            section,
            ResizeSection {
                left: false,
                top: true,
                right: true,
                bottom: false,
            }
        );
    }

    #[test]
    fn degenerate_window_falls_into_the_center_cell() {
        let flat = Geometry::new(0.0, 0.0, 0.0, 0.0);
        let section = ResizeSection::from_point(Point::new(0.0, 0.0), &flat);
        assert_eq!(section, ResizeSection::BOTTOM_RIGHT);
    }
}
