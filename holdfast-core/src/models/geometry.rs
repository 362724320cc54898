//! Window placement in screen coordinates, x,y from top left.
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Position and size of a window as the display server reported it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Geometry {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn contains_point(&self, point: Point) -> bool {
        let max_x = self.x + self.w;
        let max_y = self.y + self.h;
        (self.x <= point.x && point.x < max_x) && (self.y <= point.y && point.y < max_y)
    }

    /// Where `point` falls inside this window, as fractions of width and height.
    pub fn relative(&self, point: Point) -> (f64, f64) {
        ((point.x - self.x) / self.w, (point.y - self.y) / self.h)
    }

    /// A copy of this geometry translated by `delta`, size unchanged.
    #[must_use]
    pub fn translated(&self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let window = Geometry::new(10.0, 10.0, 100.0, 50.0);
        assert!(window.contains_point(Point::new(10.0, 10.0)));
        assert!(window.contains_point(Point::new(109.9, 59.9)));
        assert!(!window.contains_point(Point::new(110.0, 30.0)));
        assert!(!window.contains_point(Point::new(50.0, 60.0)));
    }

    #[test]
    fn relative_position_is_measured_from_the_window_origin() {
        let window = Geometry::new(100.0, 200.0, 400.0, 100.0);
        assert_eq!(window.relative(Point::new(200.0, 275.0)), (0.25, 0.75));
    }

    #[test]
    fn translating_keeps_the_size() {
        let window = Geometry::new(100.0, 100.0, 640.0, 480.0);
        let moved = window.translated(Point::new(-30.0, 12.5));
        assert_eq!(moved, Geometry::new(70.0, 112.5, 640.0, 480.0));
    }
}
