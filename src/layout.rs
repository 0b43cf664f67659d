//! Pixel geometry for drawing a board and mapping pointer positions to edges.
//!
//! Coordinates are in pixels with `x` to the right and `y` down. Dots sit on a
//! square lattice with spacing `d = size / (max(rows, cols) + 1)`, the first
//! dot half a spacing in from the top-left corner.

use crate::board::{Edge, Orientation};
use crate::constants::EDGE_WIDTH_RATIO;

pub type Pixel = (f64, f64);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    size: f64,
    spacing: f64,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, size: f64) -> Self {
        let spacing = size / (rows.max(cols) + 1) as f64;
        Self {
            rows,
            cols,
            size,
            spacing,
        }
    }

    /// Distance between neighbouring dots.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn edge_width(&self) -> f64 {
        EDGE_WIDTH_RATIO * self.size / self.rows.max(1) as f64
    }

    /// Pixel position of dot `(row, col)`.
    pub fn dot(&self, row: usize, col: usize) -> Pixel {
        let d = self.spacing;
        (col as f64 * d + d / 2.0, row as f64 * d + d / 2.0)
    }

    pub fn edge_segment(&self, edge: Edge) -> (Pixel, Pixel) {
        let Edge { row, col, .. } = edge;
        let end = match edge.orientation {
            Orientation::Horizontal => self.dot(row, col + 1),
            Orientation::Vertical => self.dot(row + 1, col),
        };
        (self.dot(row, col), end)
    }

    /// `(x0, y0, x1, y1)` of square `(row, col)`.
    pub fn square_rect(&self, row: usize, col: usize) -> (f64, f64, f64, f64) {
        let (x0, y0) = self.dot(row, col);
        let (x1, y1) = self.dot(row + 1, col + 1);
        (x0, y0, x1, y1)
    }

    /// The edge nearest to a pointer position.
    ///
    /// The square cell under the point is cut along both diagonals; the
    /// triangle containing the point picks that side of the cell. Points on a
    /// diagonal or outside the dot lattice yield `None`.
    pub fn edge_at(&self, x: f64, y: f64) -> Option<Edge> {
        let d = self.spacing;
        let cx = ((x - d / 2.0) / d).floor();
        let cy = ((y - d / 2.0) / d).floor();
        if cx < 0.0 || cy < 0.0 || cx >= self.cols as f64 || cy >= self.rows as f64 {
            return None;
        }
        let (col, row) = (cx as usize, cy as usize);
        let ax = x - (cx * d + d / 2.0);
        let ay = y - (cy * d + d / 2.0);

        // Above the main diagonal: ax > ay. Above the anti-diagonal: ax < d - ay.
        let above_main = ax > ay;
        let below_main = ax < ay;
        let above_anti = ax < d - ay;
        let below_anti = ax > d - ay;

        if above_main && below_anti {
            Some(Edge::vertical(row, col + 1))
        } else if below_main && above_anti {
            Some(Edge::vertical(row, col))
        } else if above_main && above_anti {
            Some(Edge::horizontal(row, col))
        } else if below_main && below_anti {
            Some(Edge::horizontal(row + 1, col))
        } else {
            None
        }
    }
}
