//! Shape: Frame geometry and row-major index math.

use std::ops::Range;

/// Width and height of a frame.
///
/// Samples are stored row-major: column `c` of row `r` lives at flat index
/// `r * x_pixel + c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    x_pixel: usize,
    y_pixel: usize,
}

impl Shape {
    /// Create a shape of `x_pixel` columns by `y_pixel` rows.
    ///
    /// A zero width is accepted but degenerate: every row is empty and
    /// every column access fails.
    #[inline]
    pub const fn new(x_pixel: usize, y_pixel: usize) -> Self {
        Self { x_pixel, y_pixel }
    }

    /// Row width.
    #[inline]
    pub const fn x_pixel(&self) -> usize {
        self.x_pixel
    }

    /// Number of rows.
    #[inline]
    pub const fn y_pixel(&self) -> usize {
        self.y_pixel
    }

    /// Total number of samples (saturating).
    #[inline]
    pub const fn len(&self) -> usize {
        self.x_pixel.saturating_mul(self.y_pixel)
    }

    /// Whether the frame has no samples.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x_pixel == 0 || self.y_pixel == 0
    }

    /// Convert (column, row) to a flat index.
    ///
    /// Returns `None` if either coordinate is out of bounds.
    #[inline]
    pub const fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.x_pixel || row >= self.y_pixel {
            return None;
        }
        match row.checked_mul(self.x_pixel) {
            Some(begin) => begin.checked_add(col),
            None => None,
        }
    }

    /// Convert a flat index to (column, row).
    #[inline]
    pub const fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.len() {
            Some((index % self.x_pixel, index / self.x_pixel))
        } else {
            None
        }
    }

    /// Flat index range covered by `row`.
    #[inline]
    pub const fn row_range(&self, row: usize) -> Option<Range<usize>> {
        if row >= self.y_pixel {
            return None;
        }
        let Some(begin) = row.checked_mul(self.x_pixel) else {
            return None;
        };
        match begin.checked_add(self.x_pixel) {
            Some(end) => Some(begin..end),
            None => None,
        }
    }
}

impl From<(usize, usize)> for Shape {
    #[inline]
    fn from((x_pixel, y_pixel): (usize, usize)) -> Self {
        Self::new(x_pixel, y_pixel)
    }
}
