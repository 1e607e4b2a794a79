//! LineViewMut: An exclusive handle over one row, for writing samples in place.

use super::{LineView, Shape, Span};
use crate::error::Result;
use crate::storage::RandomAccessMut;
use std::ops::{Index, IndexMut};

/// One row of a frame, borrowed mutably.
///
/// Holds the only borrow of the frame buffer, so there is at most one live
/// `LineViewMut` per buffer. Reads go through [`as_view`](Self::as_view) or
/// the accessors mirrored here.
pub struct LineViewMut<'a, S: ?Sized> {
    source: &'a mut S,
    span: Span,
}

impl<'a, S: RandomAccessMut + ?Sized> LineViewMut<'a, S> {
    /// Borrow row `line` of a frame of `shape` stored in `source`.
    #[inline]
    pub fn new(source: &'a mut S, line: usize, shape: Shape) -> Self {
        Self { source, span: Span::of_row(line, shape) }
    }

    /// Reborrow as a shared view.
    #[inline]
    pub fn as_view(&self) -> LineView<'_, S> {
        LineView { source: &*self.source, span: self.span }
    }

    /// Sample at column `index`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&S::Item> {
        let flat = self.span.flat_index(index, self.source.len())?;
        self.source.get(flat).ok_or_else(|| self.span.out_of_frame())
    }

    /// Mutable sample at column `index`.
    ///
    /// # Errors
    /// Same as [`LineView::at`].
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut S::Item> {
        let flat = self.span.flat_index(index, self.source.len())?;
        let out_of_frame = self.span.out_of_frame();
        self.source.get_mut(flat).ok_or(out_of_frame)
    }

    /// Sample at column `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&S::Item> {
        self.at(index).ok()
    }

    /// Mutable sample at column `index`, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut S::Item> {
        self.at_mut(index).ok()
    }

    /// Mutable sample at column `index` without any check.
    ///
    /// # Safety
    /// The view must lie inside its frame and `index` must be smaller than
    /// `x_pixel`.
    #[inline]
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut S::Item {
        // SAFETY: the caller guarantees `begin + index` is inside the buffer.
        unsafe { self.source.get_unchecked_mut(self.span.begin + index) }
    }

    /// Row length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.span.shape.x_pixel()
    }

    /// Always `false`: a row never changes length.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of this row within the frame.
    #[inline]
    pub const fn y_position(&self) -> usize {
        self.span.line
    }

    /// Geometry of the frame this row belongs to.
    #[inline]
    pub const fn shape(&self) -> Shape {
        self.span.shape
    }

    /// The row as a mutable slice, when the buffer is contiguous and the row is in frame.
    pub fn as_mut_slice(&mut self) -> Option<&mut [S::Item]> {
        let range = self.span.range(self.source.len());
        let width = self.len();
        self.source
            .as_contiguous_mut()
            .and_then(|all| all.get_mut(range))
            .filter(|row| row.len() == width)
    }

    /// Apply `f` to every sample of the row, front to back.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut S::Item),
    {
        for i in self.span.range(self.source.len()) {
            if let Some(sample) = self.source.get_mut(i) {
                f(sample);
            }
        }
    }

    /// Overwrite every sample of the row with `value`.
    pub fn fill(&mut self, value: S::Item)
    where
        S::Item: Clone,
    {
        self.for_each_mut(|sample| *sample = value.clone());
    }
}

impl<S: ?Sized> std::fmt::Debug for LineViewMut<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineViewMut")
            .field("line", &self.span.line)
            .field("begin", &self.span.begin)
            .field("end", &self.span.end)
            .field("x_pixel", &self.span.shape.x_pixel())
            .field("y_pixel", &self.span.shape.y_pixel())
            .finish()
    }
}

impl<S: RandomAccessMut + ?Sized> Index<usize> for LineViewMut<'_, S> {
    type Output = S::Item;

    #[inline]
    fn index(&self, index: usize) -> &S::Item {
        match self.at(index) {
            Ok(sample) => sample,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<S: RandomAccessMut + ?Sized> IndexMut<usize> for LineViewMut<'_, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut S::Item {
        match self.at_mut(index) {
            Ok(sample) => sample,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::VecDeque;

    #[test]
    fn test_view_mut_write() {
        let mut buf: Vec<i32> = (0..12).collect();
        let shape = Shape::new(4, 3);

        let mut line = LineViewMut::new(&mut buf, 1, shape);
        *line.at_mut(0).unwrap() = -4;
        line[3] = -7;
        assert_eq!(line.at_mut(4).unwrap_err(), Error::OutOfRange { line: 1, index: 4, x_pixel: 4 });
        assert_eq!(line.as_view().to_vec(), [-4, 5, 6, -7]);

        assert_eq!(buf, [0, 1, 2, 3, -4, 5, 6, -7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_view_mut_fill_deque() {
        let mut buf = VecDeque::from(vec![0_u8; 6]);
        let shape = Shape::new(3, 2);

        let mut line = LineViewMut::new(&mut buf, 1, shape);
        assert!(line.as_mut_slice().is_none());
        line.fill(9);
        assert_eq!(line.y_position(), 1);

        assert_eq!(buf, [0, 0, 0, 9, 9, 9]);
    }

    #[test]
    fn test_view_mut_slice_array() {
        let mut buf = [1.0_f32; 6];
        let shape = Shape::new(2, 3);

        let mut line = LineViewMut::new(&mut buf, 2, shape);
        line.as_mut_slice().unwrap().copy_from_slice(&[2.0, 3.0]);
        line.for_each_mut(|s| *s *= 2.0);

        assert_eq!(buf, [1.0, 1.0, 1.0, 1.0, 4.0, 6.0]);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_view_mut_get_unchecked_mut() {
        let mut buf: Vec<i32> = (0..12).collect();
        let mut line = LineViewMut::new(&mut buf, 2, Shape::new(4, 3));
        for i in 0..line.len() {
            // SAFETY: row 2 is in frame and i < x_pixel.
            unsafe { *line.get_unchecked_mut(i) *= -1 };
        }
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7, -8, -9, -10, -11]);
    }

    #[test]
    fn test_view_mut_outside_frame() {
        let mut buf = vec![0_u8; 4];
        let mut line = LineViewMut::new(&mut buf, 2, Shape::new(2, 2));
        assert_eq!(line.get_mut(0), None);
        assert_eq!(line.at(1), Err(Error::LineOutOfFrame { line: 2, y_pixel: 2 }));
        line.fill(1);
        assert_eq!(buf, [0; 4]);
    }
}
