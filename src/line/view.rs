//! LineView: A shared, bounds-checkable handle over one row of a frame.

use super::{Shape, Span};
use crate::error::Result;
use crate::storage::RandomAccess;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::{Index, Range};

/// One row of a frame, viewed in place.
///
/// A `LineView` never owns or copies samples. It borrows the whole frame
/// buffer and remembers which `x_pixel` positions make up its row, so it is
/// `Copy` and stays valid exactly as long as the borrow does.
///
/// # Comparison
///
/// Two views are equal when they point into the same buffer at the same
/// positions, for the same row of the same [`Shape`]. Ordering is partial:
/// views of different buffers or shapes are never ordered (every operator
/// returns `false`). Use [`is_comparable`](Self::is_comparable) to test this
/// up front.
pub struct LineView<'a, S: ?Sized> {
    pub(super) source: &'a S,
    pub(super) span: Span,
}

impl<'a, S: RandomAccess + ?Sized> LineView<'a, S> {
    /// View row `line` of a frame of `shape` stored in `source`.
    #[inline]
    pub const fn new(source: &'a S, line: usize, shape: Shape) -> Self {
        Self { source, span: Span::of_row(line, shape) }
    }

    /// View the flat positions `begin..end` as row `line`.
    ///
    /// # Errors
    /// [`Error::SpanWidth`](crate::Error::SpanWidth) unless
    /// `begin <= end` and `end - begin == shape.x_pixel()`.
    #[inline]
    pub fn from_parts(
        source: &'a S,
        begin: usize,
        end: usize,
        line: usize,
        shape: Shape,
    ) -> Result<Self> {
        let span = Span::new(begin, end, line, shape)?;
        Ok(Self { source, span })
    }

    /// Sample at column `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) when `index >= x_pixel`;
    /// [`Error::LineOutOfFrame`](crate::Error::LineOutOfFrame) when the view
    /// was moved outside the frame by a [`LineIter`](crate::LineIter).
    #[inline]
    pub fn at(&self, index: usize) -> Result<&'a S::Item> {
        let source = self.source;
        let flat = self.span.flat_index(index, source.len())?;
        source.get(flat).ok_or_else(|| self.span.out_of_frame())
    }

    /// Sample at column `index`, or `None` where [`at`](Self::at) would fail.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a S::Item> {
        self.at(index).ok()
    }

    /// Sample at column `index` without any check.
    ///
    /// # Safety
    /// The view must lie inside its frame and `index` must be smaller than
    /// `x_pixel`.
    #[inline]
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a S::Item {
        let source = self.source;
        // SAFETY: the caller guarantees `begin + index` is inside the buffer.
        unsafe { source.get_unchecked(self.span.begin + index) }
    }

    /// Row length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.span.shape.x_pixel()
    }

    /// Row length (same as [`len`](Self::len)).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len()
    }

    /// Largest possible row length, which is the row length.
    #[inline]
    pub const fn max_size(&self) -> usize {
        self.len()
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

    /// Flat position of the first sample.
    #[inline]
    pub const fn begin(&self) -> usize {
        self.span.begin
    }

    /// Flat position one past the last sample.
    #[inline]
    pub const fn end(&self) -> usize {
        self.span.end
    }

    /// The whole frame buffer.
    #[inline]
    pub const fn source(&self) -> &'a S {
        self.source
    }

    /// Whether the row lies inside its frame and the buffer.
    #[inline]
    pub fn is_in_frame(&self) -> bool {
        self.span.in_frame(self.source.len())
    }

    /// Iterate the row front to back; `.rev()` walks it back to front.
    ///
    /// Each call starts over. A view outside its frame yields nothing.
    #[inline]
    pub fn iter(&self) -> Elements<'a, S> {
        Elements { source: self.source, range: self.span.range(self.source.len()) }
    }

    /// The row as a slice, when the buffer is contiguous and the row is in frame.
    #[inline]
    pub fn as_slice(&self) -> Option<&'a [S::Item]> {
        let source = self.source;
        source
            .as_contiguous()
            .and_then(|all| all.get(self.span.range(source.len())))
            .filter(|row| row.len() == self.len())
    }

    /// Copy the row out.
    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Whether `self` and `other` belong to the same frame and can be ordered.
    #[inline]
    pub fn is_comparable(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.source, other.source) && self.span.shape == other.span.shape
    }
}

impl<S: ?Sized> Clone for LineView<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for LineView<'_, S> {}

impl<S: ?Sized> std::fmt::Debug for LineView<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineView")
            .field("line", &self.span.line)
            .field("begin", &self.span.begin)
            .field("end", &self.span.end)
            .field("x_pixel", &self.span.shape.x_pixel())
            .field("y_pixel", &self.span.shape.y_pixel())
            .finish()
    }
}

impl<S: RandomAccess + ?Sized> PartialEq for LineView<'_, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_comparable(other) && self.span == other.span
    }
}

impl<S: RandomAccess + ?Sized> Eq for LineView<'_, S> {}

impl<S: RandomAccess + ?Sized> PartialOrd for LineView<'_, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_comparable(other) {
            return None;
        }
        let (a, b) = (&self.span, &other.span);
        match (a.line.cmp(&b.line), a.begin.cmp(&b.begin)) {
            (Ordering::Equal, Ordering::Equal) if a.end == b.end => Some(Ordering::Equal),
            (Ordering::Less, Ordering::Less) => Some(Ordering::Less),
            (Ordering::Greater, Ordering::Greater) => Some(Ordering::Greater),
            _ => None,
        }
    }
}

impl<S: RandomAccess + ?Sized> Index<usize> for LineView<'_, S> {
    type Output = S::Item;

    /// # Panics
    /// Panics where [`LineView::at`] would return an error.
    #[inline]
    fn index(&self, index: usize) -> &S::Item {
        match self.at(index) {
            Ok(sample) => sample,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, S: RandomAccess + ?Sized> IntoIterator for LineView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Elements<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: RandomAccess + ?Sized> IntoIterator for &LineView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = Elements<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Samples of one row, produced by [`LineView::iter`].
pub struct Elements<'a, S: ?Sized> {
    source: &'a S,
    range: Range<usize>,
}

impl<S: ?Sized> Clone for Elements<'_, S> {
    fn clone(&self) -> Self {
        Self { source: self.source, range: self.range.clone() }
    }
}

impl<'a, S: RandomAccess + ?Sized> Iterator for Elements<'a, S> {
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.range.next().and_then(|i| source.get(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<S: RandomAccess + ?Sized> DoubleEndedIterator for Elements<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.range.next_back().and_then(|i| source.get(i))
    }
}

impl<S: RandomAccess + ?Sized> ExactSizeIterator for Elements<'_, S> {}

impl<S: RandomAccess + ?Sized> FusedIterator for Elements<'_, S> {}
