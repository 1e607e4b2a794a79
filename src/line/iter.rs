//! LineIter: A random-access cursor over the rows of a frame.
//!
//! # The held view
//!
//! A [`LineIter`] does not produce a fresh [`LineView`] per position. It owns
//! exactly one view and moves it in place: every motion rewrites that view's
//! row index and flat positions. Dereferencing hands out a reference to it,
//! which is therefore only meaningful until the next motion. Copy the view
//! out with [`LineIter::materialize`] (or `*iter`, since views are `Copy`)
//! when it has to outlive the cursor's position. The borrow checker already
//! refuses to let a `&LineView` obtained through `Deref` survive a motion.
//!
//! Motion is unchecked. Moving past the last row or before row 0 is allowed;
//! the checked accessors of a view in such a position report
//! [`Error::LineOutOfFrame`](crate::Error::LineOutOfFrame), and its iterators
//! are empty. [`Lines`] bounds a cursor with an end cursor and implements
//! [`Iterator`] on top.

use super::{LineView, Shape};
use crate::storage::RandomAccess;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::{AddAssign, Deref, SubAssign};

/// A cursor that advances one row (`x_pixel` positions) per step.
pub struct LineIter<'a, S: ?Sized> {
    view: LineView<'a, S>,
}

impl<'a, S: RandomAccess + ?Sized> LineIter<'a, S> {
    /// Start at `view`.
    #[inline]
    pub const fn new(view: LineView<'a, S>) -> Self {
        Self { view }
    }

    /// Cursor at row 0.
    #[inline]
    pub const fn begin(source: &'a S, shape: Shape) -> Self {
        Self::at_row(source, shape, 0)
    }

    /// Cursor one past the last row.
    #[inline]
    pub const fn end(source: &'a S, shape: Shape) -> Self {
        Self::at_row(source, shape, shape.y_pixel())
    }

    /// Cursor at `row`.
    #[inline]
    pub const fn at_row(source: &'a S, shape: Shape, row: usize) -> Self {
        Self::new(LineView::new(source, row, shape))
    }

    /// The held view. Its contents change on the next motion.
    #[inline]
    pub const fn view(&self) -> &LineView<'a, S> {
        &self.view
    }

    /// Copy of the held view, unaffected by later motion.
    #[inline]
    pub const fn materialize(&self) -> LineView<'a, S> {
        self.view
    }

    /// Move to the next row.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.view.span.shift(1);
        self
    }

    /// Move to the previous row.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.view.span.shift(-1);
        self
    }

    /// Move forward by `rows` rows (backward when negative).
    #[inline]
    pub fn advance_by(&mut self, rows: isize) -> &mut Self {
        self.view.span.shift(rows);
        self
    }

    /// Move backward by `rows` rows (forward when negative).
    #[inline]
    pub fn retreat_by(&mut self, rows: isize) -> &mut Self {
        self.view.span.shift(rows.wrapping_neg());
        self
    }

    /// Signed number of rows from `self` to `other`.
    ///
    /// `None` when the cursors belong to different frames.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance_to(&self, other: &Self) -> Option<isize> {
        self.view
            .is_comparable(&other.view)
            .then(|| other.view.span.line.wrapping_sub(self.view.span.line) as isize)
    }
}

impl<S: ?Sized> Clone for LineIter<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for LineIter<'_, S> {}

impl<S: ?Sized> std::fmt::Debug for LineIter<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LineIter").field(&self.view).finish()
    }
}

impl<'a, S: ?Sized> Deref for LineIter<'a, S> {
    type Target = LineView<'a, S>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.view
    }
}

impl<S: RandomAccess + ?Sized> AddAssign<isize> for LineIter<'_, S> {
    #[inline]
    fn add_assign(&mut self, rows: isize) {
        self.advance_by(rows);
    }
}

impl<S: RandomAccess + ?Sized> SubAssign<isize> for LineIter<'_, S> {
    #[inline]
    fn sub_assign(&mut self, rows: isize) {
        self.retreat_by(rows);
    }
}

impl<S: RandomAccess + ?Sized> PartialEq for LineIter<'_, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.view == other.view
    }
}

impl<S: RandomAccess + ?Sized> Eq for LineIter<'_, S> {}

impl<S: RandomAccess + ?Sized> PartialOrd for LineIter<'_, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.view.partial_cmp(&other.view)
    }
}

/// Rows `begin..end` of a frame, as an ordinary iterator of [`LineView`]s.
///
/// This is the surface a frame type hands out from its `lines()` accessor.
pub struct Lines<'a, S: ?Sized> {
    front: LineIter<'a, S>,
    back: LineIter<'a, S>,
}

impl<'a, S: RandomAccess + ?Sized> Lines<'a, S> {
    /// Rows from `begin` up to, not including, `end`.
    ///
    /// Cursors of different frames, or an `end` before `begin`, give an
    /// empty iterator.
    #[inline]
    pub const fn new(begin: LineIter<'a, S>, end: LineIter<'a, S>) -> Self {
        Self { front: begin, back: end }
    }

    /// Rows not yet yielded from either end.
    #[inline]
    fn remaining(&self) -> usize {
        self.front
            .distance_to(&self.back)
            .and_then(|d| usize::try_from(d).ok())
            .unwrap_or(0)
    }
}

impl<S: ?Sized> Clone for Lines<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self { front: self.front, back: self.back }
    }
}

impl<S: ?Sized> std::fmt::Debug for Lines<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lines")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, S: RandomAccess + ?Sized> Iterator for Lines<'a, S> {
    type Item = LineView<'a, S>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let line = self.front.materialize();
        self.front.increment();
        Some(line)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match isize::try_from(n) {
            Ok(step) if n < self.remaining() => {
                self.front += step;
                self.next()
            }
            _ => {
                self.front = self.back;
                None
            }
        }
    }
}

impl<S: RandomAccess + ?Sized> DoubleEndedIterator for Lines<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        self.back.decrement();
        Some(self.back.materialize())
    }
}

impl<S: RandomAccess + ?Sized> ExactSizeIterator for Lines<'_, S> {}

impl<S: RandomAccess + ?Sized> FusedIterator for Lines<'_, S> {}

/// Every row of a frame of `shape` stored in `source`.
///
/// # Example
/// ```
/// use asd_lines::{lines, Shape};
///
/// let buf: Vec<u16> = (0..12).collect();
/// let sums: Vec<u16> = lines(&buf, Shape::new(4, 3))
///     .map(|line| line.iter().sum())
///     .collect();
/// assert_eq!(sums, [6, 22, 38]);
/// ```
#[inline]
pub const fn lines<S: RandomAccess + ?Sized>(source: &S, shape: Shape) -> Lines<'_, S> {
    Lines::new(LineIter::begin(source, shape), LineIter::end(source, shape))
}
