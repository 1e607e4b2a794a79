//! Span: Position of one row inside the flat buffer.
//!
//! Shared by the shared view, the exclusive view and the row iterator, which
//! is the only thing allowed to move it.

use super::Shape;
use crate::error::{Error, Result};
use std::ops::Range;

/// `begin..end` in flat positions plus the row index it stands for.
///
/// `end - begin == shape.x_pixel()` always holds (wrapping). Positions use
/// wrapping arithmetic so that unchecked motion before row 0 never panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(super) struct Span {
    pub(super) begin: usize,
    pub(super) end: usize,
    pub(super) line: usize,
    pub(super) shape: Shape,
}

impl Span {
    /// Span of row `line`.
    #[inline]
    pub(super) const fn of_row(line: usize, shape: Shape) -> Self {
        let begin = line.wrapping_mul(shape.x_pixel());
        Self { begin, end: begin.wrapping_add(shape.x_pixel()), line, shape }
    }

    /// Span over explicit positions, rejected unless exactly one row wide.
    #[inline]
    pub(super) const fn new(begin: usize, end: usize, line: usize, shape: Shape) -> Result<Self> {
        if begin > end || end - begin != shape.x_pixel() {
            return Err(Error::SpanWidth { begin, end, x_pixel: shape.x_pixel() });
        }
        Ok(Self { begin, end, line, shape })
    }

    /// Whether the row lies inside both the frame and a buffer of `len`.
    #[inline]
    pub(super) const fn in_frame(&self, len: usize) -> bool {
        self.line < self.shape.y_pixel()
            && self.begin <= self.end
            && self.end - self.begin == self.shape.x_pixel()
            && self.end <= len
    }

    /// Flat position of column `index`, checked against the row width first.
    #[inline]
    pub(super) const fn flat_index(&self, index: usize, len: usize) -> Result<usize> {
        if index >= self.shape.x_pixel() {
            return Err(Error::OutOfRange {
                line: self.line,
                index,
                x_pixel: self.shape.x_pixel(),
            });
        }
        if !self.in_frame(len) {
            return Err(self.out_of_frame());
        }
        Ok(self.begin + index)
    }

    /// Flat positions to traverse; empty when the row is outside the frame.
    #[inline]
    pub(super) const fn range(&self, len: usize) -> Range<usize> {
        if self.in_frame(len) {
            self.begin..self.end
        } else {
            0..0
        }
    }

    #[inline]
    pub(super) const fn out_of_frame(&self) -> Error {
        Error::LineOutOfFrame { line: self.line, y_pixel: self.shape.y_pixel() }
    }

    /// Move by `rows` rows. No bounds check.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(super) fn shift(&mut self, rows: isize) {
        let step = (self.shape.x_pixel() as isize).wrapping_mul(rows);
        self.begin = self.begin.wrapping_add_signed(step);
        self.end = self.end.wrapping_add_signed(step);
        self.line = self.line.wrapping_add_signed(rows);
    }
}
