//! Error: The failures raised by row access and storage dispatch.
//!
//! Both errors are programmer-error signals. Nothing in this crate retries
//! or recovers; they propagate to the immediate caller, which usually maps
//! them onto its own format-level error.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`LineView`](crate::LineView) and the storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A column index was not smaller than the row width.
    #[error("line({line}): index({index}) exceeds x_pixel({x_pixel})")]
    OutOfRange {
        /// Row the access was made on.
        line: usize,
        /// Requested column.
        index: usize,
        /// Width of the row.
        x_pixel: usize,
    },

    /// A view was moved outside its frame by unchecked iterator motion.
    #[error("line({line}) lies outside the frame (y_pixel = {y_pixel})")]
    LineOutOfFrame {
        /// Row the view currently points at.
        line: usize,
        /// Height of the frame.
        y_pixel: usize,
    },

    /// A row span is not exactly `x_pixel` positions wide.
    #[error("span({begin}..{end}) is not x_pixel({x_pixel}) wide")]
    SpanWidth {
        /// First flat position.
        begin: usize,
        /// One past the last flat position.
        end: usize,
        /// Width of the row.
        x_pixel: usize,
    },

    /// A fixed-capacity container was asked to hold more than it can.
    #[error("array(size = {capacity}) has no enough storage({requested})")]
    Allocation {
        /// Fixed capacity of the container.
        capacity: usize,
        /// Size that was requested.
        requested: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange { line: 1, index: 4, x_pixel: 4 };
        assert_eq!(err.to_string(), "line(1): index(4) exceeds x_pixel(4)");
    }

    #[test]
    fn test_span_width_message() {
        let err = Error::SpanWidth { begin: 0, end: 2, x_pixel: 4 };
        assert_eq!(err.to_string(), "span(0..2) is not x_pixel(4) wide");
    }

    #[test]
    fn test_allocation_message() {
        let err = Error::Allocation { capacity: 12, requested: 16 };
        assert_eq!(err.to_string(), "array(size = 12) has no enough storage(16)");
    }
}
