//! # asd-lines
//!
//! Storage dispatch and row views for two-dimensional sample data kept in a
//! one-dimensional buffer, as used by AFM frame types.
//!
//! ## Core Concepts
//!
//! - **Storage kinds**: `Vec`, `VecDeque` and `[T; N]` share one
//!   `size` / `resize` / `clear` surface, each with its own behaviour
//! - **Row views**: a [`LineView`] presents `x_pixel` samples of the buffer as
//!   one bounds-checkable row, without copying
//! - **Row cursor**: a [`LineIter`] walks rows by moving a single held view
//!
//! The crate never allocates a frame buffer; it only operates on the
//! container the caller hands in.
//!
//! ## Example
//!
//! ```rust
//! use asd_lines::{LineIter, LineView, Shape};
//!
//! let buf: Vec<i32> = (0..12).collect();
//! let shape = Shape::new(4, 3);
//!
//! let line = LineView::new(&buf, 1, shape);
//! assert_eq!(line.at(2), Ok(&6));
//! assert!(line.at(4).is_err());
//!
//! let mut it = LineIter::begin(&buf, shape);
//! it.increment();
//! assert_eq!(*it, line);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod line;
pub mod storage;

// Re-exports for convenience
pub use error::{Error, Result};
pub use line::{lines, Elements, LineIter, LineView, LineViewMut, Lines, Shape};
pub use storage::{
    clear, get_ptr, resize, size, Array, ContiguousStorage, Deque, RandomAccess, RandomAccessMut,
    Storage, StorageCaps, StorageKind, StorageTag, Vector,
};
