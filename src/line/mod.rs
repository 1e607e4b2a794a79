//! Line module: Row views over a flat, row-major frame buffer.
//!
//! This module contains:
//! - [`Shape`]: Frame width/height and index math
//! - [`LineView`]: A shared, `Copy` handle over one row
//! - [`LineViewMut`]: An exclusive handle for writing one row
//! - [`LineIter`]: A random-access cursor moving one row per step
//! - [`Lines`] / [`lines`]: Standard iteration over the rows of a frame
//!
//! Views borrow the buffer rather than owning it. Any resize, clear or
//! reallocation of the buffer is ruled out while a view is alive.

mod iter;
mod shape;
mod span;
mod view;
mod view_mut;

use self::span::Span;

pub use iter::{lines, LineIter, Lines};
pub use shape::Shape;
pub use view::{Elements, LineView};
pub use view_mut::LineViewMut;
