//! Tag: Pick a storage container before picking the element type.
//!
//! A frame type that is generic over *how* its samples are stored, but fixes
//! *what* the samples are itself, takes a tag and rebinds it:
//!
//! ```
//! use asd_lines::{Array, Storage, StorageTag, Vector};
//!
//! fn capacity_of<Tag: StorageTag>(buf: &Tag::Rebind<i16>) -> usize {
//!     buf.size()
//! }
//!
//! assert_eq!(capacity_of::<Vector>(&vec![0; 6]), 6);
//! assert_eq!(capacity_of::<Array<4>>(&[0; 4]), 4);
//! ```

use super::{RandomAccess, Storage, StorageKind};
use std::collections::VecDeque;

/// Type-level name of a storage kind.
pub trait StorageTag {
    /// The concrete container holding elements of type `T`.
    type Rebind<T: Default>: Storage<Item = T> + RandomAccess<Item = T>;

    /// Behavioural profile shared by every rebinding.
    fn kind() -> StorageKind;
}

/// Growable contiguous storage (`Vec<T>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vector;

/// Growable non-contiguous storage (`VecDeque<T>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Deque;

/// Fixed-capacity storage (`[T; N]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Array<const N: usize>;

impl StorageTag for Vector {
    type Rebind<T: Default> = Vec<T>;

    #[inline]
    fn kind() -> StorageKind {
        StorageKind::GrowableContiguous
    }
}

impl StorageTag for Deque {
    type Rebind<T: Default> = VecDeque<T>;

    #[inline]
    fn kind() -> StorageKind {
        StorageKind::GrowableNonContiguous
    }
}

impl<const N: usize> StorageTag for Array<N> {
    type Rebind<T: Default> = [T; N];

    #[inline]
    fn kind() -> StorageKind {
        StorageKind::FixedCapacity(N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::resize;

    fn fits<Tag: StorageTag>(buf: &mut Tag::Rebind<u16>, len: usize) -> bool {
        resize(buf, len).is_ok()
    }

    #[test]
    fn test_tag_kind_matches_container() {
        assert_eq!(Vector::kind(), Vec::<u8>::new().kind());
        assert_eq!(Deque::kind(), VecDeque::<u8>::new().kind());
        assert_eq!(Array::<3>::kind(), [0_u8; 3].kind());
    }

    #[test]
    fn test_tag_generic_resize() {
        let mut v: Vec<u16> = Vec::new();
        assert!(fits::<Vector>(&mut v, 1024));
        assert_eq!(v.len(), 1024);

        let mut d: VecDeque<u16> = VecDeque::new();
        assert!(fits::<Deque>(&mut d, 8));

        let mut a = [0_u16; 8];
        assert!(fits::<Array<8>>(&mut a, 8));
        assert!(!fits::<Array<8>>(&mut a, 9));
    }
}
