//! Storage module: One operation set over three container behaviours.
//!
//! This module contains:
//! - [`Storage`]: `size` / `resize` / `clear`, implemented for `Vec`, `VecDeque` and arrays
//! - [`ContiguousStorage`]: raw pointer access, only where memory is contiguous
//! - [`RandomAccess`]: indexed element access that row views are built on
//! - [`StorageKind`] / [`StorageCaps`]: the closed set of behaviours
//! - [`StorageTag`]: type-level selection of a container for an element type
//!
//! | Operation | `Vec` | `VecDeque` | `[T; N]` |
//! |---|---|---|---|
//! | `size` | length | length | `N` |
//! | `resize(m)` | length becomes `m` | length becomes `m` | no-op if `m <= N`, else [`Error::Allocation`] |
//! | `clear` | length becomes 0 | length becomes 0 | no-op |
//! | `get_ptr` | first element | not available | first element |
//!
//! The array `clear` leaves both the length and the contents alone. It is not
//! the same as the growable `clear`; callers that need zeroed samples must
//! overwrite them.

mod kind;
mod tag;

pub use kind::{StorageCaps, StorageKind};
pub use tag::{Array, Deque, StorageTag, Vector};

use crate::error::{Error, Result};
use log::{debug, trace};
use std::collections::VecDeque;

/// A container a frame buffer can live in.
pub trait Storage {
    /// Element type.
    type Item;

    /// Behavioural profile of this container.
    fn kind(&self) -> StorageKind;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Make room for exactly `len` elements.
    ///
    /// Growable containers reallocate or truncate; fixed-capacity ones only
    /// check that `len` fits.
    fn resize(&mut self, len: usize) -> Result<()>;

    /// Empty the container (a no-op for fixed capacity).
    fn clear(&mut self);
}

/// Storage whose elements form one contiguous block.
pub trait ContiguousStorage: Storage {
    /// All elements as a slice.
    fn as_slice(&self) -> &[Self::Item];

    /// Pointer to the first element.
    #[inline]
    fn as_ptr(&self) -> *const Self::Item {
        self.as_slice().as_ptr()
    }
}

/// Indexed access to a flat sequence of elements.
pub trait RandomAccess {
    /// Element type.
    type Item;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// Whether there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, if in bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than [`len`](Self::len).
    #[allow(unsafe_code)]
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Item {
        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.get(index).unwrap_unchecked() }
    }

    /// Contiguous view of the elements, when the layout has one.
    #[inline]
    fn as_contiguous(&self) -> Option<&[Self::Item]> {
        None
    }
}

/// Indexed mutable access to a flat sequence of elements.
pub trait RandomAccessMut: RandomAccess {
    /// Mutable element at `index`, if in bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Mutable element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than [`len`](RandomAccess::len).
    #[allow(unsafe_code)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Item {
        // SAFETY: the caller guarantees `index < len`.
        unsafe { self.get_mut(index).unwrap_unchecked() }
    }

    /// Mutable contiguous view of the elements, when the layout has one.
    #[inline]
    fn as_contiguous_mut(&mut self) -> Option<&mut [Self::Item]> {
        None
    }
}

// ---------------------------------------------------------------------------
// Vec
// ---------------------------------------------------------------------------

impl<T: Default> Storage for Vec<T> {
    type Item = T;

    #[inline]
    fn kind(&self) -> StorageKind {
        StorageKind::GrowableContiguous
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn resize(&mut self, len: usize) -> Result<()> {
        trace!("vec storage resize: {} -> {}", self.len(), len);
        self.resize_with(len, T::default);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T: Default> ContiguousStorage for Vec<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

// ---------------------------------------------------------------------------
// VecDeque
// ---------------------------------------------------------------------------

impl<T: Default> Storage for VecDeque<T> {
    type Item = T;

    #[inline]
    fn kind(&self) -> StorageKind {
        StorageKind::GrowableNonContiguous
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn resize(&mut self, len: usize) -> Result<()> {
        trace!("deque storage resize: {} -> {}", self.len(), len);
        self.resize_with(len, T::default);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

// ---------------------------------------------------------------------------
// Array
// ---------------------------------------------------------------------------

impl<T, const N: usize> Storage for [T; N] {
    type Item = T;

    #[inline]
    fn kind(&self) -> StorageKind {
        StorageKind::FixedCapacity(N)
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }

    fn resize(&mut self, len: usize) -> Result<()> {
        if len > N {
            debug!("array(size = {N}) cannot hold {len} elements");
            return Err(Error::Allocation { capacity: N, requested: len });
        }
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        trace!("array(size = {N}) clear is a no-op");
    }
}

impl<T, const N: usize> ContiguousStorage for [T; N] {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

// ---------------------------------------------------------------------------
// Random access
// ---------------------------------------------------------------------------

#[allow(unsafe_code)]
impl<T> RandomAccess for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < len`.
        unsafe { <[T]>::get_unchecked(self, index) }
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[T]> {
        Some(self)
    }
}

#[allow(unsafe_code)]
impl<T> RandomAccessMut for [T] {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees `index < len`.
        unsafe { <[T]>::get_unchecked_mut(self, index) }
    }

    #[inline]
    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

/// Forwards random access to the slice implementation.
macro_rules! random_access_via_slice {
    ($ty:ty, $($gen:tt)*) => {
        #[allow(unsafe_code)]
        impl<$($gen)*> RandomAccess for $ty {
            type Item = T;

            #[inline]
            fn len(&self) -> usize {
                RandomAccess::len(&self[..])
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&T> {
                RandomAccess::get(&self[..], index)
            }

            #[inline]
            unsafe fn get_unchecked(&self, index: usize) -> &T {
                // SAFETY: forwarded precondition.
                unsafe { RandomAccess::get_unchecked(&self[..], index) }
            }

            #[inline]
            fn as_contiguous(&self) -> Option<&[T]> {
                Some(&self[..])
            }
        }

        #[allow(unsafe_code)]
        impl<$($gen)*> RandomAccessMut for $ty {
            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                RandomAccessMut::get_mut(&mut self[..], index)
            }

            #[inline]
            unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
                // SAFETY: forwarded precondition.
                unsafe { RandomAccessMut::get_unchecked_mut(&mut self[..], index) }
            }

            #[inline]
            fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
                Some(&mut self[..])
            }
        }
    };
}

random_access_via_slice!(Vec<T>, T);
random_access_via_slice!([T; N], T, const N: usize);

impl<T> RandomAccess for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T> RandomAccessMut for VecDeque<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

// ---------------------------------------------------------------------------
// Free operations
// ---------------------------------------------------------------------------

/// Number of elements in `storage`.
#[inline]
pub fn size<S: Storage + ?Sized>(storage: &S) -> usize {
    storage.size()
}

/// Resize `storage` to hold `len` elements.
///
/// # Errors
/// [`Error::Allocation`] when a fixed-capacity container is asked for more
/// than its capacity. The container is left unmodified in that case.
#[inline]
pub fn resize<S: Storage + ?Sized>(storage: &mut S, len: usize) -> Result<()> {
    storage.resize(len)
}

/// Empty `storage`. Fixed-capacity containers keep their length and contents.
#[inline]
pub fn clear<S: Storage + ?Sized>(storage: &mut S) {
    storage.clear();
}

/// Pointer to the first element of a contiguous container.
#[inline]
pub fn get_ptr<S: ContiguousStorage + ?Sized>(storage: &S) -> *const S::Item {
    storage.as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_resize_and_size() {
        let mut v: Vec<u16> = Vec::new();
        for m in [0, 1, 12, 3, 0, 100] {
            resize(&mut v, m).unwrap();
            assert_eq!(size(&v), m);
        }
    }

    #[test]
    fn test_vec_resize_fills_default() {
        let mut v = vec![7_i32; 2];
        resize(&mut v, 4).unwrap();
        assert_eq!(v, [7, 7, 0, 0]);
    }

    #[test]
    fn test_vec_clear() {
        let mut v = vec![1.0_f32; 16];
        clear(&mut v);
        assert_eq!(size(&v), 0);
    }

    #[test]
    fn test_vec_get_ptr() {
        let v = vec![3_u8, 4, 5];
        assert_eq!(get_ptr(&v), v.as_ptr());
        assert_eq!(v.kind(), StorageKind::GrowableContiguous);
    }

    #[test]
    fn test_deque_resize_and_clear() {
        let mut d: VecDeque<i16> = VecDeque::new();
        resize(&mut d, 9).unwrap();
        assert_eq!(size(&d), 9);
        d.push_front(-1);
        assert_eq!(RandomAccess::get(&d, 0), Some(&-1));
        clear(&mut d);
        assert_eq!(size(&d), 0);
        assert_eq!(d.kind(), StorageKind::GrowableNonContiguous);
        assert!(d.as_contiguous().is_none());
    }

    #[test]
    fn test_array_resize_within_capacity() {
        let mut a = [1_u8, 2, 3, 4];
        for m in 0..=4 {
            assert!(resize(&mut a, m).is_ok());
            assert_eq!(size(&a), 4);
        }
        assert_eq!(a, [1, 2, 3, 4]);
    }

    #[test]
    fn test_array_resize_over_capacity() {
        let mut a = [1_u8, 2, 3, 4];
        let err = resize(&mut a, 5).unwrap_err();
        assert_eq!(err, Error::Allocation { capacity: 4, requested: 5 });
        assert_eq!(a, [1, 2, 3, 4]);
    }

    #[test]
    fn test_array_clear_is_noop() {
        let mut a = [9_i32; 6];
        clear(&mut a);
        assert_eq!(size(&a), 6);
        assert_eq!(a, [9; 6]);
    }

    #[test]
    fn test_array_get_ptr() {
        let a = [0.5_f64; 3];
        assert_eq!(get_ptr(&a), a.as_ptr());
        assert_eq!(a.kind(), StorageKind::FixedCapacity(3));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_random_access_unchecked() {
        let v = vec![10, 20, 30];
        let d: VecDeque<i32> = v.iter().copied().collect();
        // SAFETY: index 2 is in bounds for both.
        unsafe {
            assert_eq!(*RandomAccess::get_unchecked(&v, 2), 30);
            assert_eq!(*RandomAccess::get_unchecked(&d, 2), 30);
        }
        assert_eq!(RandomAccess::get(&v, 3), None);
    }
}
