//! Kind: The closed set of storage behaviours and their capabilities.

use bitflags::bitflags;

bitflags! {
    /// What a storage kind can do.
    ///
    /// # Example
    /// ```
    /// use asd_lines::{StorageCaps, StorageKind};
    /// let caps = StorageKind::GrowableContiguous.capabilities();
    /// assert!(caps.contains(StorageCaps::RESIZABLE | StorageCaps::CONTIGUOUS));
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct StorageCaps: u8 {
        /// `resize` may change the length.
        const RESIZABLE = 0b0000_0001;
        /// `clear` empties the container.
        const CLEARABLE = 0b0000_0010;
        /// Elements are laid out in one contiguous block (raw pointer access).
        const CONTIGUOUS = 0b0000_0100;
    }
}

/// Behavioural profile of a storage container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Linear memory resizable to any length (`Vec`).
    GrowableContiguous,
    /// Resizable, but without a contiguous block (`VecDeque`).
    GrowableNonContiguous,
    /// Compile-time fixed length (`[T; N]`).
    FixedCapacity(usize),
}

impl StorageKind {
    /// Capabilities of this kind.
    #[inline]
    pub const fn capabilities(self) -> StorageCaps {
        match self {
            Self::GrowableContiguous => StorageCaps::RESIZABLE
                .union(StorageCaps::CLEARABLE)
                .union(StorageCaps::CONTIGUOUS),
            Self::GrowableNonContiguous => StorageCaps::RESIZABLE.union(StorageCaps::CLEARABLE),
            Self::FixedCapacity(_) => StorageCaps::CONTIGUOUS,
        }
    }

    /// Whether `resize` and `clear` change the length.
    #[inline]
    pub const fn is_growable(self) -> bool {
        self.capabilities().contains(StorageCaps::RESIZABLE)
    }

    /// Whether the storage supports raw pointer access.
    #[inline]
    pub const fn is_contiguous(self) -> bool {
        self.capabilities().contains(StorageCaps::CONTIGUOUS)
    }

    /// Upper bound on the length, if there is one.
    #[inline]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::FixedCapacity(n) => Some(n),
            Self::GrowableContiguous | Self::GrowableNonContiguous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_capabilities() {
        assert!(StorageKind::GrowableContiguous.is_growable());
        assert!(StorageKind::GrowableContiguous.is_contiguous());

        assert!(StorageKind::GrowableNonContiguous.is_growable());
        assert!(!StorageKind::GrowableNonContiguous.is_contiguous());

        let fixed = StorageKind::FixedCapacity(12);
        assert!(!fixed.is_growable());
        assert!(fixed.is_contiguous());
        assert!(!fixed.capabilities().contains(StorageCaps::CLEARABLE));
    }

    #[test]
    fn test_kind_capacity() {
        assert_eq!(StorageKind::FixedCapacity(12).capacity(), Some(12));
        assert_eq!(StorageKind::GrowableContiguous.capacity(), None);
        assert_eq!(StorageKind::GrowableNonContiguous.capacity(), None);
    }
}
