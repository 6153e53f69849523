use core::num::NonZero;

// `u16` in test builds so capacity exhaustion is reachable by a test.
#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// A niche-optimized index into an [`Arena`](super::arena::Arena).
///
/// Stored biased by one so that `Option<Handle>` is the same size as
/// `Handle` itself; child links in tree nodes cost one word of the two
/// they would otherwise need.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// The largest index a `Handle` can address.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    /// Creates a `Handle` from a slot index.
    ///
    /// # Panics
    ///
    /// Panics if `index > Handle::MAX`.
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(
            index <= Self::MAX,
            "`Handle::from_index()` - `index` > `Handle::MAX`!"
        );

        // `index + 1` cannot overflow or truncate, `index <= MAX`.
        #[allow(clippy::cast_possible_truncation)]
        let raw = (index + 1) as RawHandle;
        match NonZero::new(raw) {
            Some(handle) => Self(handle),
            None => unreachable!(),
        }
    }

    /// Returns the slot index this `Handle` addresses.
    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
