use alloc::vec::Vec;

use super::handle::Handle;

/// Slot allocator the tree keeps its nodes in.
///
/// Slots are addressed by [`Handle`]; freed slots go on a free list and are
/// reused before the backing `Vec` grows. A handle stays valid until the
/// slot it addresses is freed, no matter what else is allocated.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    /// Makes a new, empty `Arena`. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Makes a new, empty `Arena` with room for `capacity` values.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Returns the number of values the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the number of live values. The tree keeps its own element
    /// counter; this accounting backs the test-side invariant checks.
    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    /// Returns `true` if the arena holds no live values.
    #[cfg(test)]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value`, returning the handle of the slot it landed in.
    ///
    /// # Panics
    ///
    /// Panics if every addressable slot is live.
    pub(crate) fn alloc(&mut self, value: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(value);
            return handle;
        }

        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is full ({} slots)!",
            Handle::MAX + 1
        );

        self.slots.push(Some(value));
        Handle::from_index(self.slots.len() - 1)
    }

    /// Returns a reference to the value at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` addresses a freed slot.
    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()]
            .as_ref()
            .expect("`Arena::get()` - `handle` addresses a freed slot!")
    }

    /// Returns a mutable reference to the value at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` addresses a freed slot.
    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()]
            .as_mut()
            .expect("`Arena::get_mut()` - `handle` addresses a freed slot!")
    }

    /// Removes and returns the value at `handle`, freeing the slot.
    ///
    /// # Panics
    ///
    /// Panics if `handle` addresses a freed slot.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let value = self.slots[handle.to_index()]
            .take()
            .expect("`Arena::take()` - `handle` addresses a freed slot!");
        self.free.push(handle);
        value
    }

    /// Frees the slot at `handle`, dropping its value.
    pub(crate) fn free(&mut self, handle: Handle) {
        drop(self.take(handle));
    }

    /// Frees every slot, keeping the backing allocation.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Get(usize),
        GetMut(usize, u32),
        Take(usize),
        Free(usize),
        Clear,
    }

    fn operation_strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => any::<usize>().prop_map(Operation::Get),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Operation::GetMut(i, v)),
            5 => any::<usize>().prop_map(Operation::Take),
            5 => any::<usize>().prop_map(Operation::Free),
            1 => Just(Operation::Clear),
        ]
    }

    #[test]
    fn with_capacity_preallocates() {
        let arena: Arena<u32> = Arena::with_capacity(16);

        assert!(arena.capacity() >= 16);
        assert_eq!(arena.len(), 0);
        assert!(arena.is_empty());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut arena = Arena::new();

        let first = arena.alloc(1_u32);
        let second = arena.alloc(2);
        arena.free(first);
        let third = arena.alloc(3);

        assert_eq!(third, first);
        assert_eq!(*arena.get(second), 2);
        assert_eq!(*arena.get(third), 3);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn live_count_tracks_alloc_and_free() {
        let mut arena = Arena::new();
        assert!(arena.is_empty());

        let first = arena.alloc(1_u32);
        let second = arena.alloc(2);
        assert_eq!(arena.len(), 2);

        arena.free(first);
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());

        arena.free(second);
        assert_eq!(arena.len(), 0);
        assert!(arena.is_empty());
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc()` - arena is full")]
    fn alloc_beyond_max() {
        let mut arena = Arena::new();
        for index in 0..=(Handle::MAX + 1) {
            let _ = arena.alloc(index);
        }
    }

    proptest! {
        /// The arena must track a `Vec` of live `(Handle, value)` pairs
        /// under any operation sequence.
        #[test]
        fn arena_matches_model(operations in prop::collection::vec(operation_strategy(), 0..256)) {
            let mut arena = Arena::new();
            let mut model: Vec<(Handle, u32)> = Vec::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.alloc(value);
                        model.push((handle, value));
                    }
                    Operation::Get(index) if !model.is_empty() => {
                        let (handle, value) = model[index % model.len()];
                        prop_assert_eq!(*arena.get(handle), value);
                    }
                    Operation::GetMut(index, value) if !model.is_empty() => {
                        let slot = index % model.len();
                        let (handle, _) = model[slot];
                        *arena.get_mut(handle) = value;
                        model[slot].1 = value;
                    }
                    Operation::Take(index) if !model.is_empty() => {
                        let (handle, value) = model.swap_remove(index % model.len());
                        prop_assert_eq!(arena.take(handle), value);
                    }
                    Operation::Free(index) if !model.is_empty() => {
                        let (handle, _) = model.swap_remove(index % model.len());
                        arena.free(handle);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                    // Reads and removals against an empty model.
                    _ => {}
                }

                prop_assert_eq!(arena.len(), model.len());
                prop_assert_eq!(arena.is_empty(), model.is_empty());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }
}
