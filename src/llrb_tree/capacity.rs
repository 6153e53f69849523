use super::LlrbTree;
use crate::raw::RawLlrbTree;

impl<T> LlrbTree<T> {
    /// Makes a new, empty `LlrbTree` with room for at least `capacity`
    /// elements before it reallocates.
    ///
    /// # Complexity
    ///
    /// *O*(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    /// # use llrb_tree::Keyed;
    /// # #[derive(Clone)]
    /// # struct Reading(i32, f64);
    /// # impl Keyed for Reading {
    /// #     type Key = i32;
    /// #     fn key(&self) -> &i32 {
    /// #         &self.0
    /// #     }
    /// # }
    ///
    /// let tree: LlrbTree<Reading> = LlrbTree::with_capacity(32);
    ///
    /// assert!(tree.capacity() >= 32);
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawLlrbTree::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the tree can hold without
    /// reallocating.
    ///
    /// # Complexity
    ///
    /// *O*(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    /// # use llrb_tree::Keyed;
    /// # #[derive(Clone)]
    /// # struct Reading(i32, f64);
    /// # impl Keyed for Reading {
    /// #     type Key = i32;
    /// #     fn key(&self) -> &i32 {
    /// #         &self.0
    /// #     }
    /// # }
    ///
    /// let mut tree = LlrbTree::with_capacity(2);
    /// let capacity = tree.capacity();
    /// assert!(capacity >= 2);
    ///
    /// // Inserting within capacity does not reallocate.
    /// tree.insert(Reading(1, 20.5));
    /// tree.insert(Reading(2, 19.0));
    /// assert_eq!(tree.capacity(), capacity);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
