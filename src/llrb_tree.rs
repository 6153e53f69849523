use core::fmt;

use crate::keyed::Keyed;
use crate::raw::RawLlrbTree;

mod capacity;

/// An ordered collection of keyed elements, backed by a left-leaning
/// red-black tree.
///
/// Elements carry their own key (see [`Keyed`]); the tree keeps them sorted
/// by that key and offers insertion, point lookup and point removal, each in
/// *O*(log *n*) time. Inserting under a key that is already present replaces
/// the stored element rather than adding a second one.
///
/// An element's key must not change while the element is in the tree; see
/// [`Keyed`] for the exact contract.
///
/// # Examples
///
/// ```
/// use llrb_tree::{Keyed, LlrbTree};
///
/// // Elements carry their own key; here a reading keyed by station id.
/// #[derive(Clone, Debug, PartialEq)]
/// struct Reading {
///     station: i32,
///     celsius: f64,
/// }
///
/// impl Keyed for Reading {
///     type Key = i32;
///
///     fn key(&self) -> &i32 {
///         &self.station
///     }
/// }
///
/// let mut tree = LlrbTree::new();
/// tree.insert(Reading { station: 4, celsius: 21.5 });
/// tree.insert(Reading { station: 2, celsius: 19.0 });
/// tree.insert(Reading { station: 4, celsius: 22.1 });
///
/// // Same station: the first reading was replaced.
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.search(&4), Some(&Reading { station: 4, celsius: 22.1 }));
///
/// assert!(tree.remove(&2));
/// assert!(!tree.remove(&2));
/// ```
///
/// # Background
///
/// A left-leaning red-black tree is a binary search tree whose colored
/// links encode a 2-3 tree: red links glue nodes into wider logical nodes
/// and always lean left, black links carry the balanced height. Every
/// mutation repairs the coloring rules on its way back to the root, which
/// keeps the longest root-to-leaf path within twice the shortest.
pub struct LlrbTree<T> {
    raw: RawLlrbTree<T>,
}

impl<T> LlrbTree<T> {
    /// Makes a new, empty `LlrbTree`.
    ///
    /// Does not allocate anything on its own.
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
    /// let mut tree = LlrbTree::new();
    ///
    /// // elements can now be inserted into the empty tree
    /// tree.insert(Reading(1, 20.5));
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawLlrbTree::new(),
        }
    }

    /// Inserts an element into the tree.
    ///
    /// If the tree already holds an element with an equal key, that element
    /// is replaced and dropped; the length of the tree does not change.
    ///
    /// # Complexity
    ///
    /// *O*(log *n*)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    /// # use llrb_tree::Keyed;
    /// # #[derive(Clone, Debug, PartialEq)]
    /// # struct Reading(i32, f64);
    /// # impl Keyed for Reading {
    /// #     type Key = i32;
    /// #     fn key(&self) -> &i32 {
    /// #         &self.0
    /// #     }
    /// # }
    ///
    /// let mut tree = LlrbTree::new();
    /// tree.insert(Reading(7, 18.2));
    /// tree.insert(Reading(7, 18.9));
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.search(&7), Some(&Reading(7, 18.9)));
    /// ```
    pub fn insert(&mut self, item: T)
    where
        T: Keyed + Clone,
    {
        self.raw.insert(item);
    }

    /// Returns a reference to the element stored under `key`, or `None` if
    /// no element with that key is in the tree.
    ///
    /// # Complexity
    ///
    /// *O*(log *n*)
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_tree::LlrbTree;
    /// # use llrb_tree::Keyed;
    /// # #[derive(Clone, Debug, PartialEq)]
    /// # struct Reading(i32, f64);
    /// # impl Keyed for Reading {
    /// #     type Key = i32;
    /// #     fn key(&self) -> &i32 {
    /// #         &self.0
    /// #     }
    /// # }
    ///
    /// let mut tree = LlrbTree::new();
    /// tree.insert(Reading(1, 20.5));
    ///
    /// assert_eq!(tree.search(&1), Some(&Reading(1, 20.5)));
    /// assert_eq!(tree.search(&2), None);
    /// ```
    #[must_use]
    pub fn search(&self, key: &T::Key) -> Option<&T>
    where
        T: Keyed + Clone,
    {
        self.raw.search(key)
    }

    /// Removes the element stored under `key` from the tree.
    ///
    /// Returns `true` if an element was there to remove.
    ///
    /// # Complexity
    ///
    /// *O*(log *n*)
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
    /// let mut tree = LlrbTree::new();
    /// tree.insert(Reading(1, 20.5));
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T::Key) -> bool
    where
        T: Keyed + Clone,
    {
        self.raw.remove(key)
    }

    /// Returns the number of elements in the tree.
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
    /// let mut tree = LlrbTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(Reading(1, 20.5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no elements.
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
    /// let mut tree = LlrbTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(Reading(1, 20.5));
    /// assert!(!tree.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every element from the tree, keeping its allocated storage
    /// for reuse.
    ///
    /// # Complexity
    ///
    /// *O*(*n*)
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
    /// let mut tree = LlrbTree::new();
    /// tree.insert(Reading(1, 20.5));
    ///
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<T: Clone> Clone for LlrbTree<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
        }
    }
}

impl<T> Default for LlrbTree<T> {
    /// Makes a new, empty `LlrbTree`.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LlrbTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_set();
        self.raw.for_each_in_order(|item| {
            entries.entry(item);
        });
        entries.finish()
    }
}
