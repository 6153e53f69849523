/// Types that sort by a key they carry themselves.
///
/// [`LlrbTree`](crate::LlrbTree) stores whole elements and orders them by
/// the key each element exposes through this trait; keys are never stored
/// separately. `Key` must have a total order, and an element's key must not
/// change while the element is in a tree. A key mutated behind the tree's
/// back (through `Cell`, `RefCell`, global state, I/O, or the like) makes
/// lookups and removals unreliable, though it cannot cause undefined
/// behavior.
///
/// The tree also clones elements internally while removing, so element
/// types are expected to implement [`Clone`].
///
/// # Examples
///
/// ```
/// use llrb_tree::{Keyed, LlrbTree};
///
/// #[derive(Clone)]
/// struct User {
///     id: u64,
///     name: &'static str,
/// }
///
/// impl Keyed for User {
///     type Key = u64;
///
///     fn key(&self) -> &u64 {
///         &self.id
///     }
/// }
///
/// let mut users = LlrbTree::new();
/// users.insert(User { id: 7, name: "ada" });
///
/// assert_eq!(users.search(&7).map(|user| user.name), Some("ada"));
/// ```
pub trait Keyed {
    /// The key type this element sorts by.
    type Key: Ord;

    /// Borrows the key this element sorts by.
    fn key(&self) -> &Self::Key;
}
