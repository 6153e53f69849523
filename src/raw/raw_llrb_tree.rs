use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node};
use crate::keyed::Keyed;

/// Direction of the single rotation primitive.
#[derive(Clone, Copy)]
enum Dir {
    Left,
    Right,
}

/// Left-leaning red-black tree core.
///
/// Nodes live in an [`Arena`] and link to their children through
/// [`Handle`]s; `None` marks an empty subtree. The public wrapper
/// [`LlrbTree`](crate::llrb_tree::LlrbTree) layers the documented API on
/// top of this type.
#[derive(Clone)]
pub(crate) struct RawLlrbTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
}

impl<T> RawLlrbTree<T> {
    /// Makes a new, empty `RawLlrbTree`. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Makes a new, empty `RawLlrbTree` with room for `capacity` elements.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the tree can hold without
    /// reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Removes every element, keeping the allocated storage.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Calls `f` on every element in ascending key order.
    pub(crate) fn for_each_in_order(&self, mut f: impl FnMut(&T)) {
        self.visit_in_order(self.root, &mut f);
    }

    fn visit_in_order(&self, node: Option<Handle>, f: &mut impl FnMut(&T)) {
        if let Some(handle) = node {
            let (left, right) = {
                let node = self.nodes.get(handle);
                (node.left, node.right)
            };
            self.visit_in_order(left, f);
            f(&self.nodes.get(handle).item);
            self.visit_in_order(right, f);
        }
    }
}

impl<T: Keyed + Clone> RawLlrbTree<T> {
    /// Returns a reference to the element stored under `key`.
    pub(crate) fn search(&self, key: &T::Key) -> Option<&T> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match node.item.key().cmp(key) {
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
                Ordering::Equal => return Some(&node.item),
            };
        }
        None
    }

    /// Inserts `item`, replacing the element already stored under an equal
    /// key.
    pub(crate) fn insert(&mut self, item: T) {
        let root = self.insert_at(self.root, item);
        self.root = Some(root);
        self.nodes.get_mut(root).color = Color::Black;
    }

    /// Removes the element stored under `key`, reporting whether it was
    /// present.
    pub(crate) fn remove(&mut self, key: &T::Key) -> bool {
        let Some(root) = self.root else {
            return false;
        };

        let (root, found) = self.remove_at(root, key);
        self.root = root;
        if let Some(root) = root {
            self.nodes.get_mut(root).color = Color::Black;
        }
        if found {
            self.len -= 1;
        }
        found
    }

    fn insert_at(&mut self, node: Option<Handle>, item: T) -> Handle {
        let Some(mut h) = node else {
            self.len += 1;
            return self.nodes.alloc(Node::new(item));
        };

        // Split a red pair on the way down.
        if self.is_red(self.left(h)) && self.is_red(self.right(h)) {
            self.flip_colors(h);
        }

        match self.nodes.get(h).item.key().cmp(item.key()) {
            Ordering::Equal => self.nodes.get_mut(h).item = item,
            Ordering::Less => {
                let right = self.insert_at(self.right(h), item);
                self.nodes.get_mut(h).right = Some(right);
            }
            Ordering::Greater => {
                let left = self.insert_at(self.left(h), item);
                self.nodes.get_mut(h).left = Some(left);
            }
        }

        if self.is_red(self.right(h)) {
            h = self.rotate(h, Dir::Left);
        }
        let left = self.left(h);
        if self.is_red(left) && self.is_red(self.left_of(left)) {
            h = self.rotate(h, Dir::Right);
        }
        if self.is_red(self.left(h)) && self.is_red(self.right(h)) {
            self.flip_colors(h);
        }
        h
    }

    fn remove_at(&mut self, mut h: Handle, key: &T::Key) -> (Option<Handle>, bool) {
        let found;
        if self.nodes.get(h).item.key().cmp(key) == Ordering::Greater {
            // The key sorts before this node; it can only be on the left.
            if self.left(h).is_none() {
                return (Some(h), false);
            }

            let left = self.left(h);
            if !self.is_red(left) && !self.is_red(self.left_of(left)) {
                h = self.move_red_left(h);
            }

            let next = self
                .left(h)
                .expect("`remove_at()` - left child missing after `move_red_left()`!");
            let (left, hit) = self.remove_at(next, key);
            self.nodes.get_mut(h).left = left;
            found = hit;
        } else {
            if self.is_red(self.left(h)) {
                h = self.rotate(h, Dir::Right);
            }

            // The rotation can move a smaller element into `h`, so equality
            // is tested after it.
            if self.nodes.get(h).item.key() == key && self.right(h).is_none() {
                self.nodes.free(h);
                return (None, true);
            }
            if self.right(h).is_none() {
                return (Some(h), false);
            }

            let right = self.right(h);
            if !self.is_red(right) && !self.is_red(self.left_of(right)) {
                h = self.move_red_right(h);
            }

            let next = self
                .right(h)
                .expect("`remove_at()` - right child missing after `move_red_right()`!");
            if self.nodes.get(h).item.key() == key {
                // Interior hit: overwrite with a copy of the in-order
                // successor's element, then delete the successor's node out
                // of the right subtree.
                let successor = self.min_of(next);
                let replacement = self.nodes.get(successor).item.clone();
                self.nodes.get_mut(h).item = replacement;
                let right = self.delete_min_at(next);
                self.nodes.get_mut(h).right = right;
                found = true;
            } else {
                let (right, hit) = self.remove_at(next, key);
                self.nodes.get_mut(h).right = right;
                found = hit;
            }
        }
        (Some(self.fix_up(h)), found)
    }

    /// Removes the smallest element of the subtree at `h`, freeing its
    /// node, and returns the new subtree root.
    fn delete_min_at(&mut self, mut h: Handle) -> Option<Handle> {
        if self.left(h).is_none() {
            self.nodes.free(h);
            return None;
        }

        let left = self.left(h);
        if !self.is_red(left) && !self.is_red(self.left_of(left)) {
            h = self.move_red_left(h);
        }

        let next = self
            .left(h)
            .expect("`delete_min_at()` - left child missing after `move_red_left()`!");
        let left = self.delete_min_at(next);
        self.nodes.get_mut(h).left = left;
        Some(self.fix_up(h))
    }

    /// Restores the shape rules on the way back up: push a red pair upward
    /// first, then clear a right lean, then split a left double-red.
    fn fix_up(&mut self, mut h: Handle) -> Handle {
        if self.is_red(self.left(h)) && self.is_red(self.right(h)) {
            self.flip_colors(h);
        }
        if self.is_red(self.right(h)) {
            h = self.rotate(h, Dir::Left);
        }
        let left = self.left(h);
        if self.is_red(left) && self.is_red(self.left_of(left)) {
            h = self.rotate(h, Dir::Right);
        }
        h
    }

    /// Carries a red link down the left side, for descents about to step
    /// into a left subtree whose top two left links are both black.
    fn move_red_left(&mut self, mut h: Handle) -> Handle {
        self.flip_colors(h);
        if let Some(right) = self.right(h)
            && self.is_red(self.left(right))
        {
            let right = self.rotate(right, Dir::Right);
            self.nodes.get_mut(h).right = Some(right);
            h = self.rotate(h, Dir::Left);
            self.flip_colors(h);
        }
        h
    }

    /// Mirror of [`Self::move_red_left`] for rightward descents, borrowing
    /// from a red pair on the left spine.
    fn move_red_right(&mut self, mut h: Handle) -> Handle {
        self.flip_colors(h);
        let left = self.left(h);
        if self.is_red(left) && self.is_red(self.left_of(left)) {
            h = self.rotate(h, Dir::Right);
            self.flip_colors(h);
        }
        h
    }

    /// Single rotation toward `dir`. The child opposite `dir` is promoted
    /// and takes over `h`'s color; `h` turns red and steps down below it.
    ///
    /// Callers only ever rotate a red link, so the promoted child exists.
    fn rotate(&mut self, h: Handle, dir: Dir) -> Handle {
        let promoted = match dir {
            Dir::Left => self.right(h),
            Dir::Right => self.left(h),
        };
        let promoted = promoted.expect("`rotate()` - no child to promote!");

        match dir {
            Dir::Left => {
                let middle = self.left(promoted);
                self.nodes.get_mut(h).right = middle;
                self.nodes.get_mut(promoted).left = Some(h);
            }
            Dir::Right => {
                let middle = self.right(promoted);
                self.nodes.get_mut(h).left = middle;
                self.nodes.get_mut(promoted).right = Some(h);
            }
        }

        let color = self.nodes.get(h).color;
        self.nodes.get_mut(promoted).color = color;
        self.nodes.get_mut(h).color = Color::Red;
        promoted
    }

    /// Inverts the color of `h` and of each present child.
    fn flip_colors(&mut self, h: Handle) {
        let (left, right) = {
            let node = self.nodes.get_mut(h);
            node.toggle_color();
            (node.left, node.right)
        };
        if let Some(left) = left {
            self.nodes.get_mut(left).toggle_color();
        }
        if let Some(right) = right {
            self.nodes.get_mut(right).toggle_color();
        }
    }

    /// Handle of the smallest element in the subtree at `h`.
    fn min_of(&self, h: Handle) -> Handle {
        let mut current = h;
        while let Some(left) = self.left(current) {
            current = left;
        }
        current
    }

    fn is_red(&self, node: Option<Handle>) -> bool {
        node.is_some_and(|handle| self.nodes.get(handle).is_red())
    }

    fn left(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).left
    }

    fn right(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).right
    }

    /// `node.left` for an optional `node`; absent stays absent.
    fn left_of(&self, node: Option<Handle>) -> Option<Handle> {
        node.and_then(|handle| self.nodes.get(handle).left)
    }
}
