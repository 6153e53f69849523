use super::handle::Handle;

/// Color of the link from a node's parent, red or black.
///
/// An absent child counts as black; the tree's `is_red` helper resolves
/// that convention for `Option<Handle>` links.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// One tree cell: the element plus its link color and child slots.
///
/// Children are handles into the node arena; `None` is an empty subtree.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) color: Color,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
}

impl<T> Node<T> {
    /// Makes a leaf holding `item`. New nodes are always born red;
    /// restoring the tree shape is the unwind's job.
    pub(crate) const fn new(item: T) -> Self {
        Self {
            item,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub(crate) const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    /// Flips red to black and black to red.
    pub(crate) const fn toggle_color(&mut self) {
        self.color = match self.color {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        };
    }
}
