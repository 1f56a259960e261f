use crate::rbtree::Color;

use super::handle::Handle;

/// A red-black node record.
///
/// The payload lives in the tree's value arena; the node carries only its
/// handle. Link fields always hold a real handle: slots with no child or no
/// parent hold the tree's sentinel handle, so rebalancing code dereferences
/// `parent`/`left`/`right` unconditionally.
#[derive(Clone)]
pub(crate) struct Node {
    color: Color,
    /// Handle into the value arena; `None` only for the sentinel.
    value: Option<Handle>,
    parent: Handle,
    left: Handle,
    right: Handle,
}

impl Node {
    /// Creates the sentinel record: black, valueless, linked to itself.
    pub(crate) fn sentinel(this: Handle) -> Self {
        Self {
            color: Color::Black,
            value: None,
            parent: this,
            left: this,
            right: this,
        }
    }

    /// Creates a freshly inserted leaf: red, holding `value`, all links to the
    /// sentinel.
    pub(crate) fn red_leaf(value: Handle, sentinel: Handle) -> Self {
        Self {
            color: Color::Red,
            value: Some(value),
            parent: sentinel,
            left: sentinel,
            right: sentinel,
        }
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the handle of this node's payload in the value arena.
    ///
    /// # Panics
    ///
    /// Panics if called on the sentinel, which holds no payload.
    #[inline]
    pub(crate) fn value(&self) -> Handle {
        self.value.expect("`Node::value()` - the sentinel holds no value!")
    }

    #[inline]
    pub(crate) fn parent(&self) -> Handle {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Handle) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn left(&self) -> Handle {
        self.left
    }

    pub(crate) fn set_left(&mut self, left: Handle) {
        self.left = left;
    }

    #[inline]
    pub(crate) fn right(&self) -> Handle {
        self.right
    }

    pub(crate) fn set_right(&mut self, right: Handle) {
        self.right = right;
    }
}
