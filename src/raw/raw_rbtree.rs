use core::cmp::Ordering;

use crate::comparator::Comparator;
use crate::error::Error;
use crate::rbtree::Color;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The core red-black tree implementation backing `RBTree`.
///
/// Nodes and values live in two tree-owned arenas (values separate from nodes
/// for cache efficiency), linked by handles. Every "no child" and "no parent"
/// slot holds the handle of the tree's sentinel: a single always-black,
/// valueless node allocated at construction and never exposed to callers.
/// Rotation and fixup code therefore never branches on a missing link; it
/// compares handles against the sentinel to detect structural boundaries.
pub(crate) struct RawRBTree<T> {
    /// Arena storing all node records. Slot zero is the sentinel.
    nodes: Arena<Node>,
    /// Arena storing all values.
    values: Arena<T>,
    /// Handle of this tree's sentinel.
    sentinel: Handle,
    /// Handle of the root node; the sentinel when the tree is empty.
    root: Handle,
    /// Number of real (non-sentinel) nodes.
    len: usize,
}

impl<T> RawRBTree<T> {
    /// Creates a new, empty tree. The sentinel is the arena's first slot.
    pub(crate) fn new() -> Self {
        Self::with_arenas(Arena::new(), Arena::new())
    }

    /// Creates a new tree with room for `capacity` values before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        // One extra node slot for the sentinel.
        Self::with_arenas(Arena::with_capacity(capacity + 1), Arena::with_capacity(capacity))
    }

    fn with_arenas(mut nodes: Arena<Node>, values: Arena<T>) -> Self {
        let sentinel = Handle::from_index(0);
        let allocated = nodes
            .try_alloc(Node::sentinel(sentinel))
            .expect("`RawRBTree::with_arenas()` - failed to allocate the sentinel!");
        debug_assert_eq!(allocated, sentinel);

        Self {
            nodes,
            values,
            sentinel,
            root: sentinel,
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the value arena.
    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Clears all values from the tree, keeping only a fresh sentinel.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.values.clear();
        let allocated = self
            .nodes
            .try_alloc(Node::sentinel(self.sentinel))
            .expect("`RawRBTree::clear()` - failed to allocate the sentinel!");
        debug_assert_eq!(allocated, self.sentinel);
        debug_assert!(self.values.is_empty());
        self.root = self.sentinel;
        self.len = 0;
    }

    /// Returns true if `handle` is this tree's sentinel.
    #[inline]
    pub(crate) fn is_sentinel(&self, handle: Handle) -> bool {
        handle == self.sentinel
    }

    /// Returns `handle` unless it is the sentinel, which callers never see.
    #[inline]
    pub(crate) fn real(&self, handle: Handle) -> Option<Handle> {
        (!self.is_sentinel(handle)).then_some(handle)
    }

    /// Returns true if `handle` addresses a live, non-sentinel node.
    pub(crate) fn contains_node(&self, handle: Handle) -> bool {
        !self.is_sentinel(handle) && self.nodes.contains(handle)
    }

    /// Returns the root handle; the sentinel when the tree is empty.
    pub(crate) fn root(&self) -> Handle {
        self.root
    }

    /// Returns a reference to a node by handle.
    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node {
        self.nodes.get_mut(handle)
    }

    /// Returns a reference to a node's value.
    pub(crate) fn value(&self, node: Handle) -> &T {
        self.values.get(self.node(node).value())
    }

    /// Left-rotates the subtree rooted at `primary`.
    ///
    /// Promotes `primary`'s right child into `primary`'s position, demoting
    /// `primary` to its left child; the promoted node's left subtree switches
    /// over to become `primary`'s right subtree. O(1), and the exact inverse of
    /// [`rotate_right`](Self::rotate_right) applied to the resulting pair.
    ///
    /// Callers must have checked that `primary`'s right child is a real node.
    pub(crate) fn rotate_left(&mut self, primary: Handle) {
        let secondary = self.node(primary).right();
        debug_assert!(
            !self.is_sentinel(secondary),
            "`RawRBTree::rotate_left()` - `primary` has no real right child!"
        );

        // The secondary's left subtree becomes the primary's right subtree.
        let transfer = self.node(secondary).left();
        self.node_mut(primary).set_right(transfer);
        if !self.is_sentinel(transfer) {
            self.node_mut(transfer).set_parent(primary);
        }

        // The secondary takes over the primary's parent link, and the parent's
        // child slot (or the root) switches to the secondary.
        let parent = self.node(primary).parent();
        self.node_mut(secondary).set_parent(parent);
        if self.is_sentinel(parent) {
            self.root = secondary;
        } else if self.node(parent).left() == primary {
            self.node_mut(parent).set_left(secondary);
        } else {
            self.node_mut(parent).set_right(secondary);
        }

        // Link the pair together, primary on the left.
        self.node_mut(secondary).set_left(primary);
        self.node_mut(primary).set_parent(secondary);
    }

    /// Right-rotates the subtree rooted at `primary`; mirror of
    /// [`rotate_left`](Self::rotate_left).
    ///
    /// Callers must have checked that `primary`'s left child is a real node.
    pub(crate) fn rotate_right(&mut self, primary: Handle) {
        let secondary = self.node(primary).left();
        debug_assert!(
            !self.is_sentinel(secondary),
            "`RawRBTree::rotate_right()` - `primary` has no real left child!"
        );

        // The secondary's right subtree becomes the primary's left subtree.
        let transfer = self.node(secondary).right();
        self.node_mut(primary).set_left(transfer);
        if !self.is_sentinel(transfer) {
            self.node_mut(transfer).set_parent(primary);
        }

        // The secondary takes over the primary's parent link, and the parent's
        // child slot (or the root) switches to the secondary.
        let parent = self.node(primary).parent();
        self.node_mut(secondary).set_parent(parent);
        if self.is_sentinel(parent) {
            self.root = secondary;
        } else if self.node(parent).left() == primary {
            self.node_mut(parent).set_left(secondary);
        } else {
            self.node_mut(parent).set_right(secondary);
        }

        // Link the pair together, primary on the right.
        self.node_mut(secondary).set_right(primary);
        self.node_mut(primary).set_parent(secondary);
    }

    /// Inserts `value` into the tree, returning the new node's handle.
    ///
    /// The descent goes left on strictly-less and right otherwise, so a value
    /// equal to existing values lands to their right (rightmost duplicate
    /// policy). The new node is attached red and the fixup loop then restores
    /// the red-black properties before this returns.
    ///
    /// On allocation failure the tree is unchanged, including any value slot
    /// claimed before the failure was detected.
    pub(crate) fn insert<C>(&mut self, value: T, comparator: &C) -> Result<Handle, Error>
    where
        C: Comparator<T>,
    {
        const OP: &str = "RBTree::insert()";

        // Claim both slots up front; roll the value back if the node arena is full.
        let value_handle = self.values.try_alloc(value).ok_or(Error::AllocationFailure { op: OP })?;
        let Some(target) = self.nodes.try_alloc(Node::red_leaf(value_handle, self.sentinel)) else {
            self.values.free(value_handle);
            return Err(Error::AllocationFailure { op: OP });
        };

        // Descend from the root, tracking the last real node visited as the
        // eventual parent and the direction of the final comparison.
        let mut parent = self.sentinel;
        let mut cursor = self.root;
        let mut ordering = Ordering::Equal;
        while !self.is_sentinel(cursor) {
            parent = cursor;
            let probe = self.node(cursor).value();
            ordering = comparator.compare(self.values.get(value_handle), self.values.get(probe));
            cursor = if ordering == Ordering::Less {
                self.node(cursor).left()
            } else {
                self.node(cursor).right()
            };
        }

        // Attach the new leaf under the tracked parent, or as the root.
        self.node_mut(target).set_parent(parent);
        if self.is_sentinel(parent) {
            self.root = target;
        } else if ordering == Ordering::Less {
            self.node_mut(parent).set_left(target);
        } else {
            self.node_mut(parent).set_right(target);
        }

        self.len += 1;
        debug_assert_eq!(self.len, self.values.len());
        self.insert_fixup(target);
        Ok(target)
    }

    /// Restores the red-black properties after a red leaf was attached.
    ///
    /// `target` is always red, and the only possible violation is that its
    /// parent is also red. A red uncle means recolor and push the violation two
    /// levels up; a black uncle means straighten any zig-zag, then one rotation
    /// at the grandparent ends the loop. O(log n) iterations.
    fn insert_fixup(&mut self, mut target: Handle) {
        loop {
            let parent = self.node(target).parent();
            if self.node(parent).color() == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent is a real
            // node, and it is black (no red-red pair existed before this one).
            let grandparent = self.node(parent).parent();

            if parent == self.node(grandparent).left() {
                let uncle = self.node(grandparent).right();
                if self.node(uncle).color() == Color::Red {
                    // Red uncle: recolor and move the violation to the grandparent.
                    self.node_mut(parent).set_color(Color::Black);
                    self.node_mut(uncle).set_color(Color::Black);
                    self.node_mut(grandparent).set_color(Color::Red);
                    target = grandparent;
                } else {
                    if target == self.node(parent).right() {
                        // Zig-zag: rotate the parent so the red pair lines up.
                        target = parent;
                        self.rotate_left(target);
                    }
                    let parent = self.node(target).parent();
                    let grandparent = self.node(parent).parent();
                    self.node_mut(parent).set_color(Color::Black);
                    self.node_mut(grandparent).set_color(Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.node(grandparent).left();
                if self.node(uncle).color() == Color::Red {
                    // Red uncle: recolor and move the violation to the grandparent.
                    self.node_mut(parent).set_color(Color::Black);
                    self.node_mut(uncle).set_color(Color::Black);
                    self.node_mut(grandparent).set_color(Color::Red);
                    target = grandparent;
                } else {
                    if target == self.node(parent).left() {
                        // Zig-zag: rotate the parent so the red pair lines up.
                        target = parent;
                        self.rotate_right(target);
                    }
                    let parent = self.node(target).parent();
                    let grandparent = self.node(parent).parent();
                    self.node_mut(parent).set_color(Color::Black);
                    self.node_mut(grandparent).set_color(Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        // Recoloring may have propagated all the way up and left the root red.
        let root = self.root;
        self.node_mut(root).set_color(Color::Black);
    }
}
