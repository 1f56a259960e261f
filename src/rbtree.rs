//! An ordered tree based on a sentinel-style [red-black tree].
//!
//! [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::Error;
use crate::raw::{Handle, RawRBTree};

/// The color of a tree node.
///
/// Every node is either red or black. The root and the internal sentinel are
/// always black, a red node never has a red parent, and every path from a node
/// down to a sentinel boundary crosses the same number of black nodes; together
/// these properties bound the tree's height to O(log n).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    /// A red node. Freshly inserted nodes start red.
    Red,
    /// A black node.
    Black,
}

/// An opaque identifier for a node of a specific [`RBTree`].
///
/// Returned by [`RBTree::insert`] and the structural accessors. A `NodeId`
/// stays valid until the tree it came from is cleared or dropped; it never
/// refers to the tree's internal sentinel. Using a `NodeId` with a tree other
/// than the one that issued it is a logic error: it is reported as
/// [`Error::InvalidArgument`] when detectable, and otherwise addresses an
/// unrelated node of that tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeId(Handle);

/// An ordered tree based on a sentinel-style red-black tree.
///
/// Given a total order over `T`, an `RBTree` keeps its values in order under
/// that comparator with O(log n) insertion, regardless of insertion sequence.
/// The order is fixed at construction: [`RBTree::new`] uses `T`'s [`Ord`]
/// implementation, and [`RBTree::with_comparator`] accepts any
/// [`Comparator`] - including a plain `Fn(&T, &T) -> Ordering` closure.
///
/// Values compare as equal under the comparator are kept in insertion order:
/// a new duplicate always lands to the right of the existing equal values, so
/// an in-order walk visits it immediately after them.
///
/// It is a logic error for a value to be modified in such a way that its
/// ordering relative to any other stored value, as determined by the
/// comparator, changes while it is in the tree. The behavior resulting from
/// such a logic error is not specified, but will be encapsulated to the
/// `RBTree` that observed it and not result in undefined behavior.
///
/// Lookup, deletion, and iteration are not implemented yet; the structural
/// accessors ([`root`](RBTree::root), [`left`](RBTree::left),
/// [`right`](RBTree::right), [`parent`](RBTree::parent),
/// [`color`](RBTree::color), [`get`](RBTree::get)) expose the node graph they
/// will be built against, and are sufficient for external traversal.
///
/// # Examples
///
/// ```
/// use redblack_tree::RBTree;
///
/// let mut priorities = RBTree::new();
/// let first = priorities.insert(30)?;
/// priorities.insert(10)?;
/// priorities.insert(20)?;
///
/// assert_eq!(priorities.len(), 3);
/// assert_eq!(priorities.get(first), Some(&30));
///
/// // The tree rebalanced; the root is the median value.
/// let root = priorities.root().unwrap();
/// assert_eq!(priorities.get(root), Some(&20));
/// # Ok::<(), redblack_tree::Error>(())
/// ```
///
/// Ordering by a caller-supplied comparator:
///
/// ```
/// use redblack_tree::RBTree;
///
/// // A max-tree: reverse the natural order.
/// let mut tree = RBTree::with_comparator(|a: &u32, b: &u32| b.cmp(a));
/// tree.insert(1)?;
/// tree.insert(3)?;
/// tree.insert(2)?;
///
/// // The leftmost node is now the largest value.
/// let mut cursor = tree.root().unwrap();
/// while let Some(left) = tree.left(cursor) {
///     cursor = left;
/// }
/// assert_eq!(tree.get(cursor), Some(&3));
/// # Ok::<(), redblack_tree::Error>(())
/// ```
pub struct RBTree<T, C = NaturalOrder> {
    raw: RawRBTree<T>,
    comparator: C,
}

impl<T: Ord> RBTree<T, NaturalOrder> {
    /// Creates an empty tree ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_tree::RBTree;
    ///
    /// let mut tree: RBTree<i32> = RBTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty tree ordered by `T`'s [`Ord`] implementation, with room
    /// for `capacity` values before the arenas reallocate.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawRBTree::with_capacity(capacity),
            comparator: NaturalOrder,
        }
    }
}

impl<T: Ord> Default for RBTree<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RBTree<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty tree ordered by `comparator`.
    ///
    /// The comparator fixes the tree's total order for its whole lifetime; it
    /// must return [`Ordering::Less`]/[`Ordering::Equal`]/[`Ordering::Greater`]
    /// for less-than/equal/greater-than.
    ///
    /// [`Ordering::Less`]: core::cmp::Ordering::Less
    /// [`Ordering::Equal`]: core::cmp::Ordering::Equal
    /// [`Ordering::Greater`]: core::cmp::Ordering::Greater
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_tree::RBTree;
    ///
    /// let mut by_length = RBTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// by_length.insert("kumquat")?;
    /// by_length.insert("fig")?;
    /// # Ok::<(), redblack_tree::Error>(())
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            raw: RawRBTree::new(),
            comparator,
        }
    }

    /// Returns the number of values in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of values the tree can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns a reference to the tree's comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Clears the tree, dropping all nodes and values.
    ///
    /// All previously issued [`NodeId`]s are invalidated.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Inserts `value`, rebalances, and returns the new node's id.
    ///
    /// The value descends left of strictly greater values and right of less
    /// and equal ones, so duplicates group to the right of the values they
    /// equal. Runs in O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if node storage is exhausted; the
    /// tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// let id = tree.insert("pear")?;
    /// assert_eq!(tree.get(id), Some(&"pear"));
    /// assert_eq!(tree.len(), 1);
    /// # Ok::<(), redblack_tree::Error>(())
    /// ```
    pub fn insert(&mut self, value: T) -> Result<NodeId, Error> {
        self.raw.insert(value, &self.comparator).map(NodeId)
    }

    /// Left-rotates the subtree rooted at `node`.
    ///
    /// Promotes `node`'s right child into `node`'s position and demotes `node`
    /// to its left child, preserving the in-order sequence. O(1). This is a
    /// structural primitive, exposed for advanced callers and for harnesses
    /// that verify invariants directly; ordinary insertion rebalances by
    /// itself. Rotating without a matching recoloring generally leaves the
    /// tree's black-heights unbalanced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `node` is stale or if its right
    /// child slot is empty; the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value)?;
    /// }
    ///
    /// let root = tree.root().unwrap();
    /// tree.rotate_left(root)?;
    ///
    /// // 3 was promoted; 2 is now its left child.
    /// let promoted = tree.root().unwrap();
    /// assert_eq!(tree.get(promoted), Some(&3));
    /// assert_eq!(tree.left(promoted), Some(root));
    /// # Ok::<(), redblack_tree::Error>(())
    /// ```
    pub fn rotate_left(&mut self, node: NodeId) -> Result<(), Error> {
        const OP: &str = "RBTree::rotate_left()";
        let handle = self.check_node(node, OP)?;
        if self.raw.real(self.raw.node(handle).right()).is_none() {
            return Err(Error::InvalidArgument {
                op: OP,
                what: "`node` has no real right child",
            });
        }
        self.raw.rotate_left(handle);
        Ok(())
    }

    /// Right-rotates the subtree rooted at `node`; mirror of
    /// [`rotate_left`](Self::rotate_left).
    ///
    /// Applied to the pair a left rotation produced, this restores the original
    /// pointer graph exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `node` is stale or if its left
    /// child slot is empty; the tree is unchanged.
    pub fn rotate_right(&mut self, node: NodeId) -> Result<(), Error> {
        const OP: &str = "RBTree::rotate_right()";
        let handle = self.check_node(node, OP)?;
        if self.raw.real(self.raw.node(handle).left()).is_none() {
            return Err(Error::InvalidArgument {
                op: OP,
                what: "`node` has no real left child",
            });
        }
        self.raw.rotate_right(handle);
        Ok(())
    }

    /// Returns the root node's id, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.raw.real(self.raw.root()).map(NodeId)
    }

    /// Returns a reference to the value held by `node`, or `None` if `node` is
    /// stale.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.live(node).map(|handle| self.raw.value(handle))
    }

    /// Returns the color of `node`, or `None` if `node` is stale.
    #[must_use]
    pub fn color(&self, node: NodeId) -> Option<Color> {
        self.live(node).map(|handle| self.raw.node(handle).color())
    }

    /// Returns the id of `node`'s left child, or `None` if the slot is empty
    /// or `node` is stale.
    #[must_use]
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        let handle = self.live(node)?;
        self.raw.real(self.raw.node(handle).left()).map(NodeId)
    }

    /// Returns the id of `node`'s right child, or `None` if the slot is empty
    /// or `node` is stale.
    #[must_use]
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        let handle = self.live(node)?;
        self.raw.real(self.raw.node(handle).right()).map(NodeId)
    }

    /// Returns the id of `node`'s parent, `None` if `node` is the root or
    /// stale.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        let handle = self.live(node)?;
        self.raw.real(self.raw.node(handle).parent()).map(NodeId)
    }

    /// Returns `node`'s handle if it is live in this tree.
    fn live(&self, node: NodeId) -> Option<Handle> {
        self.raw.contains_node(node.0).then_some(node.0)
    }

    fn check_node(&self, node: NodeId, op: &'static str) -> Result<Handle, Error> {
        self.live(node).ok_or(Error::InvalidArgument {
            op,
            what: "`node` does not refer to a live node of this tree",
        })
    }
}
