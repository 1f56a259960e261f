use core::cmp::Ordering;

/// A total order over payload values, fixed at tree construction.
///
/// Implementations must be consistent: for the lifetime of a tree, comparing the
/// same pair of values must always produce the same [`Ordering`]. It is a logic
/// error for a stored value to change its ordering relative to any other stored
/// value while it is in a tree; the resulting behavior is unspecified but
/// memory-safe.
///
/// Any closure or function of type `Fn(&T, &T) -> Ordering` implements this trait,
/// so a comparator can be passed directly:
///
/// # Examples
///
/// ```
/// use redblack_tree::RBTree;
///
/// // Order strings by length rather than lexicographically.
/// let mut tree = RBTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// tree.insert("pear")?;
/// tree.insert("fig")?;
/// # Ok::<(), redblack_tree::Error>(())
/// ```
pub trait Comparator<T> {
    /// Compares two values, returning [`Ordering::Less`], [`Ordering::Equal`], or
    /// [`Ordering::Greater`] for less-than, equal, and greater-than respectively.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural order of a type, i.e. its [`Ord`] implementation.
///
/// This is the comparator [`RBTree::new`](crate::RBTree::new) constructs trees with.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
