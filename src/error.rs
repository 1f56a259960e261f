use core::fmt;

/// The error type reported by fallible tree operations.
///
/// Errors are reported synchronously through the operation's `Result`; a failed
/// operation never leaves the tree partially mutated. The operation and offending
/// argument are carried on the value so callers can branch programmatically
/// rather than parse a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An argument was structurally invalid for the requested operation, e.g. a
    /// rotation target whose promoted child slot is empty, or a [`NodeId`]
    /// that does not refer to a live node of this tree.
    ///
    /// [`NodeId`]: crate::NodeId
    InvalidArgument {
        /// The operation that rejected the argument.
        op: &'static str,
        /// Which argument was rejected, and why.
        what: &'static str,
    },
    /// Node storage is exhausted; the tree already holds the maximum number of
    /// nodes a handle can address. The tree is unchanged.
    AllocationFailure {
        /// The operation that failed to allocate.
        op: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { op, what } => {
                write!(f, "`{op}` - invalid argument: {what}")
            }
            Self::AllocationFailure { op } => {
                write!(f, "`{op}` - node storage exhausted")
            }
        }
    }
}

impl core::error::Error for Error {}
