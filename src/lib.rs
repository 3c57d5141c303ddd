//! A self-balancing [AVL] binary search tree, storing an ordered multiset of
//! values.
//!
//! ```
//! use avltree::{AvlTree, TreeError};
//!
//! let mut t = AvlTree::new();
//!
//! for v in [-1, 10, 5, -2, 17, 100, -1, 3, 5] {
//!     t.insert(v);
//! }
//!
//! // Duplicates are stored, and deleted one copy at a time.
//! assert_eq!(t.delete(&-1), Some(-1));
//! assert_eq!(t.delete(&17), Some(17));
//! assert!(t.contains(&-1));
//!
//! assert_eq!(t.len(), 7);
//! assert_eq!(t.min(), Ok(&-2));
//! assert_eq!(t.max(), Ok(&100));
//! assert_eq!(t.to_sorted_vec(), [-2, -1, 3, 5, 5, 10, 100]);
//!
//! t.clear();
//! assert_eq!(t.min(), Err(TreeError::Empty));
//! ```
//!
//! Every insert and delete restores the AVL invariant (the heights of the two
//! child subtrees of any node differ by at most 1) through rotations, bounding
//! the height of the tree and the cost of all lookups and mutations to
//! `O(log n)`.
//!
//! The structure of the tree can be inspected (but never modified) through
//! [`AvlTree::root()`] and the [`Node`] accessors, which expose the value,
//! height and children of each node.
//!
//! [AVL]: https://en.wikipedia.org/wiki/AVL_tree

mod error;
mod iter;
mod node;
mod tree;


pub use error::*;
pub use iter::*;
pub use node::Node;
pub use tree::*;
