use std::{cmp::Ordering, mem};

use log::trace;

/// A single element of an [`AvlTree`](crate::AvlTree), and the root of the
/// subtree beneath it.
///
/// Nodes are only ever handed out by shared reference, exposing the read-only
/// structure of the tree (the stored value, the AVL height and the child
/// links) to callers that render or inspect it.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// An empty subtree has a height of 0, so a leaf has a height of 1.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The height of the subtree rooted at this node, counting this node.
    ///
    /// A node without children has a height of 1.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The left child, holding values ordered before this node's value.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding values ordered at or after this node's value.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Insert `value` into the subtree rooted at `node`, returning the new root of
/// the (rebalanced) subtree.
///
/// Values comparing equal to an existing node are routed into its right
/// subtree, so the tree holds duplicates.
pub(crate) fn insert<T>(node: Option<Box<Node<T>>>, value: T) -> Box<Node<T>>
where
    T: Ord,
{
    let mut node = match node {
        Some(v) => v,
        None => return Box::new(Node::new(value)),
    };

    if value < node.value {
        node.left = Some(insert(node.left.take(), value));
    } else {
        node.right = Some(insert(node.right.take(), value));
    }

    update_height(&mut node);
    rebalance(&mut node);

    node
}

/// Remove one occurrence of `value` from the subtree rooted at `node`.
///
/// Returns the new root of the subtree, and the value that left the tree (if
/// `value` was found).
///
/// A matched node with two children is not unlinked; instead its value is
/// replaced with a copy of the maximum value of its left subtree (the in-order
/// predecessor), and that predecessor is then deleted from the left subtree.
/// Exactly one physical node is removed either way.
pub(crate) fn delete<T>(node: Option<Box<Node<T>>>, value: &T) -> (Option<Box<Node<T>>>, Option<T>)
where
    T: Ord + Clone,
{
    let mut node = match node {
        Some(v) => v,
        None => return (None, None),
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // Zero or one child: the child (if any) replaces this node.
            (None, right) => {
                let Node { value, .. } = *node;
                return (right, Some(value));
            }
            (left, None) => {
                let Node { value, .. } = *node;
                return (left, Some(value));
            }
            (Some(left), Some(right)) => {
                let predecessor = maximum(&left).clone();
                let (left, unlinked) = delete(Some(left), &predecessor);
                debug_assert!(unlinked.is_some());

                node.left = left;
                node.right = Some(right);
                Some(mem::replace(&mut node.value, predecessor))
            }
        },
        Ordering::Greater => {
            let (right, removed) = delete(node.right.take(), value);
            node.right = right;
            removed
        }
        Ordering::Less => {
            let (left, removed) = delete(node.left.take(), value);
            node.left = left;
            removed
        }
    };

    update_height(&mut node);
    rebalance(&mut node);

    (Some(node), removed)
}

/// Returns true if `value` is stored in the subtree rooted at `node`.
pub(crate) fn contains<T>(mut node: Option<&Node<T>>, value: &T) -> bool
where
    T: Ord,
{
    while let Some(v) = node {
        node = match value.cmp(&v.value) {
            Ordering::Equal => return true,
            Ordering::Greater => v.right(),
            Ordering::Less => v.left(),
        };
    }

    false
}

/// The smallest value in the subtree rooted at `n` (the left-most node).
pub(crate) fn minimum<T>(mut n: &Node<T>) -> &T {
    while let Some(v) = n.left() {
        n = v;
    }
    &n.value
}

/// The largest value in the subtree rooted at `n` (the right-most node).
pub(crate) fn maximum<T>(mut n: &Node<T>) -> &T {
    while let Some(v) = n.right() {
        n = v;
    }
    &n.value
}

pub(crate) fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = height(n.left()).max(height(n.right())) + 1;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<T>(n: &Node<T>) -> i16 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    height(n.left()) as i16 - height(n.right()) as i16
}

/// Restore the AVL balance of the subtree rooted at `n`, assuming both child
/// subtrees are themselves balanced and `n` has an up-to-date height.
fn rebalance<T>(n: &mut Box<Node<T>>) {
    match balance(n) {
        // Left-heavy
        2.. => {
            if n.left().map(balance).unwrap_or_default() < 0 {
                trace!("rebalance: left-right rotation");
                if let Some(left) = n.left.as_mut() {
                    rotate_left(left);
                }
            } else {
                trace!("rebalance: left-left rotation");
            }
            rotate_right(n);
        }
        // Right-heavy
        ..=-2 => {
            if n.right().map(balance).unwrap_or_default() > 0 {
                trace!("rebalance: right-left rotation");
                if let Some(right) = n.right.as_mut() {
                    rotate_right(right);
                }
            } else {
                trace!("rebalance: right-right rotation");
            }
            rotate_left(n);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x
        .right
        .take()
        .expect("left rotation requires a right child");
    mem::swap(x, &mut p);

    // "p" is now the old subtree root, and "x" the pivot.
    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y
        .left
        .take()
        .expect("right rotation requires a left child");
    mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}
