use log::{debug, trace};

use crate::{
    error::TreeError,
    iter::{IntoIter, Iter},
    node::{self, Node},
};

/// A self-balancing (AVL) binary search tree holding an ordered multiset of
/// values.
///
/// Inserting a value equal to one already present stores a second copy;
/// [`AvlTree::delete()`] removes a single copy at a time.
///
/// All mutations rebalance the tree, keeping the height of any two sibling
/// subtrees within 1 of each other and bounding the cost of insert, delete
/// and lookup to `O(log n)`.
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Option<Box<Node<T>>>,

    /// The number of values (nodes) in the tree.
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> AvlTree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of values stored in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.len);
        self.root = None;
        self.len = 0;
    }

    /// The height of the tree, where an empty tree has a height of 0 and a
    /// single value a height of 1.
    ///
    /// This is the height of the [`root()`](Self::root) node, if any.
    pub fn height(&self) -> u8 {
        node::height(self.root.as_deref())
    }

    /// The root [`Node`] of the tree, if any.
    ///
    /// The returned reference exposes the tree structure read-only, for
    /// rendering or inspection.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Return the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the tree holds no values.
    pub fn min(&self) -> Result<&T, TreeError> {
        self.root
            .as_deref()
            .map(node::minimum)
            .ok_or(TreeError::Empty)
    }

    /// Return the largest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the tree holds no values.
    pub fn max(&self) -> Result<&T, TreeError> {
        self.root
            .as_deref()
            .map(node::maximum)
            .ok_or(TreeError::Empty)
    }

    /// Iterate over the values in the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Return all values in the tree, in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Insert `value` into the tree.
    ///
    /// Duplicates are always accepted.
    pub fn insert(&mut self, value: T) {
        self.root = Some(node::insert(self.root.take(), value));
        self.len += 1;
    }

    /// Returns true if the tree contains at least one value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        node::contains(self.root.as_deref(), value)
    }

    /// Remove one occurrence of `value` from the tree, returning the removed
    /// value if it was present.
    ///
    /// Deleting a value that is not in the tree is a no-op.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Clone,
    {
        let (root, removed) = node::delete(self.root.take(), value);
        self.root = root;

        match removed {
            Some(_) => self.len -= 1,
            None => trace!("delete of absent value is a no-op"),
        }

        removed
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
