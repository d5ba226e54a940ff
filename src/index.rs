//! Ordered, height-balanced (AVL) index of locations keyed by name.
//!
//! Every node exclusively owns its subtrees; rotations move subtree ownership around and never
//! copy location records. Insertion and search take O(log n) steps after any insertion order.

mod avl;

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::index::avl::{Link, Node};
use crate::{Insertion, Location};

#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    root: Link,
    len: usize,
}

impl LocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole index, 0 when empty.
    pub fn height(&self) -> u32 {
        avl::height(&self.root)
    }

    /// Inserts a new location with the given name, unless already present in which case the
    /// existing location (and its routes) is left untouched.
    pub fn insert(&mut self, name: &str) -> Insertion {
        let mut outcome = Insertion::Existing;
        self.root = Some(avl::insert(self.root.take(), name, &mut outcome));

        if outcome.is_created() {
            self.len += 1;
            trace!("Inserted {name}, index height is {}", self.height());
        }

        outcome
    }

    /// Removes the location with the given name, returns it if it was present.
    /// Routes of other locations are not inspected here, see `RouteGraph::remove_location`.
    pub fn remove(&mut self, name: &str) -> Option<Location> {
        let mut removed = None;
        self.root = avl::remove(self.root.take(), name, &mut removed);

        if removed.is_some() {
            self.len -= 1;
            debug!("Removed {name}, index height is {}", self.height());
        }

        removed
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match name.cmp(node.name()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.location),
            };
        }

        None
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Location> {
        let mut current = self.root.as_deref_mut();

        while let Some(node) = current {
            current = match name.cmp(node.name()) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.location),
            };
        }

        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Gets an iterator over all the locations sorted by name.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: vec![] };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Calls the function on every location, in name order.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Location)) {
        fn visit(link: &mut Link, f: &mut impl FnMut(&mut Location)) {
            if let Some(node) = link {
                visit(&mut node.left, f);
                f(&mut node.location);
                visit(&mut node.right, f);
            }
        }

        visit(&mut self.root, &mut f);
    }

    /// Returns true only if the index is a valid AVL tree: names strictly ordered, cached heights
    /// up to date and the heights of the two subtrees of every node differing by at most one.
    pub fn is_balanced(&self) -> bool {
        avl::checked_height(&self.root, None, None).is_some()
    }
}

/// In-order iterator over the locations of a [`LocationIndex`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Location;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.location)
    }
}

impl<'a> IntoIterator for &'a LocationIndex {
    type Item = &'a Location;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
