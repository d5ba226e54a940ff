use std::cmp::{Ordering, max};

use crate::{Insertion, Location};

pub type Link = Option<Box<Node>>;

/// Index node, owns exactly one location and both of its subtrees.
#[derive(Debug, Clone)]
pub struct Node {
    pub location: Location,
    /// Height of the subtree rooted at this node, a leaf has height 1.
    pub height: u32,
    pub left: Link,
    pub right: Link,
}

impl Node {
    fn leaf(location: Location) -> Box<Self> {
        Box::new(Self {
            location,
            height: 1,
            left: None,
            right: None,
        })
    }

    pub fn name(&self) -> &str {
        self.location.name()
    }

    fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

/// Height of an absent subtree is 0.
pub fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

//       y            x
//      / \          / \
//     x   C  ==>   A   y
//    / \              / \
//   A   B            B   C
fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        debug_assert!(false, "right rotation of {} without left child", y.name());
        return y;
    };

    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

//     x                y
//    / \              / \
//   A   y     ==>    x   C
//      / \          / \
//     B   C        A   B
fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        debug_assert!(false, "left rotation of {} without right child", x.name());
        return x;
    };

    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Inserts the name below the given subtree and returns the new (possibly rotated) subtree root.
/// Heights are recomputed and the balance restored on the way back up the insertion path.
pub fn insert(link: Link, name: &str, outcome: &mut Insertion) -> Box<Node> {
    let Some(mut node) = link else {
        *outcome = Insertion::Created;
        return Node::leaf(Location::new(name));
    };

    match name.cmp(node.name()) {
        Ordering::Less => node.left = Some(insert(node.left.take(), name, outcome)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), name, outcome)),
        Ordering::Equal => {
            *outcome = Insertion::Existing;
            return node;
        }
    }

    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // left-heavy: the new key went below the left child
        if node.left.as_ref().is_some_and(|left| name > left.name()) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        // right-heavy: the new key went below the right child
        if node.right.as_ref().is_some_and(|right| name < right.name()) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Removes the name from the subtree and returns the new subtree root.
/// The removed location, if any, is moved into `removed`.
pub fn remove(link: Link, name: &str, removed: &mut Option<Location>) -> Link {
    let mut node = link?;

    match name.cmp(node.name()) {
        Ordering::Less => node.left = remove(node.left.take(), name, removed),
        Ordering::Greater => node.right = remove(node.right.take(), name, removed),
        Ordering::Equal => {
            let Node {
                location,
                left,
                right,
                ..
            } = *node;
            *removed = Some(location);

            return match (left, right) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(left), Some(right)) => {
                    // replace with the in-order successor
                    let (right, successor) = take_min(right);
                    let mut node = Node::leaf(successor);
                    node.left = Some(left);
                    node.right = right;
                    Some(rebalance(node))
                }
            };
        }
    }

    Some(rebalance(node))
}

/// Detaches the smallest location of the subtree, returns the remaining subtree and the location.
fn take_min(mut node: Box<Node>) -> (Link, Location) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
        None => {
            let Node {
                location, right, ..
            } = *node;
            (right, location)
        }
    }
}

/// Restores the balance of a node whose subtrees are balanced but whose heights may differ by 2.
/// Unlike insertion, removal has no new key to compare against, so the rotation is chosen from
/// the balance factor of the heavier child.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Returns the verified height of the subtree, or None if any node is out of order, has a stale
/// cached height or violates the AVL balance.
pub fn checked_height(link: &Link, lower: Option<&str>, upper: Option<&str>) -> Option<u32> {
    let Some(node) = link else {
        return Some(0);
    };

    let name = node.name();
    if lower.is_some_and(|l| name <= l) || upper.is_some_and(|u| name >= u) {
        return None;
    }

    let left = checked_height(&node.left, lower, Some(name))?;
    let right = checked_height(&node.right, Some(name), upper)?;

    if left.abs_diff(right) > 1 || node.height != 1 + max(left, right) {
        return None;
    }

    Some(node.height)
}
