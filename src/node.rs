//! Module implement tree node and the local transformations that keep a
//! left-leaning-red-black tree balanced.
//!
//! Every transformation takes exclusive ownership of a subtree and
//! returns the owning pointer to its replacement root. Callers re-link
//! the returned subtree into the parent.

use std::ops::DerefMut;

/// Color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    fn toggle(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Node corresponds to a single entry in OrderedMap instance.
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub color: Color,
    pub size: usize,                    // number of nodes in this subtree
    pub left: Option<Box<Node<K, V>>>,  // store: left child
    pub right: Option<Box<Node<K, V>>>, // store: right child
}

impl<K, V> Node<K, V> {
    /// New nodes are always created as red leaf.
    pub fn new(key: K, value: V) -> Node<K, V> {
        Node {
            key,
            value,
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn as_left_ref(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn as_right_ref(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub fn toggle_link(&mut self) {
        self.color = self.color.toggle()
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// Recompute subtree size from children.
    #[inline]
    pub fn resize(&mut self) {
        self.size = 1 + size(self.as_left_ref()) + size(self.as_right_ref());
    }
}

#[inline]
pub fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

#[inline]
pub fn size<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.size)
}

// Red link on the left, that is again followed by a red link on the left.
#[inline]
fn is_red_left_left<K, V>(node: &Node<K, V>) -> bool {
    let left = node.as_left_ref();
    is_red(left) && is_red(left.and_then(Node::as_left_ref))
}

//--------- rotation routines for 2-3 algorithm ----------------

/// Fixup applied on every ancestor while unwinding an insert.
pub fn walkuprot_23<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(node.as_right_ref()) && !is_red(node.as_left_ref()) {
        node = rotate_left(node);
    }
    if is_red_left_left(&node) {
        node = rotate_right(node);
    }
    if is_red(node.as_left_ref()) && is_red(node.as_right_ref()) {
        flip(node.deref_mut())
    }
    node.resize();
    node
}

/// Fixup applied on every ancestor while unwinding a delete.
pub fn balance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(node.as_right_ref()) {
        node = rotate_left(node);
    }
    if is_red_left_left(&node) {
        node = rotate_right(node);
    }
    if is_red(node.as_left_ref()) && is_red(node.as_right_ref()) {
        flip(node.deref_mut());
    }
    node.resize();
    node
}

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//             /    (r)                 (r)  \
//            /       \                 /     \
//          left       x             node      xr
//                    / \            /  \
//                  xl   xr       left   xl
//
pub fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = match node.right.take() {
        Some(x) if !x.is_black() => x,
        _ => panic!("rotate_left(): rotating a black link ? Call the programmer"),
    };
    node.right = x.left.take();
    x.color = node.color;
    x.size = node.size;
    node.set_red();
    node.resize();
    x.left = Some(node);
    x
}

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//            (r)   \                   (r)  \
//           /       \                 /      \
//          x       right             xl      node
//         / \                                / \
//       xl   xr                             xr  right
//
pub fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = match node.left.take() {
        Some(x) if !x.is_black() => x,
        _ => panic!("rotate_right(): rotating a black link ? Call the programmer"),
    };
    node.left = x.right.take();
    x.color = node.color;
    x.size = node.size;
    node.set_red();
    node.resize();
    x.right = Some(node);
    x
}

//        (x)                   (!x)
//         |                     |
//        node                  node
//        / \                   / \
//      (y) (z)              (!y) (!z)
//     /      \              /      \
//   left    right         left    right
//
pub fn flip<K, V>(node: &mut Node<K, V>) {
    if let Some(left) = node.left.as_mut() {
        left.toggle_link();
    }
    if let Some(right) = node.right.as_mut() {
        right.toggle_link();
    }
    node.toggle_link();
}

/// Assuming node is red, and both node.left and node.left.left are
/// black, make node.left or one of its children red.
pub fn move_red_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip(node.deref_mut());
    let borrow = is_red(node.as_right_ref().and_then(Node::as_left_ref));
    if borrow {
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
        flip(node.deref_mut());
    }
    node
}

/// Assuming node is red, and both node.right and node.right.left are
/// black, make node.right or one of its children red.
pub fn move_red_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip(node.deref_mut());
    if is_red_left_left(&node) {
        node = rotate_right(node);
        flip(node.deref_mut());
    }
    node
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
