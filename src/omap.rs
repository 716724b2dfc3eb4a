//! Module provide ordered symbol table implemented by [OrderedMap] type.
//!
//! OrderedMap is implemented using [left-leaning-red-black][wiki-llrb].
//!
//! - Each entry in OrderedMap instance correspond to a {Key, Value} pair.
//! - Parametrised over `key-type` and `value-type`.
//! - CRUD operations, via insert(), put(), get(), delete() api.
//! - Order statistics, via min(), max(), floor(), ceiling(), rank() and
//!   select() api, backed by subtree sizes kept in every node.
//! - Full table scan, to iterate over all entries.
//! - Range scan, to iterate between a ``low`` and ``high``.
//! - Reverse iteration.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! Range scan:
//! ```
//! use std::ops::Bound;
//! use rbst::OrderedMap;
//!
//! let mut index: OrderedMap<String, String> = OrderedMap::new();
//!
//! index.insert("key1".to_string(), "value1".to_string());
//! index.insert("key2".to_string(), "value2".to_string());
//! index.insert("key3".to_string(), "value3".to_string());
//!
//! let low = Bound::Excluded("key1");
//! let high = Bound::Excluded("key2");
//! let item = index.range::<str, _>((low, high)).next();
//! assert_eq!(item, None);
//!
//! let low = Bound::Excluded("key1");
//! let high = Bound::Excluded("key3");
//! let item = index.range::<str, _>((low, high)).next();
//! assert_eq!(item, Some((&"key2".to_string(), &"value2".to_string())));
//!
//! let low = Bound::Included("key1");
//! let high = Bound::Included("key3");
//! let mut iter = index.reverse::<str, _>((low, high));
//! let item = iter.next();
//! assert_eq!(item, Some((&"key3".to_string(), &"value3".to_string())));
//! let item = iter.last();
//! assert_eq!(item, Some((&"key1".to_string(), &"value1".to_string())));
//! ```
//!
//! [wiki-llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

use tracing::{debug, warn};

use std::{
    borrow::Borrow,
    cmp::{self, Ord, Ordering},
    fmt, marker,
    ops::{Bound, RangeBounds},
};

use crate::{
    node::{self, is_red, Node},
    Error, Queue, Result,
};

/// OrderedMap manage a single instance of in-memory symbol table using
/// [left-leaning-red-black][llrb] tree.
///
/// At most one value is stored per key. Number of entries is tracked
/// by the size of the root node.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
pub struct OrderedMap<K, V> {
    root: Option<Box<Node<K, V>>>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> OrderedMap<K, V> {
        OrderedMap::new()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty instance of OrderedMap.
    pub fn new() -> OrderedMap<K, V> {
        OrderedMap { root: None }
    }
}

/// Maintenance API.
impl<K, V> OrderedMap<K, V> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        node::size(self.root.as_deref())
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return the number of links on the longest path from root to a
    /// leaf. Empty tree and single entry tree have a height of 0.
    ///
    /// Walks the whole tree, meant for diagnostics.
    pub fn height(&self) -> usize {
        levels(self.root.as_deref()).saturating_sub(1)
    }

    /// Validate LLRB tree with following rules:
    ///
    /// * Root node is always black.
    /// * Red links only lean left.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Subtree size of each node matches the number of nodes under it.
    pub fn validate(&self) -> Result<()>
    where
        K: Ord,
    {
        let root = self.root.as_deref();
        if is_red(root) {
            warn!("validate: root node is red");
            return err_at!(Fatal, msg: "root node must be black");
        }

        match validate_tree(root, false /*fromred*/, 0 /*n_blacks*/, None, None) {
            Ok(n_blacks) => {
                debug!(len = self.len(), n_blacks, "validated tree");
                Ok(())
            }
            Err(err) => {
                warn!("validate: {}", err);
                Err(err)
            }
        }
    }

    fn check_invariants(&self)
    where
        K: Ord,
    {
        if cfg!(feature = "invariants") {
            if let Err(err) = self.validate() {
                panic!("broken invariants {}", err)
            }
        }
    }
}

/// Write API.
impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, old_value) = Self::do_set(self.root.take(), key, value);
        root.set_black();
        self.root = Some(root);

        self.check_invariants();
        old_value
    }

    /// Same as insert(), except that setting key to `None` shall delete
    /// the key from this instance. Return the old value, if any.
    pub fn put(&mut self, key: K, value: Option<V>) -> Option<V> {
        match value {
            Some(value) => self.insert(key, value),
            None => self.delete(&key),
        }
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is effectively a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains(key) {
            return None;
        }

        let root = self.root.take().map(into_red_root);
        let (root, old_value) = Self::do_delete(root, key);
        self.root = root.map(into_black);

        self.check_invariants();
        old_value
    }

    /// Delete the smallest key from this instance and return the entry.
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        if self.is_empty() {
            return err_at!(EmptyCollection, msg: "delete_min on empty map");
        }

        let root = self.root.take().map(into_red_root);
        let (root, min) = Self::do_delete_min(root);
        self.root = root.map(into_black);

        self.check_invariants();
        match min {
            Some(node) => Ok(into_entry(node)),
            None => err_at!(Fatal, msg: "delete_min(): missing min node"),
        }
    }

    /// Delete the largest key from this instance and return the entry.
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        if self.is_empty() {
            return err_at!(EmptyCollection, msg: "delete_max on empty map");
        }

        let root = self.root.take().map(into_red_root);
        let (root, max) = Self::do_delete_max(root);
        self.root = root.map(into_black);

        self.check_invariants();
        match max {
            Some(node) => Ok(into_entry(node)),
            None => err_at!(Fatal, msg: "delete_max(): missing max node"),
        }
    }
}

/// Read API.
impl<K, V> OrderedMap<K, V> {
    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.as_right_ref(),
                Ordering::Greater => nref.as_left_ref(),
                Ordering::Equal => return Some(&nref.value),
            };
        }
        None
    }

    /// Get a mutable reference to the value for key. Keys are immutable
    /// once inserted.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref_mut();
        while let Some(nref) = node {
            match nref.key.borrow().cmp(key) {
                Ordering::Less => node = nref.right.as_deref_mut(),
                Ordering::Greater => node = nref.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut nref.value),
            }
        }
        None
    }

    /// Check whether key is present in this instance.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Return the smallest key.
    pub fn min(&self) -> Result<&K> {
        let mut node = match self.root.as_deref() {
            Some(node) => node,
            None => return err_at!(EmptyCollection, msg: "min on empty map"),
        };
        while let Some(left) = node.as_left_ref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Return the largest key.
    pub fn max(&self) -> Result<&K> {
        let mut node = match self.root.as_deref() {
            Some(node) => node,
            None => return err_at!(EmptyCollection, msg: "max on empty map"),
        };
        while let Some(right) = node.as_right_ref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Return the largest key less than or equal to `key`.
    pub fn floor<Q>(&self, key: &Q) -> Result<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return err_at!(EmptyCollection, msg: "floor on empty map");
        }
        match floor(self.root.as_deref(), key) {
            Some(node) => Ok(&node.key),
            None => err_at!(NotFound, msg: "floor, key is below min"),
        }
    }

    /// Return the smallest key greater than or equal to `key`.
    pub fn ceiling<Q>(&self, key: &Q) -> Result<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return err_at!(EmptyCollection, msg: "ceiling on empty map");
        }
        match ceiling(self.root.as_deref(), key) {
            Some(node) => Ok(&node.key),
            None => err_at!(NotFound, msg: "ceiling, key is above max"),
        }
    }

    /// Return the number of keys strictly less than `key`.
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut node, mut rank) = (self.root.as_deref(), 0);
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Greater => nref.as_left_ref(),
                Ordering::Less => {
                    rank += 1 + node::size(nref.as_left_ref());
                    nref.as_right_ref()
                }
                Ordering::Equal => return rank + node::size(nref.as_left_ref()),
            };
        }
        rank
    }

    /// Return the key of rank `k`, that is the key with exactly `k`
    /// smaller keys in this instance.
    pub fn select(&self, k: usize) -> Result<&K> {
        if k >= self.len() {
            return err_at!(InvalidArgument, msg: "select({}) beyond len {}", k, self.len());
        }

        let (mut node, mut k) = (self.root.as_deref(), k);
        while let Some(nref) = node {
            let n_left = node::size(nref.as_left_ref());
            node = match n_left.cmp(&k) {
                Ordering::Greater => nref.as_left_ref(),
                Ordering::Less => {
                    k -= n_left + 1;
                    nref.as_right_ref()
                }
                Ordering::Equal => return Ok(&nref.key),
            }
        }
        err_at!(Fatal, msg: "select(): subtree sizes are broken")
    }

    /// Return the number of keys between `lo` and `hi`, both inclusive.
    pub fn size_range<Q>(&self, lo: &Q, hi: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match lo.cmp(hi) {
            Ordering::Greater => 0,
            _ if self.contains(hi) => self.rank(hi) - self.rank(lo) + 1,
            _ => self.rank(hi) - self.rank(lo),
        }
    }

    /// Return all keys in ascending order.
    pub fn keys(&self) -> Queue<&K>
    where
        K: Ord,
    {
        let mut queue = Queue::new();
        enqueue_keys::<K, V, K>(self.root.as_deref(), &mut queue, None, None);
        queue
    }

    /// Return keys between `lo` and `hi`, both inclusive, in ascending
    /// order.
    pub fn keys_in_range<Q>(&self, lo: &Q, hi: &Q) -> Queue<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut queue = Queue::new();
        enqueue_keys(self.root.as_deref(), &mut queue, Some(lo), Some(hi));
        queue
    }

    /// Return an iterator over all entries in this instance.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let node = self.root.as_deref();

        let mut paths = Vec::default();
        build_iter(IFlag::Left, node, &mut paths);

        Iter {
            paths,
            reverse: false,
        }
    }

    /// Range over all entries from low to high.
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K, V, R, Q>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.root.as_deref();

        let mut paths = Vec::default();
        match range.start_bound() {
            Bound::Unbounded => build_iter(IFlag::Left, root, &mut paths),
            Bound::Included(low) => find_start(root, low, true, &mut paths),
            Bound::Excluded(low) => find_start(root, low, false, &mut paths),
        };
        let iter = Iter {
            paths,
            reverse: false,
        };

        Range {
            range,
            iter,
            fin: false,
            high: marker::PhantomData,
        }
    }

    /// Reverse range over all entries from high to low.
    pub fn reverse<Q, R>(&self, range: R) -> Reverse<'_, K, V, R, Q>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.root.as_deref();

        let mut paths = Vec::default();
        match range.end_bound() {
            Bound::Unbounded => build_iter(IFlag::Right, root, &mut paths),
            Bound::Included(high) => find_end(root, high, true, &mut paths),
            Bound::Excluded(high) => find_end(root, high, false, &mut paths),
        };
        let iter = Iter {
            paths,
            reverse: true,
        };

        Reverse {
            range,
            iter,
            fin: false,
            low: marker::PhantomData,
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

type Upsert<K, V> = (Box<Node<K, V>>, Option<V>);
type Delete<K, V> = (Option<Box<Node<K, V>>>, Option<V>);
type Delmin<K, V> = (Option<Box<Node<K, V>>>, Option<Box<Node<K, V>>>);

impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    fn do_set(node: Option<Box<Node<K, V>>>, key: K, value: V) -> Upsert<K, V> {
        let mut node = match node {
            Some(node) => node,
            None => return (Box::new(Node::new(key, value)), None),
        };

        let old_value = match node.key.cmp(&key) {
            Ordering::Greater => {
                let (left, o) = Self::do_set(node.left.take(), key, value);
                node.left = Some(left);
                o
            }
            Ordering::Less => {
                let (right, o) = Self::do_set(node.right.take(), key, value);
                node.right = Some(right);
                o
            }
            Ordering::Equal => Some(node.set_value(value)),
        };
        (node::walkuprot_23(node), old_value)
    }

    // key must be present in the subtree, caller make sure of that.
    fn do_delete<Q>(node: Option<Box<Node<K, V>>>, key: &Q) -> Delete<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };

        if node.key.borrow().gt(key) {
            let left = node.as_left_ref();
            if left.is_some() && !is_red(left) && !is_red(left.and_then(Node::as_left_ref)) {
                node = node::move_red_left(node);
            }
            let (left, old_value) = Self::do_delete(node.left.take(), key);
            node.left = left;
            return (Some(node::balance(node)), old_value);
        }

        if is_red(node.as_left_ref()) {
            node = node::rotate_right(node);
        }

        if node.key.borrow().eq(key) && node.right.is_none() {
            // left is not red here, so black-balance leaves it empty too.
            let Node { value, .. } = *node;
            return (None, Some(value));
        }

        let right = node.as_right_ref();
        if right.is_some() && !is_red(right) && !is_red(right.and_then(Node::as_left_ref)) {
            node = node::move_red_right(node);
        }

        let old_value = if node.key.borrow().eq(key) {
            // replace with in-order successor, then drop the successor.
            let (right, min) = Self::do_delete_min(node.right.take());
            node.right = right;
            match min {
                Some(min) => {
                    let (key, value) = into_entry(min);
                    node.key = key;
                    Some(node.set_value(value))
                }
                None => panic!("do_delete(): fatal logic, call the programmer"),
            }
        } else {
            let (right, old_value) = Self::do_delete(node.right.take(), key);
            node.right = right;
            old_value
        };

        (Some(node::balance(node)), old_value)
    }

    fn do_delete_min(node: Option<Box<Node<K, V>>>) -> Delmin<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if node.left.is_none() {
            return (node.right.take(), Some(node));
        }

        let left = node.as_left_ref();
        if !is_red(left) && !is_red(left.and_then(Node::as_left_ref)) {
            node = node::move_red_left(node);
        }
        let (left, min) = Self::do_delete_min(node.left.take());
        node.left = left;
        (Some(node::balance(node)), min)
    }

    fn do_delete_max(node: Option<Box<Node<K, V>>>) -> Delmin<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if is_red(node.as_left_ref()) {
            node = node::rotate_right(node);
        }
        if node.right.is_none() {
            return (node.left.take(), Some(node));
        }

        let right = node.as_right_ref();
        if !is_red(right) && !is_red(right.and_then(Node::as_left_ref)) {
            node = node::move_red_right(node);
        }
        let (right, max) = Self::do_delete_max(node.right.take());
        node.right = right;
        (Some(node::balance(node)), max)
    }
}

// If both children of root are black, set root to red, so that the
// deletion path always has a red link to consume.
fn into_red_root<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if !is_red(root.as_left_ref()) && !is_red(root.as_right_ref()) {
        root.set_red();
    }
    root
}

fn into_black<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    root.set_black();
    root
}

fn into_entry<K, V>(node: Box<Node<K, V>>) -> (K, V) {
    let Node { key, value, .. } = *node;
    (key, value)
}

fn levels<K, V>(node: Option<&Node<K, V>>) -> usize {
    match node {
        Some(node) => {
            let (left, right) = (node.as_left_ref(), node.as_right_ref());
            1 + cmp::max(levels(left), levels(right))
        }
        None => 0,
    }
}

fn floor<'a, K, V, Q>(node: Option<&'a Node<K, V>>, key: &Q) -> Option<&'a Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = node?;
    match node.key.borrow().cmp(key) {
        Ordering::Equal => Some(node),
        Ordering::Greater => floor(node.as_left_ref(), key),
        Ordering::Less => floor(node.as_right_ref(), key).or(Some(node)),
    }
}

fn ceiling<'a, K, V, Q>(node: Option<&'a Node<K, V>>, key: &Q) -> Option<&'a Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = node?;
    match node.key.borrow().cmp(key) {
        Ordering::Equal => Some(node),
        Ordering::Less => ceiling(node.as_right_ref(), key),
        Ordering::Greater => ceiling(node.as_left_ref(), key).or(Some(node)),
    }
}

// In-order walk, left-self-right, skipping subtrees outside [lo, hi].
fn enqueue_keys<'a, K, V, Q>(
    node: Option<&'a Node<K, V>>,
    queue: &mut Queue<&'a K>,
    lo: Option<&Q>,
    hi: Option<&Q>,
) where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = match node {
        Some(node) => node,
        None => return,
    };

    let key: &Q = node.key.borrow();
    let (lo_cmp, hi_cmp) = (
        lo.map_or(Ordering::Less, |lo| lo.cmp(key)),
        hi.map_or(Ordering::Greater, |hi| hi.cmp(key)),
    );

    if lo_cmp == Ordering::Less {
        enqueue_keys(node.as_left_ref(), queue, lo, hi);
    }
    if lo_cmp != Ordering::Greater && hi_cmp != Ordering::Less {
        queue.enqueue(&node.key);
    }
    if hi_cmp == Ordering::Greater {
        enqueue_keys(node.as_right_ref(), queue, lo, hi);
    }
}

fn validate_tree<K, V>(
    node: Option<&Node<K, V>>,
    fromred: bool,
    mut n_blacks: usize,
    lo: Option<&K>,
    hi: Option<&K>,
) -> Result<usize>
where
    K: Ord,
{
    let node = match node {
        Some(node) => node,
        None => return Ok(n_blacks),
    };

    let red = is_red(Some(node));
    if fromred && red {
        return err_at!(Fatal, msg: "consecutive reds");
    }
    if is_red(node.as_right_ref()) {
        return err_at!(Fatal, msg: "red link leaning right");
    }

    if !red {
        n_blacks += 1;
    }

    if lo.map_or(false, |lo| node.key.le(lo)) || hi.map_or(false, |hi| node.key.ge(hi)) {
        return err_at!(Fatal, msg: "keys out of sort order");
    }

    let (left, right) = (node.as_left_ref(), node.as_right_ref());
    let lblacks = validate_tree(left, red, n_blacks, lo, Some(&node.key))?;
    let rblacks = validate_tree(right, red, n_blacks, Some(&node.key), hi)?;
    if lblacks != rblacks {
        return err_at!(Fatal, msg: "unbalanced blacks {} {}", lblacks, rblacks);
    }

    let n = 1 + node::size(left) + node::size(right);
    if node.size != n {
        return err_at!(Fatal, msg: "subtree size {} != {}", node.size, n);
    }

    Ok(lblacks)
}

/// Iterator over entries of [OrderedMap], in sort order or in reverse.
pub struct Iter<'a, K, V> {
    paths: Vec<Fragment<'a, K, V>>,
    reverse: bool,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    // Each fragment's flag records how far its node has been visited.
    // Forward walks go Left -> Center -> Right, yielding on Left.
    // Reverse walks mirror this, Right -> Center -> Left, yielding on
    // Right and then descending into the left subtree.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = self.paths.last_mut()?;
            let node = path.node;
            match (self.reverse, path.flag) {
                (false, IFlag::Left) | (true, IFlag::Right) => {
                    path.flag = IFlag::Center;
                    break Some((&node.key, &node.value));
                }
                (false, IFlag::Center) => {
                    path.flag = IFlag::Right;
                    build_iter(IFlag::Left, node.as_right_ref(), &mut self.paths)
                }
                (true, IFlag::Center) => {
                    path.flag = IFlag::Left;
                    build_iter(IFlag::Right, node.as_left_ref(), &mut self.paths)
                }
                (false, IFlag::Right) | (true, IFlag::Left) => {
                    self.paths.pop();
                }
            }
        }
    }
}

/// Iterator over a range of entries of [OrderedMap], from low to high.
pub struct Range<'a, K, V, R, Q>
where
    Q: ?Sized,
{
    range: R,
    iter: Iter<'a, K, V>,
    fin: bool,
    high: marker::PhantomData<Q>,
}

impl<'a, K, V, R, Q> Iterator for Range<'a, K, V, R, Q>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
    R: RangeBounds<Q>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.fin {
            false => {
                let (key, val) = self.iter.next()?;
                match self.range.end_bound() {
                    Bound::Included(high) if key.borrow().le(high) => Some((key, val)),
                    Bound::Excluded(high) if key.borrow().lt(high) => Some((key, val)),
                    Bound::Unbounded => Some((key, val)),
                    Bound::Included(_) | Bound::Excluded(_) => {
                        self.fin = true;
                        None
                    }
                }
            }
            true => None,
        }
    }
}

/// Iterator over a range of entries of [OrderedMap], from high to low.
pub struct Reverse<'a, K, V, R, Q>
where
    Q: ?Sized,
{
    range: R,
    iter: Iter<'a, K, V>,
    fin: bool,
    low: marker::PhantomData<Q>,
}

impl<'a, K, V, R, Q> Iterator for Reverse<'a, K, V, R, Q>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
    R: RangeBounds<Q>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.fin {
            false => {
                let (key, val) = self.iter.next()?;
                match self.range.start_bound() {
                    Bound::Included(low) if key.borrow().ge(low) => Some((key, val)),
                    Bound::Excluded(low) if key.borrow().gt(low) => Some((key, val)),
                    Bound::Unbounded => Some((key, val)),
                    Bound::Included(_) | Bound::Excluded(_) => {
                        self.fin = true;
                        None
                    }
                }
            }
            true => None,
        }
    }
}

// Progress of an iterator at a node. Forward iteration visits
// Left -> Center -> Right, reverse iteration visits Right -> Center -> Left.
#[derive(Copy, Clone)]
enum IFlag {
    Left,
    Center,
    Right,
}

struct Fragment<'a, K, V> {
    flag: IFlag,
    node: &'a Node<K, V>,
}

fn build_iter<'a, K, V>(
    flag: IFlag,
    node: Option<&'a Node<K, V>>,
    paths: &mut Vec<Fragment<'a, K, V>>,
) {
    let mut node = node;
    while let Some(nref) = node {
        paths.push(Fragment { flag, node: nref });
        node = match flag {
            IFlag::Left => nref.as_left_ref(),
            IFlag::Right => nref.as_right_ref(),
            IFlag::Center => unreachable!(),
        };
    }
}

fn find_start<'a, K, V, Q>(
    node: Option<&'a Node<K, V>>,
    low: &Q,
    incl: bool,
    paths: &mut Vec<Fragment<'a, K, V>>,
) where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if let Some(node) = node {
        let cmp = node.key.borrow().cmp(low);

        let flag = match cmp {
            Ordering::Less => IFlag::Right,
            Ordering::Equal if incl => IFlag::Left,
            Ordering::Equal => IFlag::Center,
            Ordering::Greater => IFlag::Left,
        };
        paths.push(Fragment { flag, node });

        match cmp {
            Ordering::Equal => (),
            Ordering::Less => find_start(node.as_right_ref(), low, incl, paths),
            Ordering::Greater => find_start(node.as_left_ref(), low, incl, paths),
        }
    }
}

fn find_end<'a, K, V, Q>(
    node: Option<&'a Node<K, V>>,
    high: &Q,
    incl: bool,
    paths: &mut Vec<Fragment<'a, K, V>>,
) where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if let Some(node) = node {
        let cmp = node.key.borrow().cmp(high);

        let flag = match cmp {
            Ordering::Less => IFlag::Right,
            Ordering::Equal if incl => IFlag::Right,
            Ordering::Equal => IFlag::Center,
            Ordering::Greater => IFlag::Left,
        };
        paths.push(Fragment { flag, node });

        match cmp {
            Ordering::Equal => (),
            Ordering::Less => find_end(node.as_right_ref(), high, incl, paths),
            Ordering::Greater => find_end(node.as_left_ref(), high, incl, paths),
        }
    }
}

#[cfg(test)]
#[path = "omap_test.rs"]
mod omap_test;
