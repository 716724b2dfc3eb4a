//! Package implement an ordered symbol table.
//!
//! [OrderedMap] is an in-memory sorted map using
//! [left-leaning-red-black][wiki-llrb] tree, a binary search tree that
//! simulates a 2-3 tree with colored links. Every path from the root to
//! a leaf carries the same number of black links, which bounds the
//! height of the tree to `2 * log2(n)` and gives logarithmic time for
//! lookup, insertion and deletion.
//!
//! - Each entry in OrderedMap instance correspond to a {Key, Value} pair.
//! - Parametrised over `key-type` and `value-type`, keys must be [Ord].
//! - CRUD operations, via insert(), put(), get(), delete() api.
//! - Order statistics, via min(), max(), floor(), ceiling(), rank() and
//!   select() api.
//! - Key queries, via keys() and keys_in_range(), returning a [Queue].
//! - Full table scan, range scan and reverse scan.
//! - Uses ownership model and borrow semantics to ensure safety.
//! - No Durability guarantee.
//! - Not thread safe, wrap the whole map in a lock to share it.
//!
//! Constructing a new [OrderedMap] instance and CRUD operations:
//!
//! ```
//! use rbst::OrderedMap;
//!
//! let mut index: OrderedMap<String, String> = OrderedMap::new();
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! index.insert("key1".to_string(), "value1".to_string());
//! index.insert("key2".to_string(), "value2".to_string());
//! assert_eq!(index.len(), 2);
//!
//! assert_eq!(index.get("key1").unwrap(), "value1");
//! assert_eq!(index.get("key2").unwrap(), "value2");
//!
//! // setting a key to None is same as deleting it.
//! index.put("key2".to_string(), None);
//! assert_eq!(index.contains("key2"), false);
//!
//! let old_value = index.delete("key1").unwrap();
//! assert_eq!(old_value, "value1".to_string());
//! assert!(index.is_empty());
//! ```
//!
//! Order statistics:
//!
//! ```
//! use rbst::OrderedMap;
//!
//! let mut index: OrderedMap<i32, char> = OrderedMap::new();
//! for (key, value) in [(5, 'e'), (3, 'c'), (8, 'h'), (1, 'a')].iter() {
//!     index.insert(*key, *value);
//! }
//!
//! assert_eq!(*index.min().unwrap(), 1);
//! assert_eq!(*index.max().unwrap(), 8);
//! assert_eq!(*index.floor(&7).unwrap(), 5);
//! assert_eq!(*index.ceiling(&6).unwrap(), 8);
//! assert_eq!(index.rank(&5), 2);
//! assert_eq!(*index.select(2).unwrap(), 5);
//!
//! let keys: Vec<i32> = index.keys_in_range(&2, &8).copied().collect();
//! assert_eq!(keys, vec![3, 5, 8]);
//! ```
//!
//! [wiki-llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

use std::{error, fmt, result};

// Short form to compose Error values.
//
// Here are few possible ways:
//
// ```ignore
// use crate::Error;
// err_at!(NotFound, msg: "no key below {:?}", key);
// ```
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, validate_tree(root));
// ```
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, validate_tree(root), "after delete {}", n);
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err(Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

mod node;
mod omap;
mod queue;

pub use omap::{Iter, OrderedMap, Range, Reverse};
pub use queue::Queue;

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    /// Tree invariants are broken, reported by validate().
    Fatal(String, String),
    /// Argument is out of range, like select() beyond len().
    InvalidArgument(String, String),
    /// Operation needs at least one entry.
    EmptyCollection(String, String),
    /// No key satisfies the requested bound.
    NotFound(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            InvalidArgument(p, msg) => write!(f, "{} InvalidArgument: {}", p, msg),
            EmptyCollection(p, msg) => write!(f, "{} EmptyCollection: {}", p, msg),
            NotFound(p, msg) => write!(f, "{} NotFound: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
