use std::fmt;

use crate::error::TableError;
use crate::index::hash_index;
use crate::node::{Chain, Node};

/// Number of buckets a table built with [`ChainedTable::new`] gets.
pub const DEFAULT_BUCKET_COUNT: usize = 32;

/// Outcome of a successful [`ChainedTable::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The key was not present; a new node was prepended to its chain.
    Inserted,
    /// The key was present; its value was replaced in place.
    Updated,
}

/// A hash table mapping string keys to string values, with collisions
/// resolved by separate chaining.
///
/// The bucket count is fixed at construction time and never changes; the
/// table does not resize or rehash. Every node reachable from bucket `i`
/// hashes to `i` under [`hash_index`], and keys are unique within the table.
///
/// Chains are singly linked lists of owned nodes. New keys are prepended to
/// their chain, so order within a bucket is insertion-reverse and not part
/// of the contract; order across buckets (as observed through [`iter`] and
/// the `Display` rendering) follows bucket index ascending.
///
/// Note: this type is not thread-safe and has no internal locking. Shared
/// use requires wrapping the whole table in one exclusive lock.
///
/// [`iter`]: ChainedTable::iter
#[derive(Debug)]
pub struct ChainedTable {
    /// The bucket slots, each holding the head of a collision chain.
    buckets: Vec<Chain>,
}

impl Default for ChainedTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainedTable {
    /// Creates a table with [`DEFAULT_BUCKET_COUNT`] empty buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates a table with `bucket_count` empty buckets.
    ///
    /// The count is clamped to at least 1 and stays fixed for the table's
    /// lifetime. Small counts are useful for exercising collision-heavy
    /// chains deterministically.
    #[must_use]
    pub fn with_buckets(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        Self { buckets }
    }

    /// Fallible sibling of [`with_buckets`](ChainedTable::with_buckets).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::AllocationFailure`] when the bucket array
    /// cannot be reserved; no partially initialized table is ever produced.
    pub fn try_with_buckets(bucket_count: usize) -> Result<Self, TableError> {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|_| TableError::AllocationFailure)?;
        buckets.resize_with(bucket_count, || None);
        Ok(Self { buckets })
    }

    /// Returns the fixed number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts a record or updates the one already holding `key`.
    ///
    /// The chain at `hash_index(key)` is scanned with exact byte-wise key
    /// comparison. A match has its value replaced in place and no node is
    /// created; otherwise a new node owning copies of `key` and `value`
    /// becomes the chain head (an O(1) prepend).
    ///
    /// The insert is transactional: string copies are made before any link
    /// is touched, so a failed allocation leaves the table in its prior
    /// state.
    ///
    /// # Errors
    ///
    /// - [`TableError::InvalidKey`] when `key` is empty.
    /// - [`TableError::InvalidValue`] when `value` is empty.
    /// - [`TableError::AllocationFailure`] when a string copy cannot be
    ///   reserved; the table is unchanged.
    pub fn push(&mut self, key: &str, value: &str) -> Result<PushOutcome, TableError> {
        if key.is_empty() {
            return Err(TableError::InvalidKey);
        }
        if value.is_empty() {
            return Err(TableError::InvalidValue);
        }

        let index = hash_index(key, self.buckets.len());
        let fresh = copy_str(value)?;

        match self.replace_in_chain(index, key, fresh) {
            Ok(()) => Ok(PushOutcome::Updated),
            Err(unplaced) => {
                let node = Box::new(Node::new(copy_str(key)?, unplaced));
                self.prepend(index, node);
                Ok(PushOutcome::Inserted)
            }
        }
    }

    /// Removes the record holding `key` and returns the detached node.
    ///
    /// Returns `None` when the key is absent; absence is a normal outcome,
    /// not an error. On a hit the node is unlinked from its chain, its own
    /// link is cleared, and ownership moves to the caller; the table no
    /// longer tracks it.
    pub fn pop(&mut self, key: &str) -> Option<Node> {
        let index = hash_index(key, self.buckets.len());
        let mut cursor = self.buckets.get_mut(index)?;

        loop {
            let hit = match cursor {
                Some(node) => node.key == key,
                None => return None,
            };

            if hit {
                let mut detached = cursor.take()?;
                *cursor = detached.next.take();
                return Some(*detached);
            }

            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return None,
            }
        }
    }

    /// Looks up the value stored for `key` without removing it.
    ///
    /// The borrow is read-only and bound to the table; the table is never
    /// mutated. Returns `None` when the key is absent.
    #[must_use]
    pub fn search_key(&self, key: &str) -> Option<&str> {
        let index = hash_index(key, self.buckets.len());
        let mut node = self.buckets.get(index).and_then(|chain| chain.as_deref());

        while let Some(current) = node {
            if current.key == key {
                return Some(current.value.as_str());
            }
            node = current.next.as_deref();
        }

        None
    }

    /// Counts the records across all chains, in O(buckets + records).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns an iterator over the key/value pairs in rendering order:
    /// bucket index ascending, then chain head first.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_> {
        Iter { buckets: &self.buckets, index: 0, node: None }
    }

    /// Replaces the value of the node holding `key` in the chain at `index`.
    ///
    /// Hands `fresh` back unused when no node in that chain holds the key.
    fn replace_in_chain(&mut self, index: usize, key: &str, fresh: String) -> Result<(), String> {
        let mut node = self
            .buckets
            .get_mut(index)
            .and_then(|chain| chain.as_deref_mut());

        while let Some(current) = node {
            if current.key == key {
                current.value = fresh;
                return Ok(());
            }
            node = current.next.as_deref_mut();
        }

        Err(fresh)
    }

    /// Makes `node` the new head of the chain at `index`.
    fn prepend(&mut self, index: usize, mut node: Box<Node>) {
        // hash_index reduces modulo the bucket count, so the slot exists.
        if let Some(chain) = self.buckets.get_mut(index) {
            node.next = chain.take();
            *chain = Some(node);
        }
    }
}

/// Copies a string through a fallible reservation so exhaustion surfaces as
/// [`TableError::AllocationFailure`] instead of an abort.
fn copy_str(source: &str) -> Result<String, TableError> {
    let mut copy = String::new();
    copy.try_reserve_exact(source.len())
        .map_err(|_| TableError::AllocationFailure)?;
    copy.push_str(source);
    Ok(copy)
}

impl fmt::Display for ChainedTable {
    /// Renders every record, bucket index ascending, chain head first:
    /// `{` then one `"key": "value"` row per record, or `{ NULL }` for an
    /// empty table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: usize = 0;

        for (key, value) in self.iter() {
            f.write_str(if rows == 0 { "{" } else { "," })?;
            write!(f, "\n  \"{key}\": \"{value}\"")?;
            rows = rows.saturating_add(1);
        }

        if rows == 0 {
            f.write_str("{ NULL }")
        } else {
            f.write_str("\n}")
        }
    }
}

impl Drop for ChainedTable {
    fn drop(&mut self) {
        // Unlink node by node; a derived drop would recurse chain-deep.
        for chain in &mut self.buckets {
            let mut node = chain.take();
            while let Some(mut current) = node {
                node = current.next.take();
            }
        }
    }
}

/// Iterator over a table's key/value pairs in rendering order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// The bucket slots being visited.
    buckets: &'a [Chain],
    /// Position of the next unvisited bucket.
    index: usize,
    /// The next node of the chain currently being walked.
    node: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                return Some((node.key.as_str(), node.value.as_str()));
            }

            let chain = self.buckets.get(self.index)?;
            self.index = self.index.saturating_add(1);
            self.node = chain.as_deref();
        }
    }
}
