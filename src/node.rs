//! Chain nodes: the owned key/value records stored in each bucket.

/// An owning link to the head (or remainder) of a collision chain.
pub(crate) type Chain = Option<Box<Node>>;

/// A stored key/value record.
///
/// While stored, a node is owned by its bucket slot or by its predecessor in
/// the chain, and never appears in more than one chain.
/// [`ChainedTable::pop`](crate::ChainedTable::pop) moves a node out of its
/// chain and returns it by value, so ownership transfer to the caller is
/// checked by the compiler rather than by convention.
#[derive(Debug)]
pub struct Node {
    /// The key identifying this record. Immutable once created.
    pub(crate) key: String,
    /// The value associated with the key. Replaced in place on update.
    pub(crate) value: String,
    /// Owning link to the next node sharing this bucket, cleared on detach.
    pub(crate) next: Chain,
}

impl Node {
    /// Creates a free-standing node, not yet linked into any chain.
    pub(crate) fn new(key: String, value: String) -> Self {
        Self { key, value, next: None }
    }

    /// Returns the record's key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Returns the record's value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Consumes the node, returning its value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Consumes the node, returning its key and value.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}
