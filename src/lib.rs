//! # Chainmap
//!
//! A Rust implementation of a string-to-string hash table with separate
//! chaining.
//!
//! The table owns a fixed-size array of buckets, each holding a singly
//! linked collision chain of owned nodes. The bucket count is chosen at
//! construction time (default 32) and never changes; collisions are expected
//! and resolved by chaining, not by resizing. All operations funnel through
//! one deterministic index function, [`hash_index`].
//!
//! Ownership is strictly hierarchical (table, bucket, chain, node) with one
//! transfer point: [`ChainedTable::pop`] detaches a node and returns it by
//! value, so the hand-over to the caller is checked by the compiler.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::{ChainedTable, PushOutcome};
//!
//! let mut table = ChainedTable::new();
//!
//! // Insert records
//! assert_eq!(table.push("name", "John"), Ok(PushOutcome::Inserted));
//! assert_eq!(table.push("surname", "Thomas"), Ok(PushOutcome::Inserted));
//!
//! // Pushing an existing key replaces its value in place
//! assert_eq!(table.push("surname", "Murphy"), Ok(PushOutcome::Updated));
//! assert_eq!(table.len(), 2);
//!
//! // Look up without removing
//! assert_eq!(table.search_key("surname"), Some("Murphy"));
//! assert_eq!(table.search_key("cars"), None);
//!
//! // Detach a record; the caller now owns the node
//! let node = table.pop("surname");
//! assert_eq!(node.map(|n| n.into_value()), Some("Murphy".to_string()));
//! assert_eq!(table.search_key("surname"), None);
//! ```
//!
//! ## Rendering
//!
//! The `Display` implementation renders every record deterministically,
//! bucket index ascending and chain head first; an empty table renders as an
//! explicit marker:
//!
//! ```rust
//! use chainmap::ChainedTable;
//!
//! let mut table = ChainedTable::with_buckets(1);
//! assert_eq!(table.to_string(), "{ NULL }");
//!
//! table.push("name", "John").unwrap();
//! assert_eq!(table.to_string(), "{\n  \"name\": \"John\"\n}");
//! ```
//!
//! ## Collision-heavy tables
//!
//! The bucket count is a construction parameter, so collision behavior can
//! be exercised deterministically with tiny tables:
//!
//! ```rust
//! use chainmap::ChainedTable;
//!
//! // Every key lands in the single bucket; newest record leads the chain.
//! let mut table = ChainedTable::with_buckets(1);
//! table.push("a", "1").unwrap();
//! table.push("b", "2").unwrap();
//!
//! let pairs: Vec<(&str, &str)> = table.iter().collect();
//! assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
//! ```

/// Module implementing the separate-chaining table and its iterator
mod chained_table;
/// Module defining the error taxonomy for fallible table operations
mod error;
/// Module implementing the bucket index function
mod index;
/// Module defining the chain node record type
mod node;
/// Utility functions and traits for the table
mod utils;

pub use chained_table::{ChainedTable, Iter, PushOutcome, DEFAULT_BUCKET_COUNT};
pub use error::TableError;
pub use index::hash_index;
pub use node::Node;
pub use utils::{from_pairs, TableExtensions};
