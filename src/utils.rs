//! Utility functions and traits for [`ChainedTable`].

use crate::error::TableError;
use crate::ChainedTable;

/// Extension trait providing convenience views over a table's contents.
pub trait TableExtensions {
    /// Returns every key in the table, in rendering order.
    fn keys(&self) -> Vec<String>;

    /// Returns every value in the table, in rendering order.
    fn values(&self) -> Vec<String>;

    /// Returns true if the table holds a record for `key`.
    fn contains_key(&self, key: &str) -> bool;
}

impl TableExtensions for ChainedTable {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_string()).collect()
    }

    fn values(&self) -> Vec<String> {
        self.iter().map(|(_, value)| value.to_string()).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.search_key(key).is_some()
    }
}

/// Builds a [`ChainedTable`] with the default bucket count from key/value
/// pairs.
///
/// # Errors
///
/// Propagates the first [`TableError`] returned by [`ChainedTable::push`];
/// the partially filled table is dropped.
pub fn from_pairs<'a, I>(pairs: I) -> Result<ChainedTable, TableError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut table = ChainedTable::new();
    for (key, value) in pairs {
        table.push(key, value)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let table = from_pairs([("a", "1"), ("b", "2"), ("c", "3")]);

        assert!(table.is_ok());
        if let Ok(table) = table {
            assert_eq!(table.search_key("a"), Some("1"));
            assert_eq!(table.search_key("b"), Some("2"));
            assert_eq!(table.search_key("c"), Some("3"));
            assert_eq!(table.len(), 3);
        }
    }

    #[test]
    fn test_from_pairs_rejects_empty_key() {
        let table = from_pairs([("a", "1"), ("", "2")]);
        assert_eq!(table.err(), Some(TableError::InvalidKey));
    }

    #[test]
    fn test_keys_and_values() {
        let mut table = ChainedTable::new();
        assert!(table.push("a", "1").is_ok());
        assert!(table.push("b", "2").is_ok());
        assert!(table.push("c", "3").is_ok());

        let mut keys = table.keys();
        keys.sort();

        let mut values = table.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec!["1".to_string(), "2".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_contains_key() {
        let mut table = ChainedTable::new();
        assert!(table.push("a", "1").is_ok());

        assert!(table.contains_key("a"));
        assert!(!table.contains_key("b"));
    }
}
