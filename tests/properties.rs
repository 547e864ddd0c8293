#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used
)]

use std::collections::HashMap;

use chainmap::{hash_index, ChainedTable, Node, PushOutcome, TableError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn index_stays_in_range(key in ".*", bucket_count in 1usize..512) {
        prop_assert!(hash_index(&key, bucket_count) < bucket_count);
    }

    #[test]
    fn index_is_deterministic(key in ".*") {
        prop_assert_eq!(hash_index(&key, 32), hash_index(&key, 32));
    }

    // Drives the table and a std HashMap with the same operation stream over
    // a tiny key space, so chains collide and pops hit every chain position.
    #[test]
    fn table_agrees_with_std_hashmap(
        ops in proptest::collection::vec((any::<bool>(), "[a-e]{1,2}", "[a-z]{1,4}"), 0..64),
    ) {
        let mut table = ChainedTable::with_buckets(4);
        let mut model: HashMap<String, String> = HashMap::new();

        for (remove, key, value) in ops {
            if remove {
                let popped = table.pop(&key).map(Node::into_value);
                prop_assert_eq!(popped, model.remove(&key));
            } else {
                let outcome = table.push(&key, &value).unwrap();
                let expected = if model.insert(key.clone(), value.clone()).is_some() {
                    PushOutcome::Updated
                } else {
                    PushOutcome::Inserted
                };
                prop_assert_eq!(outcome, expected);
            }
        }

        prop_assert_eq!(table.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(table.search_key(key), Some(value.as_str()));
        }
    }

    #[test]
    fn update_conserves_count(key in "[a-z]{1,8}", v1 in "[a-z]{1,8}", v2 in "[a-z]{1,8}") {
        let mut table = ChainedTable::new();
        table.push(&key, &v1).unwrap();
        let before = table.len();
        table.push(&key, &v2).unwrap();

        prop_assert_eq!(table.len(), before);
        prop_assert_eq!(table.search_key(&key), Some(v2.as_str()));
    }

    #[test]
    fn pop_then_miss(key in "[a-z]{1,8}", value in "[a-z]{1,8}") {
        let mut table = ChainedTable::new();
        table.push(&key, &value).unwrap();

        prop_assert_eq!(table.pop(&key).map(Node::into_value), Some(value));
        prop_assert_eq!(table.search_key(&key), None);
        prop_assert!(table.pop(&key).is_none());
    }
}

#[test]
fn empty_key_is_rejected_without_mutation() {
    let mut table = ChainedTable::new();
    assert_eq!(table.push("", "value"), Err(TableError::InvalidKey));
    assert_eq!(table.push("key", ""), Err(TableError::InvalidValue));
    assert_eq!(table.len(), 0);
    assert_eq!(table.to_string(), "{ NULL }");
}
