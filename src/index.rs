//! The bucket index function mapping keys to chain slots.

/// Computes the bucket index for a key.
///
/// This is the rolling hash used by [`ChainedTable`](crate::ChainedTable):
/// for each byte `c` of the key, left to right, the accumulator is updated as
/// `index = ((index + c) * c) % bucket_count`. The empty string maps to
/// bucket 0. The function is pure and order-sensitive; collisions are
/// expected and resolved by chaining, not avoided.
///
/// `bucket_count` is clamped to at least 1 so the reduction is always
/// well-defined.
///
/// Exposed for testing and diagnostics. The exact mapping is an
/// implementation detail and not guaranteed stable across versions.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn hash_index(key: &str, bucket_count: usize) -> usize {
    let bucket_count = bucket_count.max(1);
    let mut index: usize = 0;

    for byte in key.bytes() {
        let c = usize::from(byte);
        index = index.wrapping_add(c).wrapping_mul(c) % bucket_count;
    }

    index
}
