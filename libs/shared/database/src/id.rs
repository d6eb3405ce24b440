use shared_models::Record;

/// One past the largest id in `records`, or 1 for an empty collection.
///
/// Ids freed by deleting the current maximum are handed out again, so callers must
/// hold the store's write lock between allocating and inserting.
pub fn next_id<'a, T, I>(records: I) -> u64
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().map(|record| record.id()).max().unwrap_or(0) + 1
}
