/// Greedily pairs each of `items` with an element of `pool` that has the same key.
///
/// Items are visited in order. Each one takes the *first* pool element (in
/// pool order) whose key is equal and that has not been taken by an earlier
/// item. The result has one slot per item, `None` where nothing was left to
/// match.
///
/// This is not a canonical matching: with duplicate keys, the i-th item with
/// a given key is always paired with the i-th remaining pool element with
/// that key. Calling it twice on the same inputs gives the same pairing.
///
/// ```
/// use tractor::match_by_key_preserving_order;
/// let pool = vec![("a", 1), ("b", 2), ("a", 3)];
/// let matched = match_by_key_preserving_order(pool, &["a", "c", "a", "a"], |p| p.0, |i| *i);
/// assert_eq!(matched, vec![Some(("a", 1)), None, Some(("a", 3)), None]);
/// ```
pub fn match_by_key_preserving_order<P, I, K, FP, FI>(
    pool: impl IntoIterator<Item = P>,
    items: &[I],
    pool_key: FP,
    item_key: FI,
) -> Vec<Option<P>>
where
    K: PartialEq,
    FP: Fn(&P) -> K,
    FI: Fn(&I) -> K,
{
    // Taken elements become `None` so that pool order is never disturbed
    let mut pool: Vec<Option<P>> = pool.into_iter().map(Some).collect();
    items
        .iter()
        .map(|item| {
            let key = item_key(item);
            pool.iter_mut()
                .find(|slot| slot.as_ref().is_some_and(|p| pool_key(p) == key))
                .and_then(Option::take)
        })
        .collect()
}
