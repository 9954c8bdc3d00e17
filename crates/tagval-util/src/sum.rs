//! Sentinel-terminated integer summation.

/// Sum `first` and the values of `rest` up to, not including, the first 0.
///
/// `first` is always counted, even when it is itself 0; only `rest` is
/// scanned for the sentinel. If `rest` runs out before a 0 appears, the
/// sum covers everything. Overflow wraps.
///
/// ```
/// use tagval_util::add_ints;
///
/// assert_eq!(add_ints(1, [2, 3, 4, 5, 0]), 15);
/// assert_eq!(add_ints(7, [0]), 7);
/// assert_eq!(add_ints(1, [2, 0, 100]), 3);
/// ```
pub fn add_ints<I>(first: i32, rest: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    rest.into_iter()
        .take_while(|&v| v != 0)
        .fold(first, i32::wrapping_add)
}

/// Slice form of [`add_ints`](fn@add_ints): `values[0]` is `first`, the rest are
/// scanned for the sentinel. An empty slice sums to 0.
pub fn add_ints_slice(values: &[i32]) -> i32 {
    match values.split_first() {
        Some((&first, rest)) => add_ints(first, rest.iter().copied()),
        None => 0,
    }
}

/// Variadic call form of [`add_ints`](fn@crate::add_ints).
///
/// ```
/// use tagval_util::add_ints;
///
/// assert_eq!(add_ints!(1, 2, 3, 4, 5, 0), 15);
/// assert_eq!(add_ints!(7, 0), 7);
/// ```
#[macro_export]
macro_rules! add_ints {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::add_ints($first, [$($rest),*])
    };
}
