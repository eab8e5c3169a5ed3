//! Pivotsort, a stable recursive quicksort built on three-way partitioning.
//!
//! Each step picks the middle element of the current slice as pivot, splits the
//! slice into elements less than, equal to, and greater than the pivot while
//! preserving their relative order, and recurses into the outer two groups.
//! Inputs with many duplicate elements complete quickly because the equal
//! group is never visited again.

use std::cmp::Ordering;

mod quicksort;

/// Sorts the slice in ascending order, preserving the order of equal elements.
///
/// This sort is stable, allocates a scratch buffer of the same length as the
/// slice, and performs *O*(*n* \* log(*n*)) comparisons on average. The worst
/// case is *O*(*n*^2) comparisons and *O*(*n*) recursion depth; there is no
/// fallback sort that bounds degenerate pivot sequences.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// pivotsort::sort(&mut v);
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
#[inline(always)]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function, preserving the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in
/// the slice. If the ordering is not total, the resulting order is
/// unspecified, but all original elements will remain in the slice. An order
/// is a total order if it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is
///   true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for
///   both `==` and `>`.
///
/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`,
/// we can use `partial_cmp` as our sort function when we know the slice
/// doesn't contain a `NaN`.
///
/// ```
/// let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
///
/// pivotsort::sort_by(&mut floats, |a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[inline(always)]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, compare);
}

#[inline(never)]
fn stable_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    // A slice of length 0 or 1 is always sorted.
    if len < 2 {
        return;
    }

    // One scratch allocation per top-level call, shared by every recursion
    // level. `ranks` holds the classification of each element of the current
    // level against that level's pivot.
    let mut scratch = Vec::with_capacity(len);
    let mut ranks = Vec::with_capacity(len);

    quicksort::pivot_quicksort(
        v,
        &mut scratch.spare_capacity_mut()[..len],
        &mut ranks,
        &mut compare,
    );
}
