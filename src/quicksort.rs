use std::cmp::Ordering;
use std::mem::MaybeUninit;
use std::ptr;

/// Sorts `v` recursively.
///
/// `scratch` must hold at least `v.len()` slots, `ranks` is re-used by every
/// recursion level as classification storage for the partition step.
pub(crate) fn pivot_quicksort<T, F>(
    v: &mut [T],
    scratch: &mut [MaybeUninit<T>],
    ranks: &mut Vec<Ordering>,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Middle element of the current, not yet partitioned slice.
    let pivot_idx = len / 2;

    let (lt_len, eq_len) = partition_three_way(v, scratch, ranks, pivot_idx, compare);

    // The equal group is already in its final position. Recurse into the two
    // outer groups of the slice itself, so that their sorted order is visible
    // to the caller. Recursion depth is proportional to how unbalanced the
    // pivot choices are, up to `v.len()` levels for degenerate comparators.
    let (lt, rest) = v.split_at_mut(lt_len);
    let (_eq, gt) = rest.split_at_mut(eq_len);
    let gt_len = gt.len();

    pivot_quicksort(lt, &mut scratch[..lt_len], ranks, compare);
    pivot_quicksort(gt, &mut scratch[..gt_len], ranks, compare);
}

/// Partitions `v` into elements less than, equal to, and greater than the
/// pivot at `pivot_idx`, in that order, preserving the relative order of the
/// elements inside each group. Returns the lengths of the less-than and
/// equal-to groups.
///
/// All comparisons happen before any element is moved, and the pivot is
/// compared in place rather than through a stack copy. If `compare` panics or
/// does not implement a total order, `v` still holds its original set of
/// elements afterwards and every modification the comparison made via
/// interior mutability is observable in `v`.
fn partition_three_way<T, F>(
    v: &mut [T],
    scratch: &mut [MaybeUninit<T>],
    ranks: &mut Vec<Ordering>,
    pivot_idx: usize,
    compare: &mut F,
) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    debug_assert!(pivot_idx < len);
    debug_assert!(scratch.len() >= len);

    // Classification pass. The pivot's own slot is ranked Equal without
    // calling `compare`, which keeps the equal group non-empty and with it
    // both recursion arms strictly shorter than `v`, even for comparators
    // that violate Ord.
    ranks.clear();
    for i in 0..len {
        let rank = if i == pivot_idx {
            Ordering::Equal
        } else {
            compare(&v[i], &v[pivot_idx])
        };
        ranks.push(rank);
    }

    let mut lt_len = 0;
    let mut eq_len = 0;
    for rank in ranks.iter() {
        match rank {
            Ordering::Less => lt_len += 1,
            Ordering::Equal => eq_len += 1,
            Ordering::Greater => {}
        }
    }

    // Distribution pass. From here on no user code runs, so nothing can
    // unwind while elements are parked in `scratch`.
    let arr_ptr = v.as_mut_ptr();
    let scratch_ptr = scratch.as_mut_ptr().cast::<T>();

    let mut lt_out = 0;
    let mut eq_out = lt_len;
    let mut gt_out = lt_len + eq_len;

    // SAFETY: `scratch` holds at least `len` slots and the three output
    // cursors walk disjoint regions [0..lt_len), [lt_len..lt_len + eq_len)
    // and [lt_len + eq_len..len), one slot per rank entry. Every element of
    // `v` is copied into exactly one scratch slot and the closing copy moves
    // all `len` elements back, so `v` ends up with its original set of
    // elements and no element is duplicated or dropped.
    unsafe {
        for (i, rank) in ranks.iter().enumerate() {
            let dst = match rank {
                Ordering::Less => {
                    let d = lt_out;
                    lt_out += 1;
                    d
                }
                Ordering::Equal => {
                    let d = eq_out;
                    eq_out += 1;
                    d
                }
                Ordering::Greater => {
                    let d = gt_out;
                    gt_out += 1;
                    d
                }
            };

            ptr::copy_nonoverlapping(arr_ptr.add(i), scratch_ptr.add(dst), 1);
        }

        ptr::copy_nonoverlapping(scratch_ptr, arr_ptr, len);
    }

    (lt_len, eq_len)
}
