use sort_test_tools::{instantiate_sort_tests, Sort};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "pivotsort_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        pivotsort::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        pivotsort::sort_by(arr, compare);
    }
}

instantiate_sort_tests!(SortImpl);

mod scenarios {
    #[test]
    fn empty_unchanged() {
        let mut v: Vec<i32> = vec![];
        pivotsort::sort(&mut v);
        assert_eq!(v, Vec::<i32>::new());
    }

    #[test]
    fn single_element_unchanged() {
        let mut v = vec![42];
        pivotsort::sort(&mut v);
        assert_eq!(v, [42]);
    }

    #[test]
    fn two_elements() {
        let mut v = vec![2, 1];
        pivotsort::sort(&mut v);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn three_elements() {
        let mut v = vec![3, 1, 2];
        pivotsort::sort(&mut v);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn all_duplicates() {
        let mut v = vec![5, 5, 5];
        pivotsort::sort(&mut v);
        assert_eq!(v, [5, 5, 5]);
    }

    #[test]
    fn six_elements() {
        let mut v = vec![9, 3, 7, 1, 8, 2];
        pivotsort::sort(&mut v);
        assert_eq!(v, [1, 2, 3, 7, 8, 9]);
    }

    // The middle pivot of this input is the maximum element, so the entire
    // rest of the slice lands in the less-than group, unsorted. The final
    // contents must reflect the recursive sorting of that group, not just the
    // top-level grouping.
    #[test]
    fn nested_partitions_fully_sorted() {
        let mut v = vec![3, 1, 2, 9, 5, 4];
        pivotsort::sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 9]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut v = vec![5, -3, 11, 0, 0, 7, -3];
        pivotsort::sort(&mut v);
        let once = v.clone();
        pivotsort::sort(&mut v);
        assert_eq!(v, once);
    }

    #[test]
    fn presorted_unchanged() {
        let mut v: Vec<i32> = (0..128).collect();
        let expected = v.clone();
        pivotsort::sort(&mut v);
        assert_eq!(v, expected);
    }

    #[test]
    fn reverse_sorted() {
        let mut v: Vec<i32> = (0..128).rev().collect();
        pivotsort::sort(&mut v);
        let expected: Vec<i32> = (0..128).collect();
        assert_eq!(v, expected);
    }

    #[test]
    fn sort_by_reverse_order() {
        let mut v = vec![1, 5, 2, 4, 3];
        pivotsort::sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn slice_identity_preserved() {
        let mut v = vec![4, 2, 3, 1];
        let ptr_before = v.as_ptr();
        let len_before = v.len();

        pivotsort::sort(&mut v);

        assert_eq!(v.as_ptr(), ptr_before);
        assert_eq!(v.len(), len_before);
        assert_eq!(v, [1, 2, 3, 4]);
    }
}
