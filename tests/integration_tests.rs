use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raxsort::prelude::*;

#[test]
fn test_signed_ints() {
    let mut data: Vec<i32> = vec![2, 3, 1];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![1, 2, 3]);

    let mut data: Vec<i32> = vec![7, -3, 0, -3, 42, i32::MIN, i32::MAX];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![i32::MIN, -3, -3, 0, 7, 42, i32::MAX]);
}

#[test]
fn test_unsigned_shorts() {
    let mut data: Vec<u16> = vec![2, 3, 1];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_descending() {
    let mut data: Vec<u16> = vec![2, 3, 1];
    sort_by::<Descending, _>(&mut data);
    assert_eq!(data, vec![3, 2, 1]);

    // Descending wraps any base scheme, including for signed values.
    let mut data: Vec<i64> = vec![-5, 9, 0, -20];
    sort_by::<Descending, _>(&mut data);
    assert_eq!(data, vec![9, 0, -5, -20]);
}

#[test]
fn test_floats() {
    let mut data: Vec<f32> = vec![1.0, 2.4, -3.5];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![-3.5, 1.0, 2.4]);

    let mut data: Vec<f64> = vec![0.0, -1.5, f64::INFINITY, f64::NEG_INFINITY, 2.25];
    raxsort::sort(&mut data);
    assert_eq!(
        data,
        vec![f64::NEG_INFINITY, -1.5, 0.0, 2.25, f64::INFINITY]
    );
}

#[test]
fn test_pairs() {
    // First component dominates, second breaks ties.
    let mut data: Vec<(i32, i32)> = vec![(2, 3), (0, 1), (5, 4)];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![(0, 1), (2, 3), (5, 4)]);

    let mut data: Vec<(u8, u8)> = vec![(1, 9), (1, 2), (0, 5)];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![(0, 5), (1, 2), (1, 9)]);
}

#[test]
fn test_user_supplied_scratch() {
    let mut with_scratch = vec![5, 3, 2, 6, 3];
    let mut engine_owned = with_scratch.clone();
    let mut scratch = vec![0; with_scratch.len()];

    sort_with::<Ascending, _>(&mut with_scratch, Some(&mut scratch), Execution::Sequential);
    sort_with::<Ascending, _>(&mut engine_owned, None, Execution::Sequential);

    assert_eq!(with_scratch, vec![2, 3, 3, 5, 6]);
    assert_eq!(with_scratch, engine_owned);
}

#[test]
fn test_oversized_scratch() {
    let mut data = vec![9u32, 1, 4];
    let mut scratch = vec![0u32; 100];
    sort_with::<Ascending, _>(&mut data, Some(&mut scratch), Execution::Sequential);
    assert_eq!(data, vec![1, 4, 9]);
}

#[test]
fn test_degenerate_inputs() {
    let mut empty: Vec<u64> = vec![];
    raxsort::sort(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![42u64];
    raxsort::sort(&mut single);
    assert_eq!(single, vec![42]);
}

#[test]
fn test_already_sorted_is_noop() {
    let mut data: Vec<u32> = (0..10_000).collect();
    let expected = data.clone();
    raxsort::sort(&mut data);
    assert_eq!(data, expected);

    // Sorting twice changes nothing further.
    let mut rng = StdRng::seed_from_u64(7);
    let mut data: Vec<i16> = (0..5_000).map(|_| rng.random()).collect();
    raxsort::sort(&mut data);
    let once = data.clone();
    raxsort::sort(&mut data);
    assert_eq!(data, once);
}

#[test]
fn test_single_byte_keys() {
    // One-byte keys take the odd-pass copy-back path.
    let mut data: Vec<u8> = vec![200, 3, 255, 0, 3];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![0, 3, 3, 200, 255]);

    let mut data: Vec<i8> = vec![5, -120, 0, 127, -1];
    raxsort::sort(&mut data);
    assert_eq!(data, vec![-120, -1, 0, 5, 127]);
}

#[test]
fn test_pointers() {
    let storage: Vec<i32> = (0..128).collect();
    let mut pointers: Vec<*const i32> = storage.iter().rev().map(|r| r as *const i32).collect();

    raxsort::sort(&mut pointers);

    let expected: Vec<*const i32> = storage.iter().map(|r| r as *const i32).collect();
    assert_eq!(pointers, expected);
}

// Scheme keying only on the first component; the second carries the original
// position so stability is observable.
struct ByFirst;

impl RadixKey<(u16, u32)> for ByFirst {
    const RADIX_SIZE: usize = <Ascending as RadixKey<u16>>::RADIX_SIZE;

    fn byte_at(value: &(u16, u32), index: usize) -> u8 {
        <Ascending as RadixKey<u16>>::byte_at(&value.0, index)
    }
}

#[test]
fn test_stability() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data: Vec<(u16, u32)> = (0u32..50_000)
        .map(|position| (rng.random_range(0..8), position))
        .collect();

    sort_by::<ByFirst, _>(&mut data);

    for window in data.windows(2) {
        assert!(window[0].0 <= window[1].0);
        if window[0].0 == window[1].0 {
            assert!(
                window[0].1 < window[1].1,
                "equal keys reordered: {:?} before {:?}",
                window[0],
                window[1]
            );
        }
    }
}

#[test]
fn test_fuzz_i32() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let len = rng.random_range(0..3_000);
        let mut data: Vec<i32> = (0..len).map(|_| rng.random()).collect();
        let mut expected = data.clone();
        expected.sort();

        raxsort::sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_u64() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let len = rng.random_range(0..3_000);
        let mut data: Vec<u64> = (0..len).map(|_| rng.random()).collect();
        let mut expected = data.clone();
        expected.sort();

        raxsort::sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_u128() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let len = rng.random_range(0..2_000);
        let mut data: Vec<u128> = (0..len).map(|_| rng.random()).collect();
        let mut expected = data.clone();
        expected.sort();

        raxsort::sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_f32() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..50 {
        let len = rng.random_range(0..3_000);
        let mut data: Vec<f32> = (0..len)
            .map(|_| (rng.random::<f32>() - 0.5) * 1e6)
            .collect();
        let mut expected = data.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        raxsort::sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_f64() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let len = rng.random_range(0..3_000);
        let mut data: Vec<f64> = (0..len)
            .map(|_| (rng.random::<f64>() - 0.5) * 1e12)
            .collect();
        let mut expected = data.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        raxsort::sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_pairs() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..50 {
        let len = rng.random_range(0..2_000);
        let mut data: Vec<(i32, u32)> = (0..len)
            .map(|_| (rng.random_range(-50..50), rng.random()))
            .collect();
        let mut expected = data.clone();
        expected.sort();

        raxsort::sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_descending() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..50 {
        let len = rng.random_range(0..3_000);
        let mut data: Vec<u32> = (0..len).map(|_| rng.random()).collect();
        let mut expected = data.clone();
        expected.sort();
        expected.reverse();

        sort_by::<Descending, _>(&mut data);
        assert_eq!(data, expected);
    }
}
