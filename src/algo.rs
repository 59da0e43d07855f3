//! Core sorting passes and drivers.
//!
//! This module implements the least-significant-byte-first radix sort engine:
//! - Batched counting and stable scatter passes shared by both drivers.
//! - The sequential driver, ping-ponging between the input and a scratch buffer.
//! - The public entry points [`sort`], [`sort_by`], [`par_sort`], [`par_sort_by`],
//!   and [`sort_with`].
//!
//! One counting/scatter round runs per key byte, least significant first; after
//! the last round the slice is sorted and stability is preserved throughout.

use crate::core::{Ascending, Execution, RadixKey};
use crate::parallel;
use std::ops::{AddAssign, SubAssign};

/// Number of buckets per pass (one per byte value).
pub(crate) const RADIX_BUCKETS: usize = 256;

/// Sorts a slice ascending using the default key scheme for its element type.
///
/// The sort is stable and runs single-threaded; a scratch buffer of equal length
/// is allocated for the call's duration. Unsupported element types are rejected
/// at compile time.
///
/// # Examples
///
/// ```
/// let mut data = vec![2, 3, 1];
/// raxsort::sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
///
/// Floating point, with negatives ordering below positives:
///
/// ```
/// let mut data = vec![1.0f32, 2.4, -3.5];
/// raxsort::sort(&mut data);
///
/// assert_eq!(data, vec![-3.5, 1.0, 2.4]);
/// ```
pub fn sort<T>(data: &mut [T])
where
    T: Copy,
    Ascending: RadixKey<T>,
{
    sort_by::<Ascending, T>(data);
}

/// Sorts a slice under a caller-supplied key scheme.
///
/// # Examples
///
/// Tuples order by their first component, ties broken by the second:
///
/// ```
/// use raxsort::{sort_by, Ascending};
///
/// let mut data = vec![(2, 3), (0, 1), (5, 4)];
/// sort_by::<Ascending, _>(&mut data);
///
/// assert_eq!(data, vec![(0, 1), (2, 3), (5, 4)]);
/// ```
pub fn sort_by<K, T>(data: &mut [T])
where
    K: RadixKey<T>,
    T: Copy,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    // Any valid T will do as initial scratch content; copying the input avoids
    // uninitialized memory without a second initialization pass.
    let mut scratch = data.to_vec();
    run_sequential::<K, T>(data, &mut scratch);
}

/// Sorts a slice ascending using the multi-worker driver.
///
/// Worker count defaults to the rayon pool size, scaled down so that each worker
/// keeps a meaningful share of the input; small slices fall back to the
/// sequential driver. Output is identical to [`sort`].
///
/// # Examples
///
/// ```
/// let mut data: Vec<u64> = (0..1000).rev().collect();
/// raxsort::par_sort(&mut data);
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn par_sort<T>(data: &mut [T])
where
    T: Copy + Send + Sync,
    Ascending: RadixKey<T>,
{
    sort_with::<Ascending, T>(data, None, Execution::Parallel);
}

/// Sorts a slice under a caller-supplied key scheme using the multi-worker driver.
///
/// # Examples
///
/// ```
/// use raxsort::{par_sort_by, Descending};
///
/// let mut data = vec![2u32, 3, 1];
/// par_sort_by::<Descending, _>(&mut data);
///
/// assert_eq!(data, vec![3, 2, 1]);
/// ```
pub fn par_sort_by<K, T>(data: &mut [T])
where
    K: RadixKey<T>,
    T: Copy + Send + Sync,
{
    sort_with::<K, T>(data, None, Execution::Parallel);
}

/// Sorts a slice with full control over the key scheme, scratch buffer, and
/// execution mode.
///
/// When `scratch` is `None`, the engine allocates its own buffer and releases it
/// on return. A caller-supplied buffer must be at least as long as `data` and
/// must not alias it; both are preconditions, not runtime-checked conditions
/// (short buffers surface as a panic on the initial reslice). The buffer's
/// contents on entry are irrelevant and unspecified on return.
///
/// Slices of length 0 or 1 are a no-op under every mode.
///
/// # Examples
///
/// ```
/// use raxsort::{sort_with, Ascending, Execution};
///
/// let mut data = vec![5, 3, 2, 6, 3];
/// let mut scratch = vec![0; data.len()];
/// sort_with::<Ascending, _>(&mut data, Some(&mut scratch), Execution::Sequential);
///
/// assert_eq!(data, vec![2, 3, 3, 5, 6]);
/// ```
pub fn sort_with<K, T>(data: &mut [T], scratch: Option<&mut [T]>, execution: Execution)
where
    K: RadixKey<T>,
    T: Copy + Send + Sync,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut owned: Vec<T>;
    let scratch: &mut [T] = match scratch {
        Some(buffer) => &mut buffer[..len],
        None => {
            owned = data.to_vec();
            &mut owned
        }
    };

    let workers = match execution {
        Execution::Sequential => 1,
        Execution::Parallel => parallel::worker_count(len, None),
        Execution::ParallelWith(limit) => parallel::worker_count(len, Some(limit)),
    };

    if workers > 1 {
        parallel::sort_parallel::<K, T>(data, scratch, workers);
    } else {
        run_sequential::<K, T>(data, scratch);
    }
}

/// Picks the counter width for a sequential run.
fn run_sequential<K, T>(data: &mut [T], scratch: &mut [T])
where
    K: RadixKey<T>,
    T: Copy,
{
    if data.len() <= i32::MAX as usize {
        // Narrow counters keep the rank table in fewer cache lines.
        sort_sequential::<K, T, u32>(data, scratch);
    } else {
        sort_sequential::<K, T, usize>(data, scratch);
    }
}

/// Integer width used for histogram/rank tables.
///
/// `u32` covers every slice whose length fits the signed 32-bit range; longer
/// slices pay for full-width counters.
pub(crate) trait Counter: Copy + Default + AddAssign + SubAssign {
    const ONE: Self;

    fn to_index(self) -> usize;
}

impl Counter for u32 {
    const ONE: u32 = 1;

    #[inline(always)]
    fn to_index(self) -> usize {
        self as usize
    }
}

impl Counter for usize {
    const ONE: usize = 1;

    #[inline(always)]
    fn to_index(self) -> usize {
        self
    }
}

/// Counting pass: `counts[v]` ends up as the number of elements in `src` whose
/// byte at position `digit` equals `v`.
///
/// The first `len % 4` elements are handled in a scalar prologue, the rest in
/// straight-line groups of four. The result is identical to a plain per-element
/// loop.
#[inline]
pub(crate) fn count_pass<K, T, C>(src: &[T], digit: usize, counts: &mut [C; RADIX_BUCKETS])
where
    K: RadixKey<T>,
    C: Counter,
{
    let (head, body) = src.split_at(src.len() % 4);
    for item in head {
        counts[K::byte_at(item, digit) as usize] += C::ONE;
    }
    for quad in body.chunks_exact(4) {
        counts[K::byte_at(&quad[0], digit) as usize] += C::ONE;
        counts[K::byte_at(&quad[1], digit) as usize] += C::ONE;
        counts[K::byte_at(&quad[2], digit) as usize] += C::ONE;
        counts[K::byte_at(&quad[3], digit) as usize] += C::ONE;
    }
}

/// In-place running total, turning a histogram into a rank table:
/// `counts[v]` becomes the number of elements whose byte is `<= v`.
#[inline]
pub(crate) fn prefix_sum<C: Counter>(counts: &mut [C; RADIX_BUCKETS]) {
    for v in 1..RADIX_BUCKETS {
        let previous = counts[v - 1];
        counts[v] += previous;
    }
}

/// Stable scatter pass against a rank table, writing through a raw destination
/// pointer.
///
/// Elements are visited from the last index down to the first; each visit
/// decrements `counts[byte]` and writes at the decremented offset. Among equal
/// bytes the smaller source index therefore receives the smaller destination
/// index, which is what makes the sort stable. Batching mirrors [`count_pass`]:
/// groups of four from the top, the `len % 4` leftover last.
///
/// # Safety
///
/// Every offset the rank table produces (each `counts[v]` decremented down to
/// the start of bucket `v`) must be a valid index into the allocation behind
/// `dst`, and no other thread may write those destination slots during the call.
pub(crate) unsafe fn place_pass_raw<K, T, C>(
    src: &[T],
    dst: *mut T,
    digit: usize,
    counts: &mut [C; RADIX_BUCKETS],
) where
    K: RadixKey<T>,
    T: Copy,
    C: Counter,
{
    let (head, body) = src.split_at(src.len() % 4);
    for quad in body.rchunks_exact(4) {
        unsafe {
            place_one::<K, T, C>(&quad[3], dst, digit, counts);
            place_one::<K, T, C>(&quad[2], dst, digit, counts);
            place_one::<K, T, C>(&quad[1], dst, digit, counts);
            place_one::<K, T, C>(&quad[0], dst, digit, counts);
        }
    }
    for item in head.iter().rev() {
        unsafe { place_one::<K, T, C>(item, dst, digit, counts) };
    }
}

#[inline(always)]
unsafe fn place_one<K, T, C>(item: &T, dst: *mut T, digit: usize, counts: &mut [C; RADIX_BUCKETS])
where
    K: RadixKey<T>,
    T: Copy,
    C: Counter,
{
    let byte = K::byte_at(item, digit) as usize;
    counts[byte] -= C::ONE;
    unsafe { dst.add(counts[byte].to_index()).write(*item) };
}

/// Stable scatter from `src` into `dst` against a rank table built from `src`.
#[inline]
pub(crate) fn place_pass<K, T, C>(
    src: &[T],
    dst: &mut [T],
    digit: usize,
    counts: &mut [C; RADIX_BUCKETS],
) where
    K: RadixKey<T>,
    T: Copy,
    C: Counter,
{
    debug_assert!(dst.len() >= src.len());
    // SAFETY: `counts` is the prefix-summed histogram of `src`, so every
    // decremented offset lies in `0..src.len()`, in bounds for `dst`, and this
    // thread has exclusive access to `dst`.
    unsafe { place_pass_raw::<K, T, C>(src, dst.as_mut_ptr(), digit, counts) }
}

/// Sequential driver: one counting/scatter round per key byte, alternating the
/// roles of `data` and `scratch`. An odd byte count leaves the result in
/// `scratch`, so a final copy moves it back.
fn sort_sequential<K, T, C>(data: &mut [T], scratch: &mut [T])
where
    K: RadixKey<T>,
    T: Copy,
    C: Counter,
{
    for digit in 0..K::RADIX_SIZE {
        let mut counts = [C::default(); RADIX_BUCKETS];
        if digit % 2 == 0 {
            count_pass::<K, T, C>(data, digit, &mut counts);
            prefix_sum(&mut counts);
            place_pass::<K, T, C>(data, scratch, digit, &mut counts);
        } else {
            count_pass::<K, T, C>(scratch, digit, &mut counts);
            prefix_sum(&mut counts);
            place_pass::<K, T, C>(scratch, data, digit, &mut counts);
        }
    }
    if K::RADIX_SIZE % 2 == 1 {
        data.copy_from_slice(scratch);
    }
}
