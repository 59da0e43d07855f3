//! Multi-worker driver.
//!
//! The input is split into contiguous, equal-width chunks (the last absorbs the
//! remainder), one per worker. Each key byte runs two parallel phases separated
//! by a single-threaded merge:
//!
//! 1. every chunk counts its own byte histogram into a private, cache-padded
//!    table;
//! 2. the merge turns the per-chunk histograms into per-chunk offset tables
//!    that carve the destination buffer into disjoint ranges, ordered first by
//!    byte value and then by chunk index, which preserves global stability;
//! 3. every chunk scatters into its own ranges of the shared destination, with
//!    no synchronization beyond the phase join.

use crate::algo::{RADIX_BUCKETS, count_pass, place_pass_raw};
use crate::core::RadixKey;
use cuneiform::cuneiform;
use rayon::prelude::*;

/// Minimum elements per worker before parallelism pays for itself.
const MIN_CHUNK_LEN: usize = 100_000;

/// Resolves the worker count for a parallel sort call.
///
/// `limit` overrides the rayon pool size; either way the count is scaled down
/// so no worker handles fewer than [`MIN_CHUNK_LEN`] elements. A result of 1
/// sends the call to the sequential driver.
pub(crate) fn worker_count(len: usize, limit: Option<usize>) -> usize {
    let pool = limit.unwrap_or_else(rayon::current_num_threads).max(1);
    pool.min((len / MIN_CHUNK_LEN).max(1))
}

// Cache-padded so concurrent workers never share a counter cache line.
#[cuneiform]
struct WorkerTable {
    data: [usize; RADIX_BUCKETS],
}

// Shared destination pointer for the scatter phase.
struct SharedDest<T>(*mut T);

// SAFETY: workers write disjoint index ranges of the destination, established
// by `merge_offsets`; the pointer itself is freely copyable across threads.
unsafe impl<T: Send> Send for SharedDest<T> {}
unsafe impl<T: Send> Sync for SharedDest<T> {}

/// Parallel driver. `workers` must be at least 2 and at most `data.len()`.
///
/// Buffer parity alternates per byte exactly as in the sequential driver, and
/// an odd byte count ends with the same copy-back from scratch.
pub(crate) fn sort_parallel<K, T>(data: &mut [T], scratch: &mut [T], workers: usize)
where
    K: RadixKey<T>,
    T: Copy + Send + Sync,
{
    let len = data.len();
    let chunk_len = len / workers;
    debug_assert!(workers >= 2 && chunk_len >= 1);

    for digit in 0..K::RADIX_SIZE {
        let (src, dst): (&[T], &mut [T]) = if digit % 2 == 0 {
            (&*data, &mut *scratch)
        } else {
            (&*scratch, &mut *data)
        };

        let mut tables: Vec<WorkerTable> = (0..workers)
            .into_par_iter()
            .map(|worker| {
                let begin = worker * chunk_len;
                let end = if worker + 1 == workers {
                    len
                } else {
                    begin + chunk_len
                };
                let mut table = WorkerTable {
                    data: [0; RADIX_BUCKETS],
                };
                count_pass::<K, T, usize>(&src[begin..end], digit, &mut table.data);
                table
            })
            .collect();

        merge_offsets(&mut tables);
        // The scatter decrements from end offsets downward. Chunk j's region
        // ends where chunk j + 1's begins, so chunk j needs table j + 1 (the
        // global boundary table, index 0, for the last chunk); one left
        // rotation lines table j up with chunk j.
        tables.rotate_left(1);

        let dest = SharedDest(dst.as_mut_ptr());
        tables
            .par_iter_mut()
            .enumerate()
            .for_each(|(worker, table)| {
                // Capture the wrapper itself, not its raw-pointer field.
                let dest = &dest;
                let begin = worker * chunk_len;
                let end = if worker + 1 == workers {
                    len
                } else {
                    begin + chunk_len
                };
                // SAFETY: after the merge, each (worker, byte value) pair owns
                // a destination range disjoint from every other worker's, all
                // within `0..len`; the phase join ends the writes before the
                // destination is read again.
                unsafe {
                    place_pass_raw::<K, T, usize>(&src[begin..end], dest.0, digit, &mut table.data)
                };
            });
    }

    if K::RADIX_SIZE % 2 == 1 {
        data.copy_from_slice(scratch);
    }
}

/// Turns per-chunk histograms into per-chunk write offsets.
///
/// After the suffix accumulation, table `j` counts each byte value over chunks
/// `j..workers`. The running total on table 0 then yields the global cumulative
/// boundaries (elements with byte `<= v` across all chunks), and subtracting
/// each remaining table from those boundaries leaves the start offset chunk `j`
/// owns inside every byte value's destination range. Lower-indexed chunks land
/// first within a byte value, matching the pre-split element order.
fn merge_offsets(tables: &mut [WorkerTable]) {
    let workers = tables.len();

    for j in (0..workers - 1).rev() {
        let (head, tail) = tables.split_at_mut(j + 1);
        let (current, next) = (&mut head[j], &tail[0]);
        for v in 0..RADIX_BUCKETS {
            current.data[v] += next.data[v];
        }
    }

    for v in 1..RADIX_BUCKETS {
        let previous = tables[0].data[v - 1];
        tables[0].data[v] += previous;
    }

    let (boundaries, rest) = tables.split_at_mut(1);
    let boundaries = &boundaries[0];
    for table in rest {
        for v in 0..RADIX_BUCKETS {
            table.data[v] = boundaries.data[v] - table.data[v];
        }
    }
}
