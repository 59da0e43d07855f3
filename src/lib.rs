//! # Raxsort
//!
//! `raxsort` is a stable, in-place, least-significant-byte-first radix sort for
//! slices of fixed-width keys: integers, floating point, pointers, pairs, and
//! user structs.
//!
//! Instead of comparing elements, it makes one counting pass and one scatter
//! pass per key byte, so sorting large slices costs O(N · key bytes) regardless
//! of the input distribution, typically well ahead of comparison sorts once
//! slices stop fitting in cache.
//!
//! ## Key Features
//!
//! - **Stable**: elements with equal keys keep their relative order.
//! - **Pluggable orderings**: the [`RadixKey`] scheme trait maps any type to a
//!   fixed sequence of ordering bytes; [`Ascending`] covers the primitives and
//!   two-component tuples, [`Descending`] inverts any scheme, and caller-defined
//!   schemes compose them for custom structs.
//! - **Parallel execution**: [`par_sort`] splits the slice into per-worker
//!   chunks, counts concurrently, and scatters into disjoint destination ranges
//!   with no locking; output is bit-identical to the sequential driver.
//! - **Caller-controlled scratch**: the one length-N scratch buffer can be
//!   supplied by the caller via [`sort_with`] and reused across calls.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! let mut data = vec![5, 3, 2, 6, 3];
//! raxsort::sort(&mut data);
//!
//! assert_eq!(data, vec![2, 3, 3, 5, 6]);
//! ```
//!
//! ### Custom Orderings
//!
//! Schemes are marker types, selected with a turbofish:
//!
//! ```rust
//! use raxsort::{sort_by, Descending};
//!
//! let mut data = vec![1.5f64, -0.5, 3.25];
//! sort_by::<Descending, _>(&mut data);
//!
//! assert_eq!(data, vec![3.25, 1.5, -0.5]);
//! ```
//!
//! To sort your own types, implement [`RadixKey`] on a marker type and delegate
//! byte extraction to the built-in schemes of the key fields; see the trait docs
//! for a worked example.
//!
//! ### Parallel Sorting
//!
//! ```rust
//! use raxsort::{sort_with, Ascending, Execution};
//!
//! let mut data: Vec<u32> = (0..100_000u32).rev().collect();
//! sort_with::<Ascending, _>(&mut data, None, Execution::Parallel);
//!
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! Worker count defaults to the rayon pool size; `Execution::ParallelWith(n)`
//! caps it per call. Slices too small to amortize the fork overhead fall back to
//! the sequential driver automatically. Elements must be `Send + Sync` to cross
//! the parallel surface, so raw-pointer keys sort through the sequential entry
//! points.
//!
//! ## Performance Characteristics
//!
//! - **Cost**: `RADIX_SIZE` counting + scatter rounds over the slice, i.e.
//!   O(N · key width); no comparison-sort worst cases.
//! - **Memory overhead**: one scratch buffer of the input's length (engine- or
//!   caller-owned), plus 256 counters per active worker.
//! - **Floating point**: total order over all numeric values with negatives
//!   first; NaN placement is deterministic but unspecified.
//!
//! The sequential and parallel drivers produce identical output, so execution
//! mode is purely a throughput decision.

pub mod algo;
pub mod core;
mod parallel;

pub use algo::{par_sort, par_sort_by, sort, sort_by, sort_with};
pub use core::{Ascending, Descending, Execution, RadixKey};

pub mod prelude {
    pub use crate::algo::{par_sort, par_sort_by, sort, sort_by, sort_with};
    pub use crate::core::{Ascending, Descending, Execution, RadixKey};
}
