//! Core traits and types for Raxsort.
//!
//! This module defines:
//! - [`RadixKey`]: the byte-key scheme trait users implement to sort custom types.
//! - [`Ascending`] / [`Descending`]: the built-in key schemes.
//! - [`Execution`]: sequential vs. parallel driver selection.

use std::marker::PhantomData;
use std::mem;

/// A byte-key scheme: maps values of `T` to a fixed-width sequence of ordering bytes.
///
/// A scheme is a zero-sized marker type, not the element type itself, so the same
/// `T` can be sorted under different orderings ([`Ascending`], [`Descending`], or a
/// caller-defined composite key) without wrapping the elements.
///
/// # Contract
///
/// The scheme yields `RADIX_SIZE` bytes per value, where index `0` is the *least*
/// significant ordering byte. For any two values `a` and `b`, comparing the byte
/// sequences from index `RADIX_SIZE - 1` down to `0` lexicographically must agree
/// with the intended ordering of `a` and `b`. The engine only ever calls
/// [`byte_at`](Self::byte_at) with `index < RADIX_SIZE`.
///
/// # Examples
///
/// Sorting a user struct by one of its fields, delegating the byte mapping to the
/// built-in scheme for that field's type:
///
/// ```
/// use raxsort::{sort_by, Ascending, RadixKey};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Reading {
///     celsius: f32,
///     sensor: u32,
/// }
///
/// struct ByCelsius;
///
/// impl RadixKey<Reading> for ByCelsius {
///     const RADIX_SIZE: usize = <Ascending as RadixKey<f32>>::RADIX_SIZE;
///
///     fn byte_at(value: &Reading, index: usize) -> u8 {
///         <Ascending as RadixKey<f32>>::byte_at(&value.celsius, index)
///     }
/// }
///
/// let mut readings = vec![
///     Reading { celsius: 21.5, sensor: 7 },
///     Reading { celsius: -3.0, sensor: 2 },
///     Reading { celsius: 10.0, sensor: 9 },
/// ];
///
/// sort_by::<ByCelsius, _>(&mut readings);
///
/// assert_eq!(readings[0].sensor, 2);
/// assert_eq!(readings[2].sensor, 7);
/// ```
pub trait RadixKey<T> {
    /// Number of ordering bytes per value.
    const RADIX_SIZE: usize;

    /// Returns ordering byte `index` of `value`, with `index < RADIX_SIZE` and
    /// index `0` the least significant.
    fn byte_at(value: &T, index: usize) -> u8;
}

/// The default key scheme: natural ascending order.
///
/// Implemented for all primitive integers, `f32`/`f64`, raw pointers, and
/// two-component tuples of supported types. Attempting to sort any other type
/// fails to compile with an unsatisfied `RadixKey` bound naming the type.
pub struct Ascending;

/// Wrapper scheme inverting the order of any base scheme.
///
/// Every extracted byte is complemented (`255 - byte`), so the underlying value
/// representation is untouched. `Descending` alone means `Descending<Ascending>`.
///
/// # Examples
///
/// ```
/// use raxsort::{sort_by, Descending};
///
/// let mut data: Vec<u16> = vec![2, 3, 1];
/// sort_by::<Descending, _>(&mut data);
///
/// assert_eq!(data, vec![3, 2, 1]);
/// ```
pub struct Descending<K = Ascending> {
    _base: PhantomData<K>,
}

impl<T, K: RadixKey<T>> RadixKey<T> for Descending<K> {
    const RADIX_SIZE: usize = K::RADIX_SIZE;

    #[inline(always)]
    fn byte_at(value: &T, index: usize) -> u8 {
        255 - K::byte_at(value, index)
    }
}

/// Execution mode for [`sort_with`](crate::sort_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// Single-threaded driver.
    #[default]
    Sequential,
    /// Multi-worker driver; worker count taken from the rayon pool size.
    Parallel,
    /// Multi-worker driver with an explicit upper bound on the worker count.
    ParallelWith(usize),
}

// Bytes are extracted with shifts and masks rather than by reinterpreting the
// value's memory, so the mapping is endianness-independent.
macro_rules! unsigned_radix_key {
    ($($t:ty)*) => ($(
        impl RadixKey<$t> for Ascending {
            const RADIX_SIZE: usize = mem::size_of::<$t>();

            #[inline(always)]
            fn byte_at(value: &$t, index: usize) -> u8 {
                debug_assert!(index < mem::size_of::<$t>());
                (*value >> (index * 8)) as u8
            }
        }
    )*)
}

unsigned_radix_key! { u8 u16 u32 u64 u128 usize }

// Signed integers reinterpret as the unsigned twin with the sign bit flipped, so
// negatives order below positives while each sign keeps its relative order.
macro_rules! signed_radix_key {
    ($(($t:ty, $u:ty))*) => ($(
        impl RadixKey<$t> for Ascending {
            const RADIX_SIZE: usize = mem::size_of::<$t>();

            #[inline(always)]
            fn byte_at(value: &$t, index: usize) -> u8 {
                debug_assert!(index < mem::size_of::<$t>());
                let flipped = (*value as $u) ^ ((1 as $u) << (<$t>::BITS - 1));
                (flipped >> (index * 8)) as u8
            }
        }
    )*)
}

signed_radix_key! { (i8, u8) (i16, u16) (i32, u32) (i64, u64) (i128, u128) (isize, usize) }

// IEEE 754 monotonic mapping, branch-reduced: an arithmetic shift turns the sign
// bit into an all-ones mask, so negatives are fully complemented and everything
// else only gets the sign bit flipped. NaN bit patterns map deterministically but
// their position relative to numeric values is unspecified.
impl RadixKey<f32> for Ascending {
    const RADIX_SIZE: usize = mem::size_of::<f32>();

    #[inline(always)]
    fn byte_at(value: &f32, index: usize) -> u8 {
        debug_assert!(index < mem::size_of::<f32>());
        let bits = value.to_bits();
        let mapped = bits ^ ((((bits as i32) >> 31) as u32) | 0x8000_0000);
        (mapped >> (index * 8)) as u8
    }
}

impl RadixKey<f64> for Ascending {
    const RADIX_SIZE: usize = mem::size_of::<f64>();

    #[inline(always)]
    fn byte_at(value: &f64, index: usize) -> u8 {
        debug_assert!(index < mem::size_of::<f64>());
        let bits = value.to_bits();
        let mapped = bits ^ ((((bits as i64) >> 63) as u64) | 0x8000_0000_0000_0000);
        (mapped >> (index * 8)) as u8
    }
}

// Pointers order by address, reinterpreted as a platform-width unsigned integer.
impl<U> RadixKey<*const U> for Ascending {
    const RADIX_SIZE: usize = mem::size_of::<usize>();

    #[inline(always)]
    fn byte_at(value: &*const U, index: usize) -> u8 {
        debug_assert!(index < mem::size_of::<usize>());
        ((*value as usize) >> (index * 8)) as u8
    }
}

impl<U> RadixKey<*mut U> for Ascending {
    const RADIX_SIZE: usize = mem::size_of::<usize>();

    #[inline(always)]
    fn byte_at(value: &*mut U, index: usize) -> u8 {
        debug_assert!(index < mem::size_of::<usize>());
        ((*value as usize) >> (index * 8)) as u8
    }
}

// Tuples concatenate component keys: the low indices come from the second
// component, the high indices from the first, so the first component dominates
// the final ordering and the second breaks ties.
impl<A, B> RadixKey<(A, B)> for Ascending
where
    Ascending: RadixKey<A> + RadixKey<B>,
{
    const RADIX_SIZE: usize =
        <Ascending as RadixKey<A>>::RADIX_SIZE + <Ascending as RadixKey<B>>::RADIX_SIZE;

    #[inline(always)]
    fn byte_at(value: &(A, B), index: usize) -> u8 {
        debug_assert!(index < <Ascending as RadixKey<(A, B)>>::RADIX_SIZE);
        let low = <Ascending as RadixKey<B>>::RADIX_SIZE;
        if index < low {
            <Ascending as RadixKey<B>>::byte_at(&value.1, index)
        } else {
            <Ascending as RadixKey<A>>::byte_at(&value.0, index - low)
        }
    }
}
