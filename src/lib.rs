#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bitmap;
pub mod hash;
pub mod iter;
pub mod primes;
mod slot;

/// A multi-value hash table over a prime-sized slot array.
///
/// This module provides [`AssociativeTable`], which resolves collisions with
/// short chains threaded through its own array, and grows through the
/// capacities in [`primes::PRIMES`].
pub mod table;

pub use bitmap::OccupancyBitmap;
pub use iter::Cursor;
pub use table::AssociativeTable;
