//! A growable bit vector used to track which cells of a slot array are live.

use alloc::vec::Vec;
use core::fmt::Debug;

const WORD_BITS: usize = u64::BITS as usize;

#[inline(always)]
fn location(index: usize) -> (usize, u64) {
    (index / WORD_BITS, 1u64 << (index % WORD_BITS))
}

/// One bit per array index, `false` by default.
///
/// Reads and writes are bounded by [`len`](OccupancyBitmap::len). Indexing past
/// the end is interface misuse and is caught by a debug assertion only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OccupancyBitmap {
    words: Vec<u64>,
    len: usize,
}

impl Debug for OccupancyBitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        for index in 0..self.len {
            list.entry(&(self.get(index) as u8));
        }
        list.finish()
    }
}

impl OccupancyBitmap {
    /// Creates an empty bitmap without allocating.
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates a bitmap holding `len` bits, all `false`.
    pub fn with_len(len: usize) -> Self {
        let mut bitmap = Self::new();
        bitmap.reserve(len);
        bitmap
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bitmap addresses no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grows the bitmap to hold at least `len` bits. New bits are `false`.
    ///
    /// Never shrinks.
    pub fn reserve(&mut self, len: usize) {
        if len <= self.len {
            return;
        }

        self.words.resize(len.div_ceil(WORD_BITS), 0);
        self.len = len;
    }

    /// Reads bit `index`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "bitmap index out of range: {index} >= {}",
            self.len
        );
        let (word, mask) = location(index);
        self.words[word] & mask != 0
    }

    /// Writes bit `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(
            index < self.len,
            "bitmap index out of range: {index} >= {}",
            self.len
        );
        let (word, mask) = location(index);
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
    }

    /// Zeroes every bit, keeping the buffer allocated.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Zeroes the bitmap and releases its buffer.
    pub fn clear_destructive(&mut self) {
        self.words = Vec::new();
        self.len = 0;
    }

    /// Counts the `true` bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Finds the lowest `false` bit, if any.
    pub fn first_unset(&self) -> Option<usize> {
        for (i, &word) in self.words.iter().enumerate() {
            if word != u64::MAX {
                let index = i * WORD_BITS + word.trailing_ones() as usize;
                // Bits past `len` in the last word are always zero, so the
                // first zero found there means the bitmap is full.
                return (index < self.len).then_some(index);
            }
        }

        None
    }

    /// Finds the lowest `true` bit at or after `from`.
    pub fn next_set(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }

        let (mut word_index, _) = location(from);
        let mut word = self.words[word_index] & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                let index = word_index * WORD_BITS + word.trailing_zeros() as usize;
                return (index < self.len).then_some(index);
            }

            word_index += 1;
            if word_index == self.words.len() {
                return None;
            }
            word = self.words[word_index];
        }
    }

    /// Finds the highest `true` bit strictly before `before`.
    pub fn prev_set(&self, before: usize) -> Option<usize> {
        let end = before.min(self.len);
        if end == 0 {
            return None;
        }

        let last = end - 1;
        let (mut word_index, _) = location(last);
        let shift = WORD_BITS - 1 - last % WORD_BITS;
        let mut word = self.words[word_index] & (u64::MAX >> shift);
        loop {
            if word != 0 {
                let bit = WORD_BITS - 1 - word.leading_zeros() as usize;
                return Some(word_index * WORD_BITS + bit);
            }

            if word_index == 0 {
                return None;
            }
            word_index -= 1;
            word = self.words[word_index];
        }
    }
}
