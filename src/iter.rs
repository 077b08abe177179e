//! Iteration over the occupied slots of an [`AssociativeTable`].
//!
//! All iterators walk the backing array in slot order, using the occupancy
//! bitmap to skip vacant cells in either direction. Slot order has no
//! relation to insertion order.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::bitmap::OccupancyBitmap;
use crate::slot::Slot;
use crate::table::AssociativeTable;
use crate::table::KeyEntry;

/// Reads the occupant of slot `index`.
///
/// # Safety
///
/// `occupied.get(index)` must be `true`.
#[inline(always)]
unsafe fn occupant<K, V>(slots: &[Slot<KeyEntry<K, V>>], index: usize) -> (&K, &[V]) {
    // SAFETY: Caller guarantees the slot is occupied, so its payload is
    // initialized.
    let entry = unsafe { slots[index].data() };
    (&entry.key, &entry.values)
}

/// An iterator over the `(key, values)` pairs of an [`AssociativeTable`].
///
/// This struct is created by the [`iter`] method on [`AssociativeTable`].
///
/// [`iter`]: AssociativeTable::iter
///
/// # Examples
///
/// ```rust
/// use prime_chain::AssociativeTable;
///
/// let mut table = AssociativeTable::new();
/// table.insert("a", 1);
/// table.insert("b", 2);
/// table.insert("a", 3);
///
/// let total: i32 = table.iter().flat_map(|(_, values)| values).sum();
/// assert_eq!(total, 6);
///
/// let backwards: Vec<_> = table.iter().rev().map(|(k, _)| *k).collect();
/// let mut forwards: Vec<_> = table.iter().map(|(k, _)| *k).collect();
/// forwards.reverse();
/// assert_eq!(backwards, forwards);
/// ```
pub struct Iter<'a, K, V> {
    slots: &'a [Slot<KeyEntry<K, V>>],
    occupied: &'a OccupancyBitmap,
    // Candidate positions still to visit are `front..back`.
    front: usize,
    back: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(slots: &'a [Slot<KeyEntry<K, V>>], occupied: &'a OccupancyBitmap) -> Self {
        Self {
            slots,
            occupied,
            front: 0,
            back: slots.len(),
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        match self.occupied.next_set(self.front) {
            Some(index) if index < self.back => {
                self.front = index + 1;
                // SAFETY: `next_set` only returns occupied indices.
                Some(unsafe { occupant(self.slots, index) })
            }
            _ => {
                self.front = self.back;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back.saturating_sub(self.front)))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        match self.occupied.prev_set(self.back) {
            Some(index) if index >= self.front => {
                self.back = index;
                // SAFETY: `prev_set` only returns occupied indices.
                Some(unsafe { occupant(self.slots, index) })
            }
            _ => {
                self.back = self.front;
                None
            }
        }
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of an [`AssociativeTable`].
///
/// This struct is created by the [`keys`] method on [`AssociativeTable`].
///
/// [`keys`]: AssociativeTable::keys
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the value lists of an [`AssociativeTable`], one slice per
/// key.
///
/// This struct is created by the [`values`] method on [`AssociativeTable`].
///
/// [`values`]: AssociativeTable::values
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a [V];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A draining iterator over the entries of an [`AssociativeTable`].
///
/// This struct is created by the [`drain`] method on [`AssociativeTable`].
/// Dropping it removes whatever entries were not yet yielded.
///
/// [`drain`]: AssociativeTable::drain
pub struct Drain<'a, K, V, S> {
    table: &'a mut AssociativeTable<K, V, S>,
    index: usize,
}

impl<'a, K, V, S> Drain<'a, K, V, S> {
    pub(crate) fn new(table: &'a mut AssociativeTable<K, V, S>) -> Self {
        table.unlink_chains();
        Self { table, index: 0 }
    }
}

impl<K, V, S> Iterator for Drain<'_, K, V, S> {
    type Item = (K, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, entry) = self.table.take_next(self.index)?;
        self.index = index + 1;
        Some((entry.key, entry.values))
    }
}

impl<K, V, S> FusedIterator for Drain<'_, K, V, S> {}

impl<K, V, S> Drop for Drain<'_, K, V, S> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

/// An owning iterator over the entries of an [`AssociativeTable`].
///
/// This struct is created by the `into_iter` method on [`AssociativeTable`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
///
/// ```rust
/// use prime_chain::AssociativeTable;
///
/// let mut table = AssociativeTable::new();
/// table.insert("k", 1);
/// table.insert("k", 2);
///
/// let entries: Vec<(&str, Vec<i32>)> = table.into_iter().collect();
/// assert_eq!(entries, vec![("k", vec![1, 2])]);
/// ```
pub struct IntoIter<K, V, S> {
    table: AssociativeTable<K, V, S>,
    index: usize,
}

impl<K, V, S> IntoIter<K, V, S> {
    pub(crate) fn new(mut table: AssociativeTable<K, V, S>) -> Self {
        table.unlink_chains();
        Self { table, index: 0 }
    }
}

impl<K, V, S> Iterator for IntoIter<K, V, S> {
    type Item = (K, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, entry) = self.table.take_next(self.index)?;
        self.index = index + 1;
        Some((entry.key, entry.values))
    }
}

impl<K, V, S> FusedIterator for IntoIter<K, V, S> {}

/// A position in an [`AssociativeTable`]'s slot array.
///
/// A cursor always rests either on an occupied slot or on the end position,
/// one past the last slot. Moving past either end of the occupied range lands
/// on the end position, and moving from the end position wraps around to the
/// opposite end, so the end acts as a "ghost" element joining the two ends.
///
/// Two cursors are equal only if they point into the same table at the same
/// slot.
///
/// # Examples
///
/// ```rust
/// use prime_chain::AssociativeTable;
///
/// let mut table = AssociativeTable::new();
/// table.insert(10, "x");
/// table.insert(20, "y");
///
/// let mut cursor = table.cursor_front();
/// let mut seen = 0;
/// while cursor != table.cursor_end() {
///     assert!(cursor.get().is_some());
///     seen += 1;
///     cursor.move_next();
/// }
/// assert_eq!(seen, 2);
/// ```
pub struct Cursor<'a, K, V, S> {
    table: &'a AssociativeTable<K, V, S>,
    index: usize,
}

impl<'a, K, V, S> Cursor<'a, K, V, S> {
    pub(crate) fn front(table: &'a AssociativeTable<K, V, S>) -> Self {
        let index = table.occupied.next_set(0).unwrap_or(table.capacity());
        Self { table, index }
    }

    pub(crate) fn back(table: &'a AssociativeTable<K, V, S>) -> Self {
        let index = table
            .occupied
            .prev_set(table.capacity())
            .unwrap_or(table.capacity());
        Self { table, index }
    }

    pub(crate) fn end(table: &'a AssociativeTable<K, V, S>) -> Self {
        Self {
            table,
            index: table.capacity(),
        }
    }

    /// Returns the slot index the cursor points at, or the table's capacity at
    /// the end position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` at the end position.
    pub fn is_end(&self) -> bool {
        self.index >= self.table.capacity()
    }

    /// Returns the entry under the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<(&'a K, &'a [V])> {
        if self.is_end() {
            return None;
        }

        debug_assert!(self.table.occupied.get(self.index));
        // SAFETY: Cursors only rest on occupied slots or the end, and the table
        // cannot change while it is borrowed.
        Some(unsafe { occupant(&self.table.slots, self.index) })
    }

    /// Advances to the next occupied slot, or to the end position.
    pub fn move_next(&mut self) {
        let from = if self.is_end() { 0 } else { self.index + 1 };
        self.index = self
            .table
            .occupied
            .next_set(from)
            .unwrap_or(self.table.capacity());
    }

    /// Steps back to the previous occupied slot, or to the end position.
    pub fn move_prev(&mut self) {
        self.index = self
            .table
            .occupied
            .prev_set(self.index)
            .unwrap_or(self.table.capacity());
    }
}

impl<K, V, S> Clone for Cursor<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for Cursor<'_, K, V, S> {}

impl<K, V, S> PartialEq for Cursor<'_, K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.table, other.table) && self.index == other.index
    }
}

impl<K, V, S> Eq for Cursor<'_, K, V, S> {}

impl<K, V, S> Debug for Cursor<'_, K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("end", &self.is_end())
            .finish()
    }
}
