use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::bitmap::OccupancyBitmap;
use crate::hash::DefaultHashBuilder;
use crate::iter::Cursor;
use crate::iter::Drain;
use crate::iter::IntoIter;
use crate::iter::Iter;
use crate::iter::Keys;
use crate::iter::Values;
use crate::primes;
use crate::slot::Slot;

/// Stored hashes keep the top bit clear so they are always usable as a
/// non-negative modulus.
const HASH_MASK: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// Once any chain has this many links, the next insertion rehashes into a
/// larger array.
const MAX_CHAIN_LEN: usize = 2;

/// The payload of an occupied slot: one key and every value stored under it.
#[derive(Clone)]
pub(crate) struct KeyEntry<K, V> {
    pub(crate) key: K,
    pub(crate) values: Vec<V>,
}

fn allocate_slots<T>(capacity: usize) -> Box<[Slot<T>]> {
    core::iter::repeat_with(Slot::new).take(capacity).collect()
}

/// Debug statistics for table analysis.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of values currently stored
    pub populated: usize,
    /// Number of distinct keys currently stored
    pub keys: usize,
    /// Number of slots in the backing array
    pub capacity: usize,
    /// Number of slots currently occupied
    pub occupied_slots: usize,
    /// Number of occupied slots whose key hashes elsewhere
    pub displaced_slots: usize,
    /// Longest chain observed since the last rehash or clear
    pub max_chain_len: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Slot utilization (occupied_slots / capacity)
    pub slot_utilization: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Associative Table Debug Statistics ===");
        println!(
            "Population: {} values under {} keys ({:.2}% load factor)",
            self.populated,
            self.keys,
            self.load_factor * 100.0
        );
        println!(
            "Slot Usage: {}/{} ({:.2}% utilization)",
            self.occupied_slots,
            self.capacity,
            self.slot_utilization * 100.0
        );
        println!(
            "Displaced: {} slots, longest chain {}",
            self.displaced_slots, self.max_chain_len
        );
    }
}

/// A hash table mapping each key to an insertion-ordered list of values.
///
/// Entries live in a single prime-sized array of slots. A key whose home slot
/// (`hash % capacity`) is taken by another key is stored in the first free
/// slot of the array and linked from its home slot, forming a short chain
/// inside the array. Two bitmaps track which slots are occupied and which
/// occupants sit away from their home slot; there are no tombstones.
///
/// Chains are kept short by rehashing into the next capacity from
/// [`primes::PRIMES`] as soon as any chain reaches two links, or once the
/// number of stored values reaches the capacity.
///
/// [`len`](AssociativeTable::len) counts values, not keys: a key holding three
/// values contributes three.
///
/// ## Example
///
/// ```rust
/// use prime_chain::AssociativeTable;
///
/// let mut table = AssociativeTable::new();
/// table.insert("fruit", "apple");
/// table.insert("fruit", "pear");
/// table.insert("veg", "leek");
///
/// assert_eq!(table.get(&"fruit"), Some(&["apple", "pear"][..]));
/// assert_eq!(table.len(), 3);
/// ```
pub struct AssociativeTable<K, V, S = DefaultHashBuilder> {
    pub(crate) slots: Box<[Slot<KeyEntry<K, V>>]>,
    pub(crate) occupied: OccupancyBitmap,
    displaced: OccupancyBitmap,

    populated: usize,
    max_chain_len: usize,

    hash_builder: S,
}

impl<K, V, S> Debug for AssociativeTable<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, &v);
        }
        map.finish()
    }
}

impl<K, V, S> Clone for AssociativeTable<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        let mut slots = allocate_slots(self.capacity());
        let mut index = self.occupied.next_set(0);
        while let Some(i) = index {
            // SAFETY: The occupancy bit is set, so the payload is initialized.
            slots[i] = unsafe { self.slots[i].clone_occupied() };
            index = self.occupied.next_set(i + 1);
        }

        Self {
            slots,
            occupied: self.occupied.clone(),
            displaced: self.displaced.clone(),
            populated: self.populated,
            max_chain_len: self.max_chain_len,
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<K, V, S> Drop for AssociativeTable<K, V, S> {
    fn drop(&mut self) {
        self.drop_entries();
    }
}

impl<K, V, S> AssociativeTable<K, V, S> {
    /// Creates an empty table that will hash keys with `hash_builder`.
    ///
    /// Nothing is allocated until the first insertion.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            slots: Box::default(),
            occupied: OccupancyBitmap::new(),
            displaced: OccupancyBitmap::new(),
            populated: 0,
            max_chain_len: 0,
            hash_builder,
        }
    }

    /// Creates a table with room for at least `capacity` slots.
    ///
    /// The actual capacity is the next table prime, see
    /// [`primes::next_prime`]. A capacity of zero allocates nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    /// use prime_chain::hash::DefaultHashBuilder;
    ///
    /// let table: AssociativeTable<u32, u32> =
    ///     AssociativeTable::with_capacity_and_hasher(100, DefaultHashBuilder::default());
    /// assert_eq!(table.capacity(), 107);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let mut table = Self::with_hasher(hash_builder);
        table.ensure_capacity(capacity);
        table
    }

    /// Returns the number of values stored, summed over all keys.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of slots in the backing array.
    ///
    /// Always zero or one of [`primes::PRIMES`].
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the longest collision chain, in links, observed since the last
    /// rehash or clear.
    pub fn max_chain_len(&self) -> usize {
        self.max_chain_len
    }

    /// Returns a reference to the table's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Iterates over `(key, values)` pairs in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let table: AssociativeTable<_, _> = [(1, 'a'), (2, 'b'), (1, 'c')].into_iter().collect();
    /// let mut pairs: Vec<_> = table.iter().map(|(k, v)| (*k, v.to_vec())).collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(1, vec!['a', 'c']), (2, vec!['b'])]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slots, &self.occupied)
    }

    /// Iterates over the keys in slot order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Iterates over each key's values in slot order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Returns a cursor at the first occupied slot, or at the end if the table
    /// is empty.
    pub fn cursor_front(&self) -> Cursor<'_, K, V, S> {
        Cursor::front(self)
    }

    /// Returns a cursor at the last occupied slot, or at the end if the table
    /// is empty.
    pub fn cursor_back(&self) -> Cursor<'_, K, V, S> {
        Cursor::back(self)
    }

    /// Returns a cursor one past the last slot.
    pub fn cursor_end(&self) -> Cursor<'_, K, V, S> {
        Cursor::end(self)
    }

    /// Calls `f` once for every stored key with all of its values, in slot
    /// order.
    pub fn for_each(&self, mut f: impl FnMut(&K, &[V])) {
        for (key, values) in self.iter() {
            f(key, values);
        }
    }

    /// Calls `f` once for every stored key, in slot order.
    pub fn for_each_key(&self, mut f: impl FnMut(&K)) {
        for key in self.keys() {
            f(key);
        }
    }

    /// Calls `f` once for every key's values, in slot order.
    pub fn for_each_value(&self, mut f: impl FnMut(&[V])) {
        for values in self.values() {
            f(values);
        }
    }

    /// Grows the table so that it has at least `capacity` slots.
    ///
    /// The new capacity is [`primes::next_prime`] of the request, and every
    /// entry is rehashed into a fresh array. Does nothing if the table is
    /// already large enough. Requests beyond [`primes::MAX_PRIME`] stop at
    /// [`primes::MAX_PRIME`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let mut table: AssociativeTable<u64, u64> = AssociativeTable::new();
    /// assert_eq!(table.capacity(), 0);
    ///
    /// table.ensure_capacity(100);
    /// assert_eq!(table.capacity(), 107);
    ///
    /// table.ensure_capacity(10);
    /// assert_eq!(table.capacity(), 107);
    /// ```
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.resize(primes::next_prime(capacity));
        }
    }

    /// Removes every entry, keeping the backing array allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let mut table = AssociativeTable::new();
    /// table.insert(1, "one");
    /// let capacity = table.capacity();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert!(!table.contains_key(&1));
    /// assert_eq!(table.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.drop_entries();
        self.occupied.clear();
        self.displaced.clear();
        self.populated = 0;
        self.max_chain_len = 0;
    }

    /// Removes every entry and releases the backing array, returning the
    /// table to its unallocated state.
    pub fn clear_destructive(&mut self) {
        self.drop_entries();
        self.slots = Box::default();
        self.occupied.clear_destructive();
        self.displaced.clear_destructive();
        self.populated = 0;
        self.max_chain_len = 0;
    }

    fn drop_entries(&mut self) {
        let mut index = self.occupied.next_set(0);
        while let Some(i) = index {
            // SAFETY: The occupancy bit is set, so the payload is initialized.
            // Callers clear the bit (or the whole bitmap) afterwards.
            unsafe { self.slots[i].drop_data() };
            index = self.occupied.next_set(i + 1);
        }
    }

    #[inline(always)]
    fn home(&self, hash: u64) -> usize {
        debug_assert!(self.capacity() > 0);
        (hash % self.capacity() as u64) as usize
    }

    #[inline]
    #[cold]
    fn grow(&mut self) {
        self.resize(primes::next_prime(self.capacity() * 3 / 2));
    }

    /// Rehashes every entry into a fresh array of `capacity` slots.
    ///
    /// Only stored hashes are used, so no user code runs while entries are in
    /// flight.
    fn resize(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        debug_assert!(primes::is_table_prime(capacity));

        let mut old_slots = core::mem::replace(&mut self.slots, allocate_slots(capacity));
        let old_occupied =
            core::mem::replace(&mut self.occupied, OccupancyBitmap::with_len(capacity));
        self.displaced = OccupancyBitmap::with_len(capacity);
        self.max_chain_len = 0;

        let mut index = old_occupied.next_set(0);
        while let Some(i) = index {
            let slot = &mut old_slots[i];
            let hash = slot.hash();
            // SAFETY: The occupancy bit was set in the old array. Each old slot
            // is taken exactly once, and the old array never drops payloads.
            let entry = unsafe { slot.take() };

            // The new array is strictly larger than the number of keys, so
            // there is always a free slot.
            let placed = self.place(hash, entry);
            debug_assert!(placed.is_ok());

            index = old_occupied.next_set(i + 1);
        }
    }

    /// Stores `entry`, whose key must not already be present, and returns the
    /// slot it landed in.
    ///
    /// Hands the entry back if it needs an overflow slot and the array is
    /// full.
    fn place(&mut self, hash: u64, entry: KeyEntry<K, V>) -> Result<usize, KeyEntry<K, V>> {
        let home = self.home(hash);
        if !self.occupied.get(home) {
            self.slots[home].write(entry, hash, None);
            self.occupied.set(home, true);
            self.displaced.set(home, false);
            return Ok(home);
        }

        let Some(free) = self.occupied.first_unset() else {
            return Err(entry);
        };

        if self.displaced.get(home) {
            // The occupant belongs to another chain. Move it out of the way so
            // this key can own its home slot.
            self.evict(home, free);
            self.slots[home].write(entry, hash, None);
            self.occupied.set(home, true);
            self.displaced.set(home, false);
            return Ok(home);
        }

        self.link_tail(home, free, hash, entry);
        Ok(free)
    }

    /// Moves the displaced occupant of `index` to `free`, keeping it in its
    /// own chain. Leaves `index` vacant.
    fn evict(&mut self, index: usize, free: usize) {
        let hash = self.slots[index].hash();
        let root = self.home(hash);
        debug_assert_ne!(root, index);
        debug_assert!(!self.displaced.get(root));

        let mut prev = root;
        while let Some(next) = self.slots[prev].next() {
            if next == index {
                break;
            }
            prev = next;
        }
        debug_assert_eq!(self.slots[prev].next(), Some(index));

        let next = self.slots[index].next();
        self.slots[prev].set_next(next);

        // SAFETY: `index` is occupied, checked by the caller through the
        // displaced bit.
        let entry = unsafe { self.slots[index].take() };
        self.occupied.set(index, false);
        self.displaced.set(index, false);

        self.link_tail(root, free, hash, entry);
    }

    /// Writes `entry` into the vacant slot `free` and appends it to the chain
    /// rooted at `root`.
    fn link_tail(&mut self, root: usize, free: usize, hash: u64, entry: KeyEntry<K, V>) {
        debug_assert!(!self.occupied.get(free));

        let mut tail = root;
        let mut chain_len = 1;
        while let Some(next) = self.slots[tail].next() {
            tail = next;
            chain_len += 1;
        }

        self.slots[free].write(entry, hash, None);
        self.slots[tail].set_next(Some(free));
        self.occupied.set(free, true);
        self.displaced.set(free, true);
        self.max_chain_len = self.max_chain_len.max(chain_len);
    }

    /// Removes every entry, yielding each key with all of its values.
    ///
    /// The backing array stays allocated. Entries not consumed before the
    /// iterator is dropped are removed anyway.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let mut table = AssociativeTable::new();
    /// table.insert(1, 'a');
    /// table.insert(1, 'b');
    /// table.insert(2, 'c');
    ///
    /// let mut drained: Vec<_> = table.drain().collect();
    /// drained.sort();
    /// assert_eq!(drained, vec![(1, vec!['a', 'b']), (2, vec!['c'])]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V, S> {
        Drain::new(self)
    }

    /// Keeps only the keys for which `f` returns `true`.
    ///
    /// `f` sees each key once with its values, which it may edit in place.
    /// Removed keys drop all of their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let mut table: AssociativeTable<_, _> = (0..10).map(|k| (k, k * 10)).collect();
    /// table.retain(|k, _| k % 2 == 0);
    ///
    /// assert_eq!(table.len(), 5);
    /// assert!(table.contains_key(&4));
    /// assert!(!table.contains_key(&5));
    /// ```
    pub fn retain(&mut self, mut f: impl FnMut(&K, &mut [V]) -> bool) {
        let mut home = self.occupied.next_set(0);
        while let Some(root) = home {
            if !self.displaced.get(root) {
                let mut prev = None;
                let mut index = Some(root);
                while let Some(i) = index {
                    // SAFETY: Every slot reachable from an occupied home slot
                    // is occupied.
                    let entry = unsafe { self.slots[i].data_mut() };
                    if f(&entry.key, entry.values.as_mut_slice()) {
                        prev = Some(i);
                        index = self.slots[i].next();
                    } else {
                        // A successor, if any, is pulled into `i`.
                        let has_next = self.slots[i].next().is_some();
                        drop(self.remove_at(i, prev));
                        index = has_next.then_some(i);
                    }
                }
            }
            home = self.occupied.next_set(root + 1);
        }
    }

    /// Removes the entry at `index`, whose chain predecessor is `prev`.
    fn remove_at(&mut self, index: usize, prev: Option<usize>) -> KeyEntry<K, V> {
        let next = self.slots[index].next();
        // SAFETY: Callers pass an occupied slot.
        let entry = unsafe { self.slots[index].take() };

        match next {
            Some(successor) => {
                // Pull the successor forward. Its old position is the slot that
                // actually becomes vacant.
                let successor_hash = self.slots[successor].hash();
                let successor_next = self.slots[successor].next();
                // SAFETY: Chain members are occupied.
                let moved = unsafe { self.slots[successor].take() };
                self.slots[index].write(moved, successor_hash, successor_next);

                self.occupied.set(successor, false);
                self.displaced.set(successor, false);
            }
            None => {
                if let Some(prev) = prev {
                    self.slots[prev].set_next(None);
                }

                self.occupied.set(index, false);
                self.displaced.set(index, false);
            }
        }

        self.populated -= entry.values.len();
        entry
    }

    /// Cuts every chain so that occupied slots can be emptied in any order.
    ///
    /// Displaced entries become unreachable by key until they are taken.
    pub(crate) fn unlink_chains(&mut self) {
        let mut index = self.occupied.next_set(0);
        while let Some(i) = index {
            self.slots[i].set_next(None);
            index = self.occupied.next_set(i + 1);
        }
        self.max_chain_len = 0;
    }

    /// Takes the entry in the first occupied slot at or after `from`.
    ///
    /// Chains must have been cut with [`unlink_chains`](Self::unlink_chains).
    pub(crate) fn take_next(&mut self, from: usize) -> Option<(usize, KeyEntry<K, V>)> {
        let index = self.occupied.next_set(from)?;
        // SAFETY: The occupancy bit is set, so the payload is initialized.
        let entry = unsafe { self.slots[index].take() };
        self.occupied.set(index, false);
        self.displaced.set(index, false);
        self.populated -= entry.values.len();
        Some((index, entry))
    }

    /// Returns debug statistics about slot usage and chaining.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let capacity = self.capacity();
        let occupied_slots = self.occupied.count_ones();

        DebugStats {
            populated: self.populated,
            keys: occupied_slots,
            capacity,
            occupied_slots,
            displaced_slots: self.displaced.count_ones(),
            max_chain_len: self.max_chain_len,
            load_factor: if capacity == 0 {
                0.0
            } else {
                self.populated as f64 / capacity as f64
            },
            slot_utilization: if capacity == 0 {
                0.0
            } else {
                occupied_slots as f64 / capacity as f64
            },
        }
    }

    /// Counts chains by length. Index `n` holds the number of home slots whose
    /// chain currently has `n` links.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();

        let mut index = self.occupied.next_set(0);
        while let Some(i) = index {
            if !self.displaced.get(i) {
                let mut links = 0;
                let mut cursor = i;
                while let Some(next) = self.slots[cursor].next() {
                    cursor = next;
                    links += 1;
                }

                if hist.len() <= links {
                    hist.resize(links + 1, 0);
                }
                hist[links] += 1;
            }
            index = self.occupied.next_set(i + 1);
        }

        hist
    }
}

impl<K, V, S> AssociativeTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key) & HASH_MASK
    }

    /// Finds the slot holding `key` and its predecessor in the chain.
    fn locate(&self, hash: u64, key: &K) -> Option<(usize, Option<usize>)> {
        if self.capacity() == 0 {
            return None;
        }

        let home = self.home(hash);
        // A displaced occupant means no chain is rooted here, so the key cannot
        // be stored anywhere.
        if !self.occupied.get(home) || self.displaced.get(home) {
            return None;
        }

        let mut prev = None;
        let mut index = home;
        loop {
            let slot = &self.slots[index];
            // SAFETY: Every slot reachable from an occupied home slot is
            // occupied.
            if slot.hash() == hash && unsafe { &slot.data().key } == key {
                return Some((index, prev));
            }
            prev = Some(index);
            index = slot.next()?;
        }
    }

    /// Appends `value` to the values stored under `key`, adding the key if it
    /// is new.
    ///
    /// Returns `false` only when the key is new and the table is already at
    /// [`primes::MAX_PRIME`] capacity with no free slot; the value is dropped
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let mut table = AssociativeTable::new();
    /// assert!(table.insert(7, "a"));
    /// assert!(table.insert(7, "b"));
    /// assert_eq!(table.get(&7), Some(&["a", "b"][..]));
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.populated >= self.capacity() || self.max_chain_len >= MAX_CHAIN_LEN {
            self.grow();
        }

        let hash = self.hash_key(&key);
        if let Some((index, _)) = self.locate(hash, &key) {
            // SAFETY: `locate` only returns occupied slots.
            unsafe { self.slots[index].data_mut() }.values.push(value);
            self.populated += 1;
            return true;
        }

        let entry = KeyEntry {
            key,
            values: vec![value],
        };
        match self.place(hash, entry) {
            Ok(_) => {
                self.populated += 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the values stored under `key`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let mut table = AssociativeTable::new();
    /// assert_eq!(table.get(&"k"), None);
    ///
    /// table.insert("k", 1);
    /// assert_eq!(table.get(&"k"), Some(&[1][..]));
    /// ```
    pub fn get(&self, key: &K) -> Option<&[V]> {
        let (index, _) = self.locate(self.hash_key(key), key)?;
        // SAFETY: `locate` only returns occupied slots.
        Some(unsafe { &self.slots[index].data().values })
    }

    /// Returns the values stored under `key` for in-place modification.
    ///
    /// The number of values cannot change through the returned slice.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut [V]> {
        let (index, _) = self.locate(self.hash_key(key), key)?;
        // SAFETY: `locate` only returns occupied slots.
        Some(unsafe { &mut self.slots[index].data_mut().values })
    }

    /// Returns `true` if `key` has at least one value stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(self.hash_key(key), key).is_some()
    }

    /// Returns the physical slot index currently holding `key`.
    ///
    /// Indices change whenever the table rehashes or an entry in the same
    /// chain is removed.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.locate(self.hash_key(key), key).map(|(index, _)| index)
    }

    /// Removes `key` and returns all of its values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let mut table = AssociativeTable::new();
    /// table.insert(1, "a");
    /// table.insert(1, "b");
    ///
    /// assert_eq!(table.remove(&1), Some(vec!["a", "b"]));
    /// assert_eq!(table.remove(&1), None);
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<Vec<V>> {
        let (index, prev) = self.locate(self.hash_key(key), key)?;
        Some(self.remove_at(index, prev).values)
    }
}

impl<K, V> AssociativeTable<K, V, DefaultHashBuilder> {
    /// Creates an empty table using [`DefaultHashBuilder`].
    ///
    /// Nothing is allocated until the first insertion.
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a table with room for at least `capacity` slots using
    /// [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prime_chain::AssociativeTable;
    ///
    /// let table: AssociativeTable<u8, u8> = AssociativeTable::with_capacity(20);
    /// assert_eq!(table.capacity(), 23);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> Default for AssociativeTable<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for AssociativeTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for AssociativeTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut table =
            Self::with_capacity_and_hasher(iter.size_hint().0.max(primes::MIN_PRIME), S::default());
        table.extend(iter);
        table
    }
}

impl<'a, K, V, S> IntoIterator for &'a AssociativeTable<K, V, S> {
    type Item = (&'a K, &'a [V]);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for AssociativeTable<K, V, S> {
    type Item = (K, Vec<V>);
    type IntoIter = IntoIter<K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
