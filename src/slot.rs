use core::mem::MaybeUninit;

/// One cell of a table's backing array.
///
/// A slot does not know whether it is occupied; the owning table's occupancy
/// bitmap does. Every accessor touching the payload is therefore `unsafe` and
/// requires the caller to have checked that bit.
///
/// `next` is an index into the same array, never an owning link.
pub(crate) struct Slot<T> {
    data: MaybeUninit<T>,
    hash: u64,
    next: Option<usize>,
}

impl<T> Slot<T> {
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        Self {
            data: MaybeUninit::uninit(),
            hash: 0,
            next: None,
        }
    }

    #[inline(always)]
    pub(crate) fn hash(&self) -> u64 {
        self.hash
    }

    #[inline(always)]
    pub(crate) fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline(always)]
    pub(crate) fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    /// Fills the slot. Any previous payload is overwritten without being
    /// dropped, so the slot must be vacant (or already taken from).
    #[inline(always)]
    pub(crate) fn write(&mut self, data: T, hash: u64, next: Option<usize>) {
        self.data.write(data);
        self.hash = hash;
        self.next = next;
    }

    /// Moves the payload out and resets the metadata.
    ///
    /// # Safety
    ///
    /// The payload must be initialized. It is logically uninitialized
    /// afterwards.
    #[inline(always)]
    pub(crate) unsafe fn take(&mut self) -> T {
        self.hash = 0;
        self.next = None;
        // SAFETY: Caller guarantees the payload is initialized.
        unsafe { self.data.assume_init_read() }
    }

    /// # Safety
    ///
    /// The payload must be initialized.
    #[inline(always)]
    pub(crate) unsafe fn data(&self) -> &T {
        // SAFETY: Caller guarantees the payload is initialized.
        unsafe { self.data.assume_init_ref() }
    }

    /// # Safety
    ///
    /// The payload must be initialized.
    #[inline(always)]
    pub(crate) unsafe fn data_mut(&mut self) -> &mut T {
        // SAFETY: Caller guarantees the payload is initialized.
        unsafe { self.data.assume_init_mut() }
    }

    /// Drops the payload in place (if `T` has drop glue) and resets the
    /// metadata.
    ///
    /// # Safety
    ///
    /// The payload must be initialized. It is logically uninitialized
    /// afterwards.
    #[inline(always)]
    pub(crate) unsafe fn drop_data(&mut self) {
        if core::mem::needs_drop::<T>() {
            // SAFETY: Caller guarantees the payload is initialized.
            unsafe { self.data.assume_init_drop() };
        }
        self.hash = 0;
        self.next = None;
    }

    /// Clones an occupied slot. Hash and link are copied verbatim; the link is
    /// not followed.
    ///
    /// # Safety
    ///
    /// The payload must be initialized.
    pub(crate) unsafe fn clone_occupied(&self) -> Self
    where
        T: Clone,
    {
        Self {
            // SAFETY: Caller guarantees the payload is initialized.
            data: MaybeUninit::new(unsafe { self.data() }.clone()),
            hash: self.hash,
            next: self.next,
        }
    }
}
