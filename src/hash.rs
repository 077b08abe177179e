//! Hasher selection for tables that do not supply their own
//! [`BuildHasher`](core::hash::BuildHasher).

use core::hash::Hasher;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is specified.
        ///
        /// `foldhash::fast::RandomState` with the `foldhash` feature.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is specified.
        ///
        /// `std::hash::RandomState` when `foldhash` is disabled.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// The hasher builder used when none is specified.
        ///
        /// Deterministic FNV-1a when neither `foldhash` nor `std` is enabled.
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<FnvHasher>;
    }
}

/// 64-bit FNV-1a.
///
/// Unkeyed and stable across runs, so it offers no protection against
/// adversarial keys. Only the default on builds without a better source.
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    const PRIME: u64 = 0x0000_0100_0000_01B3;
    const OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

    /// Creates a hasher seeded with the FNV offset basis.
    pub const fn new() -> Self {
        Self {
            hash: Self::OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash ^= byte as u64;
            self.hash = self.hash.wrapping_mul(Self::PRIME);
        }
    }
}
