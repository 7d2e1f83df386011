use std::fmt;

pub(super) mod attr;
mod target;
#[cfg(test)]
mod test;

pub use attr::{resolve, AttrBytes};
pub use target::*;

// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L389
/// Attribute record handed to `perf_event_open`.
///
/// This mirrors `struct perf_event_attr` up to `PERF_ATTR_SIZE_VER5`, but it is
/// never passed to the kernel as is. [`Attr::to_bytes`] packs it field by field
/// into the exact layout the kernel expects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attr {
    pub ty: u32,
    /// Must equal [`Attr::SIZE`], otherwise the kernel fails the open with `E2BIG` or `EINVAL`.
    pub size: u32,
    pub config: u64,
    pub sample_period: u64,
    pub sample_type: u64,
    pub read_format: u64,
    pub flags: Flags,
    pub wakeup_events: u32,
    pub bp_type: u32,
    pub config1: u64,
    pub config2: u64,
    pub branch_sample_type: u64,
    pub sample_regs_user: u64,
    pub sample_stack_user: u32,
    pub clockid: i32,
    pub sample_regs_intr: u64,
    pub aux_watermark: u32,
    pub reserved: u32,
}

/// Packed properties bitfield of the attribute record.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags(u64);

macro_rules! flags {
    ($($(#[$doc:meta])* $name:ident = $bit:literal,)+) => {
        impl Flags {
            $(
            $(#[$doc])*
            pub const $name: Flags = Flags(1 << $bit);
            )+

            const NAMES: &'static [(&'static str, Flags)] = &[$((stringify!($name), Self::$name),)+];
        }
    };
}

flags! {
    /// Counter starts disabled and has to be enabled explicitly.
    DISABLED = 0,
    INHERIT = 1,
    PINNED = 2,
    EXCLUSIVE = 3,
    EXCLUDE_USER = 4,
    /// Do not count events in kernel mode.
    EXCLUDE_KERNEL = 5,
    /// Do not count events in the hypervisor.
    EXCLUDE_HV = 6,
    EXCLUDE_IDLE = 7,
    MMAP = 8,
    COMM = 9,
    FREQ = 10,
    INHERIT_STAT = 11,
    ENABLE_ON_EXEC = 12,
    TASK = 13,
    WATERMARK = 14,
    PRECISE_IP_1 = 15,
    PRECISE_IP_2 = 16,
    MMAP_DATA = 17,
    SAMPLE_ID_ALL = 18,
    EXCLUDE_HOST = 19,
    EXCLUDE_GUEST = 20,
    EXCLUDE_CALLCHAIN_KERNEL = 21,
    EXCLUDE_CALLCHAIN_USER = 22,
    MMAP2 = 23,
    COMM_EXEC = 24,
    USE_CLOCKID = 25,
    CONTEXT_SWITCH = 26,
    RESERVED_1 = 27,
}

impl Flags {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    pub const fn contains(&self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (name, flag) in Self::NAMES {
            if self.contains(*flag) {
                set.entry(&format_args!("{}", name));
            }
        }
        let unknown = self.0 >> (Self::NAMES.len() as u64);
        if unknown > 0 {
            set.entry(&format_args!("{:#x}", unknown << Self::NAMES.len()));
        }
        set.finish()
    }
}
