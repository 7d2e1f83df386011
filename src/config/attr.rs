use super::{Attr, Flags};
use crate::error::Result;
use crate::event::{lookup, EventDescriptor};

const fn align_up(offset: usize, align: usize) -> usize {
    offset.div_ceil(align) * align
}

const fn layout_size(fields: &[usize]) -> usize {
    let mut offset = 0;
    let mut max_align = 1;
    let mut i = 0;
    while i < fields.len() {
        let width = fields[i];
        offset = align_up(offset, width) + width;
        if width > max_align {
            max_align = width;
        }
        i += 1;
    }
    align_up(offset, max_align)
}

// Fields of `Attr` in ABI order. Every field sits at its natural alignment,
// which is what the kernel expects on all supported targets.
macro_rules! layout {
    (|$attr:ident| $($ty:ty => $val:expr,)+) => {
        const LAYOUT: &[usize] = &[$(size_of::<$ty>(),)+];

        fn pack($attr: &Attr) -> [u8; Attr::SIZE] {
            let mut buf = [0; Attr::SIZE];
            let mut offset = 0;
            $(
            let bytes = <$ty>::to_ne_bytes($val);
            offset = align_up(offset, bytes.len());
            buf[offset..offset + bytes.len()].copy_from_slice(&bytes);
            offset += bytes.len();
            )+
            debug_assert_eq!(offset, Attr::SIZE);
            buf
        }
    };
}

layout! { |attr|
    u32 => attr.ty,
    u32 => attr.size,
    u64 => attr.config,
    u64 => attr.sample_period,
    u64 => attr.sample_type,
    u64 => attr.read_format,
    u64 => attr.flags.to_abi(),
    u32 => attr.wakeup_events,
    u32 => attr.bp_type,
    u64 => attr.config1,
    u64 => attr.config2,
    u64 => attr.branch_sample_type,
    u64 => attr.sample_regs_user,
    u32 => attr.sample_stack_user,
    i32 => attr.clockid,
    u64 => attr.sample_regs_intr,
    u32 => attr.aux_watermark,
    u32 => attr.reserved,
}

impl Attr {
    /// Byte size of the packed record, `PERF_ATTR_SIZE_VER5`.
    pub const SIZE: usize = layout_size(LAYOUT);

    /// Flags every resolved record carries.
    pub const DEFAULT_FLAGS: Flags = Flags::from_bits(
        Flags::DISABLED.bits() | Flags::EXCLUDE_KERNEL.bits() | Flags::EXCLUDE_HV.bits(),
    );

    /// Packs the record into the kernel's binary layout.
    pub fn to_bytes(&self) -> AttrBytes {
        AttrBytes(pack(self))
    }
}

const PRECISE_IP_SHIFT: u32 = 15;
const PRECISE_IP_MASK: u64 = 0b11 << PRECISE_IP_SHIFT;

// C bitfields are allocated from the most significant bit on big-endian
// targets, while multi-bit fields keep their value order.
pub(crate) const fn bitfield_be(bits: u64) -> u64 {
    let ip = (bits & PRECISE_IP_MASK) >> PRECISE_IP_SHIFT;
    let ip = ((ip & 1) << 1) | (ip >> 1);
    ((bits & !PRECISE_IP_MASK) | (ip << PRECISE_IP_SHIFT)).reverse_bits()
}

impl Flags {
    /// Flags word as the kernel reads it on the build target.
    pub(crate) const fn to_abi(self) -> u64 {
        if cfg!(target_endian = "big") {
            bitfield_be(self.bits())
        } else {
            self.bits()
        }
    }
}

impl From<&EventDescriptor> for Attr {
    fn from(desc: &EventDescriptor) -> Self {
        Attr {
            ty: desc.domain.as_raw(),
            size: Attr::SIZE as _,
            config: desc.code,
            flags: Attr::DEFAULT_FLAGS,
            ..Default::default()
        }
    }
}

/// Resolves a registered event name into a ready-to-open attribute record.
///
/// The record starts disabled and only counts user-mode activity.
pub fn resolve(name: &str) -> Result<Attr> {
    lookup(name).map(Attr::from)
}

/// Packed attribute record, aligned like `struct perf_event_attr`.
#[derive(Clone, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct AttrBytes([u8; Attr::SIZE]);

impl AttrBytes {
    pub fn as_bytes(&self) -> &[u8; Attr::SIZE] {
        &self.0
    }

    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.0.as_ptr()
    }
}

impl std::fmt::Debug for AttrBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AttrBytes({} bytes)", self.0.len())
    }
}
