//! Control request codes.
//!
//! The perf ioctls are defined with `_IO('$', nr)`, whose numeric value depends
//! on how the target architecture encodes the "no data" direction. Each encoding
//! family is one [`ControlCodes`] table and [`Native`] picks the one matching the
//! build target.

/// Request codes for the control operations of a counter.
pub trait ControlCodes {
    /// `PERF_EVENT_IOC_RESET`
    const RESET: u64;
    /// `PERF_EVENT_IOC_ENABLE`
    const ENABLE: u64;
    /// `PERF_EVENT_IOC_DISABLE`
    const DISABLE: u64;
}

const PERF_IOC_MAGIC: u64 = b'$' as u64;

const fn io(dir_none: u64, nr: u64) -> u64 {
    dir_none | (PERF_IOC_MAGIC << 8) | nr
}

/// Asm-generic encoding, used by x86, arm, aarch64, riscv, s390x and loongarch.
#[derive(Clone, Copy, Debug)]
pub struct Generic;

impl ControlCodes for Generic {
    const RESET: u64 = io(0, 3);
    const ENABLE: u64 = io(0, 0);
    const DISABLE: u64 = io(0, 1);
}

/// PowerPC encoding, where `_IOC_NONE` is 1 at bit 29. MIPS and SPARC share it.
#[derive(Clone, Copy, Debug)]
pub struct PowerPc;

impl ControlCodes for PowerPc {
    const RESET: u64 = io(1 << 29, 3);
    const ENABLE: u64 = io(1 << 29, 0);
    const DISABLE: u64 = io(1 << 29, 1);
}

#[cfg(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64",
))]
pub type Native = PowerPc;

#[cfg(not(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64",
)))]
pub type Native = Generic;

/// A control operation on an open counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlOp {
    Reset,
    Enable,
    Disable,
}

impl ControlOp {
    pub const fn code<C: ControlCodes>(self) -> u64 {
        match self {
            Self::Reset => C::RESET,
            Self::Enable => C::ENABLE,
            Self::Disable => C::DISABLE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}
