use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};

pub mod hw;
pub mod sw;
#[cfg(test)]
mod test;

use hw::Hardware;
use sw::Software;

/// Counter domain, the `type` field of the attribute record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Domain {
    /// Generic hardware events counted by the PMU.
    Hardware = 0,
    /// Events provided by the kernel itself.
    Software = 1,
}

impl Domain {
    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

/// A generic event within its domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Hardware(Hardware),
    Software(Software),
}

impl Event {
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Hardware(_) => Domain::Hardware,
            Self::Software(_) => Domain::Software,
        }
    }

    pub const fn code(&self) -> u64 {
        match self {
            Self::Hardware(hw) => hw.code(),
            Self::Software(sw) => sw.code(),
        }
    }
}

impl From<Hardware> for Event {
    fn from(value: Hardware) -> Self {
        Self::Hardware(value)
    }
}

impl From<Software> for Event {
    fn from(value: Software) -> Self {
        Self::Software(value)
    }
}

/// Maps a human-readable event name to its domain and code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventDescriptor {
    pub name: &'static str,
    pub domain: Domain,
    pub code: u64,
}

impl EventDescriptor {
    const fn new(name: &'static str, event: Event) -> Self {
        Self {
            name,
            domain: event.domain(),
            code: event.code(),
        }
    }
}

macro_rules! table {
    ($($name:literal => $ty:ident::$variant:ident,)+) => {
        &[$(EventDescriptor::new($name, Event::$ty($ty::$variant)),)+]
    };
}

// Names follow `perf list`.
const TABLE: &[EventDescriptor] = table! {
    "cpu-cycles"              => Hardware::CpuCycle,
    "cycles"                  => Hardware::CpuCycle,
    "instructions"            => Hardware::Instr,
    "cache-references"        => Hardware::CacheAccess,
    "cache-misses"            => Hardware::CacheMiss,
    "branch-instructions"     => Hardware::BranchInstr,
    "branches"                => Hardware::BranchInstr,
    "branch-misses"           => Hardware::BranchMiss,
    "bus-cycles"              => Hardware::BusCycle,
    "stalled-cycles-frontend" => Hardware::FrontendStalledCycle,
    "stalled-cycles-backend"  => Hardware::BackendStalledCycle,
    "ref-cycles"              => Hardware::RefCpuCycle,

    "cpu-clock"               => Software::CpuClock,
    "task-clock"              => Software::TaskClock,
    "page-faults"             => Software::PageFault,
    "minor-faults"            => Software::MinorPageFault,
    "major-faults"            => Software::MajorPageFault,
    "context-switches"        => Software::CtxSwitch,
    "cpu-migrations"          => Software::CpuMigration,
    "alignment-faults"        => Software::AlignFault,
    "emulation-faults"        => Software::EmuFault,
    "cgroup-switches"         => Software::CgroupSwitch,
    "dummy"                   => Software::Dummy,
};

/// Built-in event registry, keyed by event name.
///
/// Initialized once on first use and never mutated afterwards.
pub static REGISTRY: LazyLock<HashMap<&'static str, &'static EventDescriptor>> =
    LazyLock::new(|| TABLE.iter().map(|it| (it.name, it)).collect());

/// Looks up `name` in the [registry][REGISTRY].
pub fn lookup(name: &str) -> Result<&'static EventDescriptor> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| Error::NotSupported(name.to_owned()))
}

/// All registered event names, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|it| it.name)
}
