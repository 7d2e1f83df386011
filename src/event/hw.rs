// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L50
/// Generic hardware events, `config` values for [`Domain::Hardware`][super::Domain::Hardware].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hardware {
    CpuCycle,
    Instr,

    CacheAccess,
    CacheMiss,

    BranchInstr,
    BranchMiss,

    BusCycle,

    FrontendStalledCycle,
    BackendStalledCycle,

    RefCpuCycle,
}

impl Hardware {
    pub const fn code(&self) -> u64 {
        match self {
            Self::CpuCycle => 0,
            Self::Instr => 1,
            Self::CacheAccess => 2,
            Self::CacheMiss => 3,
            Self::BranchInstr => 4,
            Self::BranchMiss => 5,
            Self::BusCycle => 6,
            Self::FrontendStalledCycle => 7,
            Self::BackendStalledCycle => 8,
            Self::RefCpuCycle => 9,
        }
    }
}
