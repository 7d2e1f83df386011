// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L110
/// Kernel software events, `config` values for [`Domain::Software`][super::Domain::Software].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Software {
    CpuClock,
    TaskClock,

    PageFault,
    MinorPageFault,
    MajorPageFault,

    EmuFault,
    AlignFault,

    CtxSwitch,
    CgroupSwitch,

    Dummy,
    CpuMigration,
}

impl Software {
    pub const fn code(&self) -> u64 {
        match self {
            Self::CpuClock => 0,
            Self::TaskClock => 1,
            Self::PageFault => 2,
            Self::CtxSwitch => 3,
            Self::CpuMigration => 4,
            Self::MinorPageFault => 5,
            Self::MajorPageFault => 6,
            Self::AlignFault => 7,
            Self::EmuFault => 8,
            Self::Dummy => 9,
            // Since `linux-5.13`.
            Self::CgroupSwitch => 11,
        }
    }
}
