use std::os::fd::RawFd;

#[derive(Clone, Copy, Debug)]
pub struct All;

#[derive(Clone, Copy, Debug)]
pub struct Cpu(pub u32);

impl Cpu {
    pub const ALL: All = All;
}

#[derive(Clone, Copy, Debug)]
pub struct Proc(pub u32);

impl Proc {
    pub const ALL: All = All;
    pub const CURRENT: Proc = Proc(0);
}

/// Handle of an already opened counter to group with.
#[derive(Clone, Copy, Debug)]
pub struct Group(pub RawFd);

/// Where and how a counter is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub(crate) pid: i32,
    pub(crate) cpu: i32,
    pub(crate) group_fd: i32,
    pub(crate) flags: u64,
}

impl Target {
    /// Calling process on any CPU, ungrouped.
    pub const CURRENT: Target = Target::new(0, -1, -1, 0);

    /// Raw `perf_event_open` arguments.
    ///
    /// `pid` is 0 for the calling process and -1 for all processes, `cpu` is -1 for
    /// any CPU and `group_fd` is -1 for no group.
    pub const fn new(pid: i32, cpu: i32, group_fd: i32, flags: u64) -> Self {
        Self {
            pid,
            cpu,
            group_fd,
            flags,
        }
    }

    pub const fn group(mut self, group: Group) -> Self {
        self.group_fd = group.0;
        self
    }

    pub const fn flags(mut self, flags: u64) -> Self {
        self.flags = flags;
        self
    }

    pub fn pid(&self) -> i32 {
        self.pid
    }

    pub fn cpu(&self) -> i32 {
        self.cpu
    }

    pub fn group_fd(&self) -> i32 {
        self.group_fd
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::CURRENT
    }
}

macro_rules! into_target {
    ($ty: ty, $destruct: tt, $pid: expr, $cpu: expr) => {
        impl From<$ty> for Target {
            fn from($destruct: $ty) -> Self {
                Target::new($pid as _, $cpu as _, -1, 0)
            }
        }
    };
}

into_target!((Proc, Cpu), (Proc(pid), Cpu(cpu)), pid, cpu);
into_target!((Cpu, Proc), (Cpu(cpu), Proc(pid)), pid, cpu);

into_target!((Proc, All), (Proc(pid), _), pid, -1);
into_target!((All, Proc), (_, Proc(pid)), pid, -1);

into_target!((Cpu, All), (Cpu(cpu), _), -1, cpu);
into_target!((All, Cpu), (_, Cpu(cpu)), -1, cpu);

// For why `(All, All)` is invalid:
// https://github.com/torvalds/linux/blob/v6.13/kernel/events/core.c#L12835
