use std::io::Result;
use std::os::fd::RawFd;

use crate::config::AttrBytes;

pub mod ioctl;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux_syscall;

macro_rules! syscall {
    ($syscall:ident, $($arg:expr),* $(,)?) => {{
        #[cfg(any(target_os = "linux", target_os = "android"))]
        let val = $crate::ffi::linux_syscall::$syscall($($arg),*);
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        let val = {
            $(let _ = $arg;)*
            Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
        };
        val
    }};
}

/// The privileged primitives a [`Counter`][crate::count::Counter] is driven through.
///
/// [`Sys`] issues the real system calls, other implementations can simulate
/// the kernel for testing.
pub trait Kernel {
    /// Creates a counter, returning its handle.
    fn perf_event_open(
        &self,
        attr: &AttrBytes,
        pid: i32,
        cpu: i32,
        group_fd: i32,
        flags: u64,
    ) -> Result<RawFd>;

    /// Issues a device control request without argument.
    fn ioctl(&self, fd: RawFd, op: u64) -> Result<i32>;

    /// Reads from the handle, returning the number of bytes read.
    fn read(&self, fd: RawFd, buf: &mut [u8]) -> Result<usize>;

    /// Releases the handle.
    fn close(&self, fd: RawFd) -> Result<()>;
}

/// The running kernel.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sys;

impl Kernel for Sys {
    fn perf_event_open(
        &self,
        attr: &AttrBytes,
        pid: i32,
        cpu: i32,
        group_fd: i32,
        flags: u64,
    ) -> Result<RawFd> {
        syscall!(perf_event_open, attr, pid, cpu, group_fd, flags)
    }

    fn ioctl(&self, fd: RawFd, op: u64) -> Result<i32> {
        syscall!(ioctl, fd, op)
    }

    fn read(&self, fd: RawFd, buf: &mut [u8]) -> Result<usize> {
        syscall!(read, fd, buf)
    }

    fn close(&self, fd: RawFd) -> Result<()> {
        syscall!(close, fd)
    }
}

impl<K: Kernel + ?Sized> Kernel for &K {
    fn perf_event_open(
        &self,
        attr: &AttrBytes,
        pid: i32,
        cpu: i32,
        group_fd: i32,
        flags: u64,
    ) -> Result<RawFd> {
        (**self).perf_event_open(attr, pid, cpu, group_fd, flags)
    }

    fn ioctl(&self, fd: RawFd, op: u64) -> Result<i32> {
        (**self).ioctl(fd, op)
    }

    fn read(&self, fd: RawFd, buf: &mut [u8]) -> Result<usize> {
        (**self).read(fd, buf)
    }

    fn close(&self, fd: RawFd) -> Result<()> {
        (**self).close(fd)
    }
}
