use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::os::fd::RawFd;

use log::{debug, trace};

use crate::config::{resolve, Attr, Target};
use crate::error::{Error, Result};
use crate::ffi::ioctl::{ControlCodes, ControlOp, Native};
use crate::ffi::{Kernel, Sys};

mod stat;

pub use stat::COUNT_SIZE;

/// State of the kernel handle owned by a [`Counter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    /// Nothing opened yet, or cleared after close.
    Unset,
    /// Kernel handle usable for control, read and close.
    Open(RawFd),
    /// A close was attempted, the handle must not be used again.
    Closed,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Open(fd) => write!(f, "open (fd {})", fd),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// A single performance counter.
///
/// The counter goes through `open -> reset -> enable -> read -> disable -> close`.
/// Every operation is a blocking request to `K`, the real kernel by default, and
/// control requests use the codes of `C`, selected from the build target by default.
///
/// A counter is not internally synchronized. Independent counters can be used
/// from separate threads since each one owns its own kernel handle.
///
/// # Examples
///
/// ```rust
/// use perf_counter::count::Counter;
///
/// // Software clock of the calling task, counted by the kernel itself.
/// let mut counter = Counter::new();
/// counter.open_self("task-clock").unwrap();
///
/// std::hint::black_box((0..100_000).sum::<u64>());
///
/// counter.disable().unwrap();
/// let nanos = counter.read().unwrap();
/// assert!(nanos > 0);
/// counter.close().unwrap();
/// ```
///
/// Hardware events need a PMU, which virtual machines often lack:
///
/// ```rust,no_run
/// use perf_counter::count::Counter;
///
/// let mut counter = Counter::new();
/// counter.open_self("instructions").unwrap();
///
/// std::hint::black_box((0..1000).sum::<u64>());
///
/// counter.disable().unwrap();
/// println!("{} instructions retired", counter.read().unwrap());
/// counter.close().unwrap();
/// ```
pub struct Counter<K: Kernel = Sys, C: ControlCodes = Native> {
    kernel: K,
    handle: Handle,
    event_name: Option<String>,
    value: u64,
    codes: PhantomData<C>,
}

impl Counter {
    /// Creates an unopened counter backed by the running kernel.
    pub fn new() -> Self {
        Self::with_kernel(Sys)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel, C: ControlCodes> Counter<K, C> {
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            handle: Handle::Unset,
            event_name: None,
            value: 0,
            codes: PhantomData,
        }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Kernel handle, if the counter is open.
    pub fn fd(&self) -> Option<RawFd> {
        match self.handle {
            Handle::Open(fd) => Some(fd),
            _ => None,
        }
    }

    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    /// Value of the last successful [`read`][Self::read], 0 before that.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Opens the named event.
    ///
    /// The counter starts disabled; use [`open_reset_enable`][Self::open_reset_enable]
    /// to have it counting straight away.
    pub fn open(&mut self, name: &str, target: impl Into<Target>) -> Result<()> {
        self.expect_unset("open")?;
        let attr = resolve(name)?;
        self.open_attr(name, &attr, target.into())
    }

    /// Opens a counter from a caller-built attribute record.
    pub fn open_with_attr(
        &mut self,
        name: &str,
        attr: &Attr,
        target: impl Into<Target>,
    ) -> Result<()> {
        self.expect_unset("open")?;
        self.open_attr(name, attr, target.into())
    }

    fn open_attr(&mut self, name: &str, attr: &Attr, target: Target) -> Result<()> {
        let Target {
            pid,
            cpu,
            group_fd,
            flags,
        } = target;

        let fd = self
            .kernel
            .perf_event_open(&attr.to_bytes(), pid, cpu, group_fd, flags)
            .map_err(Error::kernel("open"))?;
        if fd < 0 {
            return Err(Error::KernelRejected {
                op: "open",
                source: io::Error::other(format!("kernel returned handle {}", fd)),
            });
        }

        debug!(
            "opened `{}` as fd {} (pid {}, cpu {}, group {})",
            name, fd, pid, cpu, group_fd
        );
        self.handle = Handle::Open(fd);
        self.event_name = Some(name.to_owned());
        Ok(())
    }

    /// Opens the named event, then resets and enables it.
    ///
    /// Stops at the first failure. A counter that opened but failed to reset or
    /// enable stays open and can still be closed.
    pub fn open_reset_enable(&mut self, name: &str, target: impl Into<Target>) -> Result<()> {
        self.open(name, target)?;
        self.reset()?;
        self.enable()
    }

    /// Same as [`open_reset_enable`][Self::open_reset_enable] for the calling
    /// process on any CPU.
    pub fn open_self(&mut self, name: &str) -> Result<()> {
        self.open_reset_enable(name, Target::CURRENT)
    }

    /// Sets the accumulated count to zero.
    pub fn reset(&self) -> Result<()> {
        self.control(ControlOp::Reset)
    }

    /// Starts counting.
    pub fn enable(&self) -> Result<()> {
        self.control(ControlOp::Enable)
    }

    /// Stops counting. The accumulated count is kept.
    pub fn disable(&self) -> Result<()> {
        self.control(ControlOp::Disable)
    }

    fn control(&self, op: ControlOp) -> Result<()> {
        let fd = self.expect_open(op.name())?;
        let code = op.code::<C>();
        trace!("{} fd {} (request {:#x})", op.name(), fd, code);
        self.kernel.ioctl(fd, code).map_err(Error::kernel(op.name()))?;
        Ok(())
    }

    /// Reads the current count.
    ///
    /// The stored [value][Self::value] is only updated on success.
    pub fn read(&mut self) -> Result<u64> {
        let fd = self.expect_open("read")?;
        let mut buf = [0; COUNT_SIZE];
        let len = self
            .kernel
            .read(fd, &mut buf)
            .map_err(Error::kernel("read"))?;
        let value = stat::decode(&buf[..len.min(COUNT_SIZE)])
            .ok_or(Error::ShortRead { op: "read", len })?;

        trace!("read fd {}: {}", fd, value);
        self.value = value;
        Ok(value)
    }

    /// Disables the counter and releases its kernel handle.
    ///
    /// If disabling fails the handle is not released and stays open. Once the
    /// release has been attempted the handle is [`Closed`][Handle::Closed],
    /// whether the release succeeded or not.
    pub fn close(&mut self) -> Result<()> {
        let fd = self.expect_open("close")?;
        self.disable()?;

        let result = self.kernel.close(fd).map_err(Error::kernel("close"));
        self.handle = Handle::Closed;
        debug!("closed fd {} of `{}`", fd, self.event_name().unwrap_or_default());
        result
    }

    /// Returns a closed counter to the unset state so it can be opened again.
    pub fn clear(&mut self) -> Result<()> {
        match self.handle {
            Handle::Closed | Handle::Unset => {
                self.handle = Handle::Unset;
                self.event_name = None;
                self.value = 0;
                Ok(())
            }
            state => Err(Error::InvalidHandleState { op: "clear", state }),
        }
    }

    fn expect_open(&self, op: &'static str) -> Result<RawFd> {
        match self.handle {
            Handle::Open(fd) => Ok(fd),
            state => Err(Error::InvalidHandleState { op, state }),
        }
    }

    fn expect_unset(&self, op: &'static str) -> Result<()> {
        match self.handle {
            Handle::Unset => Ok(()),
            state => Err(Error::InvalidHandleState { op, state }),
        }
    }
}

impl<K: Kernel, C: ControlCodes> Drop for Counter<K, C> {
    fn drop(&mut self) {
        if let Handle::Open(fd) = self.handle {
            debug!("releasing fd {} of dropped counter", fd);
            if let Err(e) = self.kernel.close(fd) {
                debug!("failed to release fd {}: {}", fd, e);
            }
        }
    }
}

impl<K: Kernel, C: ControlCodes> fmt::Debug for Counter<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("handle", &self.handle)
            .field("event_name", &self.event_name)
            .field("value", &self.value)
            .finish()
    }
}
