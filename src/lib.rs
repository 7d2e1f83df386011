//! Hardware and software performance counters on top of `perf_event_open`.
//!
//! ## Example
//!
//! Measure how much CPU time the (inefficient) fibonacci caculation takes.
//!
//! ```rust
//! use perf_counter::count::Counter;
//!
//! // Opens the counter for the current process on any CPU, then resets and starts it.
//! let mut counter = Counter::new();
//! counter.open_self("task-clock").unwrap();
//!
//! fn fib(n: usize) -> usize {
//!     match n {
//!         0 => 0,
//!         1 => 1,
//!         n => fib(n - 1) + fib(n - 2),
//!     }
//! }
//! std::hint::black_box(fib(25));
//!
//! counter.disable().unwrap();
//! let nanos = counter.read().unwrap();
//! println!("{} ns on CPU", nanos);
//! # assert!(nanos > 0);
//!
//! // Disables then releases the kernel handle.
//! counter.close().unwrap();
//! ```
//!
//! Hardware counters work the same way, given a PMU:
//!
//! ```rust,no_run
//! use perf_counter::count::Counter;
//!
//! let mut instrs = Counter::new();
//! let mut cycles = Counter::new();
//! instrs.open_self("instructions").unwrap();
//! cycles.open_self("cpu-cycles").unwrap();
//!
//! std::hint::black_box((0..1_000_000).sum::<u64>());
//!
//! instrs.disable().unwrap();
//! cycles.disable().unwrap();
//!
//! let ipc = instrs.read().unwrap() as f64 / cycles.read().unwrap() as f64;
//! println!("IPC: {}", ipc);
//!
//! instrs.close().unwrap();
//! cycles.close().unwrap();
//! ```
//!
//! ## Events
//!
//! Events are opened by name, see [`event::names`] for the built-in registry.
//! Every counter starts disabled and only counts user-mode activity.
//!
//! ## Control codes
//!
//! The ioctl request codes are selected from the target architecture at build
//! time, see [`ffi::ioctl`].

pub mod config;
pub mod count;
pub mod error;
pub mod event;
pub mod ffi;

pub use error::{Error, ErrorKind, Result};
