use std::io;

use crate::count::Handle;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The event name is absent from the [registry][crate::event::REGISTRY].
    #[error("event not supported: {0}")]
    NotSupported(String),

    /// The counter handle was in the wrong state for the requested operation.
    #[error("cannot {op}: counter handle is {state}")]
    InvalidHandleState { op: &'static str, state: Handle },

    /// The kernel refused a create, control, read or close request.
    #[error("kernel rejected {op}: {source}")]
    KernelRejected {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// The read primitive returned fewer bytes than a counter value needs.
    #[error("short {op}: got {len} of 8 bytes")]
    ShortRead { op: &'static str, len: usize },
}

/// Fieldless discriminant of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotSupported,
    InvalidHandleState,
    KernelRejected,
    ShortRead,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSupported(_) => ErrorKind::NotSupported,
            Self::InvalidHandleState { .. } => ErrorKind::InvalidHandleState,
            Self::KernelRejected { .. } => ErrorKind::KernelRejected,
            Self::ShortRead { .. } => ErrorKind::ShortRead,
        }
    }

    pub(crate) fn kernel(op: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::KernelRejected { op, source }
    }
}
