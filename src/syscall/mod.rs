//! Raw Linux system calls
//!
//! Thin, unsafe wrappers that only translate arguments and return values.  Safe interfaces live in
//! `crate::os`.

mod getpid;
mod nanosleep;
mod prctl;
mod write;
pub use getpid::*;
pub use nanosleep::*;
pub use prctl::*;
pub use write::*;
