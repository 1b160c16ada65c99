#![cfg_attr(not(test), no_std)]

//! Rewrite the process title shown by `ps` and `/proc/<pid>/cmdline`.
//!
//! The kernel reports a process's command line straight out of the memory that held argv and,
//! immediately after it, the environment strings.  There is no system call to relabel it, so we
//! reclaim that memory instead:
//!
//! - [`init`] runs once at startup.  It finds the extent of the contiguous argv + environ block,
//!   moves every argument and environment string somewhere else, and remembers the block.
//! - [`set_title!`] renders a new title and overwrites the block with it, never past its end and
//!   always leaving argv[0] terminated.
//!
//! ```ignore
//! #[unsafe(no_mangle)]
//! pub unsafe extern "C" fn main(argc: c_int, argv: *mut *mut c_char, envp: *mut *mut c_char) -> c_int {
//!     unsafe { retitle::init(argc as isize, argv, envp) }.ok();
//!     retitle::set_title!("worker-{} [{}]", 7, "idle").ok();
//!     // ...
//! }
//! ```

extern crate alloc;

// Build-time configuration generated into OUT_DIR by src/build/main.rs
mod internal;

pub mod constants;
pub mod err;
mod global;
pub mod os;
pub mod platform;
pub mod syscall;
pub mod title;
pub mod trace;
pub mod types;
pub mod util;

#[cfg(test)]
mod testing;

// Build-time checks, exercised alongside the library's own tests
#[cfg(test)]
#[allow(dead_code)]
#[path = "build/check.rs"]
mod build_check;

pub use global::*;
