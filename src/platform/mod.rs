//! Platform bridge
//!
//! Everything the title machinery needs from the C runtime and the kernel, so the locator and
//! writer never name a libc symbol directly.

mod linux;
pub use linux::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::*;

use crate::err::Errno;
use core::ffi::{CStr, c_char};

/// The C runtime's copies of the program name.
///
/// On glibc and musl these point into argv[0] itself, so they must be moved before argv[0] is
/// overwritten or `err(3)`-style messages would start printing the new title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramName {
    /// `program_invocation_name`: argv[0] as given
    pub full: *mut c_char,
    /// `program_invocation_short_name`: everything after the last `/`
    pub short: *mut c_char,
}

pub trait Platform {
    /// The live environment array
    fn environ(&self) -> *mut *mut c_char;

    /// Install an environment array wholesale.
    ///
    /// # Safety
    /// `envp` must be a null-terminated array that outlives every reader of the environment.
    unsafe fn replace_environ(&mut self, envp: *mut *mut c_char);

    /// Add or overwrite one variable, with storage owned by the platform
    fn setenv(&mut self, name: &CStr, value: &CStr) -> Result<(), Errno>;

    /// `strdup(3)` into storage that is never freed
    fn strdup(&mut self, s: &CStr) -> Result<*mut c_char, Errno> {
        crate::util::leak_cstr(s)
    }

    /// The runtime's program name fields, if it keeps any
    fn program_name(&self) -> Option<ProgramName> {
        None
    }

    /// # Safety
    /// Both pointers must be nul-terminated strings that are never freed.
    unsafe fn set_program_name(&mut self, _name: ProgramName) {}

    /// Kernel task name (`comm`), the fixed 16-byte name separate from the command line
    fn set_task_name(&mut self, _name: &CStr) -> Result<(), Errno> {
        Err(Errno::ENOSYS)
    }

    /// Whether the OS has its own setproctitle, making argv reuse unnecessary
    fn native_title(&self) -> bool {
        false
    }

    fn set_native_title(&mut self, _title: &CStr) -> Result<(), Errno> {
        Err(Errno::ENOSYS)
    }
}
