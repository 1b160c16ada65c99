//! Linux: argv and environ are laid out back to back at the top of the initial stack, and the
//! kernel reads /proc/<pid>/cmdline straight out of that memory.

#[cfg(not(target_os = "linux"))]
compile_error!("src/platform/linux.rs only supports Linux.");

use super::{Platform, ProgramName};
use crate::err::Errno;
use core::ffi::{CStr, c_char};

// Owned by the C runtime (glibc and musl both export all three).  The libc crate does not bind
// these, so declare them directly.
unsafe extern "C" {
    static mut environ: *mut *mut c_char;
    static mut program_invocation_name: *mut c_char;
    static mut program_invocation_short_name: *mut c_char;
}

/// The running process, via the C runtime and raw system calls
#[derive(Default)]
pub struct LinuxPlatform;

impl Platform for LinuxPlatform {
    fn environ(&self) -> *mut *mut c_char {
        // Safety: plain read of a pointer-sized global; single-threaded during init by contract
        unsafe { environ }
    }

    unsafe fn replace_environ(&mut self, envp: *mut *mut c_char) {
        unsafe { environ = envp };
    }

    fn setenv(&mut self, name: &CStr, value: &CStr) -> Result<(), Errno> {
        // setenv(3) copies both strings into storage it owns.
        if unsafe { libc::setenv(name.as_ptr(), value.as_ptr(), 1) } == 0 {
            Ok(())
        } else {
            Err(Errno::new(unsafe { *libc::__errno_location() }))
        }
    }

    fn program_name(&self) -> Option<ProgramName> {
        let name = unsafe {
            ProgramName {
                full: program_invocation_name,
                short: program_invocation_short_name,
            }
        };
        (!name.full.is_null() && !name.short.is_null()).then_some(name)
    }

    unsafe fn set_program_name(&mut self, name: ProgramName) {
        unsafe {
            program_invocation_name = name.full;
            program_invocation_short_name = name.short;
        }
    }

    fn set_task_name(&mut self, name: &CStr) -> Result<(), Errno> {
        crate::os::set_task_name(name)
    }
}
