use crate::err::*;
use crate::types::*;
use syscalls::{Sysno, syscall};

/// prctl operations
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum PrctlOption {
    /// Set the task name (visible in /proc/[pid]/comm)
    PR_SET_NAME = 15,
    /// Get the task name into a 16 byte buffer
    PR_GET_NAME = 16,
}

impl PrctlOption {
    pub fn bits(self) -> c_int {
        self as c_int
    }
}

// `man 2 prctl`:
//
// SYNOPSIS
//        int prctl(int op, ...);
//
// RETURN VALUE
//        On success, PR_SET_NAME and PR_GET_NAME return 0.  On error, -1 is returned, and errno is
//        set to indicate the error.
pub unsafe fn prctl(option: PrctlOption, arg2: usize) -> Result<(), Errno> {
    unsafe { syscall!(Sysno::prctl, option.bits(), arg2, 0, 0, 0) }.map(|_| ())
}
