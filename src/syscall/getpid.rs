use crate::types::pid_t;
use syscalls::{Sysno, syscall};

// `man 2 getpid`:
//
// SYNOPSIS
//        pid_t getpid(void);
//
// ERRORS
//        Always successful.
pub unsafe fn getpid() -> pid_t {
    unsafe { syscall!(Sysno::getpid) }.map_or(0, |pid| pid as pid_t)
}
