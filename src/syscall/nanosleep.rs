use crate::err::*;
use crate::types::*;
use syscalls::{Sysno, syscall};

// `man 2 nanosleep`:
//
// SYNOPSIS
//        int nanosleep(const struct timespec *req, struct timespec *rem);
//
// RETURN VALUE
//        0 once the full interval has elapsed.  EINTR if a signal handler ran first, in which case
//        `rem` holds the time left.
pub unsafe fn nanosleep(request: &timespec, remain: &mut timespec) -> Result<(), Errno> {
    unsafe {
        syscall!(
            Sysno::nanosleep,
            request as *const timespec,
            remain as *mut timespec
        )
    }
    .map(|_| ())
}
