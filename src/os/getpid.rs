use crate::types::pid_t;

/// PID of the calling process, the one whose /proc/<pid>/cmdline shows the title
#[inline]
pub fn getpid() -> pid_t {
    unsafe { crate::syscall::getpid() }
}
