use crate::constants::TASK_NAME_SIZE;
use crate::err::Errno;
use crate::syscall::PrctlOption;
use core::ffi::CStr;

/// Set the task name visible in /proc/[pid]/comm
///
/// The kernel keeps at most 15 characters (16 bytes including null terminator); longer names are
/// cut here first.  This name appears in tools like top and pstree, and in `ps -o comm`.
#[inline]
pub fn set_task_name(name: &CStr) -> Result<(), Errno> {
    let mut buf = [0u8; TASK_NAME_SIZE];
    let bytes = name.to_bytes();
    let len = bytes.len().min(TASK_NAME_SIZE - 1);
    if let (Some(dst), Some(src)) = (buf.get_mut(..len), bytes.get(..len)) {
        dst.copy_from_slice(src);
    }

    // SAFETY: buf is a null-terminated array that outlives the call
    unsafe { crate::syscall::prctl(PrctlOption::PR_SET_NAME, buf.as_ptr() as usize) }
}

/// Read back the calling thread's task name
#[cfg(test)]
fn get_task_name() -> Result<[u8; TASK_NAME_SIZE], Errno> {
    let mut buf = [0u8; TASK_NAME_SIZE];
    // SAFETY: PR_GET_NAME writes at most TASK_NAME_SIZE bytes
    unsafe { crate::syscall::prctl(PrctlOption::PR_GET_NAME, buf.as_mut_ptr() as usize) }?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Task names are per thread, so run in a scratch thread to leave the test harness alone.
    #[test]
    fn test_set_task_name_truncates() {
        std::thread::spawn(|| {
            set_task_name(c"retitle-task-name-long").unwrap();
            let name = get_task_name().unwrap();
            assert_eq!(&name, b"retitle-task-na\0");

            set_task_name(c"short").unwrap();
            let name = get_task_name().unwrap();
            assert_eq!(CStr::from_bytes_until_nul(&name).unwrap(), c"short");
        })
        .join()
        .unwrap();
    }
}
