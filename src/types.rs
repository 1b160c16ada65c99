//! System call types that are strongly associated with specific system calls are defined in the
//! corresponding system call file.  Those shared across many are defined here.

#[allow(non_camel_case_types)]
pub type pid_t = i32;

#[allow(non_camel_case_types)]
pub type c_int = core::ffi::c_int;

#[allow(non_camel_case_types)]
pub type c_char = core::ffi::c_char;

pub type CStr = core::ffi::CStr;

#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct timespec {
    pub tv_sec: i64,
    pub tv_nsec: i64,
}
const _: () = assert!(core::mem::size_of::<timespec>() == 16);

/// Atomic bool
pub struct AtomicBool(core::sync::atomic::AtomicBool);
impl AtomicBool {
    pub const fn new(val: bool) -> Self {
        Self(core::sync::atomic::AtomicBool::new(val))
    }

    pub fn get(&self) -> bool {
        self.0.load(core::sync::atomic::Ordering::Acquire)
    }

    pub fn set(&self, val: bool) {
        self.0.store(val, core::sync::atomic::Ordering::Release);
    }

    pub fn swap(&self, new_val: bool) -> bool {
        self.0.swap(new_val, core::sync::atomic::Ordering::AcqRel)
    }
}

/// Scoped ownership of an `AtomicBool` used as a non-blocking lock.
///
/// Acquired with `try_acquire`, released on drop.
pub struct Flag<'a>(&'a AtomicBool);

impl<'a> Flag<'a> {
    pub fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag.swap(true) { None } else { Some(Self(flag)) }
    }
}

impl Drop for Flag<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_exclusive_until_dropped() {
        let busy = AtomicBool::new(false);

        let held = Flag::try_acquire(&busy);
        assert!(held.is_some());
        assert!(Flag::try_acquire(&busy).is_none());

        drop(held);
        assert!(!busy.get());
        assert!(Flag::try_acquire(&busy).is_some());
    }
}
