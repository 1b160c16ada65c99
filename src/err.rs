//! # Error handling
//!
//! Nothing in this crate is fatal to the host process.  Three scenarios to consider:
//!
//! - no capability: argv[0] was absent, or initialization never ran or failed.  Writes are silent
//!   no-ops and nothing is reported.
//! - allocation failure while relocating: initialization stops, the crate falls back to no
//!   capability, and the error is kept for inspection.
//! - formatting failure while writing: that one write is abandoned before the title memory is
//!   touched, and the error is kept for inspection.
//!
//! Errors are sticky: the most recent one is retained in the title state until the next failure
//! replaces it.  Nothing is retried.

use alloc::collections::TryReserveError;

pub type Errno = syscalls::Errno;

/// Map a failed fallible allocation to the errno `malloc(3)` would have set.
#[inline]
pub fn alloc_errno(_: TryReserveError) -> Errno {
    Errno::ENOMEM
}

/// Keep a copy of a failure in a sticky error slot while passing the result through.
pub trait RecordErr<T> {
    fn record(self, slot: &mut Option<Errno>) -> Result<T, Errno>;
}

impl<T> RecordErr<T> for Result<T, Errno> {
    #[inline]
    fn record(self, slot: &mut Option<Errno>) -> Result<T, Errno> {
        if let Err(e) = self {
            *slot = Some(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_record_keeps_last_failure() {
        let mut slot = None;

        let ok: Result<u8, Errno> = Ok(1);
        assert_eq!(ok.record(&mut slot), Ok(1));
        assert_eq!(slot, None);

        let _ = Err::<(), _>(Errno::ENOMEM).record(&mut slot);
        let _ = Err::<(), _>(Errno::EINVAL).record(&mut slot);
        assert_eq!(slot, Some(Errno::EINVAL));

        // Success does not clear a previous failure
        let _ = Ok::<(), Errno>(()).record(&mut slot);
        assert_eq!(slot, Some(Errno::EINVAL));
    }

    #[test]
    fn test_alloc_errno_is_enomem() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(alloc_errno(err), Errno::ENOMEM);
    }
}
