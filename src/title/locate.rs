//! One-shot discovery of the argv + environ block, and relocation of everything in it except
//! argv[0].
//!
//! All pointer arithmetic over process argument memory lives here.

use crate::err::*;
use crate::os::{Argv, Envp, split_entry};
use crate::platform::{Platform, ProgramName};
use crate::trace::{Event, Trace};
use crate::util::{leak_empty_ptr_array, try_nul_terminated};
use core::ffi::{CStr, c_char};

/// Addresses found by `measure`, before anything has moved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    /// argv[0]
    pub start: *mut u8,
    /// argv[0]'s terminator
    pub logical_end: usize,
    /// One past the last contiguous string
    pub physical_end: usize,
}

impl Extent {
    pub fn start_addr(&self) -> usize {
        self.start as usize
    }
}

/// Address one past the terminator of `p`
///
/// # Safety
/// `p` must point to a nul-terminated string.
#[inline]
unsafe fn end_of(p: *const c_char) -> usize {
    p as usize + unsafe { CStr::from_ptr(p) }.to_bytes().len() + 1
}

/// Find how far the block starting at argv[0] extends.
///
/// Starting one past argv[0]'s terminator, any argument or environment string that begins at or
/// beyond the current frontier pushes the frontier to its own end.  Strings that live elsewhere
/// (below argv[0], or already covered) are ignored.
///
/// # Safety
/// `argv` and `envp` must describe the ABI argv and envp arrays, unmodified.
pub unsafe fn measure(argv: &Argv, envp: *mut *mut c_char) -> Option<Extent> {
    let arg0 = argv.first()?;
    let start = arg0 as usize;
    let logical_end = unsafe { end_of(arg0) } - 1;
    let mut end = logical_end + 1;

    for (_, p) in argv.entries_from(0) {
        if (p as usize) < end {
            continue;
        }
        end = unsafe { end_of(p) };
    }

    for p in unsafe { Envp::from_raw(envp) } {
        if (p as usize) < end {
            continue;
        }
        end = unsafe { end_of(p) };
    }

    Some(Extent {
        start: arg0 as *mut u8,
        logical_end: logical_end - start,
        physical_end: end - start,
    })
}

/// Move the runtime's program name strings out of argv[0].
///
/// # Safety
/// Must run before argv[0] is overwritten, while the current program name pointers are valid.
pub unsafe fn relocate_program_name<P: Platform, T: Trace>(
    platform: &mut P,
    trace: &mut T,
) -> Result<(), Errno> {
    let Some(before) = platform.program_name() else {
        return Ok(());
    };

    let full = unsafe { CStr::from_ptr(before.full) };
    let short = unsafe { CStr::from_ptr(before.short) };
    trace.event(Event::ProgramNameBefore { full, short });

    let after = ProgramName {
        full: platform.strdup(full)?,
        short: platform.strdup(short)?,
    };
    unsafe { platform.set_program_name(after) };

    trace.event(Event::ProgramNameAfter {
        full: unsafe { CStr::from_ptr(after.full) },
        short: unsafe { CStr::from_ptr(after.short) },
    });
    Ok(())
}

/// Re-install every environment variable so its storage belongs to the platform rather than to
/// the block.  Returns the number of variables moved.
///
/// If the live environment is no longer `envp`, something has already replaced it and there is
/// nothing of ours left to move.  On failure the original environment is put back, so the process
/// never sees a half-copied one.
///
/// # Safety
/// `envp` must be the ABI envp array, unmodified.
pub unsafe fn relocate_environ<P: Platform>(
    platform: &mut P,
    envp: *mut *mut c_char,
) -> Result<usize, Errno> {
    if platform.environ() != envp {
        return Ok(0);
    }

    let fresh = leak_empty_ptr_array()?;
    unsafe { platform.replace_environ(fresh) };

    let mut count = 0;
    for p in unsafe { Envp::from_raw(envp) } {
        let entry = unsafe { CStr::from_ptr(p) };
        let Some((name, value)) = split_entry(entry) else {
            continue;
        };
        // setenv(3) rejects empty names; such an entry cannot be re-installed
        if name.is_empty() {
            continue;
        }

        let result = try_nul_terminated(name).and_then(|name| {
            let name = CStr::from_bytes_with_nul(&name).map_err(|_| Errno::EINVAL)?;
            platform.setenv(name, value)
        });

        if let Err(e) = result {
            unsafe { platform.replace_environ(envp) };
            return Err(e);
        }
        count += 1;
    }

    Ok(count)
}

/// Point argv[1..] (and any trailing entries past argc) at heap copies.  Returns the number of
/// arguments moved.
///
/// Stops at the first allocation failure; arguments already moved stay moved, as each is an
/// independent string.
///
/// # Safety
/// `argv` must be the ABI argv array, and nothing may hold references into its strings.
pub unsafe fn relocate_args<P: Platform>(
    platform: &mut P,
    argv: &mut Argv,
) -> Result<usize, Errno> {
    let mut count = 0;
    let mut next = 1;
    while let Some((i, p)) = argv.entries_from(next).next() {
        let copy = platform.strdup(unsafe { CStr::from_ptr(p) })?;
        unsafe { argv.replace(i, copy) };
        count += 1;
        next = i + 1;
    }
    Ok(count)
}
