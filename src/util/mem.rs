use crate::err::*;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ffi::{CStr, c_char};

pub fn memzero(buf: &mut [u8]) {
    unsafe { core::ptr::write_bytes(buf.as_mut_ptr(), 0, buf.len()) };
}

/// Copy `bytes` plus a trailing null into a fresh allocation, reporting ENOMEM rather than
/// aborting when the allocator refuses.
pub fn try_nul_terminated(bytes: &[u8]) -> Result<Vec<u8>, Errno> {
    let mut v = Vec::new();
    v.try_reserve_exact(bytes.len() + 1).map_err(alloc_errno)?;
    v.extend_from_slice(bytes);
    v.push(0);
    Ok(v)
}

/// `strdup(3)`: duplicate a C string into storage that is never freed.
///
/// Ownership passes to whatever raw pointer the caller stores it in (argv slots, the C runtime's
/// program name fields).
pub fn leak_cstr(s: &CStr) -> Result<*mut c_char, Errno> {
    let v = try_nul_terminated(s.to_bytes())?;
    Ok(Box::leak(v.into_boxed_slice()).as_mut_ptr() as *mut c_char)
}

/// Allocate a null-terminated pointer array with no entries, never freed.
///
/// Used as the fresh backing array for a cleared environment.
pub fn leak_empty_ptr_array() -> Result<*mut *mut c_char, Errno> {
    let mut v: Vec<*mut c_char> = Vec::new();
    v.try_reserve_exact(1).map_err(alloc_errno)?;
    v.push(core::ptr::null_mut());
    Ok(Box::leak(v.into_boxed_slice()).as_mut_ptr())
}
