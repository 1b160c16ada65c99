use core::ffi::{CStr, c_char};

/// Walks the ABI envp array (or the C runtime's `environ`) until its null terminator.
///
/// Yields the raw entry pointers so callers can reason about where the strings live, not just
/// what they say.
#[derive(Clone)]
pub struct Envp {
    cur: *mut *mut c_char, // null-terminated
}

impl Envp {
    /// # Safety
    /// - `envp` must be null or a valid null-terminated array of pointers to nul-terminated
    ///   strings, unchanged for as long as this iterator is used.
    #[inline]
    pub unsafe fn from_raw(envp: *mut *mut c_char) -> Self {
        Self { cur: envp }
    }
}

impl Iterator for Envp {
    type Item = *mut c_char;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.is_null() {
            return None;
        }

        // Safety:
        // - self.cur points into a null-terminated array and never past its terminator
        let p = unsafe { *self.cur };

        // If the dereferenced pointer is null, we've hit the end of the envp array
        if p.is_null() {
            return None;
        }

        self.cur = unsafe { self.cur.add(1) };
        Some(p)
    }
}

/// Split a `NAME=value` entry at its first `=`.
///
/// Entries without `=` have no well-formed name and yield None.
pub fn split_entry(entry: &CStr) -> Option<(&[u8], &CStr)> {
    let bytes = entry.to_bytes_with_nul();
    let eq_idx = bytes.iter().position(|&c| c == b'=')?;
    let var = bytes.get(..eq_idx)?;
    let val = CStr::from_bytes_with_nul(bytes.get(eq_idx + 1..)?).ok()?;
    Some((var, val))
}
