use core::ffi::c_char;

/// Mutable wrapper over the ABI standard argv pointer.
///
/// `argc` is a hint, not a bound: some loaders under-report it, so iteration carries on past
/// `argc` for as long as the array holds non-null entries.  Null entries below `argc` are skipped.
pub struct Argv {
    raw: *mut *mut c_char,
    argc: usize,
}

impl Argv {
    /// # Safety
    /// - `argv` must be null or point to an array valid for reads and writes at every index below
    ///   `argc` and up to and including the first null entry at or past `argc`.
    /// - Every non-null entry must point to a nul-terminated string.
    /// - Ideally immediately use ABI-provided argc+argv in main()
    pub const unsafe fn from_raw(argc: isize, argv: *mut *mut c_char) -> Self {
        Self {
            raw: argv,
            argc: if argc < 0 { 0 } else { argc as usize },
        }
    }

    /// argv[0], if present
    #[inline]
    pub fn first(&self) -> Option<*mut c_char> {
        if self.raw.is_null() {
            return None;
        }
        let p = self.slot(0);
        (!p.is_null()).then_some(p)
    }

    /// Every non-null entry from index `start`, paired with its index.
    #[inline]
    pub fn entries_from(&self, start: usize) -> ArgvEntries<'_> {
        ArgvEntries {
            argv: self,
            next: start,
        }
    }

    /// Repoint argv[index].
    ///
    /// # Safety
    /// - `index` must have been produced by `entries_from` on this `Argv`.
    /// - `p` must point to a nul-terminated string that outlives every reader of argv.
    #[inline]
    pub unsafe fn replace(&mut self, index: usize, p: *mut c_char) {
        unsafe { *self.raw.add(index) = p };
    }

    #[inline]
    fn slot(&self, index: usize) -> *mut c_char {
        // Safety: caller of from_raw guaranteed the array is readable up to its terminator, and
        // ArgvEntries never walks past the first null at or beyond argc.
        unsafe { *self.raw.add(index) }
    }
}

pub struct ArgvEntries<'a> {
    argv: &'a Argv,
    next: usize,
}

impl Iterator for ArgvEntries<'_> {
    type Item = (usize, *mut c_char);

    fn next(&mut self) -> Option<Self::Item> {
        if self.argv.raw.is_null() {
            return None;
        }

        loop {
            let i = self.next;
            let p = self.argv.slot(i);
            if p.is_null() && i >= self.argv.argc {
                return None;
            }
            self.next = i + 1;
            if !p.is_null() {
                return Some((i, p));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr::null_mut;

    fn p(s: &'static core::ffi::CStr) -> *mut c_char {
        s.as_ptr() as *mut c_char
    }

    #[test]
    fn test_entries_walk_past_underreported_argc() {
        let mut raw = [p(c"prog"), p(c"a"), p(c"b"), null_mut()];
        let argv = unsafe { Argv::from_raw(1, raw.as_mut_ptr()) };

        let indexes: Vec<usize> = argv.entries_from(1).map(|(i, _)| i).collect();
        assert_eq!(indexes, [1, 2]);
    }

    #[test]
    fn test_entries_skip_null_below_argc() {
        let mut raw = [p(c"prog"), null_mut(), p(c"b"), null_mut()];
        let argv = unsafe { Argv::from_raw(3, raw.as_mut_ptr()) };

        let indexes: Vec<usize> = argv.entries_from(0).map(|(i, _)| i).collect();
        assert_eq!(indexes, [0, 2]);
    }

    #[test]
    fn test_first_absent() {
        let mut raw = [null_mut::<c_char>()];
        let argv = unsafe { Argv::from_raw(0, raw.as_mut_ptr()) };
        assert!(argv.first().is_none());

        let argv = unsafe { Argv::from_raw(0, null_mut()) };
        assert!(argv.first().is_none());
        assert_eq!(argv.entries_from(0).count(), 0);
    }

    #[test]
    fn test_replace() {
        let mut raw = [p(c"prog"), p(c"old"), null_mut()];
        let mut argv = unsafe { Argv::from_raw(2, raw.as_mut_ptr()) };
        unsafe { argv.replace(1, p(c"new")) };

        let second = argv.entries_from(1).next().map(|(_, p)| p);
        assert_eq!(second, Some(p(c"new")));
    }
}
