//! Fake process argument blocks for tests
//!
//! Everything is leaked so raw pointers into it stay valid for as long as any relocated copy or
//! platform refers to them.

use core::ffi::{CStr, c_char};

/// One contiguous buffer holding argument and environment strings, plus argv and envp arrays
/// pointing into it, the way the kernel lays them out on the initial stack.
pub struct Block {
    /// argv[0]
    pub base: *mut u8,
    /// Bytes from argv[0] to the end of the buffer
    pub len: usize,
    pub argv: *mut *mut c_char,
    pub envp: *mut *mut c_char,
    argc: usize,
    buf: *mut u8,
    buf_len: usize,
}

impl Block {
    /// Strings packed back to back, argv first
    pub fn new(args: &[&str], envs: &[&str]) -> Self {
        let mut bytes = Vec::new();
        let mut push = |s: &str| {
            let at = bytes.len();
            bytes.extend_from_slice(s.as_bytes());
            bytes.push(0);
            at
        };
        let arg_offsets: Vec<usize> = args.iter().map(|s| push(s)).collect();
        let env_offsets: Vec<usize> = envs.iter().map(|s| push(s)).collect();
        Self::from_layout(&bytes, &arg_offsets, &env_offsets)
    }

    /// Arbitrary buffer with argv and envp entries at the given offsets
    pub fn from_layout(bytes: &[u8], args: &[usize], envs: &[usize]) -> Self {
        let buf = Box::leak(bytes.to_vec().into_boxed_slice());
        let buf_len = buf.len();
        let buf = buf.as_mut_ptr();

        let table = |offsets: &[usize]| {
            let mut ptrs: Vec<*mut c_char> = offsets
                .iter()
                .map(|&at| unsafe { buf.add(at) } as *mut c_char)
                .collect();
            ptrs.push(core::ptr::null_mut());
            Box::leak(ptrs.into_boxed_slice()).as_mut_ptr()
        };

        let first = args.first().copied().unwrap_or(0);
        Self {
            base: unsafe { buf.add(first) },
            len: buf_len - first,
            argv: table(args),
            envp: table(envs),
            argc: args.len(),
            buf,
            buf_len,
        }
    }

    pub fn argc(&self) -> isize {
        self.argc as isize
    }

    /// Whether `addr` falls inside the original buffer
    pub fn contains(&self, addr: usize) -> bool {
        let start = self.buf as usize;
        (start..start + self.buf_len).contains(&addr)
    }

    /// The span from argv[0] to the end of the buffer, as it is now
    pub fn bytes(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.base, self.len) }
    }

    /// Address and text of every argv entry, as argv now points
    pub fn args(&self) -> Vec<(usize, String)> {
        read_table(self.argv)
    }

    /// Address and text of every envp entry, as the original envp array points
    pub fn envs(&self) -> Vec<(usize, String)> {
        read_table(self.envp)
    }
}

fn read_table(mut p: *mut *mut c_char) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    loop {
        let entry = unsafe { *p };
        if entry.is_null() {
            return out;
        }
        let text = unsafe { CStr::from_ptr(entry) }.to_string_lossy().into_owned();
        out.push((entry as usize, text));
        p = unsafe { p.add(1) };
    }
}
