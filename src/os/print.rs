//! Print framework
//!
//! No `{}`-formatting here: the trace output runs while the environment and argv are being moved
//! around, so every piece is written straight to the file descriptor without allocating.

use crate::err::Errno;
use crate::os::{Fd, STDERR, STDOUT};
use crate::types::pid_t;
use core::ffi::CStr;

pub fn print<T: Print>(s: T) {
    s.print(STDOUT);
}

pub fn println<T: Print>(s: T) {
    s.print(STDOUT);
    b"\n".print(STDOUT);
}

pub fn eprint<T: Print>(s: T) {
    s.print(STDERR);
}

pub fn eprintln<T: Print>(s: T) {
    s.print(STDERR);
    b"\n".print(STDERR);
}

pub trait Print {
    fn print(&self, fd: Fd);
    fn print_len(&self) -> usize;
}

impl Print for &[u8] {
    fn print(&self, fd: Fd) {
        let _ = fd.write_all(self);
    }

    fn print_len(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> Print for &[u8; N] {
    fn print(&self, fd: Fd) {
        let _ = fd.write_all(self.as_slice());
    }

    fn print_len(&self) -> usize {
        N
    }
}

impl Print for &str {
    fn print(&self, fd: Fd) {
        let _ = fd.write_all(self.as_bytes());
    }

    fn print_len(&self) -> usize {
        self.len()
    }
}

impl Print for &CStr {
    fn print(&self, fd: Fd) {
        let _ = fd.write_all(self.to_bytes());
    }

    fn print_len(&self) -> usize {
        self.to_bytes().len()
    }
}

impl Print for pid_t {
    fn print(&self, fd: Fd) {
        let _ = fd.write_all(itoa::Buffer::new().format(*self).as_bytes());
    }

    fn print_len(&self) -> usize {
        itoa::Buffer::new().format(*self).len()
    }
}

impl Print for usize {
    fn print(&self, fd: Fd) {
        let _ = fd.write_all(itoa::Buffer::new().format(*self).as_bytes());
    }

    fn print_len(&self) -> usize {
        itoa::Buffer::new().format(*self).len()
    }
}

impl Print for Errno {
    fn print(&self, fd: Fd) {
        match self.description() {
            Some(desc) => desc.print(fd),
            None => {
                b"errno ".print(fd);
                self.into_raw().print(fd);
            }
        }
    }

    fn print_len(&self) -> usize {
        match self.description() {
            Some(desc) => desc.len(),
            None => b"errno ".len() + self.into_raw().print_len(),
        }
    }
}

/// Address or other machine word, printed as `0x`-prefixed lowercase hex
#[derive(Clone, Copy)]
pub struct Hex(pub usize);

impl Hex {
    const DIGITS: &'static [u8; 16] = b"0123456789abcdef";
    const MAX_LEN: usize = 2 + 2 * core::mem::size_of::<usize>();

    pub fn of<T>(p: *const T) -> Self {
        Self(p as usize)
    }

    /// Render into a stack buffer, returning the buffer and the number of bytes used
    fn render(self) -> ([u8; Self::MAX_LEN], usize) {
        let mut out = [0u8; Self::MAX_LEN];
        let mut digits = [0u8; Self::MAX_LEN];
        let mut n = self.0;
        let mut count = 0;
        loop {
            if let (Some(slot), Some(&d)) = (digits.get_mut(count), Self::DIGITS.get(n & 0xf)) {
                *slot = d;
            }
            count += 1;
            n >>= 4;
            if n == 0 {
                break;
            }
        }

        out[0] = b'0';
        out[1] = b'x';
        for i in 0..count {
            if let (Some(slot), Some(&d)) = (out.get_mut(2 + i), digits.get(count - 1 - i)) {
                *slot = d;
            }
        }
        (out, 2 + count)
    }
}

impl Print for Hex {
    fn print(&self, fd: Fd) {
        let (buf, len) = self.render();
        let _ = fd.write_all(buf.get(..len).unwrap_or_default());
    }

    fn print_len(&self) -> usize {
        self.render().1
    }
}
