//! Fixed-capacity, panic-free staging buffer for rendering titles

use core::fmt;

/// Renders `core::fmt` output into a fixed array, `snprintf`-style.
///
/// Output beyond capacity is dropped silently, always leaving room for a trailing null.
pub struct BufWriter<const N: usize> {
    buf: [u8; N],
    pos: usize,
}

impl<const N: usize> BufWriter<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            pos: 0,
        }
    }

    /// Push bytes onto the buffer, truncating at `N - 1`
    pub fn push(&mut self, data: &[u8]) {
        let room = N.saturating_sub(1).saturating_sub(self.pos);
        let take = data.len().min(room);
        if let (Some(dst), Some(src)) = (self.buf.get_mut(self.pos..self.pos + take), data.get(..take))
        {
            dst.copy_from_slice(src);
            self.pos += take;
        }
    }

    /// Number of bytes stored, excluding the terminator
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Drop everything from `len` on.  Does nothing if `len` is not shorter than what is stored.
    pub fn truncate(&mut self, len: usize) {
        if let Some(tail) = self.buf.get_mut(len..self.pos) {
            crate::util::memzero(tail);
            self.pos = len;
        }
    }

    /// Cut at the first null, which is where any C reader would stop
    pub fn truncate_at_nul(&mut self) {
        if let Some(at) = self.as_slice().iter().position(|&b| b == 0) {
            self.truncate(at);
        }
    }

    /// Get a reference to the populated segment of the buffer
    pub fn as_slice(&self) -> &[u8] {
        self.buf.get(..self.pos).unwrap_or_default()
    }

    /// Populated segment plus its terminator
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        // Bytes past pos are never written, so buf[pos] is still zero.
        self.buf.get(..=self.pos).unwrap_or_default()
    }
}

impl<const N: usize> Default for BufWriter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for BufWriter<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s.as_bytes());
        Ok(())
    }
}
