use crate::err::*;
use crate::syscall::*;
use crate::types::*;

pub const STDOUT: Fd = Fd(1);
pub const STDERR: Fd = Fd(2);

/// File descriptor
///
/// Never closed on drop: the only descriptors this crate touches are the inherited standard
/// streams.
#[derive(Clone, Copy)]
pub struct Fd(c_int);

impl Fd {
    pub fn write(&self, buf: &[u8]) -> Result<usize, Errno> {
        unsafe { write(self.0, buf) }
    }

    /// Write all of `buf`, retrying short writes and EINTR.
    pub fn write_all(&self, mut buf: &[u8]) -> Result<(), Errno> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => return Err(Errno::EIO),
                Ok(n) => buf = buf.get(n..).unwrap_or_default(),
                Err(e) if e == Errno::EINTR => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
