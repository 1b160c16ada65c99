use core::ptr::NonNull;

/// The reclaimed argv + environ block.
///
/// Offsets are relative to `start`, the first byte of the original argv[0]:
///
/// ```text
///  start             logical_end              physical_end
///    |                    |                        |
///    m y s e r v e r \0 - - p o r t \0 H O M E = / \0
///    [ original argv[0] ][ relocated args and environment ]
/// ```
///
/// Not `Clone`: whoever holds the span is its only writer.
#[derive(Debug, PartialEq, Eq)]
pub struct TitleSpan {
    start: NonNull<u8>,
    logical_end: usize,
    physical_end: usize,
}

impl TitleSpan {
    /// Returns None unless `logical_end < physical_end`.
    ///
    /// # Safety
    /// - `start..start + physical_end` must be valid for reads and writes for the rest of the
    ///   process.
    /// - Nothing else may read or write that memory through any other pointer from now on.
    pub unsafe fn new(start: *mut u8, logical_end: usize, physical_end: usize) -> Option<Self> {
        if logical_end >= physical_end {
            return None;
        }
        Some(Self {
            start: NonNull::new(start)?,
            logical_end,
            physical_end,
        })
    }

    /// Offset of argv[0]'s original terminator
    #[inline]
    pub fn logical_end(&self) -> usize {
        self.logical_end
    }

    /// Bytes available, terminator included
    #[inline]
    pub fn len(&self) -> usize {
        self.physical_end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.physical_end == 0
    }

    /// Absolute addresses of start, logical end and physical end
    pub fn addresses(&self) -> (usize, usize, usize) {
        let start = self.start.as_ptr() as usize;
        (start, start + self.logical_end, start + self.physical_end)
    }

    /// The whole span.  Every write goes through this bounds-checked slice.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        // Safety: the constructor's caller vouched for exclusive access to exactly this range, and
        // &mut self keeps the slice unique.
        unsafe { core::slice::from_raw_parts_mut(self.start.as_ptr(), self.physical_end) }
    }
}
