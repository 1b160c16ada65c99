use crate::constants::*;
use crate::util::memzero;

/// Lay a rendered title over the span, returning how many title bytes are now visible.
///
/// `span[logical_end]` is argv[0]'s original terminator.  The kernel reports argv[0] as everything
/// up to the first null, so:
///
/// - shorter title: the original terminator becomes `.`, keeping argv[0] its original length
///   instead of ending early in a run of nulls
/// - title ending exactly at the original terminator: ` ` then a fresh null, when there is room
/// - longer title: the zero fill already terminates it
///
/// On the first write the whole span is cleared, since the relocated arguments and environment
/// are still sitting in it.  Later writes only clear what a staging buffer can cover.
pub fn overwrite(span: &mut [u8], logical_end: usize, title: &[u8], first_write: bool) -> usize {
    let span_len = span.len();
    if span_len == 0 {
        return 0;
    }

    let bound = STAGING_CAPACITY.min(span_len);
    let clear = if first_write { span_len } else { bound };
    if let Some(cleared) = span.get_mut(..clear) {
        memzero(cleared);
    }

    let len = title.len().min(bound - 1);
    if let (Some(dst), Some(src)) = (span.get_mut(..len), title.get(..len)) {
        dst.copy_from_slice(src);
    }

    if len < logical_end {
        if let Some(b) = span.get_mut(logical_end) {
            *b = FILLER;
        }
    } else if len == logical_end && logical_end + 1 < span_len {
        if let Some([sep, nul]) = span.get_mut(logical_end..logical_end + 2) {
            *sep = SEPARATOR;
            *nul = 0;
        }
    }

    len
}
